use exo_core::errors::{ErrorInfo, ExoError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("field", "period")
        .with_context("reason", "example")
}

#[test]
fn invalid_config_surface() {
    let err =
        ExoError::InvalidConfig(sample_info("invalid-sampling-rate", "rate must be positive"));
    assert_eq!(err.info().code, "invalid-sampling-rate");
    assert_eq!(err.family(), "InvalidConfig");
    assert!(err.info().context.contains_key("field"));
}

#[test]
fn missing_physical_surface() {
    let info = sample_info("missing-period", "orbital period is required");
    let err = ExoError::MissingPhysicalData(info);
    assert_eq!(err.family(), "MissingPhysicalData");
    assert!(err.to_string().contains("missing physical data"));
}

#[test]
fn display_includes_context_and_hint() {
    let info = sample_info("unknown-star", "no such star").with_hint("try `catalog`");
    let err = ExoError::NotFound(info);
    let text = err.to_string();
    assert!(text.contains("field=period"));
    assert!(text.contains("hint: try `catalog`"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err =
        ExoError::InvalidTransition(ErrorInfo::new("wrong-screen", "cannot go back from hero"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "InvalidTransition");
    assert_eq!(json["detail"]["code"], "wrong-screen");
    let decoded: ExoError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}
