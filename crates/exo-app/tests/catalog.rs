use std::collections::BTreeSet;
use std::time::Duration;

use exo_app::Catalog;
use exo_core::Mission;

#[test]
fn builtin_catalog_has_sixteen_unique_stars() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 16);
    let ids: BTreeSet<_> = catalog.stars().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), 16);
    assert!(ids.contains("KIC-10811496-d"));
    assert!(ids.contains("TIC-107150013-c"));
}

#[test]
fn lookup_by_id_and_missing_id() {
    let catalog = Catalog::builtin().unwrap();
    let star = catalog.get("KIC-11111111").unwrap();
    assert_eq!(star.name, "Kepler-452 b");
    assert_eq!(star.physical.period(), 384.8);

    let err = catalog.get("KIC-0").unwrap_err();
    assert_eq!(err.family(), "NotFound");
    assert_eq!(err.info().context["id"], "KIC-0");
}

#[test]
fn mission_filter_splits_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let tess = catalog.by_mission(&Mission::Tess);
    let kepler = catalog.by_mission(&Mission::Kepler);
    assert_eq!(tess.len(), 3);
    assert_eq!(kepler.len(), 13);
    assert!(tess.iter().all(|s| s.name.starts_with("TOI-270")));
}

#[test]
fn search_is_case_insensitive() {
    let catalog = Catalog::builtin().unwrap();
    let hits = catalog.search("kepler-385", None);
    assert_eq!(hits.len(), 4);
    let hits = catalog.search("KEPLER-385 B", None);
    assert_eq!(hits.len(), 1);
    let hits = catalog.search("tess", None);
    assert_eq!(hits.len(), 3);
    let hits = catalog.search("tic-1071", Some(&Mission::Kepler));
    assert!(hits.is_empty());
}

#[test]
fn blank_query_returns_everything() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.search("", None).len(), 16);
    assert_eq!(catalog.search("   ", Some(&Mission::Tess)).len(), 3);
}

#[test]
fn fetch_returns_mission_slice() {
    let catalog = Catalog::builtin().unwrap();
    let fetched = catalog.fetch(&Mission::Tess, Duration::from_millis(1));
    assert_eq!(fetched.len(), 3);
    assert_eq!(catalog.fetch(&Mission::K2, Duration::ZERO).len(), 0);
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = br#"[
        {"id": "A", "name": "a", "mission": "Kepler", "physical": {"period": 1, "prad": 1, "srad": 1}},
        {"id": "A", "name": "b", "mission": "TESS", "physical": {"period": 2, "prad": 1, "srad": 1}}
    ]"#;
    let err = Catalog::from_json(json).unwrap_err();
    assert_eq!(err.info().code, "duplicate-star-id");
}

#[test]
fn records_missing_required_fields_fail_to_load() {
    let json = br#"[{"id": "A", "name": "a", "mission": "Kepler", "physical": {"prad": 1, "srad": 1}}]"#;
    assert!(Catalog::from_json(json).is_err());
}
