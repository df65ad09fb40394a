//! Navigation state machine for the presentation layer.
//!
//! Transitions are pure: each returns a new [`AppState`] or an
//! `InvalidTransition` error, leaving the receiver untouched.

use exo_core::errors::{ErrorInfo, ExoError};
use serde::{Deserialize, Serialize};

/// Top-level screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Screen {
    /// Landing page.
    Hero,
    /// Star selection grid.
    StarPicker,
    /// Analysis of one star.
    #[serde(rename_all = "camelCase")]
    Analysis {
        /// Catalog id of the analysed star.
        star_id: String,
    },
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Hero => "hero",
            Screen::StarPicker => "star-picker",
            Screen::Analysis { .. } => "analysis",
        }
    }
}

/// Tab within the analysis screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    /// Summary and classification.
    #[default]
    Overview,
    /// Light curve, periodogram and folded curve.
    Detection,
    /// Feature importances, checks and decision trace.
    Explainability,
    /// Catalog browser.
    Catalog,
    /// Model documentation.
    Methods,
}

/// Current screen plus the selected analysis tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Active screen.
    pub screen: Screen,
    /// Selected tab; only meaningful on the analysis screen.
    pub tab: Tab,
}

impl Default for AppState {
    fn default() -> Self {
        Self::start()
    }
}

fn invalid(action: &str, from: &Screen) -> ExoError {
    ExoError::InvalidTransition(
        ErrorInfo::new(
            "invalid-transition",
            format!("cannot {action} from the {} screen", from.name()),
        )
        .with_context("action", action)
        .with_context("screen", from.name()),
    )
}

impl AppState {
    /// Initial state: the hero screen.
    pub fn start() -> Self {
        Self {
            screen: Screen::Hero,
            tab: Tab::Overview,
        }
    }

    /// Hero → star picker.
    pub fn open_picker(&self) -> Result<Self, ExoError> {
        match self.screen {
            Screen::Hero => Ok(Self {
                screen: Screen::StarPicker,
                tab: self.tab,
            }),
            _ => Err(invalid("open picker", &self.screen)),
        }
    }

    /// Star picker → analysis of `star_id`, on the overview tab.
    pub fn select_star(&self, star_id: impl Into<String>) -> Result<Self, ExoError> {
        match self.screen {
            Screen::StarPicker => Ok(Self {
                screen: Screen::Analysis {
                    star_id: star_id.into(),
                },
                tab: Tab::Overview,
            }),
            _ => Err(invalid("select star", &self.screen)),
        }
    }

    /// Switches tab on the analysis screen.
    pub fn select_tab(&self, tab: Tab) -> Result<Self, ExoError> {
        match &self.screen {
            Screen::Analysis { .. } => Ok(Self {
                screen: self.screen.clone(),
                tab,
            }),
            other => Err(invalid("select tab", other)),
        }
    }

    /// Analysis → star picker, star picker → hero.
    pub fn back(&self) -> Result<Self, ExoError> {
        let screen = match self.screen {
            Screen::Analysis { .. } => Screen::StarPicker,
            Screen::StarPicker => Screen::Hero,
            Screen::Hero => return Err(invalid("go back", &self.screen)),
        };
        Ok(Self {
            screen,
            tab: Tab::Overview,
        })
    }

    /// Star under analysis, if any.
    pub fn star_id(&self) -> Option<&str> {
        match &self.screen {
            Screen::Analysis { star_id } => Some(star_id),
            _ => None,
        }
    }
}
