use serde::{Deserialize, Serialize};

use crate::AppError;

pub const DEFAULT_PLACEHOLDER: &str = "Select Profile";
pub const DEFAULT_EMPTY_TEXT: &str = "No profiles found";

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_empty_text() -> String {
    DEFAULT_EMPTY_TEXT.to_string()
}

fn default_searchable() -> bool {
    true
}

/// Presentation settings for the profile selector.
///
/// Every field has a default so a missing or partial `[profile_selector]`
/// table still produces a usable selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectorConfig {
    /// Text shown on the trigger while nothing is selected.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Text shown when the search query matches no profile.
    #[serde(default = "default_empty_text")]
    pub empty_text: String,
    /// Optional label rendered above the control.
    #[serde(default)]
    pub label: String,
    /// Whether the dropdown offers a search box.
    #[serde(default = "default_searchable")]
    pub searchable: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            empty_text: default_empty_text(),
            label: String::new(),
            searchable: default_searchable(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub profile_selector: SelectorConfig,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        toml::from_str(s).map_err(|e| AppError::bad_request(format!("Invalid config: {e}")))
    }
}
