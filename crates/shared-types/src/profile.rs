use serde::{Deserialize, Serialize};

use crate::AppError;

/// Primary key of a profile record.
pub type ProfileId = i64;

/// Recorded gender of an athlete profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "U", other)]
    Unspecified,
}

/// A person that test results are recorded against.
///
/// Only `id`, `name` and `surname` matter for selection. Missing names
/// deserialize as empty strings so a sparse record still yields a label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub gender: Gender,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            ..Default::default()
        }
    }

    /// Display label: name and surname joined by a single space.
    ///
    /// Empty segments are kept, so `("Ada", "")` gives `"Ada "`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Parse a JSON array of profiles as served by the `/profiles` endpoint.
pub fn parse_profiles(json: &str) -> Result<Vec<Profile>, AppError> {
    serde_json::from_str(json)
        .map_err(|e| AppError::bad_request(format!("Invalid profile list: {e}")))
}
