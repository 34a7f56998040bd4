//! Participant record and display helpers.
//!
//! DESIGN
//! ======
//! Inline payloads come from hand-written page markup, so each element is
//! decoded leniently: anything that is not a non-empty string counts as an
//! absent field instead of failing the whole list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "participant_test.rs"]
mod participant_test;

/// Label shown when a participant has no name.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Image alt text used when a participant has an avatar but no name.
pub const AVATAR_ALT: &str = "avatar";

/// One person signed up for an activity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Participant {
    pub fn new(name: Option<&str>, avatar_url: Option<&str>) -> Self {
        Self {
            name: non_empty(name),
            avatar_url: non_empty(avatar_url),
        }
    }

    /// Build a participant from one element of a decoded JSON array.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str);
        Self::new(field("name"), field("avatarUrl"))
    }

    /// Name label, `"Unknown"` when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// Alt text for the avatar image.
    pub fn avatar_alt(&self) -> &str {
        self.name.as_deref().unwrap_or(AVATAR_ALT)
    }

    pub fn initials(&self) -> String {
        resolve_initials(self.name.as_deref())
    }
}

impl<'de> Deserialize<'de> for Participant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// First letter of the first two whitespace-separated tokens of `name`.
///
/// Returns an empty string for an absent, empty or whitespace-only name.
/// Letters are taken as-is, without case normalization.
pub fn resolve_initials(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .collect()
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_owned)
}
