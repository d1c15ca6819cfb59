//! Character types shared across the workspace

use serde::{Deserialize, Serialize};

/// Name substituted when a source omits or blanks the `name` field.
pub const DEFAULT_NAME: &str = "Hybrid_Character";

/// Description substituted when a source omits or blanks the `description` field.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// A hybrid story character: display name plus free-text description.
///
/// Both fields are always populated. Anything coming off the wire goes
/// through [`RawCharacter::normalize`] first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub description: String,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Character payload as received from an untrusted source.
///
/// Either field may be absent, null, or empty; unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl RawCharacter {
    /// Convert into a fully-populated record, substituting the fixed
    /// defaults for missing or blank fields. Whitespace-only values count
    /// as blank.
    pub fn normalize(self) -> CharacterRecord {
        CharacterRecord {
            name: populated_or(self.name, DEFAULT_NAME),
            description: populated_or(self.description, DEFAULT_DESCRIPTION),
        }
    }
}

impl From<RawCharacter> for CharacterRecord {
    fn from(raw: RawCharacter) -> Self {
        raw.normalize()
    }
}

fn populated_or(field: Option<String>, default: &str) -> String {
    match field {
        Some(s) if !s.trim().is_empty() => s,
        _ => default.to_string(),
    }
}
