//! Room size classes

use serde::{Deserialize, Deserializer, Serialize};

/// Size class of a gallery room
///
/// Stored as a lowercase string in the gallery document. Unknown values
/// fall back to `Medium` rather than failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomSizeClass {
    Small,
    Medium,
    Large,
}

impl RoomSizeClass {
    /// Resolve a stored size name, defaulting to medium
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => Self::Medium,
        }
    }

    /// The stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl Default for RoomSizeClass {
    fn default() -> Self {
        Self::Medium
    }
}

impl<'de> Deserialize<'de> for RoomSizeClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
