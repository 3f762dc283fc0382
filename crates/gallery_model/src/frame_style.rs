//! Frame style options

use serde::{Deserialize, Deserializer, Serialize};

/// Frame finish material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameMaterial {
    Metallic,
    Matte,
    Wood,
}

/// Visual properties of a frame style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSpec {
    /// Frame color as a hex string
    pub color: &'static str,
    /// Material finish
    pub material: FrameMaterial,
    /// Frame border thickness in meters
    pub thickness: f32,
}

/// Frame style selected for a gallery
///
/// Stored as a lowercase string in the gallery document. Unknown values
/// fall back to `Gold`, the store default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    Gold,
    Black,
    White,
    Natural,
}

impl FrameStyle {
    /// Resolve a stored style name, defaulting to gold
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" => Self::Black,
            "white" => Self::White,
            "natural" => Self::Natural,
            _ => Self::Gold,
        }
    }

    /// The stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Black => "black",
            Self::White => "white",
            Self::Natural => "natural",
        }
    }

    /// Color, material, and border thickness for this style
    pub fn spec(&self) -> FrameSpec {
        match self {
            Self::Gold => FrameSpec {
                color: "#b4a053",
                material: FrameMaterial::Metallic,
                thickness: 0.05,
            },
            Self::Black => FrameSpec {
                color: "#222222",
                material: FrameMaterial::Matte,
                thickness: 0.04,
            },
            Self::White => FrameSpec {
                color: "#f8f8f8",
                material: FrameMaterial::Matte,
                thickness: 0.04,
            },
            Self::Natural => FrameSpec {
                color: "#96673b",
                material: FrameMaterial::Wood,
                thickness: 0.06,
            },
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::Gold
    }
}

impl<'de> Deserialize<'de> for FrameStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_style_has_distinct_color() {
        let styles = [
            FrameStyle::Gold,
            FrameStyle::Black,
            FrameStyle::White,
            FrameStyle::Natural,
        ];
        for a in &styles {
            for b in &styles {
                if a != b {
                    assert_ne!(a.spec().color, b.spec().color);
                }
            }
        }
    }

    #[test]
    fn test_unknown_style_defaults_to_gold() {
        assert_eq!(FrameStyle::from_name("chrome"), FrameStyle::Gold);
        let style: FrameStyle = serde_json::from_str("\"chrome\"").unwrap();
        assert_eq!(style, FrameStyle::Gold);
    }

    #[test]
    fn test_thickness_is_positive() {
        for style in [
            FrameStyle::Gold,
            FrameStyle::Black,
            FrameStyle::White,
            FrameStyle::Natural,
        ] {
            assert!(style.spec().thickness > 0.0);
        }
    }
}
