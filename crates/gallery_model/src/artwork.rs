//! Artwork reference snapshots
//!
//! A gallery embeds denormalized copies of the artworks placed in it, taken
//! at the time the artwork was added. Different producers name the fields
//! differently (`url` vs `mainImageUrl` vs `imageUrl`, a `"WxH"` dimensions
//! string vs numeric width/height), so deserialization accepts all the
//! variants and the accessors apply the documented display defaults.

use crate::PhysicalSize;
use serde::{Deserialize, Serialize};

/// Image reference substituted when an artwork has no usable URL
pub const PLACEHOLDER_IMAGE_URL: &str = "images/profileholder.png";

/// Title shown when an artwork has none
pub const UNTITLED: &str = "Untitled";

/// Artist name shown when an artwork has none
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Opaque store-assigned artwork identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtworkId(String);

impl ArtworkId {
    /// Create a new artwork ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArtworkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Denormalized artwork snapshot embedded in a gallery document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRef {
    /// Store identifier of the source artwork, when known
    #[serde(
        default,
        rename = "artworkId",
        alias = "id",
        alias = "_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub artwork_id: Option<ArtworkId>,

    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Artist display name
    #[serde(default, alias = "artistName", skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Resolved image reference
    #[serde(
        default,
        rename = "url",
        alias = "imageUrl",
        alias = "mainImageUrl",
        alias = "mainImage",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,

    /// Declared physical width in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Declared physical height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Declared `"WxH"` dimensions string, when the producer stored one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl ArtworkRef {
    /// Create an empty artwork reference
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the artist name
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Set the image URL
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set explicit numeric dimensions in centimeters
    pub fn with_size(mut self, width_cm: f32, height_cm: f32) -> Self {
        self.width = Some(width_cm);
        self.height = Some(height_cm);
        self
    }

    /// Set the `"WxH"` dimensions string
    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    /// Title for display, defaulting to "Untitled"
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNTITLED)
    }

    /// Artist name for display, defaulting to "Unknown Artist"
    pub fn display_artist(&self) -> &str {
        self.artist
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(UNKNOWN_ARTIST)
    }

    /// Image reference for display, substituting the placeholder when absent
    pub fn resolved_image_url(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Size from the explicit numeric fields, when both are usable
    pub fn explicit_size(&self) -> Option<PhysicalSize> {
        PhysicalSize::new(self.width?, self.height?)
    }

    /// Size parsed from the dimensions string, when present and well-formed
    pub fn parsed_dimensions(&self) -> Option<PhysicalSize> {
        PhysicalSize::parse(self.dimensions.as_deref()?)
    }
}
