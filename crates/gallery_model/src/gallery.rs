//! Gallery documents
//!
//! A gallery names a room-size class, a frame style, and an ordered list of
//! artwork snapshots. The order of `artworks` is significant: it is the
//! order the layout engine assigns artworks to wall slots.

use crate::{ArtworkRef, FrameStyle, Result, RoomSizeClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A VR gallery document as loaded from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    /// Store identifier
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Owning user's identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Display name, unique per owner
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Room size class
    #[serde(default)]
    pub size: RoomSizeClass,

    /// Frame style applied to every artwork in the room
    #[serde(default, rename = "frameStyle")]
    pub frame_style: FrameStyle,

    /// Whether the gallery is publicly visible
    #[serde(default = "default_true", rename = "isPublic")]
    pub is_public: bool,

    /// Ordered artwork placements; order is the slot-assignment order
    #[serde(default)]
    pub artworks: Vec<ArtworkRef>,

    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Gallery {
    /// Create an empty gallery with store defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            user: None,
            name: name.into(),
            description: String::new(),
            size: RoomSizeClass::default(),
            frame_style: FrameStyle::default(),
            is_public: true,
            artworks: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the room size class
    pub fn with_size(mut self, size: RoomSizeClass) -> Self {
        self.size = size;
        self
    }

    /// Set the frame style
    pub fn with_frame_style(mut self, style: FrameStyle) -> Self {
        self.frame_style = style;
        self
    }

    /// Append an artwork snapshot
    pub fn with_artwork(mut self, artwork: ArtworkRef) -> Self {
        self.artworks.push(artwork);
        self
    }

    /// Parse a gallery document from its JSON form
    ///
    /// This is the input-contract boundary: field-name variance across
    /// producers is normalized here, and malformed artwork fields degrade
    /// to their defaults instead of failing the document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the stored JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Mock gallery used by presentation fallbacks when no real data exists
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name)
            .with_artwork(
                ArtworkRef::new()
                    .with_title("Sunset Landscape")
                    .with_artist("Artist Name")
                    .with_image_url(crate::PLACEHOLDER_IMAGE_URL)
                    .with_size(120.0, 80.0),
            )
            .with_artwork(
                ArtworkRef::new()
                    .with_title("Abstract Composition")
                    .with_artist("Artist Name")
                    .with_image_url(crate::PLACEHOLDER_IMAGE_URL)
                    .with_size(90.0, 120.0),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_store_document() {
        let json = r#"{
            "_id": "g1",
            "user": "u1",
            "name": "My First Room",
            "size": "large",
            "frameStyle": "natural",
            "isPublic": false,
            "artworks": [
                {"artworkId": "a1", "title": "One", "artist": "A", "url": "a.png", "width": 120, "height": 80},
                {"_id": "a2", "title": "Two", "mainImageUrl": "b.png", "dimensions": "90x120"}
            ],
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;

        let gallery = Gallery::from_json(json).unwrap();
        assert_eq!(gallery.id.as_deref(), Some("g1"));
        assert_eq!(gallery.size, RoomSizeClass::Large);
        assert_eq!(gallery.frame_style, FrameStyle::Natural);
        assert!(!gallery.is_public);
        assert_eq!(gallery.artworks.len(), 2);
        assert_eq!(gallery.artworks[1].resolved_image_url(), "b.png");
        assert!(gallery.created_at.is_some());
    }

    #[test]
    fn test_from_json_minimal_document() {
        let gallery = Gallery::from_json(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(gallery.size, RoomSizeClass::Medium);
        assert_eq!(gallery.frame_style, FrameStyle::Gold);
        assert!(gallery.is_public);
        assert!(gallery.artworks.is_empty());
    }

    #[test]
    fn test_from_json_rejects_missing_name() {
        assert!(Gallery::from_json(r#"{"size": "small"}"#).is_err());
    }

    #[test]
    fn test_placeholder_gallery_shape() {
        let gallery = Gallery::placeholder("Mock Gallery");
        assert_eq!(gallery.artworks.len(), 2);
        assert_eq!(gallery.size, RoomSizeClass::Medium);
        assert_eq!(gallery.frame_style, FrameStyle::Gold);
        assert!(gallery.artworks.iter().all(|a| a.explicit_size().is_some()));
    }

    #[test]
    fn test_json_round_trip() {
        let gallery = Gallery::placeholder("Round Trip").with_size(RoomSizeClass::Small);
        let json = gallery.to_json().unwrap();
        let back = Gallery::from_json(&json).unwrap();
        assert_eq!(back.name, "Round Trip");
        assert_eq!(back.size, RoomSizeClass::Small);
        assert_eq!(back.artworks.len(), 2);
    }
}
