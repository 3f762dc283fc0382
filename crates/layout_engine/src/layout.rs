//! Layout orchestration
//!
//! One layout run: room geometry, slot planning, assignment, then per
//! placement the dimension resolution, scaling, and frame/label
//! composition. Runs share nothing; concurrent layouts are independent.

use crate::{
    assign_slots, compose_frame, compose_label, full_slot_pool, plan_slots, resolve_dimensions,
    scale_artwork, FrameGeometry, LabelPlacement, LayoutError, Result, RoomGeometry, ScaledSize,
    Vec3, WallSlot,
};
use gallery_model::{ArtworkRef, FrameStyle, Gallery};
use serde::{Deserialize, Serialize};

/// Options for a layout run
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Enable the best-effort flipped-dimension heuristic
    ///
    /// Keyword sniffing with no ground truth; it can misfire for artworks
    /// whose titles don't reflect orientation. Off means declared
    /// width/height order is trusted unconditionally.
    pub flip_correction: bool,

    /// Artworks substituted when a gallery has none of its own
    ///
    /// Unset means an empty gallery is a `LayoutError::Unavailable`.
    pub placeholder_artworks: Option<Vec<ArtworkRef>>,
}

impl LayoutConfig {
    /// Default configuration: flip correction on, no placeholder data
    pub fn new() -> Self {
        Self {
            flip_correction: true,
            placeholder_artworks: None,
        }
    }

    /// Set whether the flip heuristic runs
    pub fn with_flip_correction(mut self, enabled: bool) -> Self {
        self.flip_correction = enabled;
        self
    }

    /// Provide fallback artworks for empty galleries
    pub fn with_placeholder_artworks(mut self, artworks: Vec<ArtworkRef>) -> Self {
        self.placeholder_artworks = Some(artworks);
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Final placement of one artwork: slot, render size, frame, and label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed artwork snapshot
    pub artwork: ArtworkRef,
    /// The assigned slot
    pub slot: WallSlot,
    /// Artwork plane center, offset into the room from the slot
    pub artwork_position: Vec3,
    /// Render-space artwork size
    pub scaled: ScaledSize,
    /// Frame box geometry
    pub frame: FrameGeometry,
    /// Label geometry and text
    pub label: LabelPlacement,
    /// Whether the flip heuristic swapped this artwork's dimensions
    pub flipped: bool,
}

/// The result of one layout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryLayout {
    /// Room geometry the placements were computed against
    pub room: RoomGeometry,
    /// Frame style applied to every placement
    pub frame_style: FrameStyle,
    /// One entry per placed artwork, in gallery order
    pub placements: Vec<Placement>,
    /// Artworks beyond slot capacity that were not placed
    pub dropped: usize,
}

/// The layout engine
///
/// Stateless between runs; a single engine value can lay out any number
/// of galleries.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the given configuration
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out a gallery into placement instructions
    ///
    /// The only failure is a gallery with no artworks and no configured
    /// placeholder data; every malformed-artwork condition degrades to a
    /// default inside the pipeline.
    pub fn layout(&self, gallery: &Gallery) -> Result<GalleryLayout> {
        let artworks: &[ArtworkRef] = if !gallery.artworks.is_empty() {
            &gallery.artworks
        } else if let Some(placeholder) = self.config.placeholder_artworks.as_deref() {
            tracing::warn!(
                gallery = %gallery.name,
                "Gallery has no artworks, using placeholder data"
            );
            placeholder
        } else {
            return Err(LayoutError::Unavailable {
                reason: format!("gallery '{}' has no artworks to place", gallery.name),
            });
        };

        if artworks.is_empty() {
            return Err(LayoutError::Unavailable {
                reason: format!("gallery '{}' has no artworks to place", gallery.name),
            });
        }

        let room = RoomGeometry::for_class(gallery.size);
        let slots = plan_slots(artworks.len(), &room);
        let pool = full_slot_pool(&room);
        let assignments = assign_slots(artworks, &slots, &pool);
        let dropped = artworks.len() - assignments.len();

        let placements = assignments
            .into_iter()
            .map(|assignment| {
                let dims = resolve_dimensions(&assignment.artwork, self.config.flip_correction);
                let scaled = scale_artwork(dims.scaling, assignment.slot.wall);
                let (frame, artwork_position) =
                    compose_frame(scaled, &assignment.slot, gallery.frame_style);
                let label = compose_label(&assignment.artwork, scaled, &assignment.slot);

                Placement {
                    artwork: assignment.artwork,
                    slot: assignment.slot,
                    artwork_position,
                    scaled,
                    frame,
                    label,
                    flipped: dims.flipped,
                }
            })
            .collect();

        Ok(GalleryLayout {
            room,
            frame_style: gallery.frame_style,
            placements,
            dropped,
        })
    }
}
