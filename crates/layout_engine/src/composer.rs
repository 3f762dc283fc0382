//! Frame & Label Composer - frame box and label geometry per placement
//!
//! The frame box outsets the scaled artwork by the style's border
//! thickness and sits half its depth behind the artwork plane, which in
//! turn moves half a depth into the room; the two never share a plane.
//! The label hangs centered beneath the artwork, facing the same way.

use crate::{Rotation, ScaledSize, Vec3, WallSlot};
use gallery_model::{ArtworkRef, FrameStyle};
use serde::{Deserialize, Serialize};

/// Frame box depth in meters
pub const FRAME_DEPTH: f32 = 0.03;

/// Vertical gap between artwork bottom edge and label anchor
pub const LABEL_GAP: f32 = 0.15;

/// Extra text-wrap width beyond the artwork width
const LABEL_WIDTH_PADDING: f32 = 0.2;

/// Frame box geometry for one placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Box width: artwork width plus two border thicknesses
    pub width: f32,
    /// Box height: artwork height plus two border thicknesses
    pub height: f32,
    /// Box depth
    pub depth: f32,
    /// Box center, offset behind the artwork plane
    pub position: Vec3,
}

/// Label anchor for one placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    /// Anchor point beneath the artwork
    pub position: Vec3,
    /// Same facing as the artwork
    pub rotation: Rotation,
    /// `"{title}\n{artist}"`
    pub text: String,
    /// Text wrap width
    pub width: f32,
}

/// Frame geometry plus the depth-adjusted artwork plane position
///
/// The frame center moves outward along the wall normal by half the frame
/// depth and the artwork plane moves inward by the same amount, so the
/// frame always renders behind the artwork.
pub fn compose_frame(
    scaled: ScaledSize,
    slot: &WallSlot,
    style: FrameStyle,
) -> (FrameGeometry, Vec3) {
    let thickness = style.spec().thickness;
    let offset = slot.wall.outward() * (FRAME_DEPTH / 2.0);

    let frame = FrameGeometry {
        width: scaled.width + 2.0 * thickness,
        height: scaled.height + 2.0 * thickness,
        depth: FRAME_DEPTH,
        position: slot.position + offset,
    };
    let artwork_position = slot.position - offset;

    (frame, artwork_position)
}

/// Label placement beneath a scaled artwork
pub fn compose_label(artwork: &ArtworkRef, scaled: ScaledSize, slot: &WallSlot) -> LabelPlacement {
    LabelPlacement {
        position: Vec3::new(
            slot.position.x,
            slot.position.y - scaled.height / 2.0 - LABEL_GAP,
            slot.position.z,
        ),
        rotation: slot.rotation,
        text: format!("{}\n{}", artwork.display_title(), artwork.display_artist()),
        width: scaled.width + LABEL_WIDTH_PADDING,
    }
}
