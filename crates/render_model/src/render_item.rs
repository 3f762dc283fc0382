//! Render record types
//!
//! Everything a renderer needs to instantiate the scene without further
//! geometric computation. Positions and rotations are in the layout
//! engine's room space.

use crate::Color;
use layout_engine::{Rotation, Vec3, Wall};
use serde::{Deserialize, Serialize};

/// A horizontal slab: the floor or the ceiling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabRender {
    /// Slab center
    pub position: Vec3,
    /// Edge length along x
    pub width: f32,
    /// Edge length along z
    pub depth: f32,
    pub color: Color,
}

/// One wall panel of the room shell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPanel {
    pub wall: Wall,
    /// Panel center
    pub position: Vec3,
    /// Panel width along its free axis
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Kind of decorative trim strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimKind {
    Baseboard,
    CrownMolding,
}

/// A trim strip running along the base or top of a wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimStrip {
    pub kind: TrimKind,
    pub wall: Wall,
    /// Strip center, inset just inside the wall plane
    pub position: Vec3,
    /// Strip length along the wall's free axis
    pub length: f32,
}

/// The room shell: floor, ceiling, walls, trim, and camera rig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRender {
    pub floor: SlabRender,
    pub ceiling: SlabRender,
    pub walls: Vec<WallPanel>,
    pub trim: Vec<TrimStrip>,
    /// Camera rig height above the floor
    pub camera_height: f32,
}

/// Frame box behind one artwork
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameBoxRender {
    pub position: Vec3,
    pub rotation: Rotation,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub color: Color,
}

/// Text label beneath one artwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRender {
    /// `"{title}\n{artist}"`
    pub text: String,
    pub position: Vec3,
    pub rotation: Rotation,
    /// Text wrap width
    pub width: f32,
    pub color: Color,
}

/// One placed artwork: image plane, frame box, and label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRender {
    /// Source artwork identifier, when known
    pub artwork_id: Option<String>,
    pub title: String,
    pub artist: String,
    /// Image reference; never empty, placeholder-substituted upstream
    pub image_url: String,
    /// Image plane center
    pub position: Vec3,
    pub rotation: Rotation,
    /// Image plane size in meters
    pub width: f32,
    pub height: f32,
    pub frame: FrameBoxRender,
    pub label: LabelRender,
}

/// A complete renderer-ready gallery scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Gallery display name
    pub name: String,
    pub room: RoomRender,
    pub artworks: Vec<ArtworkRender>,
    /// Artworks that exceeded slot capacity and were not placed
    pub dropped: usize,
}
