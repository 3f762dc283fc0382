//! Room Sizer - concrete room geometry from a size class

use gallery_model::RoomSizeClass;
use serde::{Deserialize, Serialize};

/// Wall mesh thickness in meters
pub const WALL_THICKNESS: f32 = 0.1;

/// Gap between a mounted artwork and the wall face, to keep the artwork
/// plane clear of the wall mesh
pub const WALL_CLEARANCE: f32 = 0.06;

/// Edge length of the large room, the reference for spacing scale
pub const REFERENCE_ROOM_SIZE: f32 = 7.0;

/// Concrete geometry of a gallery room
///
/// Derived from the room size class on every layout run; never persisted.
/// `scale` shrinks inter-artwork spacing in smaller rooms. It is not
/// applied to artwork sizes, which are driven by physical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    /// Floor footprint edge length in meters
    pub size: f32,
    /// Usable wall height in meters
    pub wall_height: f32,
    /// Height of artwork centers in meters
    pub artwork_baseline_y: f32,
    /// `size / REFERENCE_ROOM_SIZE`, always <= 1
    pub scale: f32,
    /// Camera rig height for this room
    pub camera_height: f32,
    /// Artwork capacity advertised for this size class
    pub max_artworks: usize,
}

impl RoomGeometry {
    /// Room geometry for a size class
    pub fn for_class(class: RoomSizeClass) -> Self {
        let (size, wall_height, artwork_baseline_y, camera_height, max_artworks) = match class {
            RoomSizeClass::Small => (3.0, 2.5, 1.5, 0.8, 4),
            RoomSizeClass::Medium => (5.0, 3.0, 1.55, 0.9, 8),
            RoomSizeClass::Large => (7.0, 3.5, 1.65, 1.0, 12),
        };
        Self {
            size,
            wall_height,
            artwork_baseline_y,
            scale: size / REFERENCE_ROOM_SIZE,
            camera_height,
            max_artworks,
        }
    }

    /// Distance from room center to a wall plane's center
    pub fn wall_distance(&self) -> f32 {
        self.size / 2.0
    }

    /// Distance from room center to the interior wall face where slots sit
    pub fn wall_face_offset(&self) -> f32 {
        self.wall_distance() - WALL_THICKNESS / 2.0 - WALL_CLEARANCE
    }
}

impl Default for RoomGeometry {
    fn default() -> Self {
        Self::for_class(RoomSizeClass::Medium)
    }
}
