//! Wall Slot Planner - candidate mounting slots across the four walls
//!
//! Artworks are spread across the walls as evenly as possible in the fixed
//! order back, left, right, front, with at most three slots per wall. A
//! gallery with more artworks than the twelve-slot capacity only populates
//! the planned slots; the assigner drops the excess.

use crate::{RoomGeometry, Vec3, Wall, WallSlot};

/// Hard per-wall slot limit
pub const MAX_SLOTS_PER_WALL: usize = 3;

/// Total slot capacity of a room
pub const SLOT_CAPACITY: usize = MAX_SLOTS_PER_WALL * 4;

/// Half-spacing for a two-slot wall, before room scaling
const TWO_SLOT_SPACING: f32 = 1.5;

/// Outer-slot offset for a three-slot wall, before room scaling
const THREE_SLOT_SPACING: f32 = 2.0;

/// How many artworks land on each wall, in planning order
///
/// Walls fill front-to-back through the order: with up to four artworks
/// each wall takes one, with up to eight each takes up to two, beyond that
/// up to three. Capped at the twelve-slot capacity.
pub fn wall_distribution(artwork_count: usize) -> [usize; 4] {
    let per_wall = if artwork_count <= 4 {
        1
    } else if artwork_count <= 8 {
        2
    } else {
        MAX_SLOTS_PER_WALL
    };

    let mut counts = [0usize; 4];
    let mut remaining = artwork_count.min(SLOT_CAPACITY);
    for count in &mut counts {
        *count = remaining.min(per_wall);
        remaining -= *count;
    }
    counts
}

/// Offsets along a wall's free axis for a given slot count
///
/// One slot sits centered; two sit symmetric about center; three add the
/// center back in. Spacing shrinks with the room scale so smaller rooms
/// keep artworks off the corners.
fn slot_offsets(count: usize, scale: f32) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        2 => {
            let spacing = TWO_SLOT_SPACING * scale;
            vec![-spacing, spacing]
        }
        _ => {
            let spacing = THREE_SLOT_SPACING * scale;
            vec![-spacing, 0.0, spacing]
        }
    }
}

/// Slot center for a wall at a given free-axis offset
fn slot_position(wall: Wall, offset: f32, room: &RoomGeometry) -> Vec3 {
    let face = wall.outward() * room.wall_face_offset();
    let y = room.artwork_baseline_y;
    match wall {
        Wall::Back | Wall::Front => Vec3::new(offset, y, face.z),
        Wall::Left | Wall::Right => Vec3::new(face.x, y, offset),
    }
}

/// Plan candidate slots for an artwork count
///
/// Returns slots in assignment order: all back-wall slots, then left,
/// right, front, each wall's slots ordered along its free axis.
pub fn plan_slots(artwork_count: usize, room: &RoomGeometry) -> Vec<WallSlot> {
    let counts = wall_distribution(artwork_count);
    let mut slots = Vec::with_capacity(artwork_count.min(SLOT_CAPACITY));

    for (wall, &count) in Wall::ALL.iter().zip(counts.iter()) {
        for offset in slot_offsets(count, room.scale) {
            slots.push(WallSlot::new(*wall, slot_position(*wall, offset, room)));
        }
    }
    slots
}

/// Every candidate slot the room offers, for collision fallback
pub fn full_slot_pool(room: &RoomGeometry) -> Vec<WallSlot> {
    let mut slots = Vec::with_capacity(SLOT_CAPACITY);
    for wall in Wall::ALL {
        for offset in slot_offsets(MAX_SLOTS_PER_WALL, room.scale) {
            slots.push(WallSlot::new(wall, slot_position(wall, offset, room)));
        }
    }
    slots
}
