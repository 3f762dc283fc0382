//! Placement Assigner - artwork-to-slot pairing with collision resolution
//!
//! Artworks take slots in gallery order. If two artworks resolve to the
//! same rounded position, the later one moves to an unused pool slot, or
//! failing that gets nudged off the collision point. The used-position set
//! lives for a single layout run only.

use crate::{PositionKey, Vec3, WallSlot};
use gallery_model::ArtworkRef;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Offset applied on both horizontal axes when no free slot remains
const COLLISION_NUDGE: f32 = 0.3;

/// One artwork paired with its resolved mounting slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub artwork: ArtworkRef,
    pub slot: WallSlot,
}

/// Pair artworks with planned slots, resolving position collisions
///
/// `slots` are the planned slots for this artwork count; `pool` is the
/// room's full candidate set, searched when a collision needs a free
/// position. Artworks beyond the slot count are dropped (logged, not
/// fatal). A reassigned artwork keeps its planned wall and rotation and
/// borrows only the free slot's position; the planner emits consistent
/// slots, so this only matters for malformed pools.
pub fn assign_slots(
    artworks: &[ArtworkRef],
    slots: &[WallSlot],
    pool: &[WallSlot],
) -> Vec<SlotAssignment> {
    if artworks.len() > slots.len() {
        tracing::warn!(
            artworks = artworks.len(),
            slots = slots.len(),
            "More artworks than wall slots, excess will not be placed"
        );
    }

    let mut used: HashSet<PositionKey> = HashSet::new();
    let mut assignments = Vec::with_capacity(artworks.len().min(slots.len()));

    for (artwork, slot) in artworks.iter().zip(slots.iter()) {
        let mut slot = slot.clone();
        let key = PositionKey::from(slot.position);

        if used.contains(&key) {
            slot = resolve_collision(slot, pool, &mut used);
        } else {
            used.insert(key);
        }

        assignments.push(SlotAssignment {
            artwork: artwork.clone(),
            slot,
        });
    }

    assignments
}

/// Move a colliding slot to a free pool position, or nudge it
fn resolve_collision(
    slot: WallSlot,
    pool: &[WallSlot],
    used: &mut HashSet<PositionKey>,
) -> WallSlot {
    for candidate in pool {
        let key = PositionKey::from(candidate.position);
        if !used.contains(&key) {
            tracing::debug!(
                position = %key,
                "Reassigned colliding artwork to free slot"
            );
            used.insert(key);
            return WallSlot {
                wall: slot.wall,
                position: candidate.position,
                rotation: slot.rotation,
            };
        }
    }

    // Every pool position is taken; shift off the collision point
    let nudged = slot.position + Vec3::new(COLLISION_NUDGE, 0.0, COLLISION_NUDGE);
    let key = PositionKey::from(nudged);
    tracing::debug!(position = %key, "No free slot, nudged colliding artwork");
    used.insert(key);
    WallSlot {
        wall: slot.wall,
        position: nudged,
        rotation: slot.rotation,
    }
}
