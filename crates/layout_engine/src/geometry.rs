//! Geometric primitives for room layout
//!
//! Coordinates are in meters. The room is centered on the origin: x grows
//! toward the right wall, z toward the front wall, y upward. Rotations are
//! Euler angles in degrees, matching the rendering surface's convention.

use serde::{Deserialize, Serialize};

/// A point or direction in room space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Euler rotation in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    /// Rotation about the vertical axis only
    pub fn yaw(degrees: f32) -> Self {
        Self { x: 0.0, y: degrees, z: 0.0 }
    }
}

/// The four walls of a gallery room, in planning order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Back,
    Left,
    Right,
    Front,
}

impl Wall {
    /// Planning order: back, left, right, front
    pub const ALL: [Wall; 4] = [Wall::Back, Wall::Left, Wall::Right, Wall::Front];

    /// Yaw angle that faces a mounted artwork into the room
    pub fn yaw(&self) -> f32 {
        match self {
            Wall::Back => 0.0,
            Wall::Left => 90.0,
            Wall::Right => -90.0,
            Wall::Front => 180.0,
        }
    }

    /// Slot rotation for this wall
    pub fn rotation(&self) -> Rotation {
        Rotation::yaw(self.yaw())
    }

    /// Unit vector pointing out of the room through this wall
    pub fn outward(&self) -> Vec3 {
        match self {
            Wall::Back => Vec3::new(0.0, 0.0, -1.0),
            Wall::Left => Vec3::new(-1.0, 0.0, 0.0),
            Wall::Right => Vec3::new(1.0, 0.0, 0.0),
            Wall::Front => Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Whether this is one of the narrower-viewing-angle side walls
    pub fn is_side(&self) -> bool {
        matches!(self, Wall::Left | Wall::Right)
    }

    /// The stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Wall::Back => "back",
            Wall::Left => "left",
            Wall::Right => "right",
            Wall::Front => "front",
        }
    }
}

/// A candidate mounting position on a wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSlot {
    /// The wall this slot belongs to
    pub wall: Wall,
    /// Slot center on the interior wall face
    pub position: Vec3,
    /// Wall-facing rotation
    pub rotation: Rotation,
}

impl WallSlot {
    pub fn new(wall: Wall, position: Vec3) -> Self {
        Self {
            wall,
            position,
            rotation: wall.rotation(),
        }
    }
}

/// Position identity rounded to two decimals (1 cm)
///
/// Two slots whose positions round to the same key are treated as the
/// same mounting point for collision purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey(i32, i32, i32);

impl From<Vec3> for PositionKey {
    fn from(v: Vec3) -> Self {
        let round = |c: f32| (c * 100.0).round() as i32;
        Self(round(v.x), round(v.y), round(v.z))
    }
}

impl std::fmt::Display for PositionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2},{:.2},{:.2}",
            self.0 as f32 / 100.0,
            self.1 as f32 / 100.0,
            self.2 as f32 / 100.0
        )
    }
}
