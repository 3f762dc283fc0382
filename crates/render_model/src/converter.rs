//! Convert a gallery layout to a render model

use crate::{
    ArtworkRender, Color, FrameBoxRender, LabelRender, RenderError, RenderModel, Result,
    RoomRender, SlabRender, TrimKind, TrimStrip, WallPanel,
};
use layout_engine::{GalleryLayout, RoomGeometry, Vec3, Wall};

/// Vertical offset of the floor slab below the room origin
const FLOOR_OFFSET: f32 = 0.05;

/// How far trim strips sit inside the wall plane
const TRIM_INSET: f32 = 0.05;

/// Baseboard strip height above the floor
const BASEBOARD_Y: f32 = 0.1;

/// Fallback when a frame style's palette entry fails to parse
const DEFAULT_FRAME_COLOR: Color = Color::rgb(212, 175, 55);

/// Configuration for render conversion
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Wall panel color
    pub wall_color: Color,
    /// Floor slab color
    pub floor_color: Color,
    /// Ceiling slab color
    pub ceiling_color: Color,
    /// Label text color
    pub label_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wall_color: Color::rgb(240, 240, 240),
            floor_color: Color::rgb(214, 214, 214),
            ceiling_color: Color::WHITE,
            label_color: Color::rgb(51, 51, 51),
        }
    }
}

impl RenderConfig {
    /// Set the wall color from a hex string
    pub fn with_wall_color(mut self, hex: &str) -> Result<Self> {
        self.wall_color =
            Color::parse_hex(hex).ok_or_else(|| RenderError::InvalidColor(hex.to_string()))?;
        Ok(self)
    }

    /// Set the floor color from a hex string
    pub fn with_floor_color(mut self, hex: &str) -> Result<Self> {
        self.floor_color =
            Color::parse_hex(hex).ok_or_else(|| RenderError::InvalidColor(hex.to_string()))?;
        Ok(self)
    }
}

/// Converts gallery layouts to render models
#[derive(Debug, Clone, Default)]
pub struct RenderConverter {
    config: RenderConfig,
}

impl RenderConverter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Convert a computed layout into a renderer-ready scene
    pub fn convert(&self, layout: &GalleryLayout, gallery_name: &str) -> RenderModel {
        let frame_color =
            Color::parse_hex(layout.frame_style.spec().color).unwrap_or(DEFAULT_FRAME_COLOR);

        let artworks = layout
            .placements
            .iter()
            .map(|placement| ArtworkRender {
                artwork_id: placement
                    .artwork
                    .artwork_id
                    .as_ref()
                    .map(|id| id.to_string()),
                title: placement.artwork.display_title().to_string(),
                artist: placement.artwork.display_artist().to_string(),
                image_url: placement.artwork.resolved_image_url().to_string(),
                position: placement.artwork_position,
                rotation: placement.slot.rotation,
                width: placement.scaled.width,
                height: placement.scaled.height,
                frame: FrameBoxRender {
                    position: placement.frame.position,
                    rotation: placement.slot.rotation,
                    width: placement.frame.width,
                    height: placement.frame.height,
                    depth: placement.frame.depth,
                    color: frame_color,
                },
                label: LabelRender {
                    text: placement.label.text.clone(),
                    position: placement.label.position,
                    rotation: placement.label.rotation,
                    width: placement.label.width,
                    color: self.config.label_color,
                },
            })
            .collect();

        RenderModel {
            name: gallery_name.to_string(),
            room: self.build_room(&layout.room),
            artworks,
            dropped: layout.dropped,
        }
    }

    /// Room shell geometry for the resolved room size
    fn build_room(&self, room: &RoomGeometry) -> RoomRender {
        let wall_distance = room.wall_distance();

        let walls = Wall::ALL
            .iter()
            .map(|wall| WallPanel {
                wall: *wall,
                position: wall.outward() * wall_distance
                    + Vec3::new(0.0, room.wall_height / 2.0, 0.0),
                width: room.size,
                height: room.wall_height,
                color: self.config.wall_color,
            })
            .collect();

        let trim = Wall::ALL
            .iter()
            .flat_map(|wall| {
                let inset = wall.outward() * (wall_distance - TRIM_INSET);
                [
                    TrimStrip {
                        kind: TrimKind::Baseboard,
                        wall: *wall,
                        position: inset + Vec3::new(0.0, BASEBOARD_Y, 0.0),
                        length: room.size,
                    },
                    TrimStrip {
                        kind: TrimKind::CrownMolding,
                        wall: *wall,
                        position: inset + Vec3::new(0.0, room.wall_height - TRIM_INSET, 0.0),
                        length: room.size,
                    },
                ]
            })
            .collect();

        RoomRender {
            floor: SlabRender {
                position: Vec3::new(0.0, -FLOOR_OFFSET, 0.0),
                width: room.size,
                depth: room.size,
                color: self.config.floor_color,
            },
            ceiling: SlabRender {
                position: Vec3::new(0.0, room.wall_height + FLOOR_OFFSET, 0.0),
                width: room.size,
                depth: room.size,
                color: self.config.ceiling_color,
            },
            walls,
            trim,
            camera_height: room.camera_height,
        }
    }
}
