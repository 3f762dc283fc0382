//! Artwork Scaler - physical centimeters to render-space meters
//!
//! An artwork renders at its physical size where possible, clamped into
//! world-size bounds with aspect ratio preserved. Side walls get a small
//! reduction to offset their narrower viewing angle.

use crate::Wall;
use gallery_model::PhysicalSize;
use serde::{Deserialize, Serialize};

/// Widest an artwork may render, in meters
pub const MAX_RENDER_WIDTH: f32 = 3.0;

/// Tallest an artwork may render, in meters
pub const MAX_RENDER_HEIGHT: f32 = 2.0;

/// Smallest the larger dimension of an artwork may render, in meters
pub const MIN_RENDER_SIZE: f32 = 0.5;

/// Reduction applied to artworks on the left and right walls
const SIDE_WALL_FACTOR: f32 = 0.9;

/// Render-space artwork size in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledSize {
    pub width: f32,
    pub height: f32,
}

/// Scale resolved physical dimensions into render space
///
/// Centimeters convert to meters, then the width clamp applies before the
/// height clamp; an artwork over both maximums ends up bounded by the
/// tighter constraint. Artworks whose dimensions are both under the
/// minimum scale up until the larger one reaches it. Input dimensions are
/// assumed positive per the dimension resolver's contract.
pub fn scale_artwork(size: PhysicalSize, wall: Wall) -> ScaledSize {
    let mut width = size.width_cm / 100.0;
    let mut height = size.height_cm / 100.0;

    if width > MAX_RENDER_WIDTH {
        let factor = MAX_RENDER_WIDTH / width;
        width = MAX_RENDER_WIDTH;
        height *= factor;
    }

    if height > MAX_RENDER_HEIGHT {
        let factor = MAX_RENDER_HEIGHT / height;
        height = MAX_RENDER_HEIGHT;
        width *= factor;
    }

    if width < MIN_RENDER_SIZE && height < MIN_RENDER_SIZE {
        let larger = width.max(height);
        let factor = MIN_RENDER_SIZE / larger;
        width *= factor;
        height *= factor;
    }

    if wall.is_side() {
        width *= SIDE_WALL_FACTOR;
        height *= SIDE_WALL_FACTOR;
    }

    ScaledSize { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn size(w: f32, h: f32) -> PhysicalSize {
        PhysicalSize::new(w, h).unwrap()
    }

    #[test]
    fn test_centimeters_convert_to_meters() {
        let scaled = scale_artwork(size(120.0, 80.0), Wall::Back);
        assert!((scaled.width - 1.2).abs() < 1e-6);
        assert!((scaled.height - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_width_clamp_preserves_aspect() {
        let scaled = scale_artwork(size(600.0, 300.0), Wall::Back);
        assert_eq!(scaled.width, MAX_RENDER_WIDTH);
        assert!((scaled.height - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_height_clamp_preserves_aspect() {
        let scaled = scale_artwork(size(100.0, 400.0), Wall::Back);
        assert_eq!(scaled.height, MAX_RENDER_HEIGHT);
        assert!((scaled.width - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_over_both_maximums_bounded_by_tighter() {
        let scaled = scale_artwork(size(400.0, 400.0), Wall::Back);
        assert!(scaled.width <= MAX_RENDER_WIDTH);
        assert_eq!(scaled.height, MAX_RENDER_HEIGHT);
    }

    #[test]
    fn test_tiny_artwork_scales_up_to_minimum() {
        let scaled = scale_artwork(size(20.0, 10.0), Wall::Back);
        assert!((scaled.width - MIN_RENDER_SIZE).abs() < 1e-6);
        assert!((scaled.height - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_one_small_dimension_is_left_alone() {
        // Only one dimension under the minimum: no upscale
        let scaled = scale_artwork(size(100.0, 20.0), Wall::Back);
        assert!((scaled.width - 1.0).abs() < 1e-6);
        assert!((scaled.height - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_side_wall_reduction() {
        let back = scale_artwork(size(120.0, 80.0), Wall::Back);
        let left = scale_artwork(size(120.0, 80.0), Wall::Left);
        let right = scale_artwork(size(120.0, 80.0), Wall::Right);

        assert!((left.width - back.width * 0.9).abs() < 1e-6);
        assert!((left.height - back.height * 0.9).abs() < 1e-6);
        assert_eq!(left, right);
    }

    proptest! {
        #[test]
        fn output_stays_in_bounds(
            w in 0.1f32..10000.0,
            h in 0.1f32..10000.0,
            side in proptest::bool::ANY,
        ) {
            let wall = if side { Wall::Left } else { Wall::Back };
            let scaled = scale_artwork(size(w, h), wall);

            prop_assert!(scaled.width > 0.0);
            prop_assert!(scaled.height > 0.0);
            prop_assert!(scaled.width <= MAX_RENDER_WIDTH + 1e-4);
            prop_assert!(scaled.height <= MAX_RENDER_HEIGHT + 1e-4);
        }

        #[test]
        fn aspect_ratio_survives_clamping(w in 10.0f32..10000.0, h in 10.0f32..10000.0) {
            let scaled = scale_artwork(size(w, h), Wall::Back);
            // Ratio only changes when both clamps engage, and then only to
            // fit the tighter bound; in all other cases it is preserved.
            if scaled.width < MAX_RENDER_WIDTH && scaled.height < MAX_RENDER_HEIGHT {
                let input_ratio = w / h;
                let output_ratio = scaled.width / scaled.height;
                prop_assert!((input_ratio - output_ratio).abs() / input_ratio < 1e-3);
            }
        }
    }
}
