//! Dimension Resolver - canonical physical size for an artwork
//!
//! Resolution order: the `"WxH"` dimensions string, then the explicit
//! numeric fields, then the 100x100 cm default. Invalid values are logged
//! and defaulted; resolution never fails.

use gallery_model::{ArtworkRef, PhysicalSize};
use serde::{Deserialize, Serialize};

/// Aspect ratio above which declared dimensions look suspicious
const ASPECT_EXTREME_HIGH: f32 = 2.5;

/// Aspect ratio below which declared dimensions look suspicious
const ASPECT_EXTREME_LOW: f32 = 0.4;

/// An artwork's resolved physical dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDimensions {
    /// The canonical parsed size; what the producer declared
    pub canonical: PhysicalSize,
    /// The size to use for scaling; swapped from canonical when the
    /// flip heuristic fired
    pub scaling: PhysicalSize,
    /// Whether the flip heuristic swapped width and height
    pub flipped: bool,
}

/// Resolve an artwork's declared size to canonical centimeters
///
/// With `flip_correction` enabled, a best-effort heuristic swaps width and
/// height for scaling when the aspect ratio is extreme and a title or
/// image-reference keyword suggests the declared orientation is wrong.
/// The swap applies to `scaling` only; `canonical` always reflects the
/// declared values. The heuristic has no ground truth and can misfire;
/// callers that prefer to trust declared order can disable it.
pub fn resolve_dimensions(artwork: &ArtworkRef, flip_correction: bool) -> ResolvedDimensions {
    let canonical = match artwork.parsed_dimensions() {
        Some(size) => size,
        None => {
            if let Some(raw) = artwork.dimensions.as_deref() {
                tracing::warn!(
                    title = artwork.display_title(),
                    dimensions = raw,
                    "Unparseable dimensions string, falling back"
                );
            }
            match artwork.explicit_size() {
                Some(size) => size,
                None => {
                    if artwork.width.is_some() || artwork.height.is_some() {
                        tracing::warn!(
                            title = artwork.display_title(),
                            "Invalid width/height fields, using default size"
                        );
                    }
                    PhysicalSize::DEFAULT
                }
            }
        }
    };

    let flipped = flip_correction && is_likely_flipped(artwork, canonical);
    let scaling = if flipped { canonical.swapped() } else { canonical };

    if flipped {
        tracing::debug!(
            title = artwork.display_title(),
            aspect_ratio = canonical.aspect_ratio(),
            "Detected likely flipped dimensions, swapping for scaling"
        );
    }

    ResolvedDimensions { canonical, scaling, flipped }
}

/// Keyword sniffing for mis-declared orientation
///
/// A landscape-ratio artwork hinting "portrait" in its title or image
/// reference, or a portrait-ratio artwork titled with "landscape", is
/// taken as declared in the wrong order.
fn is_likely_flipped(artwork: &ArtworkRef, size: PhysicalSize) -> bool {
    let ratio = size.aspect_ratio();
    if ratio <= ASPECT_EXTREME_HIGH && ratio >= ASPECT_EXTREME_LOW {
        return false;
    }

    let title = artwork.display_title().to_ascii_lowercase();
    let url = artwork.resolved_image_url().to_ascii_lowercase();

    (ratio > 1.0 && (title.contains("portrait") || url.contains("portrait")))
        || (ratio < 1.0 && title.contains("landscape"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_string_wins() {
        let art = ArtworkRef::new()
            .with_dimensions("90x120")
            .with_size(50.0, 50.0);
        let resolved = resolve_dimensions(&art, true);
        assert_eq!(resolved.canonical, PhysicalSize::new(90.0, 120.0).unwrap());
    }

    #[test]
    fn test_numeric_fields_fallback() {
        let art = ArtworkRef::new().with_size(120.0, 80.0);
        let resolved = resolve_dimensions(&art, true);
        assert_eq!(resolved.canonical, PhysicalSize::new(120.0, 80.0).unwrap());
    }

    #[test]
    fn test_malformed_string_defaults() {
        let art = ArtworkRef::new().with_dimensions("abcxdef");
        let resolved = resolve_dimensions(&art, true);
        assert_eq!(resolved.canonical, PhysicalSize::DEFAULT);
        assert!(!resolved.flipped);
    }

    #[test]
    fn test_missing_everything_defaults() {
        let resolved = resolve_dimensions(&ArtworkRef::new(), true);
        assert_eq!(resolved.canonical, PhysicalSize::DEFAULT);
    }

    #[test]
    fn test_non_positive_numeric_fields_default() {
        let art = ArtworkRef::new().with_size(-10.0, 80.0);
        let resolved = resolve_dimensions(&art, true);
        assert_eq!(resolved.canonical, PhysicalSize::DEFAULT);
    }

    #[test]
    fn test_flip_fires_on_extreme_ratio_with_keyword() {
        let art = ArtworkRef::new()
            .with_title("Landscape Study")
            .with_size(50.0, 150.0);
        let resolved = resolve_dimensions(&art, true);
        assert!(resolved.flipped);
        assert_eq!(resolved.scaling, resolved.canonical.swapped());
        assert_eq!(resolved.canonical, PhysicalSize::new(50.0, 150.0).unwrap());
    }

    #[test]
    fn test_flip_needs_extreme_ratio() {
        // Keyword present but the ratio is unremarkable
        let art = ArtworkRef::new()
            .with_title("Landscape Study")
            .with_size(80.0, 100.0);
        assert!(!resolve_dimensions(&art, true).flipped);
    }

    #[test]
    fn test_flip_needs_keyword() {
        // Extreme ratio but nothing suggests the declared order is wrong
        let art = ArtworkRef::new().with_title("Banner").with_size(300.0, 50.0);
        assert!(!resolve_dimensions(&art, true).flipped);
    }

    #[test]
    fn test_flip_disabled_by_option() {
        let art = ArtworkRef::new()
            .with_title("Landscape Study")
            .with_size(50.0, 150.0);
        let resolved = resolve_dimensions(&art, false);
        assert!(!resolved.flipped);
        assert_eq!(resolved.scaling, resolved.canonical);
    }

    #[test]
    fn test_portrait_keyword_on_landscape_ratio() {
        let art = ArtworkRef::new()
            .with_title("Portrait of a Lady")
            .with_size(300.0, 100.0);
        assert!(resolve_dimensions(&art, true).flipped);
    }
}
