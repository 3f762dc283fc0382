//! Physical artwork dimensions
//!
//! Producers declare artwork size either as a `"WIDTHxHEIGHT"` string in
//! centimeters (each component 1-3 digits) or as separate numeric fields.
//! This module provides the canonical parsed representation.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Pattern accepted by the upload form for the dimensions field
const DIMENSIONS_PATTERN: &str = r"^(\d{1,3})x(\d{1,3})$";

/// Canonical physical size of an artwork in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSize {
    /// Width in centimeters
    pub width_cm: f32,
    /// Height in centimeters
    pub height_cm: f32,
}

impl PhysicalSize {
    /// Fallback size used when an artwork carries no usable dimensions
    pub const DEFAULT: PhysicalSize = PhysicalSize {
        width_cm: 100.0,
        height_cm: 100.0,
    };

    /// Create a size from explicit centimeter values
    ///
    /// Returns `None` unless both values are finite and strictly positive.
    pub fn new(width_cm: f32, height_cm: f32) -> Option<Self> {
        if width_cm.is_finite() && height_cm.is_finite() && width_cm > 0.0 && height_cm > 0.0 {
            Some(Self { width_cm, height_cm })
        } else {
            None
        }
    }

    /// Parse a `"WxH"` dimensions string
    ///
    /// Accepts only the upload-form format: 1-3 digit width, literal `x`,
    /// 1-3 digit height. The left operand is the width. Returns `None` for
    /// anything else, including a zero component.
    pub fn parse(s: &str) -> Option<Self> {
        let re = Regex::new(DIMENSIONS_PATTERN).ok()?;
        let caps = re.captures(s.trim())?;
        let width_cm: f32 = caps.get(1)?.as_str().parse().ok()?;
        let height_cm: f32 = caps.get(2)?.as_str().parse().ok()?;
        Self::new(width_cm, height_cm)
    }

    /// Width / height ratio
    pub fn aspect_ratio(&self) -> f32 {
        self.width_cm / self.height_cm
    }

    /// The same size with width and height exchanged
    pub fn swapped(&self) -> Self {
        Self {
            width_cm: self.height_cm,
            height_cm: self.width_cm,
        }
    }
}

impl Default for PhysicalSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for PhysicalSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width_cm, self.height_cm)
    }
}
