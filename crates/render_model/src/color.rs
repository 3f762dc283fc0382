//! Color representation and hex parsing

use serde::{Deserialize, Serialize};

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Parse a `#rrggbb` or `#rgb` hex color
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            3 => {
                let component = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 16 + v)
                };
                Some(Self::rgb(component(0)?, component(1)?, component(2)?))
            }
            _ => None,
        }
    }

    /// Format as `#rrggbb` (alpha is dropped)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(Color::parse_hex("#b4a053"), Some(Color::rgb(180, 160, 83)));
        assert_eq!(Color::parse_hex("#222222"), Some(Color::rgb(34, 34, 34)));
        assert_eq!(Color::parse_hex("#ffffff"), Some(Color::WHITE));
    }

    #[test]
    fn test_parse_three_digit_hex() {
        assert_eq!(Color::parse_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse_hex("#000"), Some(Color::BLACK));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Color::parse_hex("b4a053").is_none());
        assert!(Color::parse_hex("#b4a0").is_none());
        assert!(Color::parse_hex("#zzzzzz").is_none());
        assert!(Color::parse_hex("").is_none());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color::rgb(150, 103, 59);
        assert_eq!(Color::parse_hex(&color.to_hex()), Some(color));
    }
}
