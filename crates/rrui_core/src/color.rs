//! RGBA color value shared by every RRUI crate

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Wrong number of hex digits (expected 6 or 8)
    #[error("invalid hex color length {len} in {input:?} (expected 6 or 8 digits)")]
    InvalidLength { input: String, len: usize },

    /// Non-hex character in the input
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// Linear RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let len = digits.len();
        if len != 6 && len != 8 {
            return Err(ColorParseError::InvalidLength {
                input: input.to_string(),
                len,
            });
        }
        // from_str_radix alone would also take a leading sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))?;
        if len == 6 {
            Ok(Self::from_hex(value))
        } else {
            Ok(Self::from_hex(value >> 8).with_alpha_u8((value & 0xFF) as u8))
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    ///
    /// Channels are quantized to 8 bits, so only colors whose components are
    /// multiples of `1/255` survive a format/parse round trip unchanged.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        if a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Set alpha from an 8-bit value (`0..=255`)
    pub fn with_alpha_u8(self, alpha: u8) -> Self {
        self.with_alpha(alpha as f32 / 255.0)
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        assert_eq!(Color::parse_hex("#FF0000").unwrap(), Color::rgb(1.0, 0.0, 0.0));
        let translucent = Color::parse_hex("00000080").unwrap();
        assert_eq!(translucent.a, 128.0 / 255.0);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Color::parse_hex("#FFF"),
            Err(ColorParseError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            Color::parse_hex("#GG0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::parse_hex("#+12345"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::parse_hex("#-1234567"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::parse_hex("#123456789"),
            Err(ColorParseError::InvalidLength { len: 9, .. })
        ));
        assert!(matches!(
            Color::parse_hex(""),
            Err(ColorParseError::InvalidLength { len: 0, .. })
        ));
        assert!(matches!(
            Color::parse_hex("#"),
            Err(ColorParseError::InvalidLength { len: 0, .. })
        ));
        assert!(matches!(
            Color::parse_hex("##123456"),
            Err(ColorParseError::InvalidLength { len: 7, .. })
        ));
    }

    #[test]
    fn byte_alpha_survives_hex_round_trip() {
        let scrim = Color::BLACK.with_alpha_u8(82);
        let back = Color::parse_hex(&scrim.to_hex_string()).unwrap();
        assert_eq!(back, scrim);
        assert_eq!(scrim.to_hex_string(), "#00000052");
    }

    #[test]
    fn hex_string_omits_opaque_alpha() {
        assert_eq!(Color::from_hex(0x1E66F5).to_hex_string(), "#1e66f5");
        assert_eq!(Color::BLACK.with_alpha(0.0).to_hex_string(), "#00000000");
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0xD20F39)).unwrap();
        assert_eq!(json, "\"#d20f39\"");
        let back: Color = serde_json::from_str("\"#D20F39\"").unwrap();
        assert_eq!(back, Color::from_hex(0xD20F39));
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(0.5, 0.5, 0.5));
    }
}
