//! SolidColor type — the opaque color the picker shows in its readout.
//!
//! A thin wrapper over [`bigcolor::BigColor`], which does the HSV, RGB, hex,
//! and HSL conversions. Hue crosses this API in degrees.

use bigcolor::{BigColor, ColorFormat};

/// Opaque color built from 8-bit RGB channels.
#[derive(Debug, Clone)]
pub struct SolidColor(BigColor);

// BigColor keeps f32 OKLCH internally; equality is on the 8-bit channels.
impl PartialEq for SolidColor {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb() == other.to_rgb()
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(BigColor::from_rgb(r, g, b, 1.0))
    }

    /// Create from hue in degrees (0–360) and saturation/value in 0.0–1.0.
    pub fn from_hsv(hue_deg: f64, s: f64, v: f64) -> Self {
        Self(BigColor::from_hsv(hue_deg as f32, s as f32, v as f32, 1.0))
    }

    /// Parse a hex string (with or without `#`, 3 or 6 hex digits).
    ///
    /// Color names and other CSS forms are rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let color = BigColor::new(hex);
        if color.is_valid() && color.get_format() == ColorFormat::HEX {
            Some(Self(color))
        } else {
            None
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let rgb = self.0.to_rgb();
        (rgb.r, rgb.g, rgb.b)
    }

    /// Format as uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        self.0.to_hex_string(false).to_uppercase()
    }

    /// CSS-style `hsl(H, S%, L%)` with whole-number components.
    pub fn to_hsl_string(&self) -> String {
        self.0.to_hsl_string()
    }

    /// CSS-style `rgb(R, G, B)`.
    pub fn to_rgb_string(&self) -> String {
        self.0.to_rgb_string()
    }

    /// Whether the color reads as dark, e.g. to pick a text color over it.
    pub fn is_dark(&self) -> bool {
        self.0.is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_format() {
        assert_eq!(SolidColor::from_rgb(255, 0, 128).to_hex(), "#FF0080");
        assert_eq!(SolidColor::from_rgb(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            SolidColor::from_hex("#3B82F6").map(|c| c.to_rgb()),
            Some((0x3B, 0x82, 0xF6))
        );
        assert_eq!(
            SolidColor::from_hex("fff").map(|c| c.to_rgb()),
            Some((255, 255, 255))
        );
        assert_eq!(SolidColor::from_hex("12345"), None);
        assert_eq!(SolidColor::from_hex("zzzzzz"), None);
        assert_eq!(SolidColor::from_hex("red"), None);
    }

    #[test]
    fn test_from_hsv() {
        assert_eq!(SolidColor::from_hsv(0.0, 1.0, 1.0).to_rgb(), (255, 0, 0));
        assert_eq!(SolidColor::from_hsv(360.0, 1.0, 1.0).to_rgb(), (255, 0, 0));
        assert_eq!(SolidColor::from_hsv(120.0, 1.0, 1.0).to_rgb(), (0, 255, 0));
        assert_eq!(SolidColor::from_hsv(150.0, 0.5, 149.0 / 299.0).to_rgb(), (64, 127, 95));
        assert_eq!(SolidColor::from_hsv(75.0, 0.8, 0.0).to_rgb(), (0, 0, 0));
    }

    #[test]
    fn test_hex_round_trip_preserves_rgb() {
        for (h, s, v) in [(0.0, 1.0, 1.0), (150.0, 0.5, 0.4983), (275.0, 0.13, 0.91)] {
            let color = SolidColor::from_hsv(h, s, v);
            let parsed = SolidColor::from_hex(&color.to_hex()).unwrap();
            assert_eq!(parsed.to_rgb(), color.to_rgb());
        }
    }

    #[test]
    fn test_hsl_string() {
        assert_eq!(SolidColor::from_rgb(255, 0, 0).to_hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(SolidColor::from_rgb(255, 255, 255).to_hsl_string(), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_rgb_string() {
        assert_eq!(SolidColor::from_rgb(1, 2, 3).to_rgb_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_equality_uses_rgb_channels() {
        assert_eq!(SolidColor::from_hsv(120.0, 1.0, 1.0), SolidColor::from_rgb(0, 255, 0));
        assert_eq!(SolidColor::from_hex("#0F0"), Some(SolidColor::from_rgb(0, 255, 0)));
        assert_ne!(SolidColor::from_rgb(0, 255, 0), SolidColor::from_rgb(0, 254, 0));
    }

    #[test]
    fn test_is_dark() {
        assert!(SolidColor::from_rgb(0, 0, 0).is_dark());
        assert!(!SolidColor::from_rgb(255, 255, 255).is_dark());
    }
}
