//! Color representation and value-to-color scaling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(
                component(0..2)?,
                component(2..4)?,
                component(4..6)?,
            )),
            8 => Ok(Self::new(
                component(0..2)?,
                component(2..4)?,
                component(4..6)?,
                component(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
}

/// A min/max-derived mapping from a numeric value to a render color.
///
/// Values are normalized over `[min, max]` and interpolated between the
/// `low` and `high` gradient stops; values outside the range clamp to the
/// nearest stop. Non-finite values map to the `fallback` color so a NaN in
/// the data can never break a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    min: f64,
    max: f64,
    low: Color,
    high: Color,
    fallback: Color,
}

impl ColorScale {
    /// Create a scale over `[min, max]` between two gradient stops.
    #[must_use]
    pub fn new(min: f64, max: f64, low: Color, high: Color, fallback: Color) -> Self {
        Self {
            min,
            max,
            low,
            high,
            fallback,
        }
    }

    /// The bounds this scale normalizes over.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Map a value to its color.
    #[must_use]
    pub fn color_for(&self, value: f64) -> Color {
        if !value.is_finite() {
            return self.fallback;
        }
        let span = self.max - self.min;
        if span <= 0.0 {
            return self.low;
        }
        let t = ((value - self.min) / span).clamp(0.0, 1.0) as f32;
        self.low.lerp(&self.high, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#2a74a2").unwrap();
        assert!((c.r - 42.0 / 255.0).abs() < 0.001);
        assert!((c.g - 116.0 / 255.0).abs() < 0.001);
        assert!((c.b - 162.0 / 255.0).abs() < 0.001);
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert!(Color::from_hex("invalid").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ff").is_err());
    }

    #[test]
    fn test_color_to_hex_round_trip() {
        let c = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(c.to_hex(), "#ff0000");
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let black = Color::BLACK;
        let white = Color::WHITE;
        assert_eq!(black.lerp(&white, 0.0), black);
        assert_eq!(black.lerp(&white, 1.0), white);
        let mid = black.lerp(&white, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_scale_maps_bounds_to_stops() {
        let scale = ColorScale::new(0.0, 10.0, Color::BLACK, Color::WHITE, Color::TRANSPARENT);
        assert_eq!(scale.color_for(0.0), Color::BLACK);
        assert_eq!(scale.color_for(10.0), Color::WHITE);
    }

    #[test]
    fn test_scale_clamps_out_of_range() {
        let scale = ColorScale::new(0.0, 10.0, Color::BLACK, Color::WHITE, Color::TRANSPARENT);
        assert_eq!(scale.color_for(-5.0), Color::BLACK);
        assert_eq!(scale.color_for(25.0), Color::WHITE);
    }

    #[test]
    fn test_scale_nan_uses_fallback() {
        let scale = ColorScale::new(0.0, 10.0, Color::BLACK, Color::WHITE, Color::TRANSPARENT);
        assert_eq!(scale.color_for(f64::NAN), Color::TRANSPARENT);
        assert_eq!(scale.color_for(f64::INFINITY), Color::TRANSPARENT);
    }

    #[test]
    fn test_scale_zero_span_uses_low_stop() {
        let scale = ColorScale::new(3.0, 3.0, Color::BLACK, Color::WHITE, Color::TRANSPARENT);
        assert_eq!(scale.color_for(3.0), Color::BLACK);
    }

    proptest! {
        #[test]
        fn prop_color_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
            let c = Color::new(r, g, b, a);
            prop_assert!(c.r >= 0.0 && c.r <= 1.0);
            prop_assert!(c.g >= 0.0 && c.g <= 1.0);
            prop_assert!(c.b >= 0.0 && c.b <= 1.0);
            prop_assert!(c.a >= 0.0 && c.a <= 1.0);
        }

        #[test]
        fn prop_scale_output_within_gradient(v in -1e6f64..1e6) {
            let low = Color::rgb(0.2, 0.0, 0.4);
            let high = Color::rgb(1.0, 0.9, 0.1);
            let scale = ColorScale::new(-100.0, 100.0, low, high, Color::BLACK);
            let c = scale.color_for(v);
            prop_assert!(c.r >= low.r.min(high.r) - 0.001 && c.r <= low.r.max(high.r) + 0.001);
            prop_assert!(c.g >= low.g.min(high.g) - 0.001 && c.g <= low.g.max(high.g) + 0.001);
            prop_assert!(c.b >= low.b.min(high.b) - 0.001 && c.b <= low.b.max(high.b) + 0.001);
        }
    }
}
