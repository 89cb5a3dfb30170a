//! Colour type and compositing helpers
//!
//! Colours are written as hex strings (`#F5ED51`) in config files and parsed
//! with `palette`.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use palette::Srgb;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// RGB color type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque pixel of this colour
    pub fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    /// Upper-case `#RRGGBB` form
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(c: Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Rgb::from)
            .map_err(|e| format!("invalid colour '{}': {}", s, e))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Interpolate between two colors
pub fn interpolate_color(start: Rgb, end: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb {
        r: ((1.0 - t) * start.r as f32 + t * end.r as f32).round() as u8,
        g: ((1.0 - t) * start.g as f32 + t * end.g as f32).round() as u8,
        b: ((1.0 - t) * start.b as f32 + t * end.b as f32).round() as u8,
    }
}

/// Composite a (straight alpha) pixel over an opaque background.
pub fn composite_over(pixel: Rgba<u8>, background: Rgb) -> Rgb {
    let [r, g, b, a] = pixel.0;
    interpolate_color(background, Rgb::new(r, g, b), a as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let gold: Rgb = "#F4B94A".parse().unwrap();
        assert_eq!(gold, Rgb::new(0xF4, 0xB9, 0x4A));

        let short: Rgb = "#fff".parse().unwrap();
        assert_eq!(short, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-colour".parse::<Rgb>().is_err());
        assert!("#12345".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgb::new(0x26, 0x26, 0x26).to_string(), "#262626");
    }

    #[test]
    fn test_color_interpolation() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);

        let mid = interpolate_color(black, white, 0.5);
        assert!((mid.r as i16 - 127).abs() <= 1);
        assert!((mid.g as i16 - 127).abs() <= 1);
        assert!((mid.b as i16 - 127).abs() <= 1);
    }

    #[test]
    fn test_composite_extremes() {
        let white = Rgb::new(255, 255, 255);
        assert_eq!(composite_over(Rgba([10, 20, 30, 0]), white), white);
        assert_eq!(
            composite_over(Rgba([10, 20, 30, 255]), white),
            Rgb::new(10, 20, 30)
        );
    }
}
