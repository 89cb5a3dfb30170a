//! Glyph engines
//!
//! Everything the renderer needs from a font: a fixed advance, a fixed line
//! pitch, and a way to stamp one coloured glyph onto the canvas.

pub mod bitmap;
pub mod truetype;

use image::RgbaImage;

use crate::color_space::Rgb;
use crate::config::RenderPreferences;
use crate::error::{Result, SeqColorError};

pub use bitmap::BitmapEngine;
pub use truetype::TrueTypeEngine;

/// Output resolution used to turn point sizes into pixels.
pub const DPI: f32 = 100.0;

/// Convert a font size in points to pixels at [`DPI`].
pub fn points_to_pixels(points: f32) -> f32 {
    points * DPI / 72.0
}

/// A monospace, bold glyph source.
pub trait GlyphEngine {
    /// Horizontal distance between neighbouring cells, in pixels.
    fn advance(&self) -> u32;

    /// Vertical distance between rows, in pixels.
    fn line_height(&self) -> u32;

    /// Draw `ch` with its cell's top-left corner at (`x`, `y`).
    fn draw_glyph(&self, canvas: &mut RgbaImage, ch: char, x: i32, y: i32, color: Rgb);

    fn draw_text(&self, canvas: &mut RgbaImage, text: &str, x: i32, y: i32, color: Rgb) {
        let advance = self.advance() as i32;
        for (i, ch) in text.chars().enumerate() {
            self.draw_glyph(canvas, ch, x + i as i32 * advance, y, color);
        }
    }
}

/// Pick the glyph engine described by the render preferences.
pub fn load_engine(prefs: &RenderPreferences) -> Result<Box<dyn GlyphEngine>> {
    if !(prefs.font_size.is_finite() && prefs.font_size > 0.0) {
        return Err(SeqColorError::InvalidFontSize(prefs.font_size));
    }
    let pixel_size = points_to_pixels(prefs.font_size);
    match &prefs.font {
        Some(path) => {
            let engine = TrueTypeEngine::from_file(path, pixel_size)?;
            tracing::debug!(font = %path.display(), pixel_size, "Using TrueType font");
            Ok(Box::new(engine))
        }
        None => {
            tracing::debug!(pixel_size, "Using built-in bitmap font");
            Ok(Box::new(BitmapEngine::new(pixel_size)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_pixels() {
        assert!((points_to_pixels(72.0) - 100.0).abs() < f32::EPSILON);
        assert!((points_to_pixels(40.0) - 55.555_557).abs() < 0.001);
    }

    #[test]
    fn test_default_prefs_use_bitmap() {
        let engine = load_engine(&RenderPreferences::default()).unwrap();
        assert_eq!(engine.line_height(), 56);
        assert_eq!(engine.advance(), 42);
    }

    #[test]
    fn test_missing_font_file() {
        let prefs = RenderPreferences {
            font: Some("/no/such/font.ttf".into()),
            ..RenderPreferences::default()
        };
        assert!(load_engine(&prefs).is_err());
    }

    #[test]
    fn test_font_size_from_config_validated() {
        for font_size in [0.0, -12.0, f32::NAN, f32::INFINITY] {
            let prefs = RenderPreferences {
                font_size,
                ..RenderPreferences::default()
            };
            assert!(matches!(
                load_engine(&prefs),
                Err(SeqColorError::InvalidFontSize(_))
            ));
        }
    }
}
