//! TrueType/OpenType glyph engine
//!
//! Loads a font file with `ab_glyph` and rasterizes its outlines straight onto
//! the canvas. Cells are sized from the advance of `M`, so proportional fonts
//! are still laid out on a monospace grid.
//!
//! Coverage becomes straight alpha; the colour channels always hold the glyph
//! colour.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::GlyphEngine;
use crate::color_space::Rgb;
use crate::error::{Result, SeqColorError};

/// Horizontal offset of the second strike used to embolden glyphs.
const BOLD_OFFSET: i32 = 1;

pub struct TrueTypeEngine {
    font: FontVec,
    scale: PxScale,
    advance: u32,
    line_height: u32,
}

impl TrueTypeEngine {
    /// Load a font file at `pixel_size`.
    pub fn from_file(path: &Path, pixel_size: f32) -> Result<Self> {
        let font_error = |reason: String| SeqColorError::Font {
            path: path.to_path_buf(),
            reason,
        };
        let bytes = std::fs::read(path).map_err(|e| font_error(e.to_string()))?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| font_error(e.to_string()))?;
        Ok(Self::from_font(font, pixel_size))
    }

    pub fn from_font(font: FontVec, pixel_size: f32) -> Self {
        let scale = PxScale::from(pixel_size);
        let scaled = font.as_scaled(scale);
        let advance = scaled.h_advance(font.glyph_id('M')).ceil() as u32 + BOLD_OFFSET as u32;
        let line_height = scaled.height().ceil() as u32;

        Self {
            font,
            scale,
            advance: advance.max(1),
            line_height: line_height.max(1),
        }
    }
}

impl GlyphEngine for TrueTypeEngine {
    fn advance(&self) -> u32 {
        self.advance
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }

    fn draw_glyph(&self, canvas: &mut RgbaImage, ch: char, x: i32, y: i32, color: Rgb) {
        let ascent = self.font.as_scaled(self.scale).ascent();
        let glyph = self
            .font
            .glyph_id(ch)
            .with_scale_and_position(self.scale, point(x as f32, y as f32 + ascent));
        let Some(outlined) = self.font.outline_glyph(glyph) else {
            return;
        };

        let bounds = outlined.px_bounds();
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        outlined.draw(|gx, gy, coverage| {
            let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            if alpha == 0 {
                return;
            }
            let py = bounds.min.y as i32 + gy as i32;
            for strike in 0..=BOLD_OFFSET {
                let px = bounds.min.x as i32 + gx as i32 + strike;
                if px < 0 || py < 0 || px >= width || py >= height {
                    continue;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                let alpha = alpha.max(pixel.0[3]);
                *pixel = Rgba([color.r, color.g, color.b, alpha]);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::flatten;
    use std::io::Write;

    const FIXTURE_FONT: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/DejaVuSansMono-Bold.ttf"
    );

    fn fixture_engine(pixel_size: f32) -> TrueTypeEngine {
        TrueTypeEngine::from_file(Path::new(FIXTURE_FONT), pixel_size).unwrap()
    }

    #[test]
    fn test_fixture_font_metrics() {
        let engine = fixture_engine(55.6);
        assert!(engine.advance() > BOLD_OFFSET as u32);
        assert!(engine.line_height() >= 55);
        assert!(engine.line_height() > engine.advance());
    }

    #[test]
    fn test_glyph_edges_keep_glyph_colour() {
        let engine = fixture_engine(55.6);
        let red = Rgb::new(255, 0, 0);
        let mut canvas = RgbaImage::new(engine.advance() + 4, engine.line_height() + 4);
        engine.draw_glyph(&mut canvas, 'W', 2, 2, red);

        let lit: Vec<&Rgba<u8>> = canvas.pixels().filter(|p| p.0[3] > 0).collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().any(|p| p.0[3] < 255), "expected anti-aliased edges");
        assert!(lit.iter().all(|p| p.0[..3] == [255, 0, 0]));

        // Over white, red glyphs only ever fade towards white.
        let flat = flatten(&canvas, Rgb::new(255, 255, 255));
        assert!(flat.pixels().all(|p| p.0[0] == 255));
        assert!(flat.pixels().any(|p| p.0 == [255, 0, 0]));
    }

    #[test]
    fn test_glyph_clipped_at_canvas_edge() {
        let engine = fixture_engine(40.0);
        let mut canvas = RgbaImage::new(10, 10);
        engine.draw_glyph(&mut canvas, 'M', -5, -20, Rgb::new(0, 0, 255));
        engine.draw_glyph(&mut canvas, 'M', 8, 8, Rgb::new(0, 0, 255));
        assert!(canvas.pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn test_space_draws_nothing() {
        let engine = fixture_engine(20.0);
        let mut canvas = RgbaImage::new(40, 40);
        engine.draw_glyph(&mut canvas, ' ', 0, 0, Rgb::new(0, 0, 0));
        assert!(canvas.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_missing_file() {
        let result = TrueTypeEngine::from_file(Path::new("/no/such/font.ttf"), 20.0);
        assert!(matches!(result, Err(SeqColorError::Font { .. })));
    }

    #[test]
    fn test_garbage_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let result = TrueTypeEngine::from_file(file.path(), 20.0);
        match result {
            Err(SeqColorError::Font { path, .. }) => assert_eq!(path, file.path()),
            _ => panic!("expected a font error"),
        }
    }
}
