//! Built-in 5x8 bitmap font
//!
//! Each glyph is eight rows of five bits (MSB = leftmost column). Glyphs are
//! scaled by an integer factor and emboldened by widening every lit pixel.

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use super::GlyphEngine;
use crate::color_space::Rgb;

/// Font cell size in font pixels, including the blank spacing column/row.
const CELL_WIDTH: u32 = 6;
const CELL_HEIGHT: u32 = 8;

/// Drawn for characters the font does not cover.
const MISSING_GLYPH: [u8; 8] = [0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0xF8, 0x00];

/// Bold bitmap glyphs scaled to a pixel size
#[derive(Debug, Clone)]
pub struct BitmapEngine {
    scale: u32,
    bold: u32,
}

impl BitmapEngine {
    /// Engine whose cell height is as close to `pixel_size` as an integer
    /// scale allows.
    pub fn new(pixel_size: f32) -> Self {
        let scale = (pixel_size / CELL_HEIGHT as f32).round().max(1.0) as u32;
        Self {
            scale,
            bold: (scale / 3).max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl GlyphEngine for BitmapEngine {
    fn advance(&self) -> u32 {
        CELL_WIDTH * self.scale
    }

    fn line_height(&self) -> u32 {
        CELL_HEIGHT * self.scale
    }

    fn draw_glyph(&self, canvas: &mut RgbaImage, ch: char, x: i32, y: i32, color: Rgb) {
        let rows = glyph_rows(ch);
        let pixel = color.to_rgba();
        let scale = self.scale as i32;

        for (j, row) in rows.iter().enumerate() {
            for col in 0..5u32 {
                if (row >> (7 - col)) & 1 == 0 {
                    continue;
                }
                let rect = Rect::at(x + col as i32 * scale, y + j as i32 * scale)
                    .of_size(self.scale + self.bold, self.scale);
                draw_filled_rect_mut(canvas, rect, pixel);
            }
        }
    }
}

/// Bit rows for a character. Lower-case letters share the upper-case shapes.
pub fn glyph_rows(ch: char) -> [u8; 8] {
    match ch.to_ascii_uppercase() {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '*' => [0x00, 0x20, 0xA8, 0x70, 0xA8, 0x20, 0x00, 0x00],
        '-' => [0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x20, 0x00],
        '0' => [0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70, 0x00],
        '1' => [0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00],
        '2' => [0x70, 0x88, 0x08, 0x30, 0x40, 0x80, 0xF8, 0x00],
        '3' => [0xF8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70, 0x00],
        '4' => [0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10, 0x00],
        '5' => [0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70, 0x00],
        '6' => [0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70, 0x00],
        '7' => [0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40, 0x00],
        '8' => [0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, 0x00],
        '9' => [0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60, 0x00],
        'A' => [0x70, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x00],
        'B' => [0xF0, 0x88, 0x88, 0xF0, 0x88, 0x88, 0xF0, 0x00],
        'C' => [0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70, 0x00],
        'D' => [0xE0, 0x90, 0x88, 0x88, 0x88, 0x90, 0xE0, 0x00],
        'E' => [0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0xF8, 0x00],
        'F' => [0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00],
        'G' => [0x70, 0x88, 0x80, 0xB8, 0x88, 0x88, 0x70, 0x00],
        'H' => [0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x00],
        'I' => [0x70, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00],
        'J' => [0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, 0x00],
        'K' => [0x88, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x88, 0x00],
        'L' => [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00],
        'M' => [0x88, 0xD8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x00],
        'N' => [0x88, 0xC8, 0xA8, 0x98, 0x88, 0x88, 0x88, 0x00],
        'O' => [0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00],
        'P' => [0xF0, 0x88, 0x88, 0xF0, 0x80, 0x80, 0x80, 0x00],
        'Q' => [0x70, 0x88, 0x88, 0x88, 0xA8, 0x90, 0x68, 0x00],
        'R' => [0xF0, 0x88, 0x88, 0xF0, 0xA0, 0x90, 0x88, 0x00],
        'S' => [0x70, 0x88, 0x80, 0x70, 0x08, 0x88, 0x70, 0x00],
        'T' => [0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00],
        'U' => [0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00],
        'V' => [0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00],
        'W' => [0x88, 0x88, 0x88, 0xA8, 0xA8, 0xD8, 0x88, 0x00],
        'X' => [0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, 0x00],
        'Y' => [0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x20, 0x00],
        'Z' => [0xF8, 0x08, 0x10, 0x20, 0x40, 0x80, 0xF8, 0x00],
        _ => MISSING_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_scale_from_pixel_size() {
        assert_eq!(BitmapEngine::new(55.6).scale(), 7);
        assert_eq!(BitmapEngine::new(1.0).scale(), 1);
        assert_eq!(BitmapEngine::new(16.0).line_height(), 16);
    }

    #[test]
    fn test_lowercase_shares_glyph() {
        assert_eq!(glyph_rows('k'), glyph_rows('K'));
        assert_eq!(glyph_rows('~'), MISSING_GLYPH);
    }

    #[test]
    fn test_draw_stays_inside_cell() {
        let engine = BitmapEngine::new(16.0);
        let mut canvas = RgbaImage::new(engine.advance() * 3, engine.line_height());
        engine.draw_glyph(&mut canvas, 'W', engine.advance() as i32, 0, Rgb::new(255, 0, 0));

        let lit: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[3] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());
        for (x, _) in lit {
            assert!(x >= engine.advance() && x < engine.advance() * 2);
        }
    }

    #[test]
    fn test_space_draws_nothing() {
        let engine = BitmapEngine::new(16.0);
        let mut canvas = RgbaImage::new(engine.advance(), engine.line_height());
        engine.draw_glyph(&mut canvas, ' ', 0, 0, Rgb::new(0, 0, 0));
        assert!(canvas.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_clipped_at_canvas_edge() {
        let engine = BitmapEngine::new(16.0);
        let mut canvas = RgbaImage::new(4, 4);
        engine.draw_glyph(&mut canvas, 'A', -2, -2, Rgb::new(0, 0, 255));
        engine.draw_glyph(&mut canvas, 'A', 100, 100, Rgb::new(0, 0, 255));
        assert!(canvas.pixels().any(|p| p.0[3] > 0));
    }
}
