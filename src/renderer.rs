//! Image renderer
//!
//! Draws a [`Layout`] onto a transparent canvas, crops it to the content, and
//! saves it in the format implied by the output path.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};

use crate::color_space::{composite_over, Rgb};
use crate::error::{Result, SeqColorError};
use crate::layout::{layout_grid, CellMetrics, Layout};
use crate::render_engines::GlyphEngine;

/// How the image is drawn and saved
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub numbering: bool,
    /// Residue count before the first rendered residue.
    pub initial_count: usize,
    pub transparent: bool,
    pub number_color: Rgb,
    pub background: Rgb,
    /// Pixels kept around the content after cropping.
    pub padding: u32,
}

/// What was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub residues: usize,
    pub rows: usize,
    pub final_count: usize,
    pub width: u32,
    pub height: u32,
}

/// Output format for a path; only the formats this build can encode.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let unsupported = || SeqColorError::UnsupportedFormat {
        path: path.to_path_buf(),
    };
    match ImageFormat::from_path(path).map_err(|_| unsupported())? {
        format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif | ImageFormat::WebP) => {
            Ok(format)
        }
        _ => Err(unsupported()),
    }
}

pub fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg)
}

/// Draw a layout onto a transparent canvas with `padding` on every side.
pub fn draw_layout(
    layout: &Layout,
    engine: &dyn GlyphEngine,
    number_color: Rgb,
    padding: u32,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(layout.width + 2 * padding, layout.height + 2 * padding);
    let offset = padding as i32;

    for label in &layout.labels {
        engine.draw_text(
            &mut canvas,
            &label.text,
            offset + label.x as i32,
            offset + label.y as i32,
            number_color,
        );
    }
    for glyph in &layout.glyphs {
        engine.draw_glyph(
            &mut canvas,
            glyph.residue,
            offset + glyph.x as i32,
            offset + glyph.y as i32,
            glyph.color,
        );
    }

    canvas
}

/// Bounding box `(x, y, width, height)` of all non-transparent pixels.
pub fn content_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Crop to the drawn content plus `padding`, staying inside the image.
pub fn crop_to_content(image: &RgbaImage, padding: u32) -> RgbaImage {
    let Some((x, y, width, height)) = content_bounds(image) else {
        return image.clone();
    };
    let left = x.saturating_sub(padding);
    let top = y.saturating_sub(padding);
    let right = (x + width + padding).min(image.width());
    let bottom = (y + height + padding).min(image.height());

    image::imageops::crop_imm(image, left, top, right - left, bottom - top).to_image()
}

/// Composite an RGBA image over an opaque background.
pub fn flatten(image: &RgbaImage, background: Rgb) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let c = composite_over(*image.get_pixel(x, y), background);
        image::Rgb([c.r, c.g, c.b])
    })
}

/// Save the image, keeping alpha only when asked to and the format allows it.
pub fn save_image(
    image: RgbaImage,
    path: &Path,
    transparent: bool,
    background: Rgb,
) -> Result<()> {
    let format = output_format(path)?;
    let keep_alpha = transparent && supports_alpha(format);
    if transparent && !keep_alpha {
        tracing::warn!(
            path = %path.display(),
            "Output format has no alpha channel, saving with an opaque background"
        );
    }

    let output = if keep_alpha {
        DynamicImage::ImageRgba8(image)
    } else {
        DynamicImage::ImageRgb8(flatten(&image, background))
    };

    output
        .save_with_format(path, format)
        .map_err(|source| SeqColorError::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Lay out, draw, crop and save a wrapped, coloured sequence.
pub fn render_sequence(
    lines: &[String],
    colors: &[Vec<Rgb>],
    output: &Path,
    engine: &dyn GlyphEngine,
    options: &RenderOptions,
) -> Result<RenderSummary> {
    output_format(output)?;

    let metrics = CellMetrics {
        advance: engine.advance(),
        line_height: engine.line_height(),
    };
    let layout = layout_grid(
        lines,
        colors,
        metrics,
        options.initial_count,
        options.numbering,
    )?;

    let canvas = draw_layout(&layout, engine, options.number_color, options.padding);
    let image = crop_to_content(&canvas, options.padding);
    let (width, height) = image.dimensions();
    tracing::debug!(width, height, rows = layout.rows, "Rendered canvas");

    save_image(image, output, options.transparent, options.background)?;
    tracing::info!(path = %output.display(), width, height, "Saved image");

    Ok(RenderSummary {
        residues: layout.glyphs.len(),
        rows: layout.rows,
        final_count: layout.final_count,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_engines::BitmapEngine;
    use image::Rgba;
    use std::path::PathBuf;

    #[test]
    fn test_output_format() {
        assert_eq!(output_format(&PathBuf::from("a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(output_format(&PathBuf::from("a.JPG")).unwrap(), ImageFormat::Jpeg);
        assert!(output_format(&PathBuf::from("a.tiff")).is_err());
        assert!(output_format(&PathBuf::from("a")).is_err());
    }

    #[test]
    fn test_content_bounds() {
        let mut image = RgbaImage::new(10, 10);
        assert_eq!(content_bounds(&image), None);

        image.put_pixel(2, 3, Rgba([0, 0, 0, 255]));
        image.put_pixel(5, 7, Rgba([0, 0, 0, 10]));
        assert_eq!(content_bounds(&image), Some((2, 3, 4, 5)));
    }

    #[test]
    fn test_crop_keeps_padding_inside_image() {
        let mut image = RgbaImage::new(20, 20);
        image.put_pixel(1, 10, Rgba([0, 0, 0, 255]));

        let cropped = crop_to_content(&image, 3);
        assert_eq!(cropped.dimensions(), (5, 7));
        assert_eq!(cropped.get_pixel(1, 3).0[3], 255);
    }

    #[test]
    fn test_flatten_fills_background() {
        let image = RgbaImage::new(2, 2);
        let flat = flatten(&image, Rgb::new(255, 255, 255));
        assert!(flat.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_draw_layout_uses_cell_colours() {
        let engine = BitmapEngine::new(16.0);
        let metrics = CellMetrics {
            advance: engine.advance(),
            line_height: engine.line_height(),
        };
        let red = Rgb::new(255, 0, 0);
        let layout = layout_grid(&["I".to_string()], &[vec![red]], metrics, 0, false).unwrap();
        let canvas = draw_layout(&layout, &engine, Rgb::new(0, 0, 0), 0);

        let lit: Vec<&Rgba<u8>> = canvas.pixels().filter(|p| p.0[3] > 0).collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|p| p.0 == [255, 0, 0, 255]));
    }
}
