//! Monospace grid layout
//!
//! Places every residue on a fixed row/column grid and computes the per-row
//! residue counter labels. Coordinates are in pixels relative to the top-left
//! corner of the content area.

use crate::color_space::Rgb;
use crate::error::{Result, SeqColorError};

/// Size of one glyph cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub advance: u32,
    pub line_height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub residue: char,
    pub color: Rgb,
    pub x: u32,
    pub y: u32,
    /// Running residue count after this glyph.
    pub count: usize,
}

/// Counter label drawn in front of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLabel {
    pub text: String,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub glyphs: Vec<PlacedGlyph>,
    pub labels: Vec<RowLabel>,
    /// Width of the label gutter in cells (zero without numbering).
    pub gutter_cells: u32,
    pub rows: usize,
    pub width: u32,
    pub height: u32,
    pub initial_count: usize,
    pub final_count: usize,
}

/// Check that the colour grid has the same shape as the wrapped rows.
pub fn check_shape(lines: &[String], colors: &[Vec<Rgb>]) -> Result<()> {
    if lines.len() != colors.len() {
        return Err(SeqColorError::ShapeMismatch {
            row: lines.len().min(colors.len()),
        });
    }
    for (row, (line, row_colors)) in lines.iter().zip(colors).enumerate() {
        if line.chars().count() != row_colors.len() {
            return Err(SeqColorError::ShapeMismatch { row });
        }
    }
    Ok(())
}

/// Lay out wrapped rows and their colours.
///
/// The counter starts at `initial_count` and grows by one per glyph whether or
/// not labels are shown. A row's label is the count after its first glyph,
/// i.e. the 1-based number of that residue. Labels are right-aligned in a
/// gutter one cell wider than the widest label.
pub fn layout_grid(
    lines: &[String],
    colors: &[Vec<Rgb>],
    metrics: CellMetrics,
    initial_count: usize,
    numbering: bool,
) -> Result<Layout> {
    if lines.iter().all(|line| line.is_empty()) {
        return Err(SeqColorError::EmptySequence);
    }
    check_shape(lines, colors)?;

    let mut row_numbers = Vec::with_capacity(lines.len());
    let mut count = initial_count;
    for line in lines {
        row_numbers.push(count + 1);
        count += line.chars().count();
    }
    let final_count = count;

    let gutter_cells = if numbering {
        row_numbers
            .iter()
            .map(|n| n.to_string().len() as u32)
            .max()
            .unwrap_or(0)
            + 1
    } else {
        0
    };
    let gutter = gutter_cells * metrics.advance;

    let mut glyphs = Vec::with_capacity(count - initial_count);
    let mut labels = Vec::new();
    let mut count = initial_count;
    let mut widest = 0u32;

    for (row, (line, row_colors)) in lines.iter().zip(colors).enumerate() {
        let y = row as u32 * metrics.line_height;

        for (col, (residue, color)) in line.chars().zip(row_colors).enumerate() {
            count += 1;
            glyphs.push(PlacedGlyph {
                residue,
                color: *color,
                x: gutter + col as u32 * metrics.advance,
                y,
                count,
            });
            if col == 0 && numbering {
                let text = count.to_string();
                let pad_cells = gutter_cells - 1 - text.len() as u32;
                labels.push(RowLabel {
                    text,
                    x: pad_cells * metrics.advance,
                    y,
                });
            }
        }
        widest = widest.max(line.chars().count() as u32);
    }

    Ok(Layout {
        glyphs,
        labels,
        gutter_cells,
        rows: lines.len(),
        width: gutter + widest * metrics.advance,
        height: lines.len() as u32 * metrics.line_height,
        initial_count,
        final_count,
    })
}
