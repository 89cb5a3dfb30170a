//! Per-residue colour assignment
//!
//! Produces a colour grid with exactly the shape of the wrapped sequence.

use std::ops::Range;

use crate::color_space::Rgb;
use crate::error::{Result, SeqColorError};
use crate::residues::ResiduePalette;

/// A highlighted window over the sequence, 0-based and half-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub window: Range<usize>,
    /// Colour inside the window; the residue's class colour when `None`.
    pub inside: Option<Rgb>,
    /// Colour for every residue outside the window.
    pub outside: Rgb,
}

impl Highlight {
    pub fn contains(&self, position: usize) -> bool {
        self.window.contains(&position)
    }
}

/// Colour every residue of `sequence`.
pub fn assign_colors(
    sequence: &str,
    palette: &ResiduePalette,
    highlight: Option<&Highlight>,
) -> Result<Vec<Rgb>> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, residue)| {
            let preset = match highlight {
                Some(h) if h.contains(position) => h.inside,
                Some(h) => Some(h.outside),
                None => None,
            };
            match preset {
                Some(color) => Ok(color),
                None => palette
                    .residue_color(residue)
                    .ok_or(SeqColorError::UnknownResidue { residue, position }),
            }
        })
        .collect()
}

/// Chunk a flat colour list into rows of `line_wrap`.
pub fn wrap_colors(colors: &[Rgb], line_wrap: usize) -> Vec<Vec<Rgb>> {
    colors
        .chunks(line_wrap.max(1))
        .map(|row| row.to_vec())
        .collect()
}

/// Colour a sequence and wrap the result like the sequence rows.
pub fn color_grid(
    sequence: &str,
    palette: &ResiduePalette,
    line_wrap: usize,
    highlight: Option<&Highlight>,
) -> Result<Vec<Vec<Rgb>>> {
    if line_wrap == 0 {
        return Err(SeqColorError::ZeroLineWidth);
    }
    let colors = assign_colors(sequence, palette, highlight)?;
    Ok(wrap_colors(&colors, line_wrap))
}
