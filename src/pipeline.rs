//! Parse, colour and render in one go
//!
//! Also holds the arithmetic that turns 1-based command-line bounds into the
//! 0-based offsets used by the colouring and numbering stages.

use std::ops::Range;
use std::path::PathBuf;

use crate::colorize::{color_grid, Highlight};
use crate::config::Config;
use crate::error::Result;
use crate::fasta::{read_fasta, ResidueBounds};
use crate::render_engines::load_engine;
use crate::renderer::{render_sequence, RenderOptions, RenderSummary};

/// One input file rendered to one image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub line_wrap: usize,
    pub numbering: bool,
    /// Residues to keep, 1-based with the last one excluded.
    pub bounds: Option<ResidueBounds>,
    /// Residues to highlight, 1-based with the last one excluded.
    pub highlight: Option<ResidueBounds>,
    pub transparent: bool,
    /// Keep class colours inside the highlight instead of the highlight colour.
    pub class_colors_in_highlight: bool,
}

impl RenderJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            line_wrap: 10,
            numbering: true,
            bounds: None,
            highlight: None,
            transparent: false,
            class_colors_in_highlight: false,
        }
    }
}

/// Counter value before the first rendered residue.
pub fn initial_count(bounds: Option<ResidueBounds>) -> usize {
    bounds.map_or(0, |b| b.first.saturating_sub(1))
}

/// 0-based highlight window over the (possibly truncated) sequence.
///
/// `(l, u)` selects `[l-1, u-1)` of the full sequence; when the sequence was
/// truncated the window is shifted left by the truncation offset.
pub fn highlight_window(highlight: ResidueBounds, bounds: Option<ResidueBounds>) -> Range<usize> {
    let offset = initial_count(bounds);
    let lower = highlight.first.saturating_sub(1).saturating_sub(offset);
    let upper = highlight.last.saturating_sub(1).saturating_sub(offset);
    lower..upper
}

/// Run a job end to end.
pub fn run(job: &RenderJob, config: &Config) -> Result<RenderSummary> {
    tracing::info!(input = %job.input.display(), output = %job.output.display(), "Rendering");

    let parsed = read_fasta(&job.input, job.line_wrap, job.bounds)?;

    let highlight = job.highlight.map(|h| Highlight {
        window: highlight_window(h, job.bounds),
        inside: (!job.class_colors_in_highlight).then_some(config.highlight.inside),
        outside: config.highlight.outside,
    });
    if let Some(h) = &highlight {
        tracing::debug!(lower = h.window.start, upper = h.window.end, "Highlight window");
    }

    let colors = color_grid(
        &parsed.sequence,
        &config.palette,
        job.line_wrap,
        highlight.as_ref(),
    )?;

    let engine = load_engine(&config.render)?;
    let options = RenderOptions {
        numbering: job.numbering,
        initial_count: initial_count(job.bounds),
        transparent: job.transparent,
        number_color: config.render.number_color,
        background: config.render.background,
        padding: config.render.padding,
    };

    render_sequence(&parsed.lines, &colors, &job.output, engine.as_ref(), &options)
}
