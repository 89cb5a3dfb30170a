//! Command-line interface

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::fasta::ResidueBounds;
use crate::pipeline::RenderJob;

fn positive() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

fn positive_points(s: &str) -> Result<f32, String> {
    let size: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(format!("{} is not a positive font size", s))
    }
}

/// Make a coloured picture of a sequence in a fasta file
#[derive(Parser, Debug)]
#[command(name = "seqcolor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input fasta file
    #[arg(short = 'f', value_name = "FASTA", required_unless_present = "print_config")]
    pub fasta: Option<PathBuf>,

    /// Name of output file (png, jpg, gif or webp)
    #[arg(short = 'o', value_name = "FILE", required_unless_present = "print_config")]
    pub out_name: Option<PathBuf>,

    /// Number of characters of the sequence to print on a single line
    #[arg(short = 'n', value_name = "N", default_value_t = 10, value_parser = positive())]
    pub line_wrap: usize,

    /// Leave out the residue numbering
    #[arg(short = 'c', action = ArgAction::SetFalse)]
    pub numbers: bool,

    /// First residue to print to the image
    #[arg(short = 'b', value_name = "RESID", requires = "end", value_parser = positive())]
    pub beginning: Option<usize>,

    /// Residue to stop at (not printed)
    #[arg(short = 'e', value_name = "RESID", requires = "beginning", value_parser = positive())]
    pub end: Option<usize>,

    /// Save the picture with a transparent background
    #[arg(short = 't')]
    pub save_transparent: bool,

    /// First residue of the highlighted selection
    #[arg(short = 'l', value_name = "RESID", requires = "upper", value_parser = positive())]
    pub lower: Option<usize>,

    /// Residue ending the highlighted selection (not highlighted)
    #[arg(short = 'u', value_name = "RESID", requires = "lower", value_parser = positive())]
    pub upper: Option<usize>,

    /// Keep residue class colours inside the highlighted selection
    #[arg(long)]
    pub class_colors: bool,

    /// TrueType/OpenType font to draw with instead of the built-in font
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Font size in points
    #[arg(long, value_name = "PT", value_parser = positive_points, allow_negative_numbers = true)]
    pub font_size: Option<f32>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(font) = &self.font {
            config.render.font = Some(font.clone());
        }
        if let Some(size) = self.font_size {
            config.render.font_size = size;
        }
    }

    /// Build the render job described by the arguments.
    pub fn to_job(&self) -> Result<RenderJob> {
        let input = self
            .fasta
            .clone()
            .ok_or_else(|| anyhow!("an input fasta file (-f) is required"))?;
        let output = self
            .out_name
            .clone()
            .ok_or_else(|| anyhow!("an output file (-o) is required"))?;

        Ok(RenderJob {
            input,
            output,
            line_wrap: self.line_wrap,
            numbering: self.numbers,
            bounds: pair(self.beginning, self.end),
            highlight: pair(self.lower, self.upper),
            transparent: self.save_transparent,
            class_colors_in_highlight: self.class_colors,
        })
    }
}

fn pair(first: Option<usize>, last: Option<usize>) -> Option<ResidueBounds> {
    Some(ResidueBounds::new(first?, last?))
}
