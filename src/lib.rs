//! seqcolor - colour-coded pictures of protein sequences
//!
//! Reads the first sequence of a FASTA file, colours each residue by chemical
//! class (or by a highlighted range), and renders it as a wrapped, numbered
//! image.

pub mod cli;
pub mod color_space;
pub mod colorize;
pub mod config;
pub mod error;
pub mod fasta;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod render_engines;
pub mod renderer;
pub mod residues;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SeqColorError};
pub use pipeline::{run, RenderJob};
