//! FASTA reader
//!
//! Reads the first sequence of a FASTA file, optionally cuts it down to a
//! residue range, and wraps it into fixed-width rows.
//!
//! ```text
//! >sp|P69905|HBA_HUMAN Hemoglobin subunit alpha
//! MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHF
//! DLSHGSAQVKGHGKKVADALTNAVAHVDDMPNALSALSDLHAHKL
//! ```

use std::ops::Range;
use std::path::Path;

use crate::error::{Result, SeqColorError};

/// Printed when a file holds more than one record.
pub const MULTI_RECORD_NOTICE: &str =
    "Can only handle one sequence at a time. Will only use the first in the file";

/// The only extension accepted for input files.
pub const FASTA_EXTENSION: &str = "fasta";

/// 1-based residue bounds as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueBounds {
    pub first: usize,
    pub last: usize,
}

impl ResidueBounds {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }
}

/// A sequence read from disk along with its wrapped rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedSequence {
    pub header: String,
    pub sequence: String,
    pub lines: Vec<String>,
    /// The file held further records that were ignored.
    pub truncated_records: bool,
}

/// Check that a path carries the FASTA extension.
pub fn is_fasta_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(FASTA_EXTENSION))
        .unwrap_or(false)
}

/// Read a FASTA file, keep its first record, and wrap it.
///
/// Fails before touching the file when the extension is not `.fasta`.
pub fn read_fasta(
    path: &Path,
    line_wrap: usize,
    bounds: Option<ResidueBounds>,
) -> Result<WrappedSequence> {
    if !is_fasta_path(path) {
        return Err(SeqColorError::NotFasta {
            path: path.to_path_buf(),
        });
    }
    if line_wrap == 0 {
        return Err(SeqColorError::ZeroLineWidth);
    }

    let content = std::fs::read_to_string(path).map_err(|source| SeqColorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (header, mut sequence, truncated_records) = parse_first_record(&content);
    if truncated_records {
        println!("{}", MULTI_RECORD_NOTICE);
        tracing::warn!(path = %path.display(), "Ignoring records after the first");
    }

    if let Some(bounds) = bounds {
        sequence = truncate_sequence(&sequence, bounds);
    }

    let lines = wrap_sequence(&sequence, line_wrap);
    tracing::debug!(
        header = %header,
        residues = sequence.chars().count(),
        rows = lines.len(),
        "Read sequence"
    );

    Ok(WrappedSequence {
        header,
        sequence,
        lines,
        truncated_records,
    })
}

/// Split file content into (header, sequence, more-records-follow).
///
/// The first line is always treated as the header. Reading stops at the next
/// line that contains `>`.
pub fn parse_first_record(content: &str) -> (String, String, bool) {
    let mut lines = content.lines();
    let header = lines
        .next()
        .map(|l| l.trim().trim_start_matches('>').to_string())
        .unwrap_or_default();

    let mut sequence = String::with_capacity(content.len());
    for line in lines {
        if line.contains('>') {
            return (header, sequence, true);
        }
        sequence.push_str(line.trim());
    }

    (header, sequence, false)
}

/// 0-based half-open slice for 1-based bounds.
///
/// The nominal last residue is excluded: `first=2, last=4` selects `1..3`.
pub fn slice_bounds(bounds: ResidueBounds) -> Range<usize> {
    bounds.first.saturating_sub(1)..bounds.last.saturating_sub(1)
}

/// Cut a sequence down to `bounds`, clamping to its length.
pub fn truncate_sequence(sequence: &str, bounds: ResidueBounds) -> String {
    let range = slice_bounds(bounds);
    sequence
        .chars()
        .skip(range.start)
        .take(range.end.saturating_sub(range.start))
        .collect()
}

/// Split a sequence into rows of `line_wrap` residues; the last row may be
/// shorter.
pub fn wrap_sequence(sequence: &str, line_wrap: usize) -> Vec<String> {
    let residues: Vec<char> = sequence.chars().collect();
    residues
        .chunks(line_wrap.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
