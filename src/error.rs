//! Error types shared by the parsing, colouring and rendering stages.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a FASTA file into an image.
#[derive(Error, Debug)]
pub enum SeqColorError {
    #[error("{} is not a FASTA file (expected a .fasta extension)", path.display())]
    NotFasta { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line width must be at least 1")]
    ZeroLineWidth,

    #[error("No residues left to render")]
    EmptySequence,

    #[error("Residue '{residue}' at position {position} has no colour in the palette")]
    UnknownResidue { residue: char, position: usize },

    #[error("Colour grid does not match the wrapped sequence at row {row}")]
    ShapeMismatch { row: usize },

    #[error("Font size must be a positive number of points, got {0}")]
    InvalidFontSize(f32),

    #[error("Failed to load font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("Unsupported output format for {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to save image to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for seqcolor operations.
pub type Result<T> = std::result::Result<T, SeqColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = SeqColorError::NotFasta {
            path: PathBuf::from("protein.txt"),
        };
        assert_eq!(
            err.to_string(),
            "protein.txt is not a FASTA file (expected a .fasta extension)"
        );
    }

    #[test]
    fn test_unknown_residue_message() {
        let err = SeqColorError::UnknownResidue {
            residue: 'X',
            position: 4,
        };
        assert!(err.to_string().contains("'X'"));
        assert!(err.to_string().contains("position 4"));
    }
}
