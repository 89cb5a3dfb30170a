//! Residue classes and the class colour palette
//!
//! The 20 standard amino-acid codes fall into five chemical classes, each
//! drawn in one colour.

use serde::{Deserialize, Serialize};

use crate::color_space::Rgb;

/// Chemical class of a residue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    /// F, W, Y
    Aromatic,
    /// D, E
    Acidic,
    /// R, H, K
    Basic,
    /// A, G, I, L, M, P, V
    Aliphatic,
    /// C, N, Q, S, T
    Polar,
}

impl ResidueClass {
    /// Classify a single-letter residue code (case-insensitive).
    pub fn classify(residue: char) -> Option<Self> {
        match residue.to_ascii_uppercase() {
            'F' | 'W' | 'Y' => Some(ResidueClass::Aromatic),
            'D' | 'E' => Some(ResidueClass::Acidic),
            'R' | 'H' | 'K' => Some(ResidueClass::Basic),
            'A' | 'G' | 'I' | 'L' | 'M' | 'P' | 'V' => Some(ResidueClass::Aliphatic),
            'C' | 'N' | 'Q' | 'S' | 'T' => Some(ResidueClass::Polar),
            _ => None,
        }
    }
}

/// The twenty residue codes that have a class colour.
pub const STANDARD_RESIDUES: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Colour for each residue class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResiduePalette {
    pub aromatic: Rgb,
    pub acidic: Rgb,
    pub basic: Rgb,
    pub aliphatic: Rgb,
    pub polar: Rgb,
    /// Fallback for codes outside the 20 standard residues. Without it such
    /// residues are an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown: Option<Rgb>,
}

impl Default for ResiduePalette {
    fn default() -> Self {
        Self {
            aromatic: Rgb::new(0xF5, 0xED, 0x51),
            acidic: Rgb::new(0xF5, 0x33, 0x1A),
            basic: Rgb::new(0x4E, 0x7A, 0xF5),
            aliphatic: Rgb::new(0xF4, 0xB9, 0x4A),
            polar: Rgb::new(0x63, 0xF4, 0x6E),
            unknown: None,
        }
    }
}

impl ResiduePalette {
    pub fn class_color(&self, class: ResidueClass) -> Rgb {
        match class {
            ResidueClass::Aromatic => self.aromatic,
            ResidueClass::Acidic => self.acidic,
            ResidueClass::Basic => self.basic,
            ResidueClass::Aliphatic => self.aliphatic,
            ResidueClass::Polar => self.polar,
        }
    }

    /// Colour of a residue by class, falling back to `unknown`.
    pub fn residue_color(&self, residue: char) -> Option<Rgb> {
        ResidueClass::classify(residue)
            .map(|class| self.class_color(class))
            .or(self.unknown)
    }
}
