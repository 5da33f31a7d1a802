// IDS Splice Type Definitions
// Core types shared by the parser, database, matcher and driver

use std::path::PathBuf;
use thiserror::Error;

/// One way to linearly break a character into parts, in reading order
pub type Decomposition = Vec<char>;

/// Structural IDS operators that yield a flat component list
///
/// Every other IDS operator (top-bottom, surround, overlay, ...) is treated
/// as "no structural decomposition available" for that entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdsOperator {
    /// ⿰ (U+2FF0): left to right, two components
    LeftRight,

    /// ⿲ (U+2FF2): left to middle to right, three components
    LeftMiddleRight,
}

impl IdsOperator {
    /// Recognize an operator character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{2FF0}' => Some(IdsOperator::LeftRight),
            '\u{2FF2}' => Some(IdsOperator::LeftMiddleRight),
            _ => None,
        }
    }

    /// The operator's character in IDS notation
    pub fn as_char(self) -> char {
        match self {
            IdsOperator::LeftRight => '\u{2FF0}',
            IdsOperator::LeftMiddleRight => '\u{2FF2}',
        }
    }
}

impl std::fmt::Display for IdsOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdsOperator::LeftRight => write!(f, "LeftRight(⿰)"),
            IdsOperator::LeftMiddleRight => write!(f, "LeftMiddleRight(⿲)"),
        }
    }
}

/// A parsed line of the IDS source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdsRecord {
    /// Raw id field (e.g. "U+6797")
    pub id: String,

    /// The described character
    pub character: char,

    /// Structural decompositions found on the line, in field order.
    /// Does not include the trivial self-decomposition.
    pub decompositions: Vec<Decomposition>,
}

/// Size summary of a loaded database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseStats {
    /// Characters with at least one decomposition
    pub characters: usize,

    /// Entries in the reverse (sequence → character) index
    pub sequences: usize,

    /// Decompositions longer than one component, across all characters
    pub structural: usize,
}

impl std::fmt::Display for DatabaseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} characters, {} structural decompositions, {} sequence mappings",
            self.characters, self.structural, self.sequences
        )
    }
}

/// Outcome of a batch run over a vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Words read from the vocabulary
    pub total: usize,

    /// Words that were exactly two characters and went through the matcher
    pub processed: usize,

    /// Words with at least one match
    pub found: usize,
}

/// Errors raised while loading data or writing results
///
/// Lookup misses and malformed records never show up here; they are
/// absent values at the call site.
#[derive(Debug, Error)]
pub enum IdsError {
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result alias for fallible crate operations
pub type Result<T> = std::result::Result<T, IdsError>;
