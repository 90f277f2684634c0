//! Error types for the blifmin logic minimizer
//!
//! This module provides error types organized by source and operation.
//! `BlifError` describes a specific defect in the input text, and the
//! operation-level wrappers (`BlifReadError`, `BlifWriteError`) combine
//! only the errors each operation can produce.

use std::fmt;
use std::io;

// ============================================================================
// Source-Level Error Enums
// ============================================================================

/// Errors describing malformed BLIF input
///
/// Each variant carries the text of the logical line that triggered it,
/// after comment stripping and continuation joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlifError {
    /// A line started with `.` but the directive is not part of the
    /// accepted BLIF subset
    UnknownDirective {
        /// The offending logical line
        line: String,
    },
    /// A known directive was missing its required payload
    MalformedDirective {
        /// The offending logical line
        line: String,
    },
    /// The input ended without a `.model` directive
    MissingModel,
    /// A cube row appeared outside of a `.names` block
    RowOutsideGate {
        /// The offending logical line
        line: String,
    },
    /// A cube row was not of the form `<inputs> <output>` (or a single
    /// output bit for a constant gate)
    MalformedRow {
        /// The offending logical line
        line: String,
    },
    /// A cube row's input word length disagrees with the arity declared
    /// by the enclosing `.names` directive
    RowArityMismatch {
        /// Input count declared by the `.names` directive
        expected: usize,
        /// Length of the input word actually found
        actual: usize,
        /// The offending logical line
        line: String,
    },
    /// An input-word character outside {0, 1, -}
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// Its position within the input word
        position: usize,
        /// The offending logical line
        line: String,
    },
    /// An output bit outside {0, 1}
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// The offending logical line
        line: String,
    },
}

impl fmt::Display for BlifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlifError::UnknownDirective { line } => {
                write!(f, "Unknown directive in line '{}'", line)
            }
            BlifError::MalformedDirective { line } => {
                write!(f, "Malformed directive in line '{}'", line)
            }
            BlifError::MissingModel => {
                write!(f, "Input ended without a .model directive")
            }
            BlifError::RowOutsideGate { line } => {
                write!(f, "Cube row '{}' appears outside of a .names block", line)
            }
            BlifError::MalformedRow { line } => {
                write!(
                    f,
                    "Cube row '{}' must be '<inputs> <output>' or a single output bit",
                    line
                )
            }
            BlifError::RowArityMismatch {
                expected,
                actual,
                line,
            } => write!(
                f,
                "Cube row '{}' has {} input bits but the .names directive declared {}",
                line, actual, expected
            ),
            BlifError::InvalidInputCharacter {
                character,
                position,
                line,
            } => write!(
                f,
                "Invalid input character '{}' at position {} in line '{}'. \
                 Expected 0, 1, or -.",
                character, position, line
            ),
            BlifError::InvalidOutputCharacter { character, line } => write!(
                f,
                "Invalid output character '{}' in line '{}'. Expected 0 or 1.",
                character, line
            ),
        }
    }
}

impl std::error::Error for BlifError {}

impl From<BlifError> for io::Error {
    fn from(err: BlifError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

// ============================================================================
// Operation-Level Error Enums
// ============================================================================

/// Errors that can occur when reading BLIF data
///
/// This error type is returned by the `Model::from_blif_*` methods.
#[derive(Debug)]
pub enum BlifReadError {
    /// BLIF format error
    Blif(BlifError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for BlifReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlifReadError::Blif(e) => write!(f, "BLIF format error: {}", e),
            BlifReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BlifReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlifReadError::Blif(e) => Some(e),
            BlifReadError::Io(e) => Some(e),
        }
    }
}

impl From<BlifError> for BlifReadError {
    fn from(err: BlifError) -> Self {
        BlifReadError::Blif(err)
    }
}

impl From<io::Error> for BlifReadError {
    fn from(err: io::Error) -> Self {
        BlifReadError::Io(err)
    }
}

impl From<BlifReadError> for io::Error {
    fn from(err: BlifReadError) -> Self {
        match err {
            // If it's already an IO error, return it directly
            BlifReadError::Io(e) => e,
            // Otherwise, wrap it as InvalidData
            BlifReadError::Blif(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing BLIF data
///
/// This error type is returned by the `Model::to_blif_*` methods.
#[derive(Debug)]
pub enum BlifWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for BlifWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlifWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BlifWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlifWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for BlifWriteError {
    fn from(err: io::Error) -> Self {
        BlifWriteError::Io(err)
    }
}

impl From<BlifWriteError> for io::Error {
    fn from(err: BlifWriteError) -> Self {
        match err {
            // BlifWriteError only contains IO errors, so return it directly
            BlifWriteError::Io(e) => e,
        }
    }
}
