//! Cube types for two-level logic minimization
//!
//! This module provides the core ternary-valued types:
//! - [`Bit`]: a single cube position (0, 1, or don't-care, plus the two
//!   internal algebra results)
//! - [`Cube`]: a product term over a gate's inputs, with its output bit
//!
//! The cube algebra itself (star product and sharp difference) lives in
//! the `algebra` submodule.

mod algebra;

use crate::error::BlifError;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A single ternary cube position
///
/// `Off`, `On`, and `Dc` are the user-visible values and the only values
/// that may appear in a persisted cube. `Epsilon` and `Null` arise
/// transiently inside the star and sharp tables and are consumed before a
/// result cube is returned.
///
/// Variant order follows the rendered character (`'-' < '0' < '1'`), so
/// the derived `Ord` sorts cubes lexicographically on their printed
/// input word. Iteration order of every cube set in this crate depends
/// on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    /// Don't-care, rendered `-`
    Dc,
    /// Fixed 0
    Off,
    /// Fixed 1
    On,
    /// Internal: position annihilated by the sharp table
    Epsilon,
    /// Internal: position conflict
    Null,
}

impl Bit {
    /// The character this bit renders as in BLIF text
    pub fn to_char(self) -> char {
        match self {
            Bit::Dc => '-',
            Bit::Off => '0',
            Bit::On => '1',
            Bit::Epsilon => 'E',
            Bit::Null => 'N',
        }
    }

    /// True for the user-visible values {Off, On, Dc}
    pub fn is_material(self) -> bool {
        matches!(self, Bit::Off | Bit::On | Bit::Dc)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cube (implicant): a product term over a gate's inputs
///
/// A cube is an immutable value. Equality, hashing, and ordering are by
/// content (input word, then output bit); variable labels live on the
/// enclosing gate and never participate in cube identity.
///
/// The distinguished *null cube* (see [`Cube::null_cube`]) represents the
/// empty product: it covers no minterms, its cost is undefined, and it
/// must be filtered out before inclusion in any cover.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cube {
    inputs: Arc<[Bit]>,
    output: Bit,
    null: bool,
}

impl Cube {
    /// Build a cube from parts, checking the §3 invariants
    ///
    /// Panics if any input bit or the output bit is not user-visible;
    /// such a cube indicates a bug in the caller, not bad input.
    pub fn new(inputs: Vec<Bit>, output: Bit) -> Self {
        assert!(
            inputs.iter().all(|b| b.is_material()),
            "cube inputs must be 0, 1, or -"
        );
        assert!(
            matches!(output, Bit::Off | Bit::On),
            "cube output must be 0 or 1"
        );
        Cube {
            inputs: inputs.into(),
            output,
            null: false,
        }
    }

    /// The empty cube: no inputs, no output, covers nothing
    pub fn null_cube() -> Self {
        Cube {
            inputs: Arc::from(Vec::new()),
            output: Bit::Null,
            null: true,
        }
    }

    /// Parse a BLIF cube row
    ///
    /// Accepts `"<inputs> <output>"` where the input word has exactly
    /// `arity` characters from {0, 1, -} and the output is 0 or 1, or a
    /// single output token when `arity` is zero (a constant gate).
    pub fn parse(row: &str, arity: usize) -> Result<Self, BlifError> {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        let (word, obit) = match (arity, tokens.as_slice()) {
            (0, [obit]) => ("", *obit),
            (_, [word, obit]) if arity > 0 => (*word, *obit),
            _ => {
                return Err(BlifError::MalformedRow {
                    line: row.to_string(),
                })
            }
        };

        if word.chars().count() != arity {
            return Err(BlifError::RowArityMismatch {
                expected: arity,
                actual: word.chars().count(),
                line: row.to_string(),
            });
        }

        let mut inputs = Vec::with_capacity(arity);
        for (position, ch) in word.chars().enumerate() {
            inputs.push(match ch {
                '0' => Bit::Off,
                '1' => Bit::On,
                '-' => Bit::Dc,
                _ => {
                    return Err(BlifError::InvalidInputCharacter {
                        character: ch,
                        position,
                        line: row.to_string(),
                    })
                }
            });
        }

        let output = match obit {
            "0" => Bit::Off,
            "1" => Bit::On,
            _ => {
                return Err(BlifError::InvalidOutputCharacter {
                    character: obit.chars().next().unwrap_or(' '),
                    line: row.to_string(),
                })
            }
        };

        Ok(Cube::new(inputs, output))
    }

    /// Number of input positions
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// The input word
    pub fn inputs(&self) -> &[Bit] {
        &self.inputs
    }

    /// The output bit
    pub fn output(&self) -> Bit {
        self.output
    }

    /// True for the null cube
    pub fn is_null(&self) -> bool {
        self.null
    }

    /// Single-cube containment: true when every minterm of `other` is a
    /// minterm of `self`
    ///
    /// Positionwise: `self[i] == other[i]` or `self[i]` is don't-care.
    /// The output bit is not compared.
    pub fn covers(&self, other: &Cube) -> bool {
        assert_eq!(
            self.arity(),
            other.arity(),
            "covers requires equal input arity"
        );
        self.inputs
            .iter()
            .zip(other.inputs.iter())
            .all(|(a, b)| a == b || *a == Bit::Dc)
    }

    /// Enumerate the minterms of this cube
    ///
    /// Each don't-care expands to both 0 and 1. Bit order is big-endian:
    /// the leftmost input contributes the most significant digit.
    pub fn minterms(&self) -> BTreeSet<u64> {
        if self.null {
            return BTreeSet::new();
        }
        let mut acc: Vec<u64> = vec![0];
        for &bit in self.inputs.iter() {
            let mut next = Vec::with_capacity(acc.len() * 2);
            for v in acc {
                match bit {
                    Bit::Off => next.push(v << 1),
                    Bit::On => next.push(v << 1 | 1),
                    Bit::Dc => {
                        next.push(v << 1);
                        next.push(v << 1 | 1);
                    }
                    Bit::Epsilon | Bit::Null => {
                        unreachable!("persisted cube contains an internal bit")
                    }
                }
            }
            acc = next;
        }
        acc.into_iter().collect()
    }

    /// Literal count: arity minus the number of don't-care positions
    ///
    /// Undefined (panics) for the null cube.
    pub fn cost(&self) -> usize {
        assert!(!self.null, "cost is undefined for the null cube");
        self.inputs.iter().filter(|&&b| b != Bit::Dc).count()
    }

    pub(crate) fn from_raw(inputs: Vec<Bit>, output: Bit) -> Self {
        debug_assert!(
            inputs.iter().all(|b| b.is_material()),
            "algebra result leaked an internal bit"
        );
        Cube {
            inputs: inputs.into(),
            output,
            null: false,
        }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.null {
            return write!(f, "<null>");
        }
        for bit in self.inputs.iter() {
            write!(f, "{}", bit)?;
        }
        if !self.inputs.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "{}", self.output)
    }
}

#[cfg(test)]
mod tests;
