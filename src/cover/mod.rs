//! Cover type for two-level logic minimization
//!
//! A [`Cover`] is an unordered set of cubes of identical input arity,
//! representing a gate's ON-set as a sum of products. Covers compare by
//! set equality of their cubes, and two covers are *equivalent* when
//! their ON-sets (minterm unions) are equal.

mod minimisation;
mod minimizable;

pub use minimizable::Minimizable;

use crate::cube::Cube;
use crate::error::BlifError;
use std::collections::BTreeSet;
use std::fmt;

/// A set of cubes with a fixed input arity
///
/// The backing `BTreeSet` gives content-keyed set equality and sorted,
/// deterministic iteration: cubes come out ordered lexicographically on
/// their input word, which is the canonical snapshot order for every
/// engine in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    arity: usize,
    cubes: BTreeSet<Cube>,
}

impl Cover {
    /// Create an empty cover over `arity` inputs
    pub fn new(arity: usize) -> Self {
        Cover {
            arity,
            cubes: BTreeSet::new(),
        }
    }

    /// Build a cover from cubes, checking each against the arity
    ///
    /// Panics on an arity mismatch or a null cube; both indicate a bug
    /// in the caller.
    pub fn from_cubes<I: IntoIterator<Item = Cube>>(arity: usize, cubes: I) -> Self {
        let mut cover = Cover::new(arity);
        for cube in cubes {
            cover.insert(cube);
        }
        cover
    }

    /// Insert a cube
    ///
    /// Panics on an arity mismatch or a null cube.
    pub fn insert(&mut self, cube: Cube) {
        assert!(!cube.is_null(), "null cubes may not enter a cover");
        assert_eq!(
            cube.arity(),
            self.arity,
            "cube arity does not match cover arity"
        );
        self.cubes.insert(cube);
    }

    /// Parse and insert a BLIF cube row
    pub fn add_row(&mut self, row: &str) -> Result<(), BlifError> {
        let cube = Cube::parse(row, self.arity)?;
        self.insert(cube);
        Ok(())
    }

    /// Input arity shared by every cube
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of cubes
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// True when the cover holds no cubes
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Iterate over cubes in canonical (sorted) order
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    /// The ON-set: the union of the minterm sets of all cubes
    pub fn on_set(&self) -> BTreeSet<u64> {
        self.cubes.iter().flat_map(|c| c.minterms()).collect()
    }

    /// Cover cost: cube count plus the summed literal counts
    ///
    /// The cube-count term biases minimization toward fewer cubes and
    /// drives the tie-breaks in the branching search.
    pub fn cost(&self) -> usize {
        self.cubes.len() + self.cubes.iter().map(Cube::cost).sum::<usize>()
    }

    /// True when both covers denote the same ON-set
    pub fn is_equivalent(&self, other: &Cover) -> bool {
        self.on_set() == other.on_set()
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cube in &self.cubes {
            writeln!(f, "{}", cube)?;
        }
        Ok(())
    }
}
