//! # blifmin
//!
//! A two-level logic minimizer for combinational gates in BLIF networks.
//!
//! Gates are sum-of-products covers over the ternary alphabet {0, 1, −}.
//! Minimization uses the classical tabular method: the *star* product
//! generates all prime implicants, the *sharp* difference identifies the
//! essential primes, and a recursive branching search with dominance
//! pruning selects a minimum-cost set of the remaining primes.
//!
//! ## Example
//!
//! ```
//! use blifmin::{BlifReader, BlifWriter, Minimizable, Model};
//!
//! let text = "\
//! .model demo
//! .inputs a b c
//! .outputs f
//! .names a b c f
//! 010 1
//! 110 1
//! 111 1
//! .end
//! ";
//!
//! let model = Model::from_blif_string(text).unwrap();
//! let minimized = model.minimize();
//!
//! // {010, 110, 111} collapses to {-10, 11-}
//! assert_eq!(minimized.gates()[0].cover().len(), 2);
//! println!("{}", minimized.to_blif_string().unwrap());
//! ```
//!
//! ## Working with covers directly
//!
//! ```
//! use blifmin::{Cover, Minimizable};
//!
//! let mut cover = Cover::new(3);
//! cover.add_row("010 1").unwrap();
//! cover.add_row("110 1").unwrap();
//! cover.add_row("111 1").unwrap();
//!
//! let minimized = cover.minimize();
//! assert!(minimized.is_equivalent(&cover));
//! ```

pub mod blif;
pub mod cover;
pub mod cube;
pub mod error;
pub mod model;

pub use blif::{BlifReader, BlifWriter};
pub use cover::{Cover, Minimizable};
pub use cube::{Bit, Cube};
pub use error::{BlifError, BlifReadError, BlifWriteError};
pub use model::{Gate, Model};
