//! lnpprep-chem — SMILES parsing and molecular descriptor computation.
//!
//! Plays the role of the descriptor library for the LNP featurizer: a SMILES
//! string is parsed into a [`Molecule`] graph and [`descriptors::compute`]
//! produces the fixed-width numeric block consumed by `lnpprep-featurize`.
//!
//! # Example
//!
//! ```rust
//! use lnpprep_chem::{parse_smiles, descriptors};
//!
//! let mol = parse_smiles("CCO").unwrap();
//! let block = descriptors::compute(&mol);
//! assert_eq!(block.len(), descriptors::BLOCK_WIDTH);
//! ```

pub mod descriptors;
pub mod elements;
pub mod molecule;
pub mod smiles;

pub use molecule::{Atom, Bond, BondOrder, Molecule};
pub use smiles::{parse_smiles, ChemError};
