//! lnpprep-featurize — fixed-width feature matrices for LNP formulations.
//!
//! A [`ComponentTable`] (typically loaded from the scraper's CSV output)
//! plus a [`FeatureSchema`] yield a numeric matrix via
//! [`descriptor_matrix`]: one descriptor block per SMILES column, the
//! formulation metadata, and one-hot experimental-context indicators. Rows
//! always have [`FeatureSchema::width`] entries regardless of missing or
//! malformed input.

mod featurize;
pub mod schema;
pub mod table;

pub use featurize::descriptor_matrix;
pub use schema::{FeatureSchema, OneHotField};
pub use table::{Cell, ComponentTable};
