//! Feature layout description: which table columns feed the matrix, and in
//! what order.

use lnpprep_chem::descriptors::BLOCK_WIDTH;
use serde::{Deserialize, Serialize};

/// A categorical column expanded into one indicator per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotField {
    pub field: String,
    pub levels: Vec<String>,
}

impl OneHotField {
    fn new(field: &str, levels: &[&str]) -> Self {
        OneHotField {
            field: field.to_string(),
            levels: levels.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Expanded column names, `{field}_{level}`.
    pub fn column_names(&self) -> impl Iterator<Item = String> + '_ {
        self.levels.iter().map(|l| format!("{}_{}", self.field, l))
    }
}

/// Immutable description of the feature matrix layout. Columns are consumed
/// in declaration order: one descriptor block per SMILES column, then the
/// numeric metadata, then the one-hot indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub smiles_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub categorical: Vec<OneHotField>,
}

impl FeatureSchema {
    /// The lipid-nanoparticle component layout: ionizable lipid, helper
    /// lipid, cholesterol, and PEG-lipid SMILES, formulation metadata, and
    /// the experimental-context categoricals.
    pub fn lnp() -> Self {
        let strings = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        FeatureSchema {
            smiles_columns: strings(&["il_smiles", "hl_smiles", "chl_smiles", "peg_smiles"]),
            numeric_columns: strings(&[
                "heavy_atoms",
                "rings",
                "aromatic_rings",
                "rotatable_bonds",
                "van_der_waals_molecular_volume",
                "topological_polar_surface_area",
                "hydrogen_bond_donors",
                "hydrogen_bond_acceptors",
                "logp",
                "molar_refractivity",
                "fraction_sp3_carbons",
                "sp3_carbons",
                "nitrogen_count",
                "molecular_weight",
                "has_ester",
                "has_carbonate",
                "has_disulfide",
                "il_molratio",
                "hl_molratio",
                "chl_molratio",
                "peg_molratio",
                "il_to_mrna_massratio",
            ]),
            categorical: vec![
                OneHotField::new("mixing_method", &["handmixed", "microfluidics"]),
                OneHotField::new(
                    "model_type",
                    &[
                        "HeLa",
                        "A549",
                        "Mouse",
                        "RAW264.7",
                        "HepG2",
                        "DC2.4",
                        "IGROV1",
                        "BeWo_b30",
                        "HEK293T",
                        "Human_RBC",
                        "BMDC",
                        "HBEC_ALI",
                        "BMDM",
                    ],
                ),
                OneHotField::new(
                    "model_target",
                    &[
                        "in_vitro",
                        "lung_epithelium",
                        "liver",
                        "muscle",
                        "spleen",
                        "multiorgan",
                        "lung",
                        "heart",
                        "kidney",
                    ],
                ),
                OneHotField::new(
                    "route_of_administration",
                    &["in_vitro", "intravenous", "intramuscular", "intratracheal"],
                ),
                OneHotField::new("cargo", &["mRNA", "pDNA", "siRNA"]),
                OneHotField::new(
                    "cargo_type",
                    &["FFL", "DNA_barcode", "peptide_barcode", "hEPO", "FVII", "GFP"],
                ),
            ],
        }
    }

    /// Total number of one-hot indicator columns.
    pub fn one_hot_width(&self) -> usize {
        self.categorical.iter().map(|f| f.levels.len()).sum()
    }

    /// Width of one feature row.
    pub fn width(&self) -> usize {
        self.smiles_columns.len() * BLOCK_WIDTH
            + self.numeric_columns.len()
            + self.one_hot_width()
    }

    /// All expanded one-hot column names, field order then level order.
    pub fn one_hot_columns(&self) -> Vec<String> {
        self.categorical
            .iter()
            .flat_map(|f| f.column_names())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lnp_width() {
        let schema = FeatureSchema::lnp();
        assert_eq!(schema.smiles_columns.len(), 4);
        assert_eq!(schema.numeric_columns.len(), 22);
        assert_eq!(schema.one_hot_width(), 37);
        assert_eq!(schema.width(), 4 * BLOCK_WIDTH + 22 + 37);
        assert_eq!(schema.width(), 895);
    }

    #[test]
    fn test_one_hot_column_naming() {
        let schema = FeatureSchema::lnp();
        let cols = schema.one_hot_columns();
        assert_eq!(cols.len(), 37);
        assert_eq!(cols[0], "mixing_method_handmixed");
        assert!(cols.contains(&"model_type_RAW264.7".to_string()));
        assert_eq!(cols.last().unwrap(), "cargo_type_GFP");
    }

    #[test]
    fn test_schema_roundtrips_through_serde() {
        let schema = FeatureSchema::lnp();
        let json = serde_json::to_string(&schema).unwrap();
        let back: FeatureSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
