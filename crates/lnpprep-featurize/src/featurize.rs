//! Assembly of the numeric feature matrix from a component table.

use lnpprep_chem::descriptors::{self, BLOCK_WIDTH};
use lnpprep_chem::parse_smiles;

use crate::schema::FeatureSchema;
use crate::table::{Cell, ComponentTable};

/// Descriptor block for one SMILES cell. Missing, blank, non-text, or
/// unparseable input falls back to an all-zero block so the row keeps its
/// shape.
fn smiles_block(cell: &Cell) -> Vec<f64> {
    let Some(smiles) = cell.as_text() else {
        return vec![0.0; BLOCK_WIDTH];
    };
    match parse_smiles(smiles) {
        Ok(mol) => descriptors::compute(&mol),
        Err(_) => vec![0.0; BLOCK_WIDTH],
    }
}

/// One-hot cell coercion: any non-zero numeric or true boolean reads as 1.0;
/// null, NaN, text, and absent columns read as 0.0.
fn indicator(cell: &Cell) -> f64 {
    if cell.as_numeric() != 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Build the feature matrix: one row per table row, in table order. Each row
/// is the concatenation of one descriptor block per SMILES column, the
/// numeric metadata columns, and the one-hot indicators, all per the schema's
/// declaration order. Row width is always [`FeatureSchema::width`].
pub fn descriptor_matrix(table: &ComponentTable, schema: &FeatureSchema) -> Vec<Vec<f64>> {
    let width = schema.width();
    let mut matrix = Vec::with_capacity(table.n_rows());

    for row in 0..table.n_rows() {
        let mut features = Vec::with_capacity(width);

        for column in &schema.smiles_columns {
            features.extend(smiles_block(table.cell(column, row)));
        }
        for column in &schema.numeric_columns {
            features.push(table.cell(column, row).as_numeric());
        }
        for field in &schema.categorical {
            for name in field.column_names() {
                features.push(indicator(table.cell(&name, row)));
            }
        }

        debug_assert_eq!(features.len(), width);
        matrix.push(features);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_schema() -> FeatureSchema {
        let mut schema = FeatureSchema::lnp();
        schema.smiles_columns = vec!["il_smiles".into()];
        schema.numeric_columns = vec!["logp".into(), "has_ester".into()];
        schema
    }

    #[test]
    fn test_row_width_is_schema_width() {
        let schema = FeatureSchema::lnp();
        let table = ComponentTable::from_csv(
            "il_smiles,hl_smiles,chl_smiles,peg_smiles\nCCO,CCN,CCC,CCCC\n".as_bytes(),
        )
        .unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0].len(), 895);
    }

    #[test]
    fn test_invalid_smiles_gives_zero_block() {
        let schema = small_schema();
        let table =
            ComponentTable::from_csv("il_smiles,logp\nnot_a_smiles,2.0\n".as_bytes()).unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        let block = &matrix[0][..BLOCK_WIDTH];
        assert!(block.iter().all(|&v| v == 0.0));
        // metadata still flows through
        assert_eq!(matrix[0][BLOCK_WIDTH], 2.0);
    }

    #[test]
    fn test_valid_smiles_block_non_zero() {
        let schema = small_schema();
        let table = ComponentTable::from_csv("il_smiles\nCCO\n".as_bytes()).unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        assert!(matrix[0][..BLOCK_WIDTH].iter().any(|&v| v != 0.0));
    }

    #[test]
    fn test_blank_smiles_gives_zero_block() {
        let schema = small_schema();
        let table = ComponentTable::from_csv("il_smiles,logp\n,1.0\n".as_bytes()).unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        assert!(matrix[0][..BLOCK_WIDTH].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_absent_columns_read_zero() {
        // table has none of the schema's columns at all
        let schema = small_schema();
        let table = ComponentTable::new(2);
        let matrix = descriptor_matrix(&table, &schema);
        assert_eq!(matrix.len(), 2);
        assert!(matrix.iter().all(|row| row.iter().all(|&v| v == 0.0)));
        assert!(matrix.iter().all(|row| row.len() == schema.width()));
    }

    #[test]
    fn test_bool_metadata_maps_to_01() {
        let schema = small_schema();
        let table =
            ComponentTable::from_csv("il_smiles,logp,has_ester\nCCO,1.0,true\nCCO,1.0,false\n".as_bytes())
                .unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        assert_eq!(matrix[0][BLOCK_WIDTH + 1], 1.0);
        assert_eq!(matrix[1][BLOCK_WIDTH + 1], 0.0);
    }

    #[test]
    fn test_one_hot_matches_single_level() {
        let schema = small_schema();
        let table = ComponentTable::from_csv(
            "il_smiles,mixing_method_microfluidics\nCCO,1\n".as_bytes(),
        )
        .unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        let one_hot_start = BLOCK_WIDTH + schema.numeric_columns.len();
        let one_hot = &matrix[0][one_hot_start..];
        // exactly one indicator set, at mixing_method_microfluidics
        assert_eq!(one_hot.iter().filter(|&&v| v == 1.0).count(), 1);
        assert_eq!(one_hot[1], 1.0);
    }

    #[test]
    fn test_expanded_one_hot_columns_are_read() {
        // the input table carries pre-expanded {field}_{level} columns
        let schema = FeatureSchema::lnp();
        let table = ComponentTable::from_csv(
            "mixing_method_handmixed,model_type_HeLa\n1,1\n".as_bytes(),
        )
        .unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        let one_hot_start = 4 * BLOCK_WIDTH + schema.numeric_columns.len();
        let one_hot = &matrix[0][one_hot_start..];
        assert_eq!(one_hot[0], 1.0); // mixing_method_handmixed
        assert_eq!(one_hot[2], 1.0); // model_type_HeLa
        assert_eq!(one_hot.iter().filter(|&&v| v == 1.0).count(), 2);
    }

    #[test]
    fn test_one_hot_coercion() {
        let schema = small_schema();
        let table = ComponentTable::from_csv(
            "mixing_method_handmixed,mixing_method_microfluidics\ntrue,0\n,1.0\n".as_bytes(),
        )
        .unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        let one_hot_start = BLOCK_WIDTH + schema.numeric_columns.len();
        // booleans coerce to {0,1}; nulls read as 0
        assert_eq!(matrix[0][one_hot_start], 1.0);
        assert_eq!(matrix[0][one_hot_start + 1], 0.0);
        assert_eq!(matrix[1][one_hot_start], 0.0);
        assert_eq!(matrix[1][one_hot_start + 1], 1.0);
    }

    #[test]
    fn test_raw_categorical_text_is_ignored() {
        // an unexpanded categorical column contributes nothing
        let schema = small_schema();
        let table =
            ComponentTable::from_csv("il_smiles,cargo\nCCO,mRNA\n".as_bytes()).unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        let one_hot_start = BLOCK_WIDTH + schema.numeric_columns.len();
        assert!(matrix[0][one_hot_start..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_row_order_preserved() {
        let schema = small_schema();
        let table = ComponentTable::from_csv(
            "il_smiles,logp\nCCO,1.0\nCCO,2.0\nCCO,3.0\n".as_bytes(),
        )
        .unwrap();
        let matrix = descriptor_matrix(&table, &schema);
        let logps: Vec<f64> = matrix.iter().map(|r| r[BLOCK_WIDTH]).collect();
        assert_eq!(logps, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_deterministic() {
        let schema = FeatureSchema::lnp();
        let csv = "il_smiles,hl_smiles,chl_smiles,peg_smiles,logp,cargo_mRNA\n\
                   CCCCCCCCN(CCO)CCCCCC,CCOP(=O)(O)OCC,CC(C)CCCC,COCCOCCOC,3.2,1\n";
        let a = descriptor_matrix(&ComponentTable::from_csv(csv.as_bytes()).unwrap(), &schema);
        let b = descriptor_matrix(&ComponentTable::from_csv(csv.as_bytes()).unwrap(), &schema);
        assert_eq!(a, b);
    }
}
