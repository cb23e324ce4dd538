//! Column-major component table loaded from CSV.

use std::collections::HashMap;
use std::io::Read;

use lnpprep_common::Result;

/// A single table value. CSV fields are typed on load: empty fields become
/// [`Cell::Null`], `true`/`false` become [`Cell::Bool`], anything that parses
/// as a float becomes [`Cell::Number`], and the rest stays text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    fn parse(field: &str) -> Cell {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Null;
        }
        match trimmed {
            "true" | "True" | "TRUE" => return Cell::Bool(true),
            "false" | "False" | "FALSE" => return Cell::Bool(false),
            _ => {}
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return Cell::Number(n);
        }
        Cell::Text(trimmed.to_string())
    }

    /// Numeric view: numbers pass through, booleans map to 0/1, everything
    /// else (including NaN) is 0.
    pub fn as_numeric(&self) -> f64 {
        match self {
            Cell::Number(n) if n.is_finite() => *n,
            Cell::Bool(true) => 1.0,
            _ => 0.0,
        }
    }

    /// Text view for SMILES and categorical lookups.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Column-major table with uniform row count.
#[derive(Debug, Clone, Default)]
pub struct ComponentTable {
    columns: HashMap<String, Vec<Cell>>,
    n_rows: usize,
}

impl ComponentTable {
    pub fn new(n_rows: usize) -> Self {
        ComponentTable {
            columns: HashMap::new(),
            n_rows,
        }
    }

    /// Load from a headered CSV stream.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut columns: HashMap<String, Vec<Cell>> =
            headers.iter().map(|h| (h.clone(), Vec::new())).collect();
        let mut n_rows = 0;
        for record in csv_reader.records() {
            let record = record?;
            for (header, field) in headers.iter().zip(record.iter()) {
                if let Some(col) = columns.get_mut(header) {
                    col.push(Cell::parse(field));
                }
            }
            // short records pad with nulls
            for header in headers.iter().skip(record.len()) {
                if let Some(col) = columns.get_mut(header) {
                    col.push(Cell::Null);
                }
            }
            n_rows += 1;
        }
        Ok(ComponentTable { columns, n_rows })
    }

    /// Insert or replace a column. Shorter columns are padded with nulls,
    /// longer ones extend the table.
    pub fn insert_column(&mut self, name: impl Into<String>, mut cells: Vec<Cell>) {
        if cells.len() > self.n_rows {
            self.n_rows = cells.len();
        }
        cells.resize(self.n_rows, Cell::Null);
        self.columns.insert(name.into(), cells);
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Cell lookup; absent columns read as null.
    pub fn cell(&self, name: &str, row: usize) -> &Cell {
        self.columns
            .get(name)
            .and_then(|c| c.get(row))
            .unwrap_or(&Cell::Null)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_typing() {
        assert_eq!(Cell::parse(""), Cell::Null);
        assert_eq!(Cell::parse("  "), Cell::Null);
        assert_eq!(Cell::parse("True"), Cell::Bool(true));
        assert_eq!(Cell::parse("false"), Cell::Bool(false));
        assert_eq!(Cell::parse("3.5"), Cell::Number(3.5));
        assert_eq!(Cell::parse("CCO"), Cell::Text("CCO".into()));
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(Cell::Number(2.5).as_numeric(), 2.5);
        assert_eq!(Cell::Bool(true).as_numeric(), 1.0);
        assert_eq!(Cell::Bool(false).as_numeric(), 0.0);
        assert_eq!(Cell::Null.as_numeric(), 0.0);
        assert_eq!(Cell::Number(f64::NAN).as_numeric(), 0.0);
        assert_eq!(Cell::Text("x".into()).as_numeric(), 0.0);
    }

    #[test]
    fn test_from_csv() {
        let data = "il_smiles,logp,has_ester\nCCO,1.5,true\nCCN,,false\n";
        let table = ComponentTable::from_csv(data.as_bytes()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.cell("il_smiles", 0), &Cell::Text("CCO".into()));
        assert_eq!(table.cell("logp", 1), &Cell::Null);
        assert_eq!(table.cell("has_ester", 1), &Cell::Bool(false));
    }

    #[test]
    fn test_absent_column_reads_null() {
        let table = ComponentTable::new(3);
        assert_eq!(table.cell("missing", 0), &Cell::Null);
        assert_eq!(table.cell("missing", 99), &Cell::Null);
    }

    #[test]
    fn test_insert_column_pads() {
        let mut table = ComponentTable::new(3);
        table.insert_column("x", vec![Cell::Number(1.0)]);
        assert_eq!(table.cell("x", 0), &Cell::Number(1.0));
        assert_eq!(table.cell("x", 2), &Cell::Null);
    }
}
