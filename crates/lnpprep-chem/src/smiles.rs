//! SMILES reader.
//!
//! Covers the organic subset, bracket atoms (isotope, charge, explicit H,
//! chirality marks are accepted and ignored), branches, ring closures
//! including `%nn`, aromatic lowercase atoms, and dot-separated fragments.
//! Directional bond marks `/` and `\` are read as single bonds.

use std::collections::HashMap;
use thiserror::Error;

use crate::elements;
use crate::molecule::{BondOrder, Molecule, MoleculeBuilder};

#[derive(Debug, Error, PartialEq)]
pub enum ChemError {
    #[error("empty SMILES string")]
    Empty,

    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("unknown element '{0}' at position {1}")]
    UnknownElement(String, usize),

    #[error("unclosed bracket atom at position {0}")]
    UnclosedBracket(usize),

    #[error("unmatched ring closure {0}")]
    UnmatchedRingClosure(u16),

    #[error("unmatched branch parenthesis at position {0}")]
    UnmatchedBranch(usize),

    #[error("bond with no preceding atom at position {0}")]
    DanglingBond(usize),
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    builder: MoleculeBuilder,
    /// Atom the next bond attaches to.
    prev: Option<usize>,
    /// Bond order consumed but not yet applied.
    pending: Option<BondOrder>,
    branch_stack: Vec<Option<usize>>,
    ring_open: HashMap<u16, (usize, Option<BondOrder>)>,
}

/// Parses a SMILES string into a [`Molecule`].
pub fn parse_smiles(input: &str) -> Result<Molecule, ChemError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChemError::Empty);
    }
    let mut parser = Parser {
        input: trimmed.as_bytes(),
        pos: 0,
        builder: MoleculeBuilder::new(),
        prev: None,
        pending: None,
        branch_stack: Vec::new(),
        ring_open: HashMap::new(),
    };
    parser.run()?;
    if let Some(&label) = parser.ring_open.keys().next() {
        return Err(ChemError::UnmatchedRingClosure(label));
    }
    if !parser.branch_stack.is_empty() {
        return Err(ChemError::UnmatchedBranch(parser.pos));
    }
    Ok(parser.builder.build())
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn run(&mut self) -> Result<(), ChemError> {
        while let Some(c) = self.peek() {
            match c {
                b'(' => {
                    self.pos += 1;
                    self.branch_stack.push(self.prev);
                }
                b')' => {
                    self.pos += 1;
                    self.prev = self
                        .branch_stack
                        .pop()
                        .ok_or(ChemError::UnmatchedBranch(self.pos - 1))?;
                }
                b'.' => {
                    self.pos += 1;
                    self.prev = None;
                    self.pending = None;
                }
                b'-' | b'=' | b'#' | b':' | b'/' | b'\\' => {
                    if self.prev.is_none() {
                        return Err(ChemError::DanglingBond(self.pos));
                    }
                    self.pending = Some(match c {
                        b'=' => BondOrder::Double,
                        b'#' => BondOrder::Triple,
                        b':' => BondOrder::Aromatic,
                        _ => BondOrder::Single,
                    });
                    self.pos += 1;
                }
                b'0'..=b'9' => {
                    let label = (c - b'0') as u16;
                    self.pos += 1;
                    self.ring_closure(label)?;
                }
                b'%' => {
                    self.pos += 1;
                    let mut label = 0u16;
                    for _ in 0..2 {
                        match self.peek() {
                            Some(d @ b'0'..=b'9') => {
                                label = label * 10 + (d - b'0') as u16;
                                self.pos += 1;
                            }
                            _ => return Err(ChemError::UnexpectedChar('%', self.pos - 1)),
                        }
                    }
                    self.ring_closure(label)?;
                }
                b'[' => {
                    let atom = self.bracket_atom()?;
                    self.attach(atom);
                }
                _ => {
                    let atom = self.organic_atom()?;
                    self.attach(atom);
                }
            }
        }
        Ok(())
    }

    fn attach(&mut self, atom: usize) {
        if let Some(prev) = self.prev {
            let order = self
                .pending
                .take()
                .unwrap_or_else(|| self.implicit_order(prev, atom));
            self.builder.add_bond(prev, atom, order);
        } else {
            self.pending = None;
        }
        self.prev = Some(atom);
    }

    /// Two aromatic atoms joined without an explicit bond get an aromatic bond.
    fn implicit_order(&self, a: usize, b: usize) -> BondOrder {
        if self.builder.atom_is_aromatic(a) && self.builder.atom_is_aromatic(b) {
            BondOrder::Aromatic
        } else {
            BondOrder::Single
        }
    }

    fn ring_closure(&mut self, label: u16) -> Result<(), ChemError> {
        let current = self.prev.ok_or(ChemError::DanglingBond(self.pos))?;
        match self.ring_open.remove(&label) {
            Some((other, open_order)) => {
                let order = self
                    .pending
                    .take()
                    .or(open_order)
                    .unwrap_or_else(|| self.implicit_order(other, current));
                self.builder.add_bond(other, current, order);
            }
            None => {
                self.ring_open.insert(label, (current, self.pending.take()));
            }
        }
        Ok(())
    }

    fn organic_atom(&mut self) -> Result<usize, ChemError> {
        let start = self.pos;
        let c = self.bump().expect("caller checked peek");
        // two-letter symbols first
        let symbol = if c == b'C' && self.peek() == Some(b'l') {
            self.pos += 1;
            "Cl".to_string()
        } else if c == b'B' && self.peek() == Some(b'r') {
            self.pos += 1;
            "Br".to_string()
        } else {
            (c as char).to_string()
        };
        let (element, aromatic) = elements::organic_subset(&symbol)
            .ok_or(ChemError::UnexpectedChar(c as char, start))?;
        Ok(self.builder.add_atom(element, aromatic, 0, None, None))
    }

    fn bracket_atom(&mut self) -> Result<usize, ChemError> {
        let open = self.pos;
        self.pos += 1; // consume '['

        // isotope
        let mut isotope: Option<u16> = None;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            isotope = Some(isotope.unwrap_or(0) * 10 + (d - b'0') as u16);
            self.pos += 1;
        }

        // element symbol (uppercase + optional lowercase, or aromatic lowercase)
        let sym_start = self.pos;
        let first = self.bump().ok_or(ChemError::UnclosedBracket(open))?;
        let (element, aromatic) = if first.is_ascii_uppercase() {
            let mut symbol = (first as char).to_string();
            if let Some(second) = self.peek() {
                if second.is_ascii_lowercase() && second != b'h' {
                    let two = format!("{}{}", first as char, second as char);
                    if elements::by_symbol(&two).is_some() {
                        symbol = two;
                        self.pos += 1;
                    }
                }
            }
            match elements::by_symbol(&symbol) {
                Some(z) => (z, false),
                None => return Err(ChemError::UnknownElement(symbol, sym_start)),
            }
        } else if first.is_ascii_lowercase() {
            match elements::organic_subset(&(first as char).to_string()) {
                Some((z, _)) => (z, true),
                None => {
                    return Err(ChemError::UnknownElement(
                        (first as char).to_string(),
                        sym_start,
                    ))
                }
            }
        } else {
            return Err(ChemError::UnexpectedChar(first as char, sym_start));
        };

        // chirality marks, ignored
        let mut saw_chirality = false;
        while self.peek() == Some(b'@') {
            saw_chirality = true;
            self.pos += 1;
        }
        if saw_chirality && matches!(self.peek(), Some(b'T') | Some(b'A') | Some(b'S') | Some(b'O')) {
            // TH1/AL1/SP1/OH1 chirality classes; skip up to the H count/charge
            while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() && c != b'H') {
                self.pos += 1;
            }
        }

        // explicit hydrogen count
        let mut hydrogens = 0u8;
        if self.peek() == Some(b'H') {
            self.pos += 1;
            hydrogens = 1;
            if let Some(d @ b'0'..=b'9') = self.peek() {
                hydrogens = d - b'0';
                self.pos += 1;
            }
        }

        // charge
        let mut charge: i8 = 0;
        while let Some(c) = self.peek() {
            match c {
                b'+' => {
                    charge += 1;
                    self.pos += 1;
                    if let Some(d @ b'1'..=b'9') = self.peek() {
                        charge = (d - b'0') as i8;
                        self.pos += 1;
                    }
                }
                b'-' => {
                    charge -= 1;
                    self.pos += 1;
                    if let Some(d @ b'1'..=b'9') = self.peek() {
                        charge = -((d - b'0') as i8);
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }

        // atom-map class, ignored
        if self.peek() == Some(b':') {
            self.pos += 1;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }

        if self.bump() != Some(b']') {
            return Err(ChemError::UnclosedBracket(open));
        }

        Ok(self
            .builder
            .add_atom(element, aromatic, charge, isotope, Some(hydrogens)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::BondOrder;

    #[test]
    fn test_parse_ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);
    }

    #[test]
    fn test_parse_double_bond() {
        let mol = parse_smiles("C=C").unwrap();
        assert_eq!(mol.bond(0).order, BondOrder::Double);
    }

    #[test]
    fn test_parse_branch() {
        let mol = parse_smiles("CC(=O)O").unwrap();
        assert_eq!(mol.atom_count(), 4);
        assert!(mol.bond_between(1, 2).is_some());
        assert!(mol.bond_between(1, 3).is_some());
    }

    #[test]
    fn test_parse_ring_closure() {
        let mol = parse_smiles("C1CCCCC1").unwrap();
        assert_eq!(mol.bond_count(), 6);
        assert_eq!(mol.rings().len(), 1);
    }

    #[test]
    fn test_parse_percent_ring_closure() {
        let mol = parse_smiles("C%10CCCCC%10").unwrap();
        assert_eq!(mol.rings().len(), 1);
    }

    #[test]
    fn test_parse_bracket_charge() {
        let mol = parse_smiles("[NH4+]").unwrap();
        assert_eq!(mol.atom(0).charge, 1);
        assert_eq!(mol.atom(0).hydrogens, 4);
    }

    #[test]
    fn test_parse_isotope() {
        let mol = parse_smiles("[13CH4]").unwrap();
        assert_eq!(mol.atom(0).isotope, Some(13));
    }

    #[test]
    fn test_parse_directional_bonds_as_single() {
        let mol = parse_smiles("C/C=C/C").unwrap();
        assert_eq!(mol.atom_count(), 4);
        assert_eq!(mol.bond_between(1, 2).unwrap().order, BondOrder::Double);
    }

    #[test]
    fn test_parse_two_letter_elements() {
        let mol = parse_smiles("ClCCBr").unwrap();
        assert_eq!(mol.atom(0).element, crate::elements::CHLORINE);
        assert_eq!(mol.atom(3).element, crate::elements::BROMINE);
    }

    #[test]
    fn test_reject_garbage() {
        assert!(parse_smiles("not_a_smiles").is_err());
        assert!(parse_smiles("").is_err());
        assert!(parse_smiles("C(").is_err());
        assert!(parse_smiles("C1CC").is_err());
    }

    #[test]
    fn test_reject_unknown_bracket_element() {
        assert!(matches!(
            parse_smiles("[Xq]"),
            Err(ChemError::UnknownElement(_, _))
        ));
    }

    #[test]
    fn test_parse_chirality_ignored() {
        let mol = parse_smiles("C[C@H](N)C(=O)O").unwrap();
        assert_eq!(mol.atom_count(), 6);
        assert_eq!(mol.atom(1).hydrogens, 1);
    }
}
