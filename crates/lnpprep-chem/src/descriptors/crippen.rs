//! Crippen-style atom-contribution logP and molar refractivity.
//!
//! Reduced atom typing keyed on element, aromaticity, and heteroatom
//! neighborhood; implicit hydrogens add a fixed per-H term to their heavy
//! atom. Values are deterministic in-crate parameters, not a claim of parity
//! with any external implementation.

use crate::elements;
use crate::molecule::{BondOrder, Molecule};

const H_LOGP: f64 = 0.1230;
const H_MR: f64 = 1.057;

fn hetero_neighbor_count(mol: &Molecule, i: usize) -> usize {
    mol.neighbors(i)
        .iter()
        .filter(|&&j| {
            let z = mol.atom(j).element;
            z != elements::CARBON && z != elements::HYDROGEN
        })
        .count()
}

/// (logP, MR) contribution of a heavy atom, hydrogens excluded.
fn base_contribution(mol: &Molecule, i: usize) -> (f64, f64) {
    let atom = mol.atom(i);
    let hetero = hetero_neighbor_count(mol, i);
    match atom.element {
        elements::CARBON => {
            if atom.aromatic {
                if hetero > 0 {
                    (0.1129, 3.243)
                } else {
                    (0.1581, 3.350)
                }
            } else if mol.neighbor_via(i, BondOrder::Double, elements::OXYGEN).is_some() {
                (-0.2783, 2.693) // carbonyl
            } else if mol.is_sp2(i) || mol.is_sp(i) {
                (0.1551, 3.513)
            } else if hetero > 0 {
                (-0.2035, 2.753)
            } else {
                (0.1441, 2.503)
            }
        }
        elements::NITROGEN => {
            if atom.aromatic {
                (-0.3239, 2.202)
            } else if mol
                .neighbors(i)
                .iter()
                .any(|&j| mol.neighbor_via(j, BondOrder::Double, elements::OXYGEN).is_some())
            {
                (-0.5443, 2.710) // amide-adjacent
            } else if atom.charge > 0 {
                (-1.9500, 2.100)
            } else {
                (-1.0190, 2.262)
            }
        }
        elements::OXYGEN => {
            if atom.aromatic {
                (0.1552, 1.080)
            } else if mol.double_bond_count(i) > 0 {
                (-0.1526, 1.800) // carbonyl oxygen
            } else if atom.charge < 0 {
                (-0.7941, 1.500)
            } else if atom.hydrogens > 0 {
                (-0.3567, 1.673) // hydroxyl
            } else {
                (-0.2893, 1.193) // ether / ester oxygen
            }
        }
        elements::FLUORINE => (0.4202, 1.108),
        elements::CHLORINE => (0.6895, 5.853),
        elements::BROMINE => (0.8456, 8.927),
        elements::IODINE => (0.8857, 14.02),
        elements::SULFUR => (0.6482, 7.591),
        elements::PHOSPHORUS => (0.8612, 6.920),
        elements::SILICON => (0.5800, 8.000),
        elements::BORON => (-0.1800, 3.000),
        _ => (-0.1052, 5.000),
    }
}

/// Per-atom (logP, MR) contributions with hydrogen terms folded in.
pub(crate) fn atom_contributions(mol: &Molecule) -> (Vec<f64>, Vec<f64>) {
    let mut logp = Vec::with_capacity(mol.atom_count());
    let mut mr = Vec::with_capacity(mol.atom_count());
    for i in 0..mol.atom_count() {
        let (p, r) = base_contribution(mol, i);
        let h = mol.atom(i).hydrogens as f64;
        logp.push(p + h * H_LOGP);
        mr.push(r + h * H_MR);
    }
    (logp, mr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    fn mol_logp(s: &str) -> f64 {
        let mol = parse_smiles(s).unwrap();
        atom_contributions(&mol).0.iter().sum()
    }

    #[test]
    fn test_alkane_more_lipophilic_than_alcohol() {
        assert!(mol_logp("CCCCCC") > mol_logp("CCCCCO"));
    }

    #[test]
    fn test_longer_chain_higher_logp() {
        assert!(mol_logp("CCCCCCCC") > mol_logp("CCCC"));
    }

    #[test]
    fn test_contributions_deterministic() {
        let a = atom_contributions(&parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap());
        let b = atom_contributions(&parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap());
        assert_eq!(a, b);
    }
}
