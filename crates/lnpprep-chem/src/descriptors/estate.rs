//! Kier–Hall electrotopological state (EState) indices.

use super::topology::{delta, delta_n};
use crate::elements;
use crate::molecule::{Molecule, UNREACHABLE};

/// Intrinsic state I = ((2/N)² δv + 1) / δ.
fn intrinsic_state(mol: &Molecule, i: usize) -> f64 {
    let d = delta(mol, i);
    if d <= 0.0 {
        return 0.0;
    }
    let n = elements::data(mol.atom(i).element).quantum_period as f64;
    let scale = (2.0 / n).powi(2);
    (scale * delta_n(mol, i) + 1.0) / d
}

/// Per-atom EState values: intrinsic state plus the field perturbation
/// Σ (I_i − I_j) / (d_ij + 1)².
pub(crate) fn estate_indices(mol: &Molecule, dist: &[Vec<u32>]) -> Vec<f64> {
    let n = mol.atom_count();
    let intrinsic: Vec<f64> = (0..n).map(|i| intrinsic_state(mol, i)).collect();
    let mut out = intrinsic.clone();
    for i in 0..n {
        for j in 0..n {
            if i == j || dist[i][j] >= UNREACHABLE {
                continue;
            }
            let d = dist[i][j] as f64 + 1.0;
            out[i] += (intrinsic[i] - intrinsic[j]) / (d * d);
        }
    }
    out
}

pub(crate) fn max_estate(estate: &[f64]) -> f64 {
    estate.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn min_estate(estate: &[f64]) -> f64 {
    estate.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max_abs_estate(estate: &[f64]) -> f64 {
    estate.iter().map(|v| v.abs()).fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn min_abs_estate(estate: &[f64]) -> f64 {
    estate.iter().map(|v| v.abs()).fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    fn indices(s: &str) -> Vec<f64> {
        let mol = parse_smiles(s).unwrap();
        let d = mol.distance_matrix();
        estate_indices(&mol, &d)
    }

    #[test]
    fn test_oxygen_has_highest_estate_in_ethanol() {
        let e = indices("CCO");
        let max_idx = e
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(max_idx, 2);
    }

    #[test]
    fn test_symmetry_in_ethane() {
        let e = indices("CC");
        assert!((e[0] - e[1]).abs() < 1e-12);
    }

    #[test]
    fn test_estate_deterministic() {
        let a = indices("CCN(CC)CCOC(=O)C");
        let b = indices("CCN(CC)CCOC(=O)C");
        assert_eq!(a, b);
    }
}
