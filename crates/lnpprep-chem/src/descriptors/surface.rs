//! Approximate surface descriptors: Labute ASA, Ertl TPSA, and the binned
//! VSA families.

use crate::elements;
use crate::molecule::{BondOrder, Molecule};

/// Per-atom Labute-style accessible surface area: the van der Waals sphere
/// minus the spherical caps buried by bonded neighbors at ideal bond length.
pub(crate) fn labute_asa(mol: &Molecule) -> Vec<f64> {
    let mut out = Vec::with_capacity(mol.atom_count());
    for i in 0..mol.atom_count() {
        let ri = elements::data(mol.atom(i).element).r_vdw;
        let mut area = 4.0 * std::f64::consts::PI * ri * ri;

        let mut bury = |rj: f64, d: f64| {
            // cap height on sphere i from neighbor at distance d
            let h = ri - (d * d + ri * ri - rj * rj) / (2.0 * d);
            if h > 0.0 {
                area -= 2.0 * std::f64::consts::PI * ri * h.min(ri);
            }
        };

        for &j in mol.neighbors(i) {
            let ej = elements::data(mol.atom(j).element);
            let d = elements::data(mol.atom(i).element).r_covalent + ej.r_covalent;
            bury(ej.r_vdw, d);
        }
        for _ in 0..mol.atom(i).hydrogens {
            let eh = elements::data(elements::HYDROGEN);
            let d = elements::data(mol.atom(i).element).r_covalent + eh.r_covalent;
            bury(eh.r_vdw, d);
        }
        out.push(area.max(0.0));
    }
    out
}

/// Ertl topological polar surface area (N/O contributions).
pub(crate) fn tpsa(mol: &Molecule) -> f64 {
    let mut total = 0.0;
    for i in 0..mol.atom_count() {
        let atom = mol.atom(i);
        let h = atom.hydrogens;
        let doubles = mol.double_bond_count(i);
        let triples = mol.triple_bond_count(i);
        let degree = mol.degree(i);

        let contribution = match atom.element {
            elements::NITROGEN => {
                if atom.charge > 0 {
                    match (h, doubles) {
                        (3, _) => 27.64,
                        (2, _) => 16.61,
                        (1, 0) => 4.44,
                        (1, _) => 13.97,
                        (0, 0) => 0.0,
                        (0, _) => 3.01,
                        _ => 4.44,
                    }
                } else if atom.aromatic {
                    match (h, degree) {
                        (0, 2) => 12.89,
                        (0, _) => 4.41,
                        (_, _) => 15.79,
                    }
                } else if triples > 0 {
                    23.79
                } else if doubles > 0 {
                    if h > 0 {
                        23.85
                    } else {
                        12.36
                    }
                } else {
                    match h {
                        0 => 3.24,
                        1 => 12.03,
                        _ => 26.02,
                    }
                }
            }
            elements::OXYGEN => {
                if atom.charge < 0 {
                    23.06
                } else if atom.aromatic {
                    13.14
                } else if doubles > 0 {
                    17.07
                } else if h > 0 {
                    20.23
                } else {
                    9.23
                }
            }
            _ => 0.0,
        };
        total += contribution;
    }
    total
}

/// Sum of `weights` over atoms whose `values` fall in bin `bin` of the
/// boundary list (bin 0: v < bounds[0]; last bin: v ≥ bounds[last]).
pub(crate) fn bin_sum(values: &[f64], weights: &[f64], bounds: &[f64], bin: usize) -> f64 {
    values
        .iter()
        .zip(weights)
        .filter(|(&v, _)| {
            let lo_ok = bin == 0 || v >= bounds[bin - 1];
            let hi_ok = bin >= bounds.len() || v < bounds[bin];
            lo_ok && hi_ok
        })
        .map(|(_, &w)| w)
        .sum()
}

/// PEOE_VSA charge-bin boundaries (14 bins).
pub(crate) const PEOE_BOUNDS: [f64; 13] = [
    -0.30, -0.25, -0.20, -0.15, -0.10, -0.05, 0.00, 0.05, 0.10, 0.15, 0.20, 0.25, 0.30,
];

/// SMR_VSA molar-refractivity boundaries (10 bins).
pub(crate) const SMR_BOUNDS: [f64; 9] = [1.29, 1.82, 2.24, 2.45, 2.75, 3.05, 3.63, 3.80, 4.00];

/// SlogP_VSA logP-contribution boundaries (12 bins).
pub(crate) const SLOGP_BOUNDS: [f64; 11] = [
    -0.40, -0.20, 0.00, 0.10, 0.15, 0.20, 0.25, 0.30, 0.40, 0.50, 0.60,
];

/// EState_VSA EState-value boundaries (11 bins).
pub(crate) const ESTATE_BOUNDS: [f64; 10] = [
    -0.390, 0.290, 0.717, 1.165, 1.540, 1.807, 2.05, 4.69, 9.17, 15.0,
];

/// VSA_EState surface-area boundaries (10 bins).
pub(crate) const VSA_BOUNDS: [f64; 9] = [4.78, 5.00, 5.410, 5.740, 6.00, 6.07, 6.45, 7.00, 11.0];

/// Rotatable bond count: single, acyclic, both ends non-terminal, amide
/// C–N excluded.
pub(crate) fn rotatable_bonds(mol: &Molecule) -> f64 {
    let mut count = 0;
    for (id, bd) in mol.bonds().iter().enumerate() {
        if bd.order != BondOrder::Single || mol.bond_in_ring(id) {
            continue;
        }
        if mol.degree(bd.a) < 2 || mol.degree(bd.b) < 2 {
            continue;
        }
        let amide = |c: usize, n: usize| {
            mol.atom(n).element == elements::NITROGEN
                && mol.atom(c).element == elements::CARBON
                && mol.neighbor_via(c, BondOrder::Double, elements::OXYGEN).is_some()
        };
        if amide(bd.a, bd.b) || amide(bd.b, bd.a) {
            continue;
        }
        count += 1;
    }
    count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn test_tpsa_ethanol() {
        // single hydroxyl: 20.23
        let mol = parse_smiles("CCO").unwrap();
        assert!((tpsa(&mol) - 20.23).abs() < 1e-9);
    }

    #[test]
    fn test_tpsa_alkane_zero() {
        let mol = parse_smiles("CCCC").unwrap();
        assert_eq!(tpsa(&mol), 0.0);
    }

    #[test]
    fn test_labute_asa_positive() {
        let mol = parse_smiles("CCO").unwrap();
        assert!(labute_asa(&mol).iter().all(|&a| a > 0.0));
    }

    #[test]
    fn test_bin_sum_partitions_total() {
        let values = vec![-0.5, 0.0, 0.07, 0.4];
        let weights = vec![1.0, 2.0, 3.0, 4.0];
        let total: f64 = (0..=PEOE_BOUNDS.len())
            .map(|b| bin_sum(&values, &weights, &PEOE_BOUNDS, b))
            .sum();
        assert!((total - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotatable_bonds_butane() {
        // only the central C-C rotates
        let mol = parse_smiles("CCCC").unwrap();
        assert_eq!(rotatable_bonds(&mol), 1.0);
    }

    #[test]
    fn test_rotatable_bonds_amide_excluded() {
        let mol = parse_smiles("CC(=O)NC").unwrap();
        assert_eq!(rotatable_bonds(&mol), 0.0);
    }

    #[test]
    fn test_rotatable_bonds_cyclohexane_zero() {
        let mol = parse_smiles("C1CCCCC1").unwrap();
        assert_eq!(rotatable_bonds(&mol), 0.0);
    }
}
