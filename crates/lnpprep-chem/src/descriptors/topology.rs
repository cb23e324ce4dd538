//! Topological indices: Kier–Hall connectivity (Chi), shape (Kappa),
//! Balaban J, Bertz complexity, graph-spectrum information content, and
//! Morgan-environment fingerprint density.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use super::linalg::symmetric_eigenvalues;
use crate::elements;
use crate::molecule::{Molecule, UNREACHABLE};

/// Simple vertex degree δ.
pub(crate) fn delta(mol: &Molecule, i: usize) -> f64 {
    mol.degree(i) as f64
}

/// Valence delta δn = Zv − h.
pub(crate) fn delta_n(mol: &Molecule, i: usize) -> f64 {
    let e = elements::data(mol.atom(i).element);
    (e.valence_electrons as f64 - mol.atom(i).hydrogens as f64).max(0.0)
}

/// Valence delta with the higher-row correction (Zv − h)/(Z − Zv − 1).
pub(crate) fn delta_v(mol: &Molecule, i: usize) -> f64 {
    let e = elements::data(mol.atom(i).element);
    let zv = e.valence_electrons as f64;
    let h = mol.atom(i).hydrogens as f64;
    if e.quantum_period <= 2 {
        (zv - h).max(0.0)
    } else {
        let z = e.number as f64;
        let denom = z - zv - 1.0;
        if denom > 0.0 {
            ((zv - h) / denom).max(0.0)
        } else {
            (zv - h).max(0.0)
        }
    }
}

fn chi_atoms(mol: &Molecule, d: impl Fn(&Molecule, usize) -> f64) -> f64 {
    (0..mol.atom_count())
        .map(|i| d(mol, i))
        .filter(|&x| x > 0.0)
        .map(|x| 1.0 / x.sqrt())
        .sum()
}

fn chi_paths(mol: &Molecule, length: usize, d: impl Fn(&Molecule, usize) -> f64) -> f64 {
    mol.simple_paths(length)
        .iter()
        .map(|path| {
            let prod: f64 = path.iter().map(|&i| d(mol, i)).product();
            if prod > 0.0 {
                1.0 / prod.sqrt()
            } else {
                0.0
            }
        })
        .sum()
}

pub(crate) fn chi0(mol: &Molecule) -> f64 {
    chi_atoms(mol, delta)
}

pub(crate) fn chi0n(mol: &Molecule) -> f64 {
    chi_atoms(mol, delta_n)
}

pub(crate) fn chi0v(mol: &Molecule) -> f64 {
    chi_atoms(mol, delta_v)
}

pub(crate) fn chi1(mol: &Molecule) -> f64 {
    chi_paths(mol, 1, delta)
}

pub(crate) fn chi1n(mol: &Molecule) -> f64 {
    chi_paths(mol, 1, delta_n)
}

pub(crate) fn chi1v(mol: &Molecule) -> f64 {
    chi_paths(mol, 1, delta_v)
}

pub(crate) fn chi_n(mol: &Molecule, length: usize) -> f64 {
    chi_paths(mol, length, delta_n)
}

pub(crate) fn chi_v(mol: &Molecule, length: usize) -> f64 {
    chi_paths(mol, length, delta_v)
}

/// Per-atom Hall–Kier alpha contribution.
fn alpha_contribution(mol: &Molecule, i: usize) -> f64 {
    let atom = mol.atom(i);
    match (atom.element, mol.is_sp(i), mol.is_sp2(i)) {
        (elements::CARBON, true, _) => -0.22,
        (elements::CARBON, _, true) => -0.13,
        (elements::CARBON, _, _) => 0.0,
        (elements::NITROGEN, true, _) => -0.29,
        (elements::NITROGEN, _, true) => -0.20,
        (elements::NITROGEN, _, _) => -0.04,
        (elements::OXYGEN, _, true) => -0.20,
        (elements::OXYGEN, _, _) => -0.04,
        (elements::FLUORINE, _, _) => -0.07,
        (elements::CHLORINE, _, _) => 0.29,
        (elements::BROMINE, _, _) => 0.48,
        (elements::IODINE, _, _) => 0.73,
        (elements::SULFUR, _, true) => 0.26,
        (elements::SULFUR, _, _) => 0.35,
        (elements::PHOSPHORUS, _, _) => 0.43,
        // covalent-radius ratio fallback for anything else
        (z, _, _) => elements::data(z).r_covalent / 0.76 - 1.0,
    }
}

pub(crate) fn hall_kier_alpha(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .map(|i| alpha_contribution(mol, i))
        .sum()
}

pub(crate) fn kappa1(mol: &Molecule) -> f64 {
    let a = mol.atom_count() as f64;
    let alpha = hall_kier_alpha(mol);
    let p1 = mol.bond_count() as f64;
    if p1 + alpha <= 0.0 {
        return 0.0;
    }
    (a + alpha) * (a + alpha - 1.0).powi(2) / (p1 + alpha).powi(2)
}

pub(crate) fn kappa2(mol: &Molecule) -> f64 {
    let a = mol.atom_count() as f64;
    let alpha = hall_kier_alpha(mol);
    let p2 = mol.simple_paths(2).len() as f64;
    if p2 + alpha <= 0.0 {
        return 0.0;
    }
    (a + alpha - 1.0) * (a + alpha - 2.0).powi(2) / (p2 + alpha).powi(2)
}

pub(crate) fn kappa3(mol: &Molecule) -> f64 {
    let a = mol.atom_count() as f64;
    let alpha = hall_kier_alpha(mol);
    let p3 = mol.simple_paths(3).len() as f64;
    if p3 + alpha <= 0.0 {
        return 0.0;
    }
    if mol.atom_count() % 2 == 1 {
        (a + alpha - 1.0) * (a + alpha - 3.0).powi(2) / (p3 + alpha).powi(2)
    } else {
        (a + alpha - 3.0) * (a + alpha - 2.0).powi(2) / (p3 + alpha).powi(2)
    }
}

/// Balaban distance-connectivity index J.
pub(crate) fn balaban_j(mol: &Molecule, dist: &[Vec<u32>]) -> f64 {
    let n = mol.atom_count();
    let m = mol.bond_count() as f64;
    if n < 2 || m == 0.0 {
        return 0.0;
    }
    let sums: Vec<f64> = (0..n)
        .map(|i| {
            dist[i]
                .iter()
                .filter(|&&d| d < UNREACHABLE)
                .map(|&d| d as f64)
                .sum()
        })
        .collect();
    let gamma = m - n as f64 + 1.0; // cyclomatic number (single fragment)
    let sum: f64 = mol
        .bonds()
        .iter()
        .filter(|bd| sums[bd.a] > 0.0 && sums[bd.b] > 0.0)
        .map(|bd| 1.0 / (sums[bd.a] * sums[bd.b]).sqrt())
        .sum();
    m / (gamma + 1.0) * sum
}

/// Morgan-style symmetry classes from iterative neighborhood refinement.
fn symmetry_classes(mol: &Molecule, rounds: usize) -> Vec<u64> {
    let mut classes: Vec<u64> = (0..mol.atom_count())
        .map(|i| {
            let a = mol.atom(i);
            let mut h = DefaultHasher::new();
            (
                a.element,
                a.aromatic,
                a.charge,
                a.hydrogens,
                mol.degree(i),
                mol.in_ring(i),
            )
                .hash(&mut h);
            h.finish()
        })
        .collect();

    for _ in 0..rounds {
        let mut next = Vec::with_capacity(classes.len());
        for i in 0..mol.atom_count() {
            let mut env: Vec<(u64, u64)> = mol
                .atom_bond_ids(i)
                .iter()
                .map(|&bid| {
                    let bd = mol.bond(bid);
                    ((bd.order.value() * 10.0) as u64, classes[bd.other(i)])
                })
                .collect();
            env.sort_unstable();
            let mut h = DefaultHasher::new();
            classes[i].hash(&mut h);
            env.hash(&mut h);
            next.push(h.finish());
        }
        classes = next;
    }
    classes
}

/// Bertz-style complexity: bond-symmetry and atom-symmetry information terms.
pub(crate) fn bertz_ct(mol: &Molecule) -> f64 {
    let nb = mol.bond_count();
    let na = mol.atom_count();
    if na == 0 {
        return 0.0;
    }
    let classes = symmetry_classes(mol, 2);

    // bond classes keyed by unordered endpoint classes and order
    let mut bond_class_counts: std::collections::HashMap<(u64, u64, u64), f64> =
        std::collections::HashMap::new();
    for bd in mol.bonds() {
        let (x, y) = (classes[bd.a], classes[bd.b]);
        let key = (
            x.min(y),
            x.max(y),
            (bd.order.value() * 10.0) as u64,
        );
        *bond_class_counts.entry(key).or_insert(0.0) += 1.0;
    }
    let b = nb as f64;
    let bond_term = if b > 0.0 {
        2.0 * b * b.log2()
            - bond_class_counts
                .values()
                .map(|&c| c * c.log2())
                .sum::<f64>()
    } else {
        0.0
    };

    let mut atom_class_counts: std::collections::HashMap<u64, f64> =
        std::collections::HashMap::new();
    for &c in &classes {
        *atom_class_counts.entry(c).or_insert(0.0) += 1.0;
    }
    let n = na as f64;
    let atom_term = n * n.log2()
        - atom_class_counts
            .values()
            .map(|&c| c * c.log2())
            .sum::<f64>();

    bond_term + atom_term
}

/// Characteristic-polynomial information content of the adjacency spectrum.
/// `average` selects the mean form.
pub(crate) fn ipc(mol: &Molecule, average: bool) -> f64 {
    let n = mol.atom_count();
    if n == 0 {
        return 0.0;
    }
    let mut adj = vec![vec![0.0; n]; n];
    for bd in mol.bonds() {
        adj[bd.a][bd.b] = 1.0;
        adj[bd.b][bd.a] = 1.0;
    }
    let eig = symmetric_eigenvalues(adj);

    // elementary symmetric polynomials of the eigenvalues = char-poly coeffs
    let mut coeffs = vec![0.0f64; n + 1];
    coeffs[0] = 1.0;
    for &lambda in &eig {
        for k in (1..=n).rev() {
            coeffs[k] += lambda * coeffs[k - 1];
        }
    }

    let total: f64 = coeffs.iter().map(|c| c.abs()).sum();
    if total <= 0.0 {
        return 0.0;
    }
    let entropy: f64 = coeffs
        .iter()
        .map(|c| c.abs() / total)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum();
    if average {
        entropy
    } else {
        total * entropy
    }
}

/// Distinct circular environments up to `radius`, per heavy atom.
pub(crate) fn fp_density_morgan(mol: &Molecule, radius: usize) -> f64 {
    let n = mol.atom_count();
    if n == 0 {
        return 0.0;
    }
    let mut seen: HashSet<u64> = HashSet::new();
    let mut classes = symmetry_classes(mol, 0);
    seen.extend(classes.iter().copied());
    for _ in 0..radius {
        classes = {
            let mut next = Vec::with_capacity(n);
            for i in 0..n {
                let mut env: Vec<(u64, u64)> = mol
                    .atom_bond_ids(i)
                    .iter()
                    .map(|&bid| {
                        let bd = mol.bond(bid);
                        ((bd.order.value() * 10.0) as u64, classes[bd.other(i)])
                    })
                    .collect();
                env.sort_unstable();
                let mut h = DefaultHasher::new();
                classes[i].hash(&mut h);
                env.hash(&mut h);
                next.push(h.finish());
            }
            next
        };
        seen.extend(classes.iter().copied());
    }
    seen.len() as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn test_chi0_propane() {
        // deltas 1,2,1 -> 1 + 1/sqrt(2) + 1
        let mol = parse_smiles("CCC").unwrap();
        assert!((chi0(&mol) - (2.0 + 1.0 / 2f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn test_chi1_ethane() {
        let mol = parse_smiles("CC").unwrap();
        assert!((chi1(&mol) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kappa1_linear_vs_branched() {
        // a linear chain is "longer" than a branched isomer
        let linear = parse_smiles("CCCCC").unwrap();
        let branched = parse_smiles("CC(C)(C)C").unwrap();
        assert!(kappa1(&linear) >= kappa1(&branched));
    }

    #[test]
    fn test_balaban_j_positive_for_chain() {
        let mol = parse_smiles("CCCC").unwrap();
        let d = mol.distance_matrix();
        assert!(balaban_j(&mol, &d) > 0.0);
    }

    #[test]
    fn test_ipc_deterministic() {
        let a = ipc(&parse_smiles("c1ccccc1CCN").unwrap(), false);
        let b = ipc(&parse_smiles("c1ccccc1CCN").unwrap(), false);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_fp_density_bounds() {
        let mol = parse_smiles("CCO").unwrap();
        let d1 = fp_density_morgan(&mol, 1);
        let d2 = fp_density_morgan(&mol, 2);
        assert!(d1 > 0.0);
        assert!(d2 >= d1);
    }

    #[test]
    fn test_hall_kier_alpha_benzene_negative() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert!(hall_kier_alpha(&mol) < 0.0);
    }
}
