//! Constitutional counts: atom and ring census, hydrogen-bonding counts,
//! drug-likeness (QED) and the spacial score.

use crate::elements;
use crate::molecule::Molecule;

pub(crate) fn heavy_atom_count(mol: &Molecule) -> f64 {
    mol.atom_count() as f64
}

/// Molecular weight with implicit hydrogens stripped.
pub(crate) fn heavy_atom_mol_wt(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .map(|i| elements::data(mol.atom(i).element).mass)
        .sum()
}

/// Monoisotopic molecular weight.
pub(crate) fn exact_mol_wt(mol: &Molecule) -> f64 {
    let h = elements::data(elements::HYDROGEN).exact_mass;
    (0..mol.atom_count())
        .map(|i| {
            let atom = mol.atom(i);
            let base = match atom.isotope {
                Some(iso) => iso as f64,
                None => elements::data(atom.element).exact_mass,
            };
            base + atom.hydrogens as f64 * h
        })
        .sum()
}

pub(crate) fn num_valence_electrons(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .map(|i| {
            let atom = mol.atom(i);
            elements::data(atom.element).valence_electrons as i64 - atom.charge as i64
                + atom.hydrogens as i64
        })
        .sum::<i64>() as f64
}

pub(crate) fn fraction_csp3(mol: &Molecule) -> f64 {
    let carbons: Vec<usize> = (0..mol.atom_count())
        .filter(|&i| mol.atom(i).element == elements::CARBON)
        .collect();
    if carbons.is_empty() {
        return 0.0;
    }
    let sp3 = carbons.iter().filter(|&&i| mol.is_sp3(i)).count();
    sp3 as f64 / carbons.len() as f64
}

/// Hydrogens bonded to nitrogen or oxygen.
pub(crate) fn nhoh_count(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .filter(|&i| matches!(mol.atom(i).element, elements::NITROGEN | elements::OXYGEN))
        .map(|i| mol.atom(i).hydrogens as u64)
        .sum::<u64>() as f64
}

pub(crate) fn no_count(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .filter(|&i| matches!(mol.atom(i).element, elements::NITROGEN | elements::OXYGEN))
        .count() as f64
}

/// N/O acceptors: neutral, and not a pyrrole-type aromatic NH.
pub(crate) fn num_h_acceptors(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .filter(|&i| {
            let atom = mol.atom(i);
            match atom.element {
                elements::NITROGEN => {
                    atom.charge <= 0 && !(atom.aromatic && atom.hydrogens > 0)
                }
                elements::OXYGEN => atom.charge <= 0,
                _ => false,
            }
        })
        .count() as f64
}

/// N/O atoms carrying at least one hydrogen.
pub(crate) fn num_h_donors(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .filter(|&i| {
            matches!(mol.atom(i).element, elements::NITROGEN | elements::OXYGEN)
                && mol.atom(i).hydrogens > 0
        })
        .count() as f64
}

pub(crate) fn num_heteroatoms(mol: &Molecule) -> f64 {
    (0..mol.atom_count())
        .filter(|&i| {
            !matches!(mol.atom(i).element, elements::CARBON | elements::HYDROGEN)
        })
        .count() as f64
}

// ── ring census ──────────────────────────────────────────────────────────────

fn is_carbocycle(mol: &Molecule, ring: &[usize]) -> bool {
    ring.iter().all(|&i| mol.atom(i).element == elements::CARBON)
}

pub(crate) fn ring_count(mol: &Molecule) -> f64 {
    mol.rings().len() as f64
}

pub(crate) fn num_aromatic_rings(mol: &Molecule) -> f64 {
    mol.rings().iter().filter(|r| mol.ring_is_aromatic(r)).count() as f64
}

pub(crate) fn num_aromatic_carbocycles(mol: &Molecule) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| mol.ring_is_aromatic(r) && is_carbocycle(mol, r))
        .count() as f64
}

pub(crate) fn num_aromatic_heterocycles(mol: &Molecule) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| mol.ring_is_aromatic(r) && !is_carbocycle(mol, r))
        .count() as f64
}

pub(crate) fn num_aliphatic_rings(mol: &Molecule) -> f64 {
    mol.rings().iter().filter(|r| !mol.ring_is_aromatic(r)).count() as f64
}

pub(crate) fn num_aliphatic_carbocycles(mol: &Molecule) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| !mol.ring_is_aromatic(r) && is_carbocycle(mol, r))
        .count() as f64
}

pub(crate) fn num_aliphatic_heterocycles(mol: &Molecule) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| !mol.ring_is_aromatic(r) && !is_carbocycle(mol, r))
        .count() as f64
}

pub(crate) fn num_saturated_rings(mol: &Molecule) -> f64 {
    mol.rings().iter().filter(|r| mol.ring_is_saturated(r)).count() as f64
}

pub(crate) fn num_saturated_carbocycles(mol: &Molecule) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| mol.ring_is_saturated(r) && is_carbocycle(mol, r))
        .count() as f64
}

pub(crate) fn num_saturated_heterocycles(mol: &Molecule) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| mol.ring_is_saturated(r) && !is_carbocycle(mol, r))
        .count() as f64
}

// ── spacial score ────────────────────────────────────────────────────────────

/// Size-normalized spacial score: per-atom hybridization × ring × degree²
/// terms averaged over the heavy atoms.
pub(crate) fn spacial_score(mol: &Molecule) -> f64 {
    let n = mol.atom_count();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = (0..n)
        .map(|i| {
            let hyb = if mol.atom(i).aromatic {
                2.0
            } else if mol.is_sp3(i) {
                3.0
            } else if mol.is_sp2(i) {
                2.0
            } else {
                1.0
            };
            let ring = if mol.in_ring(i) { 2.0 } else { 1.0 };
            let d = mol.degree(i) as f64;
            hyb * ring * d * d
        })
        .sum();
    total / n as f64
}

// ── QED ──────────────────────────────────────────────────────────────────────

/// Asymmetric double-sigmoid desirability, (a..f, dmax) parameterization.
struct Ads {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    dmax: f64,
}

impl Ads {
    fn score(&self, x: f64) -> f64 {
        let rise = 1.0 + (-(x - self.c + self.d / 2.0) / self.e).exp();
        let fall = 1.0 + (-(x - self.c - self.d / 2.0) / self.f).exp();
        ((self.a + self.b / rise * (1.0 - 1.0 / fall)) / self.dmax).max(1e-6)
    }
}

const QED_MW: Ads = Ads {
    a: 2.817_065_973,
    b: 392.575_495_3,
    c: 290.748_976_4,
    d: 2.419_764_353,
    e: 49.223_256_77,
    f: 65.370_517_07,
    dmax: 104.980_556_1,
};
const QED_LOGP: Ads = Ads {
    a: 3.172_690_585,
    b: 137.862_475_1,
    c: 2.534_937_431,
    d: 4.581_497_897,
    e: 0.822_739_154,
    f: 0.576_295_591,
    dmax: 131.318_660_4,
};
const QED_HBA: Ads = Ads {
    a: 2.948_620_388,
    b: 160.460_597_2,
    c: 3.615_294_657,
    d: 4.435_986_202,
    e: 0.290_141_953,
    f: 1.300_669_958,
    dmax: 148.776_304_6,
};
const QED_HBD: Ads = Ads {
    a: 1.618_662_227,
    b: 1010.051_101,
    c: 0.985_094_388,
    d: 1e-9,
    e: 0.713_820_843,
    f: 0.920_922_555,
    dmax: 258.163_261_6,
};
const QED_PSA: Ads = Ads {
    a: 1.876_861_559,
    b: 125.223_265_7,
    c: 62.907_735_54,
    d: 87.833_666_14,
    e: 12.019_998_24,
    f: 28.513_247_32,
    dmax: 104.568_616_7,
};
const QED_ROTB: Ads = Ads {
    a: 0.010_000_091,
    b: 272.412_142_7,
    c: 2.558_379_97,
    d: 1.565_547_684,
    e: 1.271_567_166,
    f: 2.758_063_707,
    dmax: 105.442_040_3,
};
const QED_AROM: Ads = Ads {
    a: 3.217_788_97,
    b: 957.737_410_8,
    c: 2.274_627_939,
    d: 1e-9,
    e: 1.317_690_384,
    f: 0.375_760_881,
    dmax: 312.337_261,
};

/// Quantitative estimate of drug-likeness: unweighted geometric mean of the
/// property desirabilities (structural-alert channel omitted).
pub(crate) fn qed(
    mol: &Molecule,
    mol_logp: f64,
    tpsa: f64,
    rotatable: f64,
) -> f64 {
    let scores = [
        QED_MW.score(mol.molecular_weight()),
        QED_LOGP.score(mol_logp),
        QED_HBA.score(num_h_acceptors(mol)),
        QED_HBD.score(num_h_donors(mol)),
        QED_PSA.score(tpsa),
        QED_ROTB.score(rotatable),
        QED_AROM.score(num_aromatic_rings(mol)),
    ];
    let log_sum: f64 = scores.iter().map(|s| s.ln()).sum();
    (log_sum / scores.len() as f64).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn test_heavy_atom_count_ignores_hydrogens() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(heavy_atom_count(&mol), 3.0);
    }

    #[test]
    fn test_donor_acceptor_ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(num_h_donors(&mol), 1.0);
        assert_eq!(num_h_acceptors(&mol), 1.0);
        assert_eq!(nhoh_count(&mol), 1.0);
        assert_eq!(no_count(&mol), 1.0);
    }

    #[test]
    fn test_pyrrole_nh_not_acceptor() {
        let mol = parse_smiles("c1cc[nH]c1").unwrap();
        assert_eq!(num_h_acceptors(&mol), 0.0);
        assert_eq!(num_h_donors(&mol), 1.0);
    }

    #[test]
    fn test_ring_census_pyridine() {
        let mol = parse_smiles("c1ccncc1").unwrap();
        assert_eq!(ring_count(&mol), 1.0);
        assert_eq!(num_aromatic_heterocycles(&mol), 1.0);
        assert_eq!(num_aromatic_carbocycles(&mol), 0.0);
        assert_eq!(num_saturated_rings(&mol), 0.0);
    }

    #[test]
    fn test_ring_census_cyclohexane() {
        let mol = parse_smiles("C1CCCCC1").unwrap();
        assert_eq!(num_saturated_carbocycles(&mol), 1.0);
        assert_eq!(num_aliphatic_rings(&mol), 1.0);
        assert_eq!(num_aromatic_rings(&mol), 0.0);
    }

    #[test]
    fn test_fraction_csp3() {
        assert_eq!(fraction_csp3(&parse_smiles("CCCC").unwrap()), 1.0);
        assert_eq!(fraction_csp3(&parse_smiles("c1ccccc1").unwrap()), 0.0);
        let half = fraction_csp3(&parse_smiles("CCc1ccccc1CC").unwrap());
        assert!((half - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_valence_electrons_methane_chain() {
        // ethane: 2 × 4 + 6 × 1
        let mol = parse_smiles("CC").unwrap();
        assert_eq!(num_valence_electrons(&mol), 14.0);
    }

    #[test]
    fn test_qed_in_unit_interval() {
        for s in ["CCO", "CC(=O)Oc1ccccc1C(=O)O", "CCCCCCCCCCCCCCCC"] {
            let mol = parse_smiles(s).unwrap();
            let q = qed(&mol, 1.0, 40.0, 3.0);
            assert!(q > 0.0 && q <= 1.0, "qed out of range for {s}: {q}");
        }
    }

    #[test]
    fn test_exact_mass_close_to_average() {
        let mol = parse_smiles("CCO").unwrap();
        assert!((exact_mol_wt(&mol) - mol.molecular_weight()).abs() < 0.2);
    }
}
