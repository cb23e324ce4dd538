//! Functional-group counters (the `fr_*` block of the descriptor set).
//!
//! Each counter is a small graph predicate; counts are per matching site.

use crate::elements::{
    BROMINE, CARBON, CHLORINE, FLUORINE, IODINE, NITROGEN, OXYGEN, PHOSPHORUS, SULFUR,
};
use crate::molecule::{BondOrder, Molecule};

pub(crate) const FRAGMENT_NAMES: [&str; 85] = [
    "fr_Al_COO",
    "fr_Al_OH",
    "fr_Al_OH_noTert",
    "fr_ArN",
    "fr_Ar_COO",
    "fr_Ar_N",
    "fr_Ar_NH",
    "fr_Ar_OH",
    "fr_COO",
    "fr_COO2",
    "fr_C_O",
    "fr_C_O_noCOO",
    "fr_C_S",
    "fr_HOCCN",
    "fr_Imine",
    "fr_NH0",
    "fr_NH1",
    "fr_NH2",
    "fr_N_O",
    "fr_Ndealkylation1",
    "fr_Ndealkylation2",
    "fr_Nhpyrrole",
    "fr_SH",
    "fr_aldehyde",
    "fr_alkyl_carbamate",
    "fr_alkyl_halide",
    "fr_allylic_oxid",
    "fr_amide",
    "fr_amidine",
    "fr_aniline",
    "fr_aryl_methyl",
    "fr_azide",
    "fr_azo",
    "fr_barbitur",
    "fr_benzene",
    "fr_benzodiazepine",
    "fr_bicyclic",
    "fr_diazo",
    "fr_dihydropyridine",
    "fr_epoxide",
    "fr_ester",
    "fr_ether",
    "fr_furan",
    "fr_guanido",
    "fr_halogen",
    "fr_hdrzine",
    "fr_hdrzone",
    "fr_imidazole",
    "fr_imide",
    "fr_isocyan",
    "fr_isothiocyan",
    "fr_ketone",
    "fr_ketone_Topliss",
    "fr_lactam",
    "fr_lactone",
    "fr_methoxy",
    "fr_morpholine",
    "fr_nitrile",
    "fr_nitro",
    "fr_nitro_arom",
    "fr_nitro_arom_nonortho",
    "fr_nitroso",
    "fr_oxazole",
    "fr_oxime",
    "fr_para_hydroxylation",
    "fr_phenol",
    "fr_phenol_noOrthoHbond",
    "fr_phos_acid",
    "fr_phos_ester",
    "fr_piperdine",
    "fr_piperzine",
    "fr_priamide",
    "fr_prisulfonamd",
    "fr_pyridine",
    "fr_quatN",
    "fr_sulfide",
    "fr_sulfonamd",
    "fr_sulfone",
    "fr_term_acetylene",
    "fr_tetrazole",
    "fr_thiazole",
    "fr_thiocyan",
    "fr_thiophene",
    "fr_unbrch_alkane",
    "fr_urea",
];

// ── atom predicates ──────────────────────────────────────────────────────────

fn is(mol: &Molecule, i: usize, z: u8) -> bool {
    mol.atom(i).element == z
}

/// Carbon with a double bond to oxygen.
fn is_carbonyl_c(mol: &Molecule, i: usize) -> bool {
    is(mol, i, CARBON) && mol.neighbor_via(i, BondOrder::Double, OXYGEN).is_some()
}

/// Single-bonded oxygen neighbors of atom `i`.
fn single_o_neighbors(mol: &Molecule, i: usize) -> Vec<usize> {
    mol.atom_bond_ids(i)
        .iter()
        .filter_map(|&bid| {
            let bd = mol.bond(bid);
            let j = bd.other(i);
            (bd.order == BondOrder::Single && is(mol, j, OXYGEN)).then_some(j)
        })
        .collect()
}

fn is_halogen(z: u8) -> bool {
    matches!(z, FLUORINE | CHLORINE | BROMINE | IODINE)
}

/// Carboxylic-acid carbon: C(=O)OH.
fn is_coo_h(mol: &Molecule, i: usize) -> bool {
    is_carbonyl_c(mol, i)
        && single_o_neighbors(mol, i)
            .iter()
            .any(|&o| mol.atom(o).hydrogens > 0)
}

/// Carboxylic acid or carboxylate carbon.
fn is_coo2(mol: &Molecule, i: usize) -> bool {
    is_carbonyl_c(mol, i)
        && single_o_neighbors(mol, i)
            .iter()
            .any(|&o| mol.atom(o).hydrogens > 0 || mol.atom(o).charge < 0)
}

fn has_aromatic_neighbor(mol: &Molecule, i: usize) -> bool {
    mol.neighbors(i).iter().any(|&j| mol.atom(j).aromatic)
}

fn count_atoms(mol: &Molecule, pred: impl Fn(usize) -> bool) -> f64 {
    (0..mol.atom_count()).filter(|&i| pred(i)).count() as f64
}

/// Nitro nitrogen: N with two oxygen neighbors, at least one double-bonded.
fn is_nitro_n(mol: &Molecule, i: usize) -> bool {
    if !is(mol, i, NITROGEN) {
        return false;
    }
    let o_count = mol
        .neighbors(i)
        .iter()
        .filter(|&&j| is(mol, j, OXYGEN))
        .count();
    o_count >= 2 && mol.neighbor_via(i, BondOrder::Double, OXYGEN).is_some()
}

/// Sulfonyl sulfur: S with two double-bonded oxygens.
fn is_sulfonyl_s(mol: &Molecule, i: usize) -> bool {
    is(mol, i, SULFUR)
        && mol
            .atom_bond_ids(i)
            .iter()
            .filter(|&&bid| {
                let bd = mol.bond(bid);
                bd.order == BondOrder::Double && is(mol, bd.other(i), OXYGEN)
            })
            .count()
            >= 2
}

/// Methyl carbon: sp3 CH3 with a single heavy neighbor.
fn is_methyl(mol: &Molecule, i: usize) -> bool {
    is(mol, i, CARBON) && !mol.atom(i).aromatic && mol.atom(i).hydrogens == 3 && mol.degree(i) == 1
}

// ── ring census helpers ──────────────────────────────────────────────────────

fn ring_elem_count(mol: &Molecule, ring: &[usize], z: u8) -> usize {
    ring.iter().filter(|&&i| is(mol, i, z)).count()
}

fn aromatic_rings_with(mol: &Molecule, size: usize, pred: impl Fn(&[usize]) -> bool) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| r.len() == size && mol.ring_is_aromatic(r) && pred(r))
        .count() as f64
}

fn saturated_rings_with(mol: &Molecule, size: usize, pred: impl Fn(&[usize]) -> bool) -> f64 {
    mol.rings()
        .iter()
        .filter(|r| r.len() == size && mol.ring_is_saturated(r) && pred(r))
        .count() as f64
}

// ── the counters, registry order ─────────────────────────────────────────────

pub(crate) fn all(mol: &Molecule) -> Vec<f64> {
    let mut v = Vec::with_capacity(FRAGMENT_NAMES.len());

    // fr_Al_COO
    v.push(count_atoms(mol, |i| {
        is_coo_h(mol, i) && !has_aromatic_neighbor(mol, i)
    }));
    // fr_Al_OH: hydroxyl on a non-aromatic, non-carbonyl carbon
    let al_oh = |i: usize| {
        is(mol, i, OXYGEN)
            && mol.atom(i).hydrogens > 0
            && !mol.atom(i).aromatic
            && mol.neighbors(i).iter().any(|&j| {
                is(mol, j, CARBON) && !mol.atom(j).aromatic && !is_carbonyl_c(mol, j)
            })
    };
    v.push(count_atoms(mol, al_oh));
    // fr_Al_OH_noTert
    v.push(count_atoms(mol, |i| {
        al_oh(i)
            && !mol.neighbors(i).iter().any(|&j| {
                is(mol, j, CARBON)
                    && mol
                        .neighbors(j)
                        .iter()
                        .filter(|&&k| k != i && is(mol, k, CARBON))
                        .count()
                        >= 3
            })
    }));
    // fr_ArN: non-ring nitrogen substituent on an aromatic system
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN) && !mol.in_ring(i) && has_aromatic_neighbor(mol, i)
    }));
    // fr_Ar_COO
    v.push(count_atoms(mol, |i| {
        is_coo_h(mol, i) && has_aromatic_neighbor(mol, i)
    }));
    // fr_Ar_N: aromatic nitrogen
    v.push(count_atoms(mol, |i| is(mol, i, NITROGEN) && mol.atom(i).aromatic));
    // fr_Ar_NH
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN) && mol.atom(i).aromatic && mol.atom(i).hydrogens > 0
    }));
    // fr_Ar_OH: hydroxyl on aromatic carbon
    let ar_oh = |i: usize| {
        is(mol, i, OXYGEN)
            && mol.atom(i).hydrogens > 0
            && mol
                .neighbors(i)
                .iter()
                .any(|&j| is(mol, j, CARBON) && mol.atom(j).aromatic)
    };
    v.push(count_atoms(mol, ar_oh));
    // fr_COO
    v.push(count_atoms(mol, |i| is_coo_h(mol, i)));
    // fr_COO2
    v.push(count_atoms(mol, |i| is_coo2(mol, i)));
    // fr_C_O: carbonyl carbons
    v.push(count_atoms(mol, |i| is_carbonyl_c(mol, i)));
    // fr_C_O_noCOO
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i) && single_o_neighbors(mol, i).is_empty()
    }));
    // fr_C_S: thiocarbonyl
    v.push(count_atoms(mol, |i| {
        is(mol, i, CARBON) && mol.neighbor_via(i, BondOrder::Double, SULFUR).is_some()
    }));
    // fr_HOCCN: HO-C-C-N
    v.push(count_atoms(mol, |i| {
        is(mol, i, OXYGEN)
            && mol.atom(i).hydrogens > 0
            && mol.neighbors(i).iter().any(|&c1| {
                is(mol, c1, CARBON)
                    && mol.neighbors(c1).iter().any(|&c2| {
                        c2 != i
                            && is(mol, c2, CARBON)
                            && mol.neighbors(c2).iter().any(|&n| is(mol, n, NITROGEN))
                    })
            })
    }));
    // fr_Imine: non-aromatic C=N
    v.push(
        mol.bonds()
            .iter()
            .filter(|bd| {
                bd.order == BondOrder::Double
                    && ((is(mol, bd.a, CARBON) && is(mol, bd.b, NITROGEN))
                        || (is(mol, bd.b, CARBON) && is(mol, bd.a, NITROGEN)))
                    && !mol.atom(bd.a).aromatic
            })
            .count() as f64,
    );
    // fr_NH0 / fr_NH1 / fr_NH2
    v.push(count_atoms(mol, |i| is(mol, i, NITROGEN) && mol.atom(i).hydrogens == 0));
    v.push(count_atoms(mol, |i| is(mol, i, NITROGEN) && mol.atom(i).hydrogens == 1));
    v.push(count_atoms(mol, |i| is(mol, i, NITROGEN) && mol.atom(i).hydrogens == 2));
    // fr_N_O: single N-O bond, neither atom charged, N not nitro
    v.push(
        mol.bonds()
            .iter()
            .filter(|bd| {
                bd.order == BondOrder::Single
                    && ((is(mol, bd.a, NITROGEN) && is(mol, bd.b, OXYGEN))
                        || (is(mol, bd.b, NITROGEN) && is(mol, bd.a, OXYGEN)))
                    && mol.atom(bd.a).charge == 0
                    && mol.atom(bd.b).charge == 0
                    && !is_nitro_n(mol, if is(mol, bd.a, NITROGEN) { bd.a } else { bd.b })
            })
            .count() as f64,
    );
    // fr_Ndealkylation1: N-CH3 (demethylation site)
    let basic_n = |i: usize| {
        is(mol, i, NITROGEN) && !mol.atom(i).aromatic && mol.atom(i).charge == 0
    };
    v.push(count_atoms(mol, |i| {
        basic_n(i) && mol.neighbors(i).iter().any(|&j| is_methyl(mol, j))
    }));
    // fr_Ndealkylation2: N-CH2-
    v.push(count_atoms(mol, |i| {
        basic_n(i)
            && mol.neighbors(i).iter().any(|&j| {
                is(mol, j, CARBON)
                    && !mol.atom(j).aromatic
                    && mol.atom(j).hydrogens == 2
                    && mol.degree(j) == 2
            })
    }));
    // fr_Nhpyrrole: [nH] in a 5-ring
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && mol.atom(i).aromatic
            && mol.atom(i).hydrogens > 0
            && mol.rings().iter().any(|r| r.len() == 5 && r.contains(&i))
    }));
    // fr_SH
    v.push(count_atoms(mol, |i| is(mol, i, SULFUR) && mol.atom(i).hydrogens > 0));
    // fr_aldehyde
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i) && mol.atom(i).hydrogens > 0
    }));
    // fr_alkyl_carbamate: N-C(=O)-O-C
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i)
            && mol.neighbors(i).iter().any(|&j| is(mol, j, NITROGEN))
            && single_o_neighbors(mol, i)
                .iter()
                .any(|&o| mol.neighbors(o).iter().any(|&k| k != i && is(mol, k, CARBON)))
    }));
    // fr_alkyl_halide
    v.push(count_atoms(mol, |i| {
        is_halogen(mol.atom(i).element)
            && mol
                .neighbors(i)
                .iter()
                .any(|&j| is(mol, j, CARBON) && mol.is_sp3(j))
    }));
    // fr_allylic_oxid: saturated CH next to a non-aromatic C=C
    v.push(count_atoms(mol, |i| {
        is(mol, i, CARBON)
            && mol.is_sp3(i)
            && mol.atom(i).hydrogens > 0
            && mol.neighbors(i).iter().any(|&j| {
                is(mol, j, CARBON)
                    && !mol.atom(j).aromatic
                    && mol.neighbor_via(j, BondOrder::Double, CARBON).is_some()
            })
    }));
    // fr_amide: C(=O)N
    let amide_c = |i: usize| {
        is_carbonyl_c(mol, i) && mol.neighbors(i).iter().any(|&j| is(mol, j, NITROGEN))
    };
    v.push(count_atoms(mol, amide_c));
    // fr_amidine: C(=N)N
    v.push(count_atoms(mol, |i| {
        is(mol, i, CARBON)
            && !mol.atom(i).aromatic
            && mol.neighbor_via(i, BondOrder::Double, NITROGEN).is_some()
            && mol.atom_bond_ids(i).iter().any(|&bid| {
                let bd = mol.bond(bid);
                bd.order == BondOrder::Single && is(mol, bd.other(i), NITROGEN)
            })
    }));
    // fr_aniline: non-amide nitrogen on an aromatic carbon
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && !mol.atom(i).aromatic
            && has_aromatic_neighbor(mol, i)
            && !mol.neighbors(i).iter().any(|&j| is_carbonyl_c(mol, j))
    }));
    // fr_aryl_methyl
    v.push(count_atoms(mol, |i| {
        is_methyl(mol, i) && has_aromatic_neighbor(mol, i)
    }));
    // fr_azide: N=N=N / N-N#N chain
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && mol
                .neighbors(i)
                .iter()
                .filter(|&&j| is(mol, j, NITROGEN))
                .count()
                >= 2
            && mol.degree(i) == 2
    }));
    // fr_azo: R-N=N-R
    v.push(
        mol.bonds()
            .iter()
            .filter(|bd| {
                bd.order == BondOrder::Double
                    && is(mol, bd.a, NITROGEN)
                    && is(mol, bd.b, NITROGEN)
                    && mol.degree(bd.a) >= 2
                    && mol.degree(bd.b) >= 2
            })
            .count() as f64,
    );
    // fr_barbitur: 6-ring with two ring N and two or more ring carbonyls
    v.push(
        mol.rings()
            .iter()
            .filter(|r| {
                r.len() == 6
                    && ring_elem_count(mol, r, NITROGEN) == 2
                    && r.iter().filter(|&&i| is_carbonyl_c(mol, i)).count() >= 2
                    && !mol.ring_is_aromatic(r)
            })
            .count() as f64,
    );
    // fr_benzene: all-carbon aromatic 6-ring
    v.push(aromatic_rings_with(mol, 6, |r| {
        ring_elem_count(mol, r, CARBON) == 6
    }));
    // fr_benzodiazepine: 7-ring with two N fused to a benzene ring
    v.push(
        mol.rings()
            .iter()
            .filter(|r| {
                r.len() == 7
                    && ring_elem_count(mol, r, NITROGEN) == 2
                    && mol.rings().iter().any(|other| {
                        other.len() == 6
                            && mol.ring_is_aromatic(other)
                            && other.iter().filter(|i| r.contains(i)).count() >= 2
                    })
            })
            .count() as f64,
    );
    // fr_bicyclic: fused ring pairs
    {
        let rings = mol.rings();
        let mut fused = 0;
        for a in 0..rings.len() {
            for b in (a + 1)..rings.len() {
                if rings[a].iter().filter(|i| rings[b].contains(i)).count() >= 2 {
                    fused += 1;
                }
            }
        }
        v.push(fused as f64);
    }
    // fr_diazo: terminal N=N/N#N on carbon
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && mol.degree(i) == 1
            && mol.neighbors(i).iter().any(|&j| {
                is(mol, j, NITROGEN)
                    && mol.neighbors(j).iter().any(|&k| k != i && is(mol, k, CARBON))
            })
    }));
    // fr_dihydropyridine: non-aromatic 6-ring, one N, two ring double bonds
    v.push(
        mol.rings()
            .iter()
            .filter(|r| {
                r.len() == 6
                    && !mol.ring_is_aromatic(r)
                    && ring_elem_count(mol, r, NITROGEN) == 1
                    && {
                        let n = r.len();
                        let doubles = (0..n)
                            .filter(|&k| {
                                mol.bond_between(r[k], r[(k + 1) % n])
                                    .map(|bd| bd.order == BondOrder::Double)
                                    .unwrap_or(false)
                            })
                            .count();
                        doubles == 2
                    }
            })
            .count() as f64,
    );
    // fr_epoxide
    v.push(
        mol.rings()
            .iter()
            .filter(|r| r.len() == 3 && ring_elem_count(mol, r, OXYGEN) == 1)
            .count() as f64,
    );
    // fr_ester: C(=O)O-C
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i)
            && single_o_neighbors(mol, i)
                .iter()
                .any(|&o| mol.neighbors(o).iter().any(|&k| k != i && is(mol, k, CARBON)))
    }));
    // fr_ether: dialkyl/aryl oxygen, no carbonyl partner
    v.push(count_atoms(mol, |i| {
        is(mol, i, OXYGEN)
            && !mol.atom(i).aromatic
            && mol.atom(i).hydrogens == 0
            && mol.degree(i) == 2
            && mol
                .neighbors(i)
                .iter()
                .all(|&j| is(mol, j, CARBON) && !is_carbonyl_c(mol, j))
    }));
    // fr_furan
    v.push(aromatic_rings_with(mol, 5, |r| {
        ring_elem_count(mol, r, OXYGEN) == 1 && ring_elem_count(mol, r, CARBON) == 4
    }));
    // fr_guanido: C(=N)(N)N
    v.push(count_atoms(mol, |i| {
        is(mol, i, CARBON)
            && mol.neighbor_via(i, BondOrder::Double, NITROGEN).is_some()
            && mol
                .atom_bond_ids(i)
                .iter()
                .filter(|&&bid| {
                    let bd = mol.bond(bid);
                    bd.order == BondOrder::Single && is(mol, bd.other(i), NITROGEN)
                })
                .count()
                >= 2
    }));
    // fr_halogen
    v.push(count_atoms(mol, |i| is_halogen(mol.atom(i).element)));
    // fr_hdrzine: N-N single, no adjacent double bonds
    v.push(
        mol.bonds()
            .iter()
            .filter(|bd| {
                bd.order == BondOrder::Single
                    && is(mol, bd.a, NITROGEN)
                    && is(mol, bd.b, NITROGEN)
                    && mol.double_bond_count(bd.a) == 0
                    && mol.double_bond_count(bd.b) == 0
            })
            .count() as f64,
    );
    // fr_hdrzone: C=N-N
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && mol.neighbor_via(i, BondOrder::Double, CARBON).is_some()
            && mol.atom_bond_ids(i).iter().any(|&bid| {
                let bd = mol.bond(bid);
                bd.order == BondOrder::Single && is(mol, bd.other(i), NITROGEN)
            })
    }));
    // fr_imidazole
    v.push(aromatic_rings_with(mol, 5, |r| {
        ring_elem_count(mol, r, NITROGEN) == 2 && ring_elem_count(mol, r, CARBON) == 3
    }));
    // fr_imide: N flanked by two carbonyls
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && mol
                .neighbors(i)
                .iter()
                .filter(|&&j| is_carbonyl_c(mol, j))
                .count()
                >= 2
    }));
    // fr_isocyan: N=C=O
    let cumulated = |i: usize, z_end: u8| {
        is(mol, i, CARBON)
            && mol.neighbor_via(i, BondOrder::Double, NITROGEN).is_some()
            && mol.neighbor_via(i, BondOrder::Double, z_end).is_some()
            && mol.degree(i) == 2
    };
    v.push(count_atoms(mol, |i| cumulated(i, OXYGEN)));
    // fr_isothiocyan: N=C=S
    v.push(count_atoms(mol, |i| cumulated(i, SULFUR)));
    // fr_ketone: carbonyl with two carbon partners
    let ketone_c = |i: usize| {
        is_carbonyl_c(mol, i)
            && mol
                .neighbors(i)
                .iter()
                .filter(|&&j| is(mol, j, CARBON))
                .count()
                >= 2
    };
    v.push(count_atoms(mol, ketone_c));
    // fr_ketone_Topliss: ketone with no aromatic partner
    v.push(count_atoms(mol, |i| {
        ketone_c(i) && !has_aromatic_neighbor(mol, i)
    }));
    // fr_lactam: ring carbonyl bonded to ring N
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i)
            && mol.in_ring(i)
            && mol
                .neighbors(i)
                .iter()
                .any(|&j| is(mol, j, NITROGEN) && mol.in_ring(j))
    }));
    // fr_lactone: ring carbonyl with ring ester oxygen
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i)
            && mol.in_ring(i)
            && single_o_neighbors(mol, i).iter().any(|&o| mol.in_ring(o))
    }));
    // fr_methoxy: CH3-O-
    v.push(count_atoms(mol, |i| {
        is(mol, i, OXYGEN)
            && mol.atom(i).hydrogens == 0
            && mol.neighbors(i).iter().any(|&j| is_methyl(mol, j))
    }));
    // fr_morpholine: saturated 6-ring, one O and one N
    v.push(saturated_rings_with(mol, 6, |r| {
        ring_elem_count(mol, r, OXYGEN) == 1 && ring_elem_count(mol, r, NITROGEN) == 1
    }));
    // fr_nitrile: C#N
    v.push(
        mol.bonds()
            .iter()
            .filter(|bd| {
                bd.order == BondOrder::Triple
                    && ((is(mol, bd.a, CARBON) && is(mol, bd.b, NITROGEN))
                        || (is(mol, bd.b, CARBON) && is(mol, bd.a, NITROGEN)))
            })
            .count() as f64,
    );
    // fr_nitro
    let nitro_count = count_atoms(mol, |i| is_nitro_n(mol, i));
    v.push(nitro_count);
    // fr_nitro_arom
    let nitro_arom = count_atoms(mol, |i| is_nitro_n(mol, i) && has_aromatic_neighbor(mol, i));
    v.push(nitro_arom);
    // fr_nitro_arom_nonortho: aromatic nitro whose attachment carbon has
    // unsubstituted ring neighbors
    v.push(count_atoms(mol, |i| {
        is_nitro_n(mol, i)
            && mol.neighbors(i).iter().any(|&c| {
                mol.atom(c).aromatic
                    && mol
                        .neighbors(c)
                        .iter()
                        .filter(|&&j| mol.atom(j).aromatic)
                        .all(|&j| mol.degree(j) == 2)
            })
    }));
    // fr_nitroso: N=O, not nitro
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && !is_nitro_n(mol, i)
            && mol.neighbor_via(i, BondOrder::Double, OXYGEN).is_some()
    }));
    // fr_oxazole
    v.push(aromatic_rings_with(mol, 5, |r| {
        ring_elem_count(mol, r, OXYGEN) == 1 && ring_elem_count(mol, r, NITROGEN) == 1
    }));
    // fr_oxime: C=N-OH
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && mol.neighbor_via(i, BondOrder::Double, CARBON).is_some()
            && mol
                .neighbors(i)
                .iter()
                .any(|&j| is(mol, j, OXYGEN) && mol.atom(j).hydrogens > 0)
    }));
    // fr_para_hydroxylation: mono-substituted benzene rings
    v.push(aromatic_rings_with(mol, 6, |r| {
        ring_elem_count(mol, r, CARBON) == 6
            && r.iter().filter(|&&i| mol.degree(i) > 2).count() == 1
    }));
    // fr_phenol
    v.push(count_atoms(mol, ar_oh));
    // fr_phenol_noOrthoHbond: phenol with no N/O substituent ortho
    v.push(count_atoms(mol, |i| {
        ar_oh(i)
            && mol.neighbors(i).iter().any(|&c| {
                mol.atom(c).aromatic
                    && mol
                        .neighbors(c)
                        .iter()
                        .filter(|&&j| mol.atom(j).aromatic)
                        .all(|&j| {
                            !mol.neighbors(j).iter().any(|&k| {
                                k != c && (is(mol, k, OXYGEN) || is(mol, k, NITROGEN))
                            })
                        })
            })
    }));
    // fr_phos_acid: P(=O) with hydroxyl
    v.push(count_atoms(mol, |i| {
        is(mol, i, PHOSPHORUS)
            && mol.neighbor_via(i, BondOrder::Double, OXYGEN).is_some()
            && single_o_neighbors(mol, i)
                .iter()
                .any(|&o| mol.atom(o).hydrogens > 0 || mol.atom(o).charge < 0)
    }));
    // fr_phos_ester: P(=O) with O-C
    v.push(count_atoms(mol, |i| {
        is(mol, i, PHOSPHORUS)
            && mol.neighbor_via(i, BondOrder::Double, OXYGEN).is_some()
            && single_o_neighbors(mol, i)
                .iter()
                .any(|&o| mol.neighbors(o).iter().any(|&k| k != i && is(mol, k, CARBON)))
    }));
    // fr_piperdine: saturated 6-ring, one N, five C
    v.push(saturated_rings_with(mol, 6, |r| {
        ring_elem_count(mol, r, NITROGEN) == 1 && ring_elem_count(mol, r, CARBON) == 5
    }));
    // fr_piperzine: saturated 6-ring, two N
    v.push(saturated_rings_with(mol, 6, |r| {
        ring_elem_count(mol, r, NITROGEN) == 2
    }));
    // fr_priamide: C(=O)NH2
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i)
            && mol
                .neighbors(i)
                .iter()
                .any(|&j| is(mol, j, NITROGEN) && mol.atom(j).hydrogens == 2)
    }));
    // fr_prisulfonamd: S(=O)(=O)NH2
    v.push(count_atoms(mol, |i| {
        is_sulfonyl_s(mol, i)
            && mol
                .neighbors(i)
                .iter()
                .any(|&j| is(mol, j, NITROGEN) && mol.atom(j).hydrogens == 2)
    }));
    // fr_pyridine
    v.push(aromatic_rings_with(mol, 6, |r| {
        ring_elem_count(mol, r, NITROGEN) == 1 && ring_elem_count(mol, r, CARBON) == 5
    }));
    // fr_quatN: quaternary nitrogen
    v.push(count_atoms(mol, |i| {
        is(mol, i, NITROGEN)
            && mol.atom(i).charge > 0
            && mol.degree(i) + mol.atom(i).hydrogens as usize == 4
    }));
    // fr_sulfide: thioether
    v.push(count_atoms(mol, |i| {
        is(mol, i, SULFUR)
            && !mol.atom(i).aromatic
            && mol.atom(i).hydrogens == 0
            && mol.degree(i) == 2
            && mol.double_bond_count(i) == 0
            && mol.neighbors(i).iter().all(|&j| is(mol, j, CARBON))
    }));
    // fr_sulfonamd: S(=O)(=O)N
    v.push(count_atoms(mol, |i| {
        is_sulfonyl_s(mol, i) && mol.neighbors(i).iter().any(|&j| is(mol, j, NITROGEN))
    }));
    // fr_sulfone: S(=O)(=O) with two carbon partners
    v.push(count_atoms(mol, |i| {
        is_sulfonyl_s(mol, i)
            && mol
                .neighbors(i)
                .iter()
                .filter(|&&j| is(mol, j, CARBON))
                .count()
                >= 2
    }));
    // fr_term_acetylene
    v.push(
        mol.bonds()
            .iter()
            .filter(|bd| {
                bd.order == BondOrder::Triple
                    && is(mol, bd.a, CARBON)
                    && is(mol, bd.b, CARBON)
                    && (mol.atom(bd.a).hydrogens > 0 || mol.atom(bd.b).hydrogens > 0)
            })
            .count() as f64,
    );
    // fr_tetrazole
    v.push(aromatic_rings_with(mol, 5, |r| {
        ring_elem_count(mol, r, NITROGEN) == 4
    }));
    // fr_thiazole
    v.push(aromatic_rings_with(mol, 5, |r| {
        ring_elem_count(mol, r, SULFUR) == 1 && ring_elem_count(mol, r, NITROGEN) == 1
    }));
    // fr_thiocyan: S-C#N
    v.push(count_atoms(mol, |i| {
        is(mol, i, CARBON)
            && mol.neighbor_via(i, BondOrder::Triple, NITROGEN).is_some()
            && mol.neighbors(i).iter().any(|&j| is(mol, j, SULFUR))
    }));
    // fr_thiophene
    v.push(aromatic_rings_with(mol, 5, |r| {
        ring_elem_count(mol, r, SULFUR) == 1 && ring_elem_count(mol, r, CARBON) == 4
    }));
    // fr_unbrch_alkane: interior CH2 of unbranched chains
    v.push(count_atoms(mol, |i| {
        is(mol, i, CARBON)
            && !mol.in_ring(i)
            && mol.is_sp3(i)
            && mol.atom(i).hydrogens == 2
            && mol.degree(i) == 2
            && mol
                .neighbors(i)
                .iter()
                .all(|&j| is(mol, j, CARBON) && mol.is_sp3(j) && !mol.in_ring(j))
    }));
    // fr_urea: N-C(=O)-N
    v.push(count_atoms(mol, |i| {
        is_carbonyl_c(mol, i)
            && mol
                .neighbors(i)
                .iter()
                .filter(|&&j| is(mol, j, NITROGEN))
                .count()
                >= 2
    }));

    debug_assert_eq!(v.len(), FRAGMENT_NAMES.len());
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    fn get(s: &str, name: &str) -> f64 {
        let mol = parse_smiles(s).unwrap();
        let counts = all(&mol);
        let idx = FRAGMENT_NAMES.iter().position(|&n| n == name).unwrap();
        counts[idx]
    }

    #[test]
    fn test_names_unique() {
        let mut names = FRAGMENT_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FRAGMENT_NAMES.len());
    }

    #[test]
    fn test_ester_in_ethyl_acetate() {
        assert_eq!(get("CC(=O)OCC", "fr_ester"), 1.0);
        assert_eq!(get("CC(=O)OCC", "fr_COO"), 0.0);
    }

    #[test]
    fn test_carboxylic_acid() {
        assert_eq!(get("CC(=O)O", "fr_COO"), 1.0);
        assert_eq!(get("CC(=O)[O-]", "fr_COO2"), 1.0);
        assert_eq!(get("CC(=O)[O-]", "fr_COO"), 0.0);
    }

    #[test]
    fn test_benzene_and_phenol() {
        assert_eq!(get("c1ccccc1", "fr_benzene"), 1.0);
        assert_eq!(get("Oc1ccccc1", "fr_phenol"), 1.0);
        assert_eq!(get("CCO", "fr_phenol"), 0.0);
    }

    #[test]
    fn test_amide_and_urea() {
        assert_eq!(get("CC(=O)NC", "fr_amide"), 1.0);
        assert_eq!(get("NC(=O)N", "fr_urea"), 1.0);
        assert_eq!(get("NC(=O)N", "fr_priamide"), 1.0);
    }

    #[test]
    fn test_halogen_count() {
        assert_eq!(get("ClCCBr", "fr_halogen"), 2.0);
        assert_eq!(get("ClCCBr", "fr_alkyl_halide"), 2.0);
    }

    #[test]
    fn test_tertiary_amine() {
        assert_eq!(get("CCN(CC)CC", "fr_NH0"), 1.0);
        assert_eq!(get("CCN(CC)CC", "fr_NH2"), 0.0);
    }

    #[test]
    fn test_ether_not_ester() {
        assert_eq!(get("CCOCC", "fr_ether"), 1.0);
        assert_eq!(get("CC(=O)OCC", "fr_ether"), 0.0);
    }

    #[test]
    fn test_nitrile() {
        assert_eq!(get("CC#N", "fr_nitrile"), 1.0);
    }

    #[test]
    fn test_pyridine_ring() {
        assert_eq!(get("c1ccncc1", "fr_pyridine"), 1.0);
        assert_eq!(get("c1ccncc1", "fr_benzene"), 0.0);
    }

    #[test]
    fn test_unbranched_alkane_interior() {
        // hexane: four interior CH2, two of which have a terminal neighbor
        // still count (neighbors only need to be acyclic sp3 carbons)
        assert_eq!(get("CCCCCC", "fr_unbrch_alkane"), 4.0);
    }

    #[test]
    fn test_quaternary_nitrogen() {
        assert_eq!(get("C[N+](C)(C)C", "fr_quatN"), 1.0);
    }

    #[test]
    fn test_disulfide_not_sulfide() {
        assert_eq!(get("CSSC", "fr_sulfide"), 0.0);
        assert_eq!(get("CSC", "fr_sulfide"), 1.0);
    }
}
