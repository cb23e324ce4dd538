//! Fixed-registry molecular descriptors.
//!
//! [`NAMES`] is the canonical ordering of the full descriptor set. The
//! featurization contract drops the entry at [`IPC_INDEX`] (its magnitude
//! grows combinatorially with molecule size and swamps downstream scaling),
//! so [`compute`] emits [`BLOCK_WIDTH`] values per molecule. Non-finite
//! results are mapped to zero so a block is always usable as model input.

mod charges;
mod counts;
mod crippen;
mod estate;
mod fragments;
mod linalg;
mod surface;
mod topology;

use crate::molecule::Molecule;

/// Number of descriptors in the full registry.
pub const DESCRIPTOR_COUNT: usize = 210;

/// Position of `Ipc` in [`NAMES`], excluded from [`compute`] output.
pub const IPC_INDEX: usize = 42;

/// Width of the per-molecule block emitted by [`compute`].
pub const BLOCK_WIDTH: usize = DESCRIPTOR_COUNT - 1;

/// Canonical descriptor names, in output order.
pub const NAMES: [&str; DESCRIPTOR_COUNT] = [
    "MaxAbsEStateIndex",
    "MaxEStateIndex",
    "MinAbsEStateIndex",
    "MinEStateIndex",
    "qed",
    "SPS",
    "MolWt",
    "HeavyAtomMolWt",
    "ExactMolWt",
    "NumValenceElectrons",
    "NumRadicalElectrons",
    "MaxPartialCharge",
    "MinPartialCharge",
    "MaxAbsPartialCharge",
    "MinAbsPartialCharge",
    "FpDensityMorgan1",
    "FpDensityMorgan2",
    "FpDensityMorgan3",
    "BCUT2D_MWHI",
    "BCUT2D_MWLOW",
    "BCUT2D_CHGHI",
    "BCUT2D_CHGLO",
    "BCUT2D_LOGPHI",
    "BCUT2D_LOGPLOW",
    "BCUT2D_MRHI",
    "BCUT2D_MRLOW",
    "AvgIpc",
    "BalabanJ",
    "BertzCT",
    "Chi0",
    "Chi0n",
    "Chi0v",
    "Chi1",
    "Chi1n",
    "Chi1v",
    "Chi2n",
    "Chi2v",
    "Chi3n",
    "Chi3v",
    "Chi4n",
    "Chi4v",
    "HallKierAlpha",
    "Ipc",
    "Kappa1",
    "Kappa2",
    "Kappa3",
    "LabuteASA",
    "PEOE_VSA1",
    "PEOE_VSA2",
    "PEOE_VSA3",
    "PEOE_VSA4",
    "PEOE_VSA5",
    "PEOE_VSA6",
    "PEOE_VSA7",
    "PEOE_VSA8",
    "PEOE_VSA9",
    "PEOE_VSA10",
    "PEOE_VSA11",
    "PEOE_VSA12",
    "PEOE_VSA13",
    "PEOE_VSA14",
    "SMR_VSA1",
    "SMR_VSA2",
    "SMR_VSA3",
    "SMR_VSA4",
    "SMR_VSA5",
    "SMR_VSA6",
    "SMR_VSA7",
    "SMR_VSA8",
    "SMR_VSA9",
    "SMR_VSA10",
    "SlogP_VSA1",
    "SlogP_VSA2",
    "SlogP_VSA3",
    "SlogP_VSA4",
    "SlogP_VSA5",
    "SlogP_VSA6",
    "SlogP_VSA7",
    "SlogP_VSA8",
    "SlogP_VSA9",
    "SlogP_VSA10",
    "SlogP_VSA11",
    "SlogP_VSA12",
    "TPSA",
    "EState_VSA1",
    "EState_VSA2",
    "EState_VSA3",
    "EState_VSA4",
    "EState_VSA5",
    "EState_VSA6",
    "EState_VSA7",
    "EState_VSA8",
    "EState_VSA9",
    "EState_VSA10",
    "EState_VSA11",
    "VSA_EState1",
    "VSA_EState2",
    "VSA_EState3",
    "VSA_EState4",
    "VSA_EState5",
    "VSA_EState6",
    "VSA_EState7",
    "VSA_EState8",
    "VSA_EState9",
    "VSA_EState10",
    "FractionCSP3",
    "HeavyAtomCount",
    "NHOHCount",
    "NOCount",
    "NumAliphaticCarbocycles",
    "NumAliphaticHeterocycles",
    "NumAliphaticRings",
    "NumAromaticCarbocycles",
    "NumAromaticHeterocycles",
    "NumAromaticRings",
    "NumHAcceptors",
    "NumHDonors",
    "NumHeteroatoms",
    "NumRotatableBonds",
    "NumSaturatedCarbocycles",
    "NumSaturatedHeterocycles",
    "NumSaturatedRings",
    "RingCount",
    "MolLogP",
    "MolMR",
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

/// Names of the block [`compute`] emits, `Ipc` excluded.
pub fn block_names() -> Vec<&'static str> {
    NAMES
        .iter()
        .enumerate()
        .filter_map(|(i, &n)| (i != IPC_INDEX).then_some(n))
        .collect()
}

/// Shared per-molecule intermediates.
struct Ctx {
    dist: Vec<Vec<u32>>,
    charges: Vec<f64>,
    estate: Vec<f64>,
    asa: Vec<f64>,
    logp: Vec<f64>,
    mr: Vec<f64>,
}

impl Ctx {
    fn new(mol: &Molecule) -> Self {
        let dist = mol.distance_matrix();
        let estate = estate::estate_indices(mol, &dist);
        let (logp, mr) = crippen::atom_contributions(mol);
        Ctx {
            charges: charges::gasteiger_charges(mol),
            asa: surface::labute_asa(mol),
            dist,
            estate,
            logp,
            mr,
        }
    }
}

/// All descriptors in registry order, `Ipc` included, no sanitization.
pub fn compute_full(mol: &Molecule) -> Vec<f64> {
    let ctx = Ctx::new(mol);
    let mut v = Vec::with_capacity(DESCRIPTOR_COUNT);

    let max_q = charges::max_partial_charge(&ctx.charges);
    let min_q = charges::min_partial_charge(&ctx.charges);
    let mol_logp: f64 = ctx.logp.iter().sum();
    let mol_mr: f64 = ctx.mr.iter().sum();
    let tpsa = surface::tpsa(mol);
    let rotatable = surface::rotatable_bonds(mol);

    v.push(estate::max_abs_estate(&ctx.estate));
    v.push(estate::max_estate(&ctx.estate));
    v.push(estate::min_abs_estate(&ctx.estate));
    v.push(estate::min_estate(&ctx.estate));
    v.push(counts::qed(mol, mol_logp, tpsa, rotatable));
    v.push(counts::spacial_score(mol));
    v.push(mol.molecular_weight());
    v.push(counts::heavy_atom_mol_wt(mol));
    v.push(counts::exact_mol_wt(mol));
    v.push(counts::num_valence_electrons(mol));
    // radical electrons are not representable in the input grammar
    v.push(0.0);
    v.push(max_q);
    v.push(min_q);
    v.push(max_q.abs().max(min_q.abs()));
    v.push(max_q.abs().min(min_q.abs()));
    v.push(topology::fp_density_morgan(mol, 1));
    v.push(topology::fp_density_morgan(mol, 2));
    v.push(topology::fp_density_morgan(mol, 3));

    let masses = charges::mass_vector(mol);
    for diag in [&masses, &ctx.charges, &ctx.logp, &ctx.mr] {
        let (hi, lo) = charges::bcut(mol, diag);
        v.push(hi);
        v.push(lo);
    }

    v.push(topology::ipc(mol, true));
    v.push(topology::balaban_j(mol, &ctx.dist));
    v.push(topology::bertz_ct(mol));
    v.push(topology::chi0(mol));
    v.push(topology::chi0n(mol));
    v.push(topology::chi0v(mol));
    v.push(topology::chi1(mol));
    v.push(topology::chi1n(mol));
    v.push(topology::chi1v(mol));
    for len in 2..=4 {
        v.push(topology::chi_n(mol, len));
        v.push(topology::chi_v(mol, len));
    }
    v.push(topology::hall_kier_alpha(mol));
    v.push(topology::ipc(mol, false));
    v.push(topology::kappa1(mol));
    v.push(topology::kappa2(mol));
    v.push(topology::kappa3(mol));
    v.push(ctx.asa.iter().sum());

    for bin in 0..=surface::PEOE_BOUNDS.len() {
        v.push(surface::bin_sum(&ctx.charges, &ctx.asa, &surface::PEOE_BOUNDS, bin));
    }
    for bin in 0..=surface::SMR_BOUNDS.len() {
        v.push(surface::bin_sum(&ctx.mr, &ctx.asa, &surface::SMR_BOUNDS, bin));
    }
    for bin in 0..=surface::SLOGP_BOUNDS.len() {
        v.push(surface::bin_sum(&ctx.logp, &ctx.asa, &surface::SLOGP_BOUNDS, bin));
    }
    v.push(tpsa);
    for bin in 0..=surface::ESTATE_BOUNDS.len() {
        v.push(surface::bin_sum(&ctx.estate, &ctx.asa, &surface::ESTATE_BOUNDS, bin));
    }
    for bin in 0..=surface::VSA_BOUNDS.len() {
        v.push(surface::bin_sum(&ctx.asa, &ctx.estate, &surface::VSA_BOUNDS, bin));
    }

    v.push(counts::fraction_csp3(mol));
    v.push(counts::heavy_atom_count(mol));
    v.push(counts::nhoh_count(mol));
    v.push(counts::no_count(mol));
    v.push(counts::num_aliphatic_carbocycles(mol));
    v.push(counts::num_aliphatic_heterocycles(mol));
    v.push(counts::num_aliphatic_rings(mol));
    v.push(counts::num_aromatic_carbocycles(mol));
    v.push(counts::num_aromatic_heterocycles(mol));
    v.push(counts::num_aromatic_rings(mol));
    v.push(counts::num_h_acceptors(mol));
    v.push(counts::num_h_donors(mol));
    v.push(counts::num_heteroatoms(mol));
    v.push(rotatable);
    v.push(counts::num_saturated_carbocycles(mol));
    v.push(counts::num_saturated_heterocycles(mol));
    v.push(counts::num_saturated_rings(mol));
    v.push(counts::ring_count(mol));
    v.push(mol_logp);
    v.push(mol_mr);

    v.extend(fragments::all(mol));

    debug_assert_eq!(v.len(), DESCRIPTOR_COUNT);
    v
}

/// The featurization block: registry order with `Ipc` removed and non-finite
/// values mapped to 0.0.
pub fn compute(mol: &Molecule) -> Vec<f64> {
    let mut full = compute_full(mol);
    full.remove(IPC_INDEX);
    for v in &mut full {
        if !v.is_finite() {
            *v = 0.0;
        }
    }
    full
}

#[cfg(test)]
mod tests {
    use super::fragments::FRAGMENT_NAMES;
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn test_names_match_count() {
        assert_eq!(NAMES.len(), DESCRIPTOR_COUNT);
        assert_eq!(NAMES[IPC_INDEX], "Ipc");
        assert_eq!(FRAGMENT_NAMES.len(), 85);
        assert_eq!(&NAMES[DESCRIPTOR_COUNT - 85..], &FRAGMENT_NAMES[..]);
    }

    #[test]
    fn test_names_unique() {
        let mut names = NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DESCRIPTOR_COUNT);
    }

    #[test]
    fn test_block_width() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(compute(&mol).len(), BLOCK_WIDTH);
        assert_eq!(compute_full(&mol).len(), DESCRIPTOR_COUNT);
        assert_eq!(block_names().len(), BLOCK_WIDTH);
        assert!(!block_names().contains(&"Ipc"));
    }

    #[test]
    fn test_block_all_finite() {
        for s in ["CCO", "c1ccccc1", "CC(=O)Oc1ccccc1C(=O)O", "C", "CCCCCCCCCCCCCCCC"] {
            let mol = parse_smiles(s).unwrap();
            assert!(
                compute(&mol).iter().all(|v| v.is_finite()),
                "non-finite value for {s}"
            );
        }
    }

    #[test]
    fn test_block_not_all_zero() {
        let mol = parse_smiles("CCO").unwrap();
        let block = compute(&mol);
        assert!(block.iter().any(|&v| v != 0.0));
    }

    #[test]
    fn test_deterministic() {
        let s = "CCCCCCCCCC(=O)OCCN(C)CCOC(=O)CCCCCCCCC";
        let a = compute(&parse_smiles(s).unwrap());
        let b = compute(&parse_smiles(s).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_mol_wt_position() {
        let mol = parse_smiles("C").unwrap();
        let full = compute_full(&mol);
        let idx = NAMES.iter().position(|&n| n == "MolWt").unwrap();
        // methane: 16.04 g/mol
        assert!((full[idx] - 16.043).abs() < 0.1);
    }

    #[test]
    fn test_ring_counts_via_names() {
        let mol = parse_smiles("c1ccc2ccccc2c1").unwrap();
        let full = compute_full(&mol);
        let at = |name: &str| full[NAMES.iter().position(|&n| n == name).unwrap()];
        assert_eq!(at("RingCount"), 2.0);
        assert_eq!(at("NumAromaticRings"), 2.0);
        assert_eq!(at("NumSaturatedRings"), 0.0);
    }
}
