//! Per-element data tables for the supported element set.

/// Static data for one element.
#[derive(Debug, Clone, Copy)]
pub struct ElementData {
    pub number: u8,
    pub symbol: &'static str,
    /// Average atomic mass (g/mol).
    pub mass: f64,
    /// Monoisotopic mass of the most abundant isotope.
    pub exact_mass: f64,
    /// Pauling electronegativity.
    pub electronegativity: f64,
    /// Principal quantum number of the valence shell.
    pub quantum_period: u8,
    /// Valence electron count.
    pub valence_electrons: u8,
    /// Covalent radius (Å).
    pub r_covalent: f64,
    /// Van der Waals radius (Å).
    pub r_vdw: f64,
    /// Standard valences, smallest first.
    pub valences: &'static [u8],
}

const TABLE: &[ElementData] = &[
    ElementData { number: 1,  symbol: "H",  mass: 1.008,   exact_mass: 1.00783,   electronegativity: 2.20, quantum_period: 1, valence_electrons: 1,  r_covalent: 0.31, r_vdw: 1.20, valences: &[1] },
    ElementData { number: 5,  symbol: "B",  mass: 10.811,  exact_mass: 11.00931,  electronegativity: 2.04, quantum_period: 2, valence_electrons: 3,  r_covalent: 0.84, r_vdw: 1.92, valences: &[3] },
    ElementData { number: 6,  symbol: "C",  mass: 12.011,  exact_mass: 12.0,      electronegativity: 2.55, quantum_period: 2, valence_electrons: 4,  r_covalent: 0.76, r_vdw: 1.70, valences: &[4] },
    ElementData { number: 7,  symbol: "N",  mass: 14.007,  exact_mass: 14.00307,  electronegativity: 3.04, quantum_period: 2, valence_electrons: 5,  r_covalent: 0.71, r_vdw: 1.55, valences: &[3, 5] },
    ElementData { number: 8,  symbol: "O",  mass: 15.999,  exact_mass: 15.99491,  electronegativity: 3.44, quantum_period: 2, valence_electrons: 6,  r_covalent: 0.66, r_vdw: 1.52, valences: &[2] },
    ElementData { number: 9,  symbol: "F",  mass: 18.998,  exact_mass: 18.99840,  electronegativity: 3.98, quantum_period: 2, valence_electrons: 7,  r_covalent: 0.57, r_vdw: 1.47, valences: &[1] },
    ElementData { number: 11, symbol: "Na", mass: 22.990,  exact_mass: 22.98977,  electronegativity: 0.93, quantum_period: 3, valence_electrons: 1,  r_covalent: 1.66, r_vdw: 2.27, valences: &[1] },
    ElementData { number: 12, symbol: "Mg", mass: 24.305,  exact_mass: 23.98504,  electronegativity: 1.31, quantum_period: 3, valence_electrons: 2,  r_covalent: 1.41, r_vdw: 1.73, valences: &[2] },
    ElementData { number: 14, symbol: "Si", mass: 28.086,  exact_mass: 27.97693,  electronegativity: 1.90, quantum_period: 3, valence_electrons: 4,  r_covalent: 1.11, r_vdw: 2.10, valences: &[4] },
    ElementData { number: 15, symbol: "P",  mass: 30.974,  exact_mass: 30.97376,  electronegativity: 2.19, quantum_period: 3, valence_electrons: 5,  r_covalent: 1.07, r_vdw: 1.80, valences: &[3, 5] },
    ElementData { number: 16, symbol: "S",  mass: 32.06,   exact_mass: 31.97207,  electronegativity: 2.58, quantum_period: 3, valence_electrons: 6,  r_covalent: 1.05, r_vdw: 1.80, valences: &[2, 4, 6] },
    ElementData { number: 17, symbol: "Cl", mass: 35.45,   exact_mass: 34.96885,  electronegativity: 3.16, quantum_period: 3, valence_electrons: 7,  r_covalent: 1.02, r_vdw: 1.75, valences: &[1] },
    ElementData { number: 19, symbol: "K",  mass: 39.098,  exact_mass: 38.96371,  electronegativity: 0.82, quantum_period: 4, valence_electrons: 1,  r_covalent: 2.03, r_vdw: 2.75, valences: &[1] },
    ElementData { number: 20, symbol: "Ca", mass: 40.078,  exact_mass: 39.96259,  electronegativity: 1.00, quantum_period: 4, valence_electrons: 2,  r_covalent: 1.76, r_vdw: 2.31, valences: &[2] },
    ElementData { number: 26, symbol: "Fe", mass: 55.845,  exact_mass: 55.93494,  electronegativity: 1.83, quantum_period: 4, valence_electrons: 8,  r_covalent: 1.32, r_vdw: 2.05, valences: &[2, 3] },
    ElementData { number: 30, symbol: "Zn", mass: 65.38,   exact_mass: 63.92914,  electronegativity: 1.65, quantum_period: 4, valence_electrons: 2,  r_covalent: 1.22, r_vdw: 2.10, valences: &[2] },
    ElementData { number: 34, symbol: "Se", mass: 78.971,  exact_mass: 79.91652,  electronegativity: 2.55, quantum_period: 4, valence_electrons: 6,  r_covalent: 1.20, r_vdw: 1.90, valences: &[2, 4, 6] },
    ElementData { number: 35, symbol: "Br", mass: 79.904,  exact_mass: 78.91834,  electronegativity: 2.96, quantum_period: 4, valence_electrons: 7,  r_covalent: 1.20, r_vdw: 1.85, valences: &[1] },
    ElementData { number: 53, symbol: "I",  mass: 126.904, exact_mass: 126.90447, electronegativity: 2.66, quantum_period: 5, valence_electrons: 7,  r_covalent: 1.39, r_vdw: 1.98, valences: &[1] },
];

/// Looks up element data by atomic number.
pub fn data(number: u8) -> &'static ElementData {
    TABLE
        .iter()
        .find(|e| e.number == number)
        .unwrap_or(&TABLE[2]) // unknown elements fall back to carbon
}

/// Looks up an atomic number by element symbol (case-sensitive).
pub fn by_symbol(symbol: &str) -> Option<u8> {
    TABLE.iter().find(|e| e.symbol == symbol).map(|e| e.number)
}

pub const HYDROGEN: u8 = 1;
pub const BORON: u8 = 5;
pub const CARBON: u8 = 6;
pub const NITROGEN: u8 = 7;
pub const OXYGEN: u8 = 8;
pub const FLUORINE: u8 = 9;
pub const SILICON: u8 = 14;
pub const PHOSPHORUS: u8 = 15;
pub const SULFUR: u8 = 16;
pub const CHLORINE: u8 = 17;
pub const BROMINE: u8 = 35;
pub const IODINE: u8 = 53;

/// Elements allowed unbracketed in SMILES, with their aromatic lowercase forms.
pub fn organic_subset(symbol: &str) -> Option<(u8, bool)> {
    match symbol {
        "B" => Some((BORON, false)),
        "C" => Some((CARBON, false)),
        "N" => Some((NITROGEN, false)),
        "O" => Some((OXYGEN, false)),
        "P" => Some((PHOSPHORUS, false)),
        "S" => Some((SULFUR, false)),
        "F" => Some((FLUORINE, false)),
        "Cl" => Some((CHLORINE, false)),
        "Br" => Some((BROMINE, false)),
        "I" => Some((IODINE, false)),
        "b" => Some((BORON, true)),
        "c" => Some((CARBON, true)),
        "n" => Some((NITROGEN, true)),
        "o" => Some((OXYGEN, true)),
        "p" => Some((PHOSPHORUS, true)),
        "s" => Some((SULFUR, true)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!(by_symbol("C"), Some(CARBON));
        assert_eq!(by_symbol("Cl"), Some(CHLORINE));
        assert_eq!(by_symbol("Xx"), None);
    }

    #[test]
    fn test_carbon_data() {
        let c = data(CARBON);
        assert_eq!(c.symbol, "C");
        assert!((c.mass - 12.011).abs() < 1e-9);
        assert_eq!(c.valences, &[4]);
    }

    #[test]
    fn test_organic_subset_aromatic() {
        assert_eq!(organic_subset("c"), Some((CARBON, true)));
        assert_eq!(organic_subset("N"), Some((NITROGEN, false)));
        assert_eq!(organic_subset("Na"), None);
    }
}
