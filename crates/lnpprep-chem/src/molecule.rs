//! Molecular graph: atoms, bonds, implicit hydrogens, ring perception.

use crate::elements;

/// Bond order between two heavy atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Numeric order used in valence and topology computations.
    pub fn value(&self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Atom {
    /// Atomic number.
    pub element: u8,
    pub aromatic: bool,
    pub charge: i8,
    pub isotope: Option<u16>,
    /// Total attached hydrogens (explicit from brackets, or filled in).
    pub hydrogens: u8,
}

#[derive(Debug, Clone)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
}

impl Bond {
    /// The atom on the far side of this bond from `from`.
    pub fn other(&self, from: usize) -> usize {
        if self.a == from {
            self.b
        } else {
            self.a
        }
    }
}

/// Distance sentinel for atoms in disconnected fragments.
pub const UNREACHABLE: u32 = u32::MAX / 2;

/// A parsed molecule. Hydrogens are implicit (stored as per-atom counts);
/// every graph node is a heavy atom unless the input spelled `[H]` out.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    neighbors: Vec<Vec<usize>>,
    atom_bonds: Vec<Vec<usize>>,
    rings: Vec<Vec<usize>>,
}

impl Molecule {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom(&self, i: usize) -> &Atom {
        &self.atoms[i]
    }

    /// Neighboring atom indices of atom `i`.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    /// Bond indices incident to atom `i`.
    pub fn atom_bond_ids(&self, i: usize) -> &[usize] {
        &self.atom_bonds[i]
    }

    /// Heavy-atom degree.
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors[i].len()
    }

    pub fn bond(&self, id: usize) -> &Bond {
        &self.bonds[id]
    }

    /// The bond joining atoms `a` and `b`, if any.
    pub fn bond_between(&self, a: usize, b: usize) -> Option<&Bond> {
        self.atom_bonds[a]
            .iter()
            .map(|&id| &self.bonds[id])
            .find(|bd| bd.other(a) == b)
    }

    /// Sum of bond orders at atom `i` (aromatic counts 1.5).
    pub fn bond_order_sum(&self, i: usize) -> f64 {
        self.atom_bonds[i]
            .iter()
            .map(|&id| self.bonds[id].order.value())
            .sum()
    }

    /// Number of double bonds at atom `i`.
    pub fn double_bond_count(&self, i: usize) -> usize {
        self.atom_bonds[i]
            .iter()
            .filter(|&&id| self.bonds[id].order == BondOrder::Double)
            .count()
    }

    /// Number of triple bonds at atom `i`.
    pub fn triple_bond_count(&self, i: usize) -> usize {
        self.atom_bonds[i]
            .iter()
            .filter(|&&id| self.bonds[id].order == BondOrder::Triple)
            .count()
    }

    /// A neighbor of `i` joined by a bond of `order` and matching `element`,
    /// if one exists.
    pub fn neighbor_via(&self, i: usize, order: BondOrder, element: u8) -> Option<usize> {
        self.atom_bonds[i].iter().find_map(|&id| {
            let bd = &self.bonds[id];
            let j = bd.other(i);
            (bd.order == order && self.atoms[j].element == element).then_some(j)
        })
    }

    /// sp3 when not aromatic and no multiple bonds.
    pub fn is_sp3(&self, i: usize) -> bool {
        !self.atoms[i].aromatic
            && self.double_bond_count(i) == 0
            && self.triple_bond_count(i) == 0
    }

    pub fn is_sp2(&self, i: usize) -> bool {
        self.atoms[i].aromatic
            || (self.double_bond_count(i) == 1 && self.triple_bond_count(i) == 0)
    }

    pub fn is_sp(&self, i: usize) -> bool {
        self.triple_bond_count(i) > 0 || self.double_bond_count(i) >= 2
    }

    /// Perceived rings (shortest cycle per spanning-tree chord, deduplicated).
    pub fn rings(&self) -> &[Vec<usize>] {
        &self.rings
    }

    pub fn in_ring(&self, i: usize) -> bool {
        self.rings.iter().any(|r| r.contains(&i))
    }

    pub fn bond_in_ring(&self, bond_id: usize) -> bool {
        let bd = &self.bonds[bond_id];
        self.rings.iter().any(|r| {
            let n = r.len();
            (0..n).any(|k| {
                let (x, y) = (r[k], r[(k + 1) % n]);
                (x == bd.a && y == bd.b) || (x == bd.b && y == bd.a)
            })
        })
    }

    /// True when every atom of the ring carries the aromatic flag.
    pub fn ring_is_aromatic(&self, ring: &[usize]) -> bool {
        ring.iter().all(|&i| self.atoms[i].aromatic)
    }

    /// True when the ring has no aromatic atoms and no multiple bonds.
    pub fn ring_is_saturated(&self, ring: &[usize]) -> bool {
        !self.ring_is_aromatic(ring)
            && ring
                .iter()
                .all(|&i| !self.atoms[i].aromatic && self.double_bond_count(i) == 0 && self.triple_bond_count(i) == 0)
    }

    /// All-pairs topological distances; [`UNREACHABLE`] across fragments.
    pub fn distance_matrix(&self) -> Vec<Vec<u32>> {
        let n = self.atoms.len();
        let mut dist = vec![vec![UNREACHABLE; n]; n];
        for start in 0..n {
            let row = &mut dist[start];
            row[start] = 0;
            let mut queue = std::collections::VecDeque::from([start]);
            while let Some(i) = queue.pop_front() {
                for &j in &self.neighbors[i] {
                    if row[j] == UNREACHABLE {
                        row[j] = row[i] + 1;
                        queue.push_back(j);
                    }
                }
            }
        }
        dist
    }

    /// All simple paths with `length` bonds, each counted once.
    pub fn simple_paths(&self, length: usize) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        let mut path = Vec::with_capacity(length + 1);
        for start in 0..self.atoms.len() {
            path.push(start);
            self.extend_path(&mut path, length, &mut out);
            path.pop();
        }
        out
    }

    fn extend_path(&self, path: &mut Vec<usize>, length: usize, out: &mut Vec<Vec<usize>>) {
        if path.len() == length + 1 {
            // keep one direction only
            if path[0] < path[path.len() - 1]
                || (path[0] == path[path.len() - 1] && path[1] < path[path.len() - 2])
            {
                out.push(path.clone());
            }
            return;
        }
        let last = *path.last().expect("path is never empty");
        for &j in &self.neighbors[last] {
            if !path.contains(&j) {
                path.push(j);
                self.extend_path(path, length, out);
                path.pop();
            }
        }
    }

    /// Total molecular weight including implicit hydrogens.
    pub fn molecular_weight(&self) -> f64 {
        self.atoms
            .iter()
            .map(|a| {
                elements::data(a.element).mass + a.hydrogens as f64 * elements::data(elements::HYDROGEN).mass
            })
            .sum()
    }
}

/// Incremental construction used by the SMILES parser.
#[derive(Debug, Default)]
pub struct MoleculeBuilder {
    atoms: Vec<Atom>,
    explicit_h: Vec<Option<u8>>,
    bonds: Vec<Bond>,
}

impl MoleculeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn atom_is_aromatic(&self, i: usize) -> bool {
        self.atoms[i].aromatic
    }

    pub fn add_atom(
        &mut self,
        element: u8,
        aromatic: bool,
        charge: i8,
        isotope: Option<u16>,
        explicit_h: Option<u8>,
    ) -> usize {
        self.atoms.push(Atom {
            element,
            aromatic,
            charge,
            isotope,
            hydrogens: explicit_h.unwrap_or(0),
        });
        self.explicit_h.push(explicit_h);
        self.atoms.len() - 1
    }

    pub fn add_bond(&mut self, a: usize, b: usize, order: BondOrder) {
        self.bonds.push(Bond { a, b, order });
    }

    /// Finalizes the graph: adjacency, implicit hydrogens, ring perception.
    pub fn build(self) -> Molecule {
        let n = self.atoms.len();
        let mut neighbors = vec![Vec::new(); n];
        let mut atom_bonds = vec![Vec::new(); n];
        for (id, bd) in self.bonds.iter().enumerate() {
            neighbors[bd.a].push(bd.b);
            neighbors[bd.b].push(bd.a);
            atom_bonds[bd.a].push(id);
            atom_bonds[bd.b].push(id);
        }

        let mut mol = Molecule {
            atoms: self.atoms,
            bonds: self.bonds,
            neighbors,
            atom_bonds,
            rings: Vec::new(),
        };

        // Implicit hydrogens for organic-subset atoms (bracket atoms keep
        // their explicit count, including zero).
        for i in 0..n {
            if self.explicit_h[i].is_none() {
                let needed = mol.bond_order_sum(i).round() as i32;
                let valences = elements::data(mol.atoms[i].element).valences;
                let target = valences
                    .iter()
                    .map(|&v| v as i32)
                    .find(|&v| v >= needed)
                    .unwrap_or(needed);
                mol.atoms[i].hydrogens = (target - needed).max(0) as u8;
            }
        }

        mol.rings = perceive_rings(&mol);
        mol
    }
}

/// Shortest cycle through each spanning-tree chord, deduplicated by atom set.
fn perceive_rings(mol: &Molecule) -> Vec<Vec<usize>> {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut tree_edge = vec![false; mol.bond_count()];

    // BFS spanning forest marking tree edges
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut queue = std::collections::VecDeque::from([start]);
        while let Some(i) = queue.pop_front() {
            for &bid in mol.atom_bond_ids(i) {
                let j = mol.bond(bid).other(i);
                if !visited[j] {
                    visited[j] = true;
                    tree_edge[bid] = true;
                    queue.push_back(j);
                }
            }
        }
    }

    let mut rings: Vec<Vec<usize>> = Vec::new();
    let mut seen: Vec<std::collections::BTreeSet<usize>> = Vec::new();

    for (chord, bd) in mol.bonds().iter().enumerate() {
        if tree_edge[chord] {
            continue;
        }
        // shortest path a..b avoiding the chord itself
        if let Some(path) = shortest_path_avoiding(mol, bd.a, bd.b, chord) {
            let set: std::collections::BTreeSet<usize> = path.iter().copied().collect();
            if !seen.contains(&set) {
                seen.push(set);
                rings.push(path);
            }
        }
    }
    rings
}

fn shortest_path_avoiding(
    mol: &Molecule,
    from: usize,
    to: usize,
    skip_bond: usize,
) -> Option<Vec<usize>> {
    let n = mol.atom_count();
    let mut prev = vec![usize::MAX; n];
    let mut visited = vec![false; n];
    visited[from] = true;
    let mut queue = std::collections::VecDeque::from([from]);
    while let Some(i) = queue.pop_front() {
        if i == to {
            let mut path = vec![to];
            let mut cur = to;
            while cur != from {
                cur = prev[cur];
                path.push(cur);
            }
            return Some(path);
        }
        for &bid in mol.atom_bond_ids(i) {
            if bid == skip_bond {
                continue;
            }
            let j = mol.bond(bid).other(i);
            if !visited[j] {
                visited[j] = true;
                prev[j] = i;
                queue.push_back(j);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn test_implicit_hydrogens_ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.atom(0).hydrogens, 3);
        assert_eq!(mol.atom(1).hydrogens, 2);
        assert_eq!(mol.atom(2).hydrogens, 1);
    }

    #[test]
    fn test_benzene_ring_perception() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert_eq!(mol.rings().len(), 1);
        assert_eq!(mol.rings()[0].len(), 6);
        assert!(mol.ring_is_aromatic(&mol.rings()[0]));
        // aromatic carbons carry exactly one hydrogen
        assert!((0..6).all(|i| mol.atom(i).hydrogens == 1));
    }

    #[test]
    fn test_fused_rings_naphthalene() {
        let mol = parse_smiles("c1ccc2ccccc2c1").unwrap();
        assert_eq!(mol.atom_count(), 10);
        assert_eq!(mol.rings().len(), 2);
        assert!(mol.rings().iter().all(|r| r.len() == 6));
    }

    #[test]
    fn test_distance_matrix_chain() {
        let mol = parse_smiles("CCCC").unwrap();
        let d = mol.distance_matrix();
        assert_eq!(d[0][3], 3);
        assert_eq!(d[1][2], 1);
    }

    #[test]
    fn test_disconnected_fragments() {
        let mol = parse_smiles("C.O").unwrap();
        let d = mol.distance_matrix();
        assert_eq!(d[0][1], UNREACHABLE);
    }

    #[test]
    fn test_simple_paths_counted_once() {
        let mol = parse_smiles("CCC").unwrap();
        // one path of length 2: 0-1-2
        assert_eq!(mol.simple_paths(2).len(), 1);
        assert_eq!(mol.simple_paths(1).len(), 2);
    }

    #[test]
    fn test_charged_bracket_atom() {
        let mol = parse_smiles("CC(=O)[O-]").unwrap();
        assert_eq!(mol.atom(3).charge, -1);
        assert_eq!(mol.atom(3).hydrogens, 0);
    }
}
