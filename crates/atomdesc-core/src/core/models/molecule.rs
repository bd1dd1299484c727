use super::atom::Atom;
use super::topology::{Bond, BondOrder};

/// Ordered collection of named string properties attached to a molecule.
///
/// Insertion order is preserved. Setting an existing name replaces its value
/// in place, so the position of a property never changes once written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A bonded neighbour of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub atom: usize,
    pub order: BondOrder,
}

/// Represents one molecule record: atoms, bonds, a title and named properties.
///
/// Atoms are addressed by their 0-based index in file order. The adjacency
/// list is maintained alongside the bond list so neighbour queries are O(degree).
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// The record title (first header line of an SD record).
    pub title: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    adjacency: Vec<Vec<Neighbor>>,
    properties: Properties,
}

impl Molecule {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Appends an atom and returns its index.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        self.atoms.len() - 1
    }

    /// Adds a bond between two existing atoms.
    ///
    /// Adding a bond that already exists succeeds without creating a
    /// duplicate. Self-bonds and out-of-range indices are rejected.
    ///
    /// # Return
    ///
    /// Returns `Some(())` if successful, otherwise `None`.
    pub fn add_bond(&mut self, atom1: usize, atom2: usize, order: BondOrder) -> Option<()> {
        if atom1 == atom2 || atom1 >= self.atoms.len() || atom2 >= self.atoms.len() {
            return None;
        }
        if self.adjacency[atom1].iter().any(|n| n.atom == atom2) {
            return Some(());
        }

        self.bonds.push(Bond::new(atom1, atom2, order));
        self.adjacency[atom1].push(Neighbor { atom: atom2, order });
        self.adjacency[atom2].push(Neighbor { atom: atom1, order });
        Some(())
    }

    #[inline]
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Returns the bonded neighbours of an atom; empty for unknown indices.
    pub fn neighbors(&self, index: usize) -> &[Neighbor] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn bond_order_between(&self, atom1: usize, atom2: usize) -> Option<BondOrder> {
        self.neighbors(atom1)
            .iter()
            .find(|n| n.atom == atom2)
            .map(|n| n.order)
    }

    /// Number of directly bonded atoms, hydrogens included.
    #[inline]
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Number of directly bonded non-hydrogen atoms.
    pub fn heavy_degree(&self, index: usize) -> usize {
        self.neighbors(index)
            .iter()
            .filter(|n| !self.atoms[n.atom].is_hydrogen())
            .count()
    }

    /// Sum of bond valence contributions around an atom (aromatic = 1.5).
    pub fn bond_order_sum(&self, index: usize) -> f64 {
        self.neighbors(index)
            .iter()
            .map(|n| n.order.valence_contribution())
            .sum()
    }

    pub fn set_formal_charge(&mut self, index: usize, charge: i8) -> Option<()> {
        self.atoms.get_mut(index)?.formal_charge = charge;
        Some(())
    }

    #[inline]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    #[inline]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.set(name, value);
    }
}
