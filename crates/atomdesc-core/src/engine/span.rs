use crate::core::graph::paths::ShortestPathMatrix;
use crate::core::models::molecule::Molecule;

/// Topological span of every atom of a molecule.
///
/// Distances are measured over the full graph, so paths may pass through
/// hydrogens, but only non-hydrogen atoms count as endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMetrics {
    highest: Vec<Option<u32>>,
    longest: Option<u32>,
}

impl SpanMetrics {
    pub fn compute(molecule: &Molecule, paths: &ShortestPathMatrix) -> Self {
        let heavy: Vec<bool> = molecule.atoms().iter().map(|a| !a.is_hydrogen()).collect();

        let highest: Vec<Option<u32>> = (0..molecule.atom_count())
            .map(|i| {
                if !heavy[i] {
                    return None;
                }
                paths
                    .row(i)
                    .iter()
                    .zip(&heavy)
                    .filter(|(_, is_heavy)| **is_heavy)
                    .filter_map(|(distance, _)| *distance)
                    .max()
            })
            .collect();
        let longest = highest.iter().flatten().copied().max();

        Self { highest, longest }
    }

    /// Largest distance from `atom` to any reachable non-hydrogen atom;
    /// `None` for hydrogens.
    pub fn highest(&self, atom: usize) -> Option<u32> {
        self.highest.get(atom).copied().flatten()
    }

    /// Largest distance between any two non-hydrogen atoms of the molecule.
    pub fn longest(&self) -> Option<u32> {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.highest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highest.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::topology::BondOrder;
    use nalgebra::Point3;

    fn molecule(symbols: &[&str], bonds: &[(usize, usize)]) -> Molecule {
        let mut mol = Molecule::new("span");
        for s in symbols {
            mol.add_atom(Atom::from_symbol(s, Point3::origin()));
        }
        for (a, b) in bonds {
            mol.add_bond(*a, *b, BondOrder::Single).unwrap();
        }
        mol
    }

    fn span_of(mol: &Molecule) -> SpanMetrics {
        SpanMetrics::compute(mol, &ShortestPathMatrix::compute(mol))
    }

    #[test]
    fn propanol_span() {
        // C0-C1-C2-O3 with a hydroxyl hydrogen on O3.
        let mol = molecule(&["C", "C", "C", "O", "H"], &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let span = span_of(&mol);
        assert_eq!(span.longest(), Some(3));
        assert_eq!(span.highest(0), Some(3));
        assert_eq!(span.highest(1), Some(2));
        assert_eq!(span.highest(2), Some(2));
        assert_eq!(span.highest(3), Some(3));
        assert_eq!(span.highest(4), None);
    }

    #[test]
    fn hydrogens_are_not_endpoints_but_are_traversed() {
        // Cl-H-Cl bridge: the chlorines are two bonds apart through the hydrogen.
        let mol = molecule(&["Cl", "H", "Cl"], &[(0, 1), (1, 2)]);
        let span = span_of(&mol);
        assert_eq!(span.highest(0), Some(2));
        assert_eq!(span.highest(1), None);
        assert_eq!(span.longest(), Some(2));
    }

    #[test]
    fn single_heavy_atom_has_zero_span() {
        let mol = molecule(&["O", "H", "H"], &[(0, 1), (0, 2)]);
        let span = span_of(&mol);
        assert_eq!(span.highest(0), Some(0));
        assert_eq!(span.longest(), Some(0));
    }

    #[test]
    fn all_hydrogen_molecule_has_no_span() {
        let mol = molecule(&["H", "H"], &[(0, 1)]);
        let span = span_of(&mol);
        assert_eq!(span.longest(), None);
        assert_eq!(span.highest(0), None);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn disconnected_fragments_are_skipped() {
        let mol = molecule(&["C", "C", "Na"], &[(0, 1)]);
        let span = span_of(&mol);
        assert_eq!(span.highest(0), Some(1));
        assert_eq!(span.highest(2), Some(0));
        assert_eq!(span.longest(), Some(1));
    }

    #[test]
    fn highest_never_exceeds_longest() {
        let mol = molecule(
            &["C", "C", "C", "C", "N", "H", "H"],
            &[(0, 1), (1, 2), (2, 3), (1, 4), (4, 5), (0, 6)],
        );
        let span = span_of(&mol);
        let longest = span.longest().unwrap();
        for i in 0..mol.atom_count() {
            if let Some(h) = span.highest(i) {
                assert!(h <= longest);
            }
        }
    }
}
