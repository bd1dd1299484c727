const HYDROGEN_SYMBOL: &str = "H";

/// Per-atom result row produced while annotating a molecule.
///
/// Descriptor values are stored already rendered, in catalog order, so the
/// record can be written to any tabular sink without knowing the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Title of the owning molecule.
    pub title: String,
    /// 0-based position of the atom within its molecule.
    pub index: usize,
    pub symbol: String,
    /// Matched atom type name, `None` when no type rule applied.
    pub atom_type: Option<String>,
    /// `(descriptor name, rendered value)` pairs in catalog order.
    pub descriptors: Vec<(String, String)>,
    /// Largest topological distance from this atom to any reachable
    /// non-hydrogen atom. `None` for hydrogens.
    pub highest_max_top_dist_in_matrix_row: Option<u32>,
    /// Largest topological distance between non-hydrogen atoms anywhere in
    /// the molecule; identical for every atom of one molecule.
    pub longest_max_top_dist_in_molecule: Option<u32>,
}

impl AtomRecord {
    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        self.symbol == HYDROGEN_SYMBOL
    }

    pub fn descriptor(&self, name: &str) -> Option<&str> {
        self.descriptors
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `longest - highest`, undefined when either operand is.
    pub fn diff_span3(&self) -> Option<i64> {
        let longest = self.longest_max_top_dist_in_molecule?;
        let highest = self.highest_max_top_dist_in_matrix_row?;
        Some(i64::from(longest) - i64::from(highest))
    }

    /// `highest / longest`, undefined when either operand is or when the
    /// molecule's longest distance is zero.
    pub fn rel_span4(&self) -> Option<f64> {
        let longest = self.longest_max_top_dist_in_molecule?;
        let highest = self.highest_max_top_dist_in_matrix_row?;
        if longest == 0 {
            return None;
        }
        Some(f64::from(highest) / f64::from(longest))
    }
}

/// All atom records of one annotated molecule, in atom index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeRecord {
    pub title: String,
    pub atoms: Vec<AtomRecord>,
    /// `(descriptor name, space-separated per-atom values)` in catalog order.
    pub descriptor_strings: Vec<(String, String)>,
}

impl MoleculeRecord {
    /// Atom records excluding hydrogens; these are the rows that reach the table.
    pub fn heavy_atoms(&self) -> impl Iterator<Item = &AtomRecord> {
        self.atoms.iter().filter(|a| !a.is_hydrogen())
    }

    pub fn longest_max_top_dist(&self) -> Option<u32> {
        self.atoms
            .first()
            .and_then(|a| a.longest_max_top_dist_in_molecule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str, highest: Option<u32>, longest: Option<u32>) -> AtomRecord {
        AtomRecord {
            title: "mol".to_string(),
            index: 0,
            symbol: symbol.to_string(),
            atom_type: None,
            descriptors: vec![("AtomDegree".to_string(), "2".to_string())],
            highest_max_top_dist_in_matrix_row: highest,
            longest_max_top_dist_in_molecule: longest,
        }
    }

    #[test]
    fn diff_and_ratio_follow_definitions() {
        let atom = record("C", Some(2), Some(4));
        assert_eq!(atom.diff_span3(), Some(2));
        assert_eq!(atom.rel_span4(), Some(0.5));
    }

    #[test]
    fn ratio_is_undefined_for_zero_longest_distance() {
        let atom = record("C", Some(0), Some(0));
        assert_eq!(atom.diff_span3(), Some(0));
        assert_eq!(atom.rel_span4(), None);
    }

    #[test]
    fn derived_values_are_undefined_when_operands_are_missing() {
        let atom = record("H", None, Some(3));
        assert_eq!(atom.diff_span3(), None);
        assert_eq!(atom.rel_span4(), None);
    }

    #[test]
    fn heavy_atoms_skip_hydrogens() {
        let molecule = MoleculeRecord {
            title: "mol".to_string(),
            atoms: vec![
                record("C", Some(1), Some(1)),
                record("H", None, Some(1)),
                record("O", Some(1), Some(1)),
            ],
            descriptor_strings: Vec::new(),
        };
        let symbols: Vec<_> = molecule.heavy_atoms().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "O"]);
        assert_eq!(molecule.longest_max_top_dist(), Some(1));
    }

    #[test]
    fn descriptor_lookup_by_name() {
        let atom = record("C", Some(1), Some(1));
        assert_eq!(atom.descriptor("AtomDegree"), Some("2"));
        assert_eq!(atom.descriptor("Missing"), None);
    }
}
