use super::span::SpanMetrics;
use crate::core::descriptors::catalog::DescriptorCatalog;
use crate::core::descriptors::context::DescriptorContext;
use crate::core::graph::paths::ShortestPathMatrix;
use crate::core::models::molecule::Molecule;
use crate::core::models::record::{AtomRecord, MoleculeRecord};
use crate::core::typing::AtomTypeMatcher;
use crate::core::utils::format::{format_decimal, render_or};
use tracing::trace;

pub const LONGEST_PROPERTY: &str = "longestMaxTopInMolecule";
pub const HIGHEST_PROPERTY: &str = "highestMaxTopInMolecule";
pub const DIFF_PROPERTY: &str = "diffSPAN3";
pub const REL_PROPERTY: &str = "relSPAN4";

/// Computes all per-atom results for a molecule and writes the aggregate
/// property strings back onto it.
pub struct MoleculeAnnotator<'a> {
    catalog: &'a DescriptorCatalog,
    matcher: &'a dyn AtomTypeMatcher,
    peoe_iterations: usize,
    na_marker: &'a str,
}

impl<'a> MoleculeAnnotator<'a> {
    pub fn new(
        catalog: &'a DescriptorCatalog,
        matcher: &'a dyn AtomTypeMatcher,
        peoe_iterations: usize,
        na_marker: &'a str,
    ) -> Self {
        Self {
            catalog,
            matcher,
            peoe_iterations,
            na_marker,
        }
    }

    /// Annotates one molecule.
    ///
    /// Properties are added in a fixed order: the four span properties, then
    /// one property per catalog descriptor. Each property holds one
    /// space-separated token per atom, hydrogens included.
    pub fn annotate(&self, molecule: &mut Molecule) -> MoleculeRecord {
        let record = self.compute(molecule);
        let marker = self.na_marker;

        let tokens = |render: &dyn Fn(&AtomRecord) -> String| {
            record.atoms.iter().map(render).collect::<Vec<_>>().join(" ")
        };
        let longest = tokens(&|a| render_or(a.longest_max_top_dist_in_molecule, marker));
        let highest = tokens(&|a| render_or(a.highest_max_top_dist_in_matrix_row, marker));
        let diff = tokens(&|a| render_or(a.diff_span3(), marker));
        let rel = tokens(&|a| render_or(a.rel_span4().map(format_decimal), marker));

        molecule.set_property(LONGEST_PROPERTY, longest);
        molecule.set_property(HIGHEST_PROPERTY, highest);
        molecule.set_property(DIFF_PROPERTY, diff);
        molecule.set_property(REL_PROPERTY, rel);
        for (name, value) in &record.descriptor_strings {
            molecule.set_property(name.as_str(), value.as_str());
        }

        record
    }

    /// Computes the record without touching the molecule.
    pub fn compute(&self, molecule: &Molecule) -> MoleculeRecord {
        let paths = ShortestPathMatrix::compute(molecule);
        let span = SpanMetrics::compute(molecule, &paths);
        let mut types = self.matcher.find_matching_atom_types(molecule);
        types.resize(molecule.atom_count(), None);
        let context = DescriptorContext::new(molecule, &paths, self.peoe_iterations);

        let atoms: Vec<AtomRecord> = molecule
            .atoms()
            .iter()
            .zip(types)
            .enumerate()
            .map(|(index, (atom, atom_type))| {
                let descriptors = self
                    .catalog
                    .iter()
                    .map(|d| {
                        let value = d.calculate(index, &context).render(self.na_marker);
                        (d.name().to_string(), value)
                    })
                    .collect();
                AtomRecord {
                    title: molecule.title.clone(),
                    index,
                    symbol: atom.symbol.clone(),
                    atom_type: atom_type.map(|t| t.into_name()),
                    descriptors,
                    highest_max_top_dist_in_matrix_row: span.highest(index),
                    longest_max_top_dist_in_molecule: span.longest(),
                }
            })
            .collect();

        let descriptor_strings = self
            .catalog
            .names()
            .into_iter()
            .enumerate()
            .map(|(column, name)| {
                let values: Vec<&str> = atoms
                    .iter()
                    .map(|a| a.descriptors[column].1.as_str())
                    .collect();
                (name.to_string(), values.join(" "))
            })
            .collect();

        trace!(
            title = %molecule.title,
            atoms = atoms.len(),
            matcher = self.matcher.name(),
            "Computed atom records."
        );

        MoleculeRecord {
            title: molecule.title.clone(),
            atoms,
            descriptor_strings,
        }
    }
}
