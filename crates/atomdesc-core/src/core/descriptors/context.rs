use super::peoe::{self, PeoeCharges};
use super::pi::{self, PiCharges};
use crate::core::graph::paths::ShortestPathMatrix;
use crate::core::models::molecule::Molecule;
use crate::core::typing::hybridization::{self, Hybridization};
use std::cell::OnceCell;

/// Read-only view of one molecule shared by all descriptors.
///
/// Charge equalisation results are computed on first use and then reused by
/// every descriptor and atom of the molecule.
pub struct DescriptorContext<'a> {
    molecule: &'a Molecule,
    paths: &'a ShortestPathMatrix,
    hybridizations: Vec<Option<Hybridization>>,
    iterations: usize,
    sigma: OnceCell<PeoeCharges>,
    pi: OnceCell<PiCharges>,
}

impl<'a> DescriptorContext<'a> {
    pub fn new(molecule: &'a Molecule, paths: &'a ShortestPathMatrix, iterations: usize) -> Self {
        Self {
            molecule,
            paths,
            hybridizations: hybridization::perceive_all(molecule),
            iterations,
            sigma: OnceCell::new(),
            pi: OnceCell::new(),
        }
    }

    #[inline]
    pub fn molecule(&self) -> &'a Molecule {
        self.molecule
    }

    #[inline]
    pub fn paths(&self) -> &'a ShortestPathMatrix {
        self.paths
    }

    pub fn hybridization(&self, atom: usize) -> Option<Hybridization> {
        self.hybridizations.get(atom).copied().flatten()
    }

    pub fn sigma(&self) -> &PeoeCharges {
        self.sigma
            .get_or_init(|| peoe::compute(self.molecule, &self.hybridizations, self.iterations))
    }

    pub fn pi(&self) -> &PiCharges {
        self.pi
            .get_or_init(|| pi::compute(self.molecule, self.iterations))
    }
}
