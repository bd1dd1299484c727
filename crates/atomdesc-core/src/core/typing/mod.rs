//! Atom typing and hybridization perception.
//!
//! Atom types are assigned once per molecule through an [`AtomTypeMatcher`].
//! A matcher never fails: atoms without a matching rule are reported as
//! `None` and written as blank fields downstream.

pub mod hybridization;
pub mod sybyl;

use crate::core::models::molecule::Molecule;
use std::fmt;

/// Name of a matched atom type, e.g. `C.ar` or `N.am`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomType(String);

impl AtomType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn into_name(self) -> String {
        self.0
    }
}

impl From<&str> for AtomType {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assigns atom types to every atom of a molecule.
pub trait AtomTypeMatcher: Send + Sync {
    /// Short identifier of the typing scheme, used in log output.
    fn name(&self) -> &str;

    /// Returns one entry per atom, in atom index order.
    fn find_matching_atom_types(&self, molecule: &Molecule) -> Vec<Option<AtomType>>;
}
