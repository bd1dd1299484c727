use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;
use std::fmt;

/// Orbital hybridization states, ordered by their numeric descriptor code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hybridization {
    S,
    Sp1,
    Sp2,
    Sp3,
    /// Trigonal planar sp3 (amide, aniline and other conjugated nitrogens).
    Planar3,
    Sp3d1,
    Sp3d2,
}

impl Hybridization {
    /// Integer code written as the hybridization descriptor value.
    pub fn code(self) -> u8 {
        match self {
            Self::S => 0,
            Self::Sp1 => 1,
            Self::Sp2 => 2,
            Self::Sp3 => 3,
            Self::Planar3 => 4,
            Self::Sp3d1 => 5,
            Self::Sp3d2 => 6,
        }
    }

    /// Hybridization implied by a VSEPR steric number.
    pub fn from_steric_number(steric: usize) -> Option<Self> {
        match steric {
            1 => Some(Self::S),
            2 => Some(Self::Sp1),
            3 => Some(Self::Sp2),
            4 => Some(Self::Sp3),
            5 => Some(Self::Sp3d1),
            6 => Some(Self::Sp3d2),
            _ => None,
        }
    }

    /// Whether atoms in this state carry a p orbital available for conjugation.
    pub fn is_conjugable(self) -> bool {
        matches!(self, Self::Sp1 | Self::Sp2 | Self::Planar3)
    }
}

impl fmt::Display for Hybridization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::S => "s",
            Self::Sp1 => "sp",
            Self::Sp2 => "sp2",
            Self::Sp3 => "sp3",
            Self::Planar3 => "planar3",
            Self::Sp3d1 => "sp3d1",
            Self::Sp3d2 => "sp3d2",
        };
        f.write_str(name)
    }
}

/// Whether the atom takes part in at least one double, triple or aromatic bond.
pub fn has_multiple_bond(molecule: &Molecule, index: usize) -> bool {
    molecule
        .neighbors(index)
        .iter()
        .any(|n| n.order.is_multiple())
}

/// Perceives the hybridization of one atom from its bond orders.
///
/// Returns `None` for pseudo atoms without an element.
pub fn perceive(molecule: &Molecule, index: usize) -> Option<Hybridization> {
    let atom = molecule.atom(index)?;
    let element = atom.element?;
    if element.is_hydrogen() {
        return Some(Hybridization::S);
    }

    let neighbors = molecule.neighbors(index);
    let degree = neighbors.len();
    let doubles = neighbors
        .iter()
        .filter(|n| n.order == BondOrder::Double)
        .count();
    let triple = neighbors.iter().any(|n| n.order == BondOrder::Triple);
    let aromatic = neighbors.iter().any(|n| n.order == BondOrder::Aromatic);

    if triple || (doubles >= 2 && degree == 2) {
        return Some(Hybridization::Sp1);
    }
    if (doubles >= 1 || aromatic) && degree < 4 {
        return Some(Hybridization::Sp2);
    }
    if element == Element::N
        && degree <= 3
        && atom.formal_charge <= 0
        && neighbors.iter().any(|n| has_multiple_bond(molecule, n.atom))
    {
        return Some(Hybridization::Planar3);
    }
    match degree {
        5 => Some(Hybridization::Sp3d1),
        6 => Some(Hybridization::Sp3d2),
        _ => Some(Hybridization::Sp3),
    }
}

/// Perceives the hybridization of every atom, in index order.
pub fn perceive_all(molecule: &Molecule) -> Vec<Option<Hybridization>> {
    (0..molecule.atom_count())
        .map(|i| perceive(molecule, i))
        .collect()
}
