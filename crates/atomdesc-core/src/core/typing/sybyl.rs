use super::hybridization::has_multiple_bond;
use super::{AtomType, AtomTypeMatcher};
use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;

/// Tripos Sybyl-style atom typer driven by element, charge and bond orders.
///
/// Only the connection table is inspected; atoms whose environment matches
/// no rule (noble gases, unlisted metals, pseudo atoms) are left untyped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SybylTypeMatcher;

impl SybylTypeMatcher {
    pub fn new() -> Self {
        Self
    }

    fn type_of(&self, molecule: &Molecule, index: usize) -> Option<&'static str> {
        let atom = molecule.atom(index)?;
        let element = atom.element?;
        let env = Environment::new(molecule, index);

        match element {
            Element::H => Some("H"),
            Element::F => Some("F"),
            Element::Cl => Some("Cl"),
            Element::Br => Some("Br"),
            Element::I => Some("I"),
            Element::C => Some(carbon_type(molecule, &env, atom.formal_charge)),
            Element::N => Some(nitrogen_type(molecule, &env, atom.formal_charge)),
            Element::O => Some(oxygen_type(molecule, &env)),
            Element::S => Some(sulfur_type(molecule, &env)),
            Element::P => Some("P.3"),
            Element::Li => Some("Li"),
            Element::Na => Some("Na"),
            Element::Mg => Some("Mg"),
            Element::Al => Some("Al"),
            Element::Si => Some("Si"),
            Element::K => Some("K"),
            Element::Ca => Some("Ca"),
            Element::Mn => Some("Mn"),
            Element::Fe => Some("Fe"),
            Element::Cu => Some("Cu"),
            Element::Zn => Some("Zn"),
            Element::Se => Some("Se"),
            Element::Mo => Some("Mo"),
            Element::Sn => Some("Sn"),
            _ => None,
        }
    }
}

impl AtomTypeMatcher for SybylTypeMatcher {
    fn name(&self) -> &str {
        "sybyl"
    }

    fn find_matching_atom_types(&self, molecule: &Molecule) -> Vec<Option<AtomType>> {
        (0..molecule.atom_count())
            .map(|i| self.type_of(molecule, i).map(AtomType::from))
            .collect()
    }
}

struct Environment {
    index: usize,
    degree: usize,
    doubles: usize,
    triple: bool,
    aromatic: bool,
}

impl Environment {
    fn new(molecule: &Molecule, index: usize) -> Self {
        let neighbors = molecule.neighbors(index);
        Self {
            index,
            degree: neighbors.len(),
            doubles: neighbors
                .iter()
                .filter(|n| n.order == BondOrder::Double)
                .count(),
            triple: neighbors.iter().any(|n| n.order == BondOrder::Triple),
            aromatic: neighbors.iter().any(|n| n.order == BondOrder::Aromatic),
        }
    }
}

fn element_of(molecule: &Molecule, index: usize) -> Option<Element> {
    molecule.atom(index).and_then(|a| a.element)
}

/// Neighbours of `index` with the given element, paired with the bond order.
fn neighbors_of(molecule: &Molecule, index: usize, element: Element) -> Vec<(usize, BondOrder)> {
    molecule
        .neighbors(index)
        .iter()
        .filter(|n| element_of(molecule, n.atom) == Some(element))
        .map(|n| (n.atom, n.order))
        .collect()
}

fn is_terminal(molecule: &Molecule, index: usize) -> bool {
    molecule.degree(index) == 1
}

fn carbon_type(molecule: &Molecule, env: &Environment, charge: i8) -> &'static str {
    if env.aromatic {
        return "C.ar";
    }
    if env.triple || env.doubles >= 2 {
        return "C.1";
    }
    let nitrogens = neighbors_of(molecule, env.index, Element::N);
    let guanidinium = nitrogens.len() == 3
        && env.degree == 3
        && nitrogens.iter().any(|(_, order)| *order == BondOrder::Double);
    if guanidinium || (charge == 1 && env.degree == 3) {
        return "C.cat";
    }
    if env.doubles == 1 {
        return "C.2";
    }
    "C.3"
}

fn nitrogen_type(molecule: &Molecule, env: &Environment, charge: i8) -> &'static str {
    if env.aromatic {
        return "N.ar";
    }
    if env.triple || env.doubles >= 2 {
        return "N.1";
    }
    if charge == 1 && env.degree == 4 && env.doubles == 0 {
        return "N.4";
    }
    if env.doubles == 1 {
        return if env.degree == 3 { "N.pl3" } else { "N.2" };
    }

    let is_amide = molecule.neighbors(env.index).iter().any(|n| {
        element_of(molecule, n.atom) == Some(Element::C)
            && molecule.neighbors(n.atom).iter().any(|m| {
                m.order == BondOrder::Double
                    && matches!(element_of(molecule, m.atom), Some(Element::O | Element::S))
            })
    });
    if is_amide {
        return "N.am";
    }
    if molecule
        .neighbors(env.index)
        .iter()
        .any(|n| has_multiple_bond(molecule, n.atom))
    {
        return "N.pl3";
    }
    "N.3"
}

fn oxygen_type(molecule: &Molecule, env: &Environment) -> &'static str {
    if env.degree == 1 {
        let partner = molecule.neighbors(env.index)[0].atom;
        match element_of(molecule, partner) {
            Some(Element::P) => return "O.co2",
            Some(Element::C) => {
                let terminal_oxygens = neighbors_of(molecule, partner, Element::O)
                    .iter()
                    .filter(|(o, _)| is_terminal(molecule, *o))
                    .count();
                if terminal_oxygens >= 2 {
                    return "O.co2";
                }
            }
            _ => {}
        }
    }
    if env.doubles >= 1 || env.aromatic {
        return "O.2";
    }
    "O.3"
}

fn sulfur_type(molecule: &Molecule, env: &Environment) -> &'static str {
    let oxo = neighbors_of(molecule, env.index, Element::O)
        .iter()
        .filter(|(o, order)| *order == BondOrder::Double && is_terminal(molecule, *o))
        .count();
    match oxo {
        1 => "S.O",
        n if n >= 2 => "S.O2",
        _ if env.doubles >= 1 => "S.2",
        _ => "S.3",
    }
}
