use super::params::PI_PARAMETERS;
use super::peoe::{OrbitalParameters, equalise};
use crate::core::models::molecule::Molecule;

/// Pi-orbital electronegativities after equalisation over the pi system.
///
/// Atoms outside any parameterised pi bond report `0.0`; atoms without an
/// element report `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PiCharges {
    charges: Vec<Option<f64>>,
    electronegativities: Vec<Option<f64>>,
}

impl PiCharges {
    pub fn charge(&self, atom: usize) -> Option<f64> {
        self.charges.get(atom).copied().flatten()
    }

    pub fn electronegativity(&self, atom: usize) -> Option<f64> {
        self.electronegativities.get(atom).copied().flatten()
    }

    pub fn is_in_pi_system(&self, atom: usize) -> bool {
        self.electronegativity(atom).is_some_and(|chi| chi != 0.0)
    }
}

pub fn compute(molecule: &Molecule, iterations: usize) -> PiCharges {
    let n = molecule.atom_count();
    let candidate: Vec<Option<OrbitalParameters>> = molecule
        .atoms()
        .iter()
        .map(|atom| {
            let element = atom.element?;
            PI_PARAMETERS
                .get(element.symbol())
                .map(|abc| OrbitalParameters::new(*abc, element))
        })
        .collect();

    let edges: Vec<(usize, usize)> = molecule
        .bonds()
        .iter()
        .filter(|b| b.order.is_multiple())
        .filter(|b| candidate[b.i].is_some() && candidate[b.j].is_some())
        .map(|b| (b.i, b.j))
        .collect();

    let mut in_system = vec![false; n];
    for &(i, j) in &edges {
        in_system[i] = true;
        in_system[j] = true;
    }
    let params: Vec<Option<OrbitalParameters>> = candidate
        .into_iter()
        .zip(&in_system)
        .map(|(p, &member)| p.filter(|_| member))
        .collect();

    let initial = molecule
        .atoms()
        .iter()
        .zip(&in_system)
        .map(|(a, &member)| if member { f64::from(a.formal_charge) } else { 0.0 })
        .collect();
    let q = equalise(&params, &edges, initial, iterations);

    let mut charges = Vec::with_capacity(n);
    let mut electronegativities = Vec::with_capacity(n);
    for (i, atom) in molecule.atoms().iter().enumerate() {
        if atom.element.is_none() {
            charges.push(None);
            electronegativities.push(None);
            continue;
        }
        match params[i] {
            Some(p) => {
                charges.push(Some(q[i]));
                electronegativities.push(Some(p.chi(q[i])));
            }
            None => {
                charges.push(Some(0.0));
                electronegativities.push(Some(0.0));
            }
        }
    }

    PiCharges {
        charges,
        electronegativities,
    }
}
