use super::params::{SIGMA_PARAMETERS, lookup};
use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use crate::core::typing::hybridization::Hybridization;

/// Default number of charge equalisation cycles.
pub const DEFAULT_ITERATIONS: usize = 6;

/// Cationic electronegativity of hydrogen; replaces `a + b + c` for H.
const HYDROGEN_CATION_CHI: f64 = 20.02;

/// Result of partial equalisation of orbital electronegativity.
#[derive(Debug, Clone, PartialEq)]
pub struct PeoeCharges {
    charges: Vec<Option<f64>>,
    electronegativities: Vec<Option<f64>>,
}

impl PeoeCharges {
    pub fn charge(&self, atom: usize) -> Option<f64> {
        self.charges.get(atom).copied().flatten()
    }

    pub fn electronegativity(&self, atom: usize) -> Option<f64> {
        self.electronegativities.get(atom).copied().flatten()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct OrbitalParameters {
    a: f64,
    b: f64,
    c: f64,
    cation: f64,
}

impl OrbitalParameters {
    pub(crate) fn new([a, b, c]: [f64; 3], element: Element) -> Self {
        let cation = if element.is_hydrogen() {
            HYDROGEN_CATION_CHI
        } else {
            a + b + c
        };
        Self { a, b, c, cation }
    }

    #[inline]
    pub(crate) fn chi(&self, q: f64) -> f64 {
        self.a + self.b * q + self.c * q * q
    }
}

/// Runs damped charge equalisation over the given edges.
///
/// Charge flows from the less to the more electronegative end of each edge,
/// scaled by the donor's cationic electronegativity and a damping factor of
/// `0.5^k` in cycle `k`. Atoms without parameters neither give nor take charge.
pub(crate) fn equalise(
    params: &[Option<OrbitalParameters>],
    edges: &[(usize, usize)],
    initial: Vec<f64>,
    iterations: usize,
) -> Vec<f64> {
    let mut q = initial;
    let mut damping = 1.0;
    for _ in 0..iterations {
        damping *= 0.5;
        let chi: Vec<Option<f64>> = params
            .iter()
            .zip(&q)
            .map(|(p, &q)| p.map(|p| p.chi(q)))
            .collect();

        let mut delta = vec![0.0; q.len()];
        for &(i, j) in edges {
            let (Some(chi_i), Some(chi_j), Some(p_i), Some(p_j)) = (chi[i], chi[j], params[i], params[j])
            else {
                continue;
            };
            if chi_i == chi_j {
                continue;
            }
            let (donor, donor_params, gap) = if chi_j > chi_i {
                (i, p_i, chi_j - chi_i)
            } else {
                (j, p_j, chi_i - chi_j)
            };
            let acceptor = if donor == i { j } else { i };
            let dq = gap / donor_params.cation * damping;
            delta[donor] += dq;
            delta[acceptor] -= dq;
        }

        for (q, d) in q.iter_mut().zip(delta) {
            *q += d;
        }
    }
    q
}

/// Computes Gasteiger-Marsili sigma charges and the residual orbital
/// electronegativity of every atom.
pub fn compute(
    molecule: &Molecule,
    hybridizations: &[Option<Hybridization>],
    iterations: usize,
) -> PeoeCharges {
    let params: Vec<Option<OrbitalParameters>> = molecule
        .atoms()
        .iter()
        .enumerate()
        .map(|(i, atom)| {
            let element = atom.element?;
            let hybridization = hybridizations.get(i).copied().flatten();
            lookup(&SIGMA_PARAMETERS, element, hybridization)
                .map(|abc| OrbitalParameters::new(abc, element))
        })
        .collect();

    let edges: Vec<(usize, usize)> = molecule.bonds().iter().map(|b| (b.i, b.j)).collect();
    let initial = molecule
        .atoms()
        .iter()
        .map(|a| f64::from(a.formal_charge))
        .collect();
    let q = equalise(&params, &edges, initial, iterations);

    let charges = params
        .iter()
        .zip(&q)
        .map(|(p, &q)| p.map(|_| q))
        .collect();
    let electronegativities = params
        .iter()
        .zip(&q)
        .map(|(p, &q)| p.map(|p| p.chi(q)))
        .collect();

    PeoeCharges {
        charges,
        electronegativities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::topology::BondOrder;
    use crate::core::typing::hybridization::perceive_all;
    use nalgebra::Point3;

    fn molecule(symbols: &[&str], bonds: &[(usize, usize)]) -> Molecule {
        let mut mol = Molecule::new("peoe");
        for s in symbols {
            mol.add_atom(Atom::from_symbol(s, Point3::origin()));
        }
        for (a, b) in bonds {
            mol.add_bond(*a, *b, BondOrder::Single).unwrap();
        }
        mol
    }

    fn charges_of(mol: &Molecule) -> PeoeCharges {
        compute(mol, &perceive_all(mol), DEFAULT_ITERATIONS)
    }

    #[test]
    fn charge_flows_towards_the_more_electronegative_atom() {
        let mol = molecule(&["H", "Cl"], &[(0, 1)]);
        let result = charges_of(&mol);
        let q_h = result.charge(0).unwrap();
        let q_cl = result.charge(1).unwrap();
        assert!(q_h > 0.0);
        assert!(q_cl < 0.0);
        assert!((q_h + q_cl).abs() < 1e-12);
    }

    #[test]
    fn total_charge_is_conserved() {
        let mol = molecule(
            &["C", "O", "H", "H", "H", "H"],
            &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 5)],
        );
        let result = charges_of(&mol);
        let total: f64 = (0..6).filter_map(|i| result.charge(i)).sum();
        assert!(total.abs() < 1e-12);
        assert!(result.charge(1).unwrap() < 0.0);
    }

    #[test]
    fn isolated_atom_keeps_its_parameters() {
        let mol = molecule(&["C"], &[]);
        let result = charges_of(&mol);
        assert_eq!(result.charge(0), Some(0.0));
        assert_eq!(result.electronegativity(0), Some(7.98));
    }

    #[test]
    fn unparameterised_atoms_are_left_out() {
        let mol = molecule(&["Fe", "Cl", "R#"], &[(0, 1)]);
        let result = charges_of(&mol);
        assert_eq!(result.charge(0), None);
        assert_eq!(result.charge(1), Some(0.0));
        assert_eq!(result.electronegativity(2), None);
    }

    #[test]
    fn zero_iterations_returns_formal_charges() {
        let mol = molecule(&["H", "F"], &[(0, 1)]);
        let result = compute(&mol, &perceive_all(&mol), 0);
        assert_eq!(result.charge(0), Some(0.0));
        assert_eq!(result.charge(1), Some(0.0));
    }
}
