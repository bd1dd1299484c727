use super::context::DescriptorContext;
use super::params::{HYBRID_POLARIZABILITIES, lookup};
use super::{AtomicDescriptor, DescriptorValue};

/// Attenuation of a neighbour's contribution per intervening bond.
const DAMPING_PER_BOND: f64 = 0.5;

/// Effective atom polarizability: atomic hybrid polarizabilities of all
/// reachable atoms, each attenuated by `0.5^d` for topological distance `d`.
///
/// Atoms without a tabulated polarizability contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectiveAtomPolarizability;

impl EffectiveAtomPolarizability {
    fn polarizability(atom: usize, context: &DescriptorContext<'_>) -> Option<f64> {
        let element = context.molecule().atom(atom)?.element?;
        lookup(&HYBRID_POLARIZABILITIES, element, context.hybridization(atom))
    }
}

impl AtomicDescriptor for EffectiveAtomPolarizability {
    fn name(&self) -> &'static str {
        "EffectiveAtomPolarizability"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        if Self::polarizability(atom, context).is_none() {
            return DescriptorValue::NotAvailable;
        }
        let total = context
            .paths()
            .row(atom)
            .iter()
            .enumerate()
            .filter_map(|(other, distance)| {
                let d = (*distance)?;
                let alpha = Self::polarizability(other, context)?;
                Some(alpha * DAMPING_PER_BOND.powi(d as i32))
            })
            .sum();
        DescriptorValue::Float(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::test_support::{evaluate, float, molecule};
    use crate::core::models::topology::BondOrder::*;

    #[test]
    fn isolated_atom_equals_its_own_polarizability() {
        let mol = molecule(&[("Cl", -1)], &[]);
        assert_eq!(evaluate(&EffectiveAtomPolarizability, &mol)[0], DescriptorValue::Float(2.315));
    }

    #[test]
    fn neighbours_contribute_with_damping() {
        let mol = molecule(&[("H", 0), ("Cl", 0)], &[(0, 1, Single)]);
        let values = evaluate(&EffectiveAtomPolarizability, &mol);
        assert!((float(values[0]) - (0.387 + 0.5 * 2.315)).abs() < 1e-12);
        assert!((float(values[1]) - (2.315 + 0.5 * 0.387)).abs() < 1e-12);
    }

    #[test]
    fn disconnected_fragments_do_not_contribute() {
        let mol = molecule(&[("I", 0), ("I", 0)], &[]);
        let values = evaluate(&EffectiveAtomPolarizability, &mol);
        assert_eq!(values[0], DescriptorValue::Float(5.415));
    }

    #[test]
    fn unparameterised_atom_is_not_available() {
        let mol = molecule(&[("Fe", 0), ("Cl", 0)], &[(0, 1, Single)]);
        let values = evaluate(&EffectiveAtomPolarizability, &mol);
        assert_eq!(values[0], DescriptorValue::NotAvailable);
        assert_eq!(values[1], DescriptorValue::Float(2.315));
    }
}
