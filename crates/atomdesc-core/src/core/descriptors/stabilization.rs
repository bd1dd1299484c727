use super::context::DescriptorContext;
use super::{AtomicDescriptor, DescriptorValue};

/// Resonance stabilisation of a positive charge placed on the atom.
///
/// Sums the inverse sigma electronegativity of every neighbour that carries a
/// conjugable p orbital; an atom with no such neighbour scores `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StabilizationPlusCharge;

impl AtomicDescriptor for StabilizationPlusCharge {
    fn name(&self) -> &'static str {
        "StabilizationPlusCharge"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        let molecule = context.molecule();
        if molecule.atom(atom).and_then(|a| a.element).is_none() {
            return DescriptorValue::NotAvailable;
        }

        let sigma = context.sigma();
        let total = molecule
            .neighbors(atom)
            .iter()
            .filter(|n| {
                context
                    .hybridization(n.atom)
                    .is_some_and(|h| h.is_conjugable())
            })
            .filter_map(|n| sigma.electronegativity(n.atom))
            .filter(|chi| *chi > 0.0)
            .map(|chi| 1.0 / chi)
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
    fn allylic_position_is_stabilised() {
        let mol = molecule(
            &[("C", 0), ("C", 0), ("C", 0)],
            &[(0, 1, Single), (1, 2, Double)],
        );
        let values = evaluate(&StabilizationPlusCharge, &mol);
        assert!(float(values[0]) > 0.0);
        assert!(float(values[1]) > 0.0);
    }

    #[test]
    fn saturated_neighbourhood_scores_zero() {
        let mol = molecule(
            &[("C", 0), ("C", 0), ("Cl", 0)],
            &[(0, 1, Single), (1, 2, Single)],
        );
        let values = evaluate(&StabilizationPlusCharge, &mol);
        assert_eq!(values, vec![DescriptorValue::Float(0.0); 3]);
    }

    #[test]
    fn pseudo_atom_is_not_available() {
        let mol = molecule(&[("R#", 0)], &[]);
        assert_eq!(evaluate(&StabilizationPlusCharge, &mol)[0], DescriptorValue::NotAvailable);
    }
}
