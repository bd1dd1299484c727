use super::context::DescriptorContext;
use super::{AtomicDescriptor, DescriptorValue};
use crate::core::typing::hybridization::Hybridization;

/// Number of bonded non-hydrogen atoms.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomDegree;

impl AtomicDescriptor for AtomDegree {
    fn name(&self) -> &'static str {
        "AtomDegree"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        let molecule = context.molecule();
        if molecule.atom(atom).is_none() {
            return DescriptorValue::NotAvailable;
        }
        DescriptorValue::Integer(molecule.heavy_degree(atom) as i64)
    }
}

/// Valence electron count of the neutral element.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomValance;

impl AtomicDescriptor for AtomValance {
    fn name(&self) -> &'static str {
        "AtomValance"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        context
            .molecule()
            .atom(atom)
            .and_then(|a| a.element)
            .map_or(DescriptorValue::NotAvailable, |e| {
                DescriptorValue::Integer(i64::from(e.valence_electrons()))
            })
    }
}

/// Hybridization code perceived from bond orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomHybridization;

impl AtomicDescriptor for AtomHybridization {
    fn name(&self) -> &'static str {
        "AtomHybridization"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        context
            .hybridization(atom)
            .map_or(DescriptorValue::NotAvailable, |h| {
                DescriptorValue::Integer(i64::from(h.code()))
            })
    }
}

/// Hybridization code derived from the VSEPR steric number
/// (bonded neighbours plus lone pairs).
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomHybridizationVsepr;

impl AtomHybridizationVsepr {
    pub fn steric_number(atom: usize, context: &DescriptorContext<'_>) -> Option<usize> {
        let molecule = context.molecule();
        let element = molecule.atom(atom)?.element?;
        let charge = f64::from(molecule.atom(atom)?.formal_charge);
        let free_electrons =
            f64::from(element.valence_electrons()) - charge - molecule.bond_order_sum(atom);
        let lone_pairs = (free_electrons / 2.0).floor().max(0.0) as usize;
        Some(molecule.degree(atom) + lone_pairs)
    }
}

impl AtomicDescriptor for AtomHybridizationVsepr {
    fn name(&self) -> &'static str {
        "AtomHybridizationVSEPR"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        Self::steric_number(atom, context)
            .and_then(Hybridization::from_steric_number)
            .map_or(DescriptorValue::NotAvailable, |h| {
                DescriptorValue::Integer(i64::from(h.code()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::test_support::{evaluate, molecule};
    use crate::core::models::topology::BondOrder::*;
    use crate::core::descriptors::DescriptorValue::{Integer, NotAvailable};

    #[test]
    fn degree_counts_heavy_neighbours_only() {
        let mol = molecule(
            &[("C", 0), ("O", 0), ("H", 0), ("H", 0)],
            &[(0, 1, Single), (0, 2, Single), (1, 3, Single)],
        );
        assert_eq!(
            evaluate(&AtomDegree, &mol),
            vec![Integer(1), Integer(1), Integer(1), Integer(1)]
        );
    }

    #[test]
    fn valence_follows_element() {
        let mol = molecule(&[("Cl", 0), ("N", 1), ("R#", 0)], &[]);
        assert_eq!(
            evaluate(&AtomValance, &mol),
            vec![Integer(7), Integer(5), NotAvailable]
        );
    }

    #[test]
    fn hybridization_codes() {
        let mol = molecule(
            &[("C", 0), ("O", 0), ("C", 0), ("N", 0), ("H", 0)],
            &[(0, 1, Double), (0, 2, Single), (2, 3, Triple), (0, 4, Single)],
        );
        assert_eq!(
            evaluate(&AtomHybridization, &mol),
            vec![Integer(2), Integer(2), Integer(1), Integer(1), Integer(0)]
        );
    }

    #[test]
    fn vsepr_counts_lone_pairs() {
        // Water: two bonds and two lone pairs on oxygen.
        let water = molecule(
            &[("O", 0), ("H", 0), ("H", 0)],
            &[(0, 1, Single), (0, 2, Single)],
        );
        assert_eq!(
            evaluate(&AtomHybridizationVsepr, &water),
            vec![Integer(3), Integer(0), Integer(0)]
        );

        // Pyridine-like nitrogen: two aromatic bonds and one lone pair.
        let ring = molecule(
            &[("N", 0), ("C", 0), ("C", 0)],
            &[(0, 1, Aromatic), (0, 2, Aromatic)],
        );
        assert_eq!(evaluate(&AtomHybridizationVsepr, &ring)[0], Integer(2));
    }

    #[test]
    fn vsepr_handles_charged_and_isolated_atoms() {
        let mol = molecule(&[("N", 1), ("Na", 1)], &[]);
        let values = evaluate(&AtomHybridizationVsepr, &mol);
        // Isolated N+ keeps two lone pairs: steric number 2.
        assert_eq!(values[0], Integer(1));
        // Na+ has no electrons left and no neighbours.
        assert_eq!(values[1], NotAvailable);
    }
}
