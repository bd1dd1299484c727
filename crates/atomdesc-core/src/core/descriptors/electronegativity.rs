use super::context::DescriptorContext;
use super::{AtomicDescriptor, DescriptorValue};

/// Residual sigma orbital electronegativity after charge equalisation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigmaElectronegativity;

impl AtomicDescriptor for SigmaElectronegativity {
    fn name(&self) -> &'static str {
        "SigmaElectronegativity"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        context.sigma().electronegativity(atom).into()
    }
}

/// Pi orbital electronegativity; zero for atoms outside a pi system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiElectronegativity;

impl AtomicDescriptor for PiElectronegativity {
    fn name(&self) -> &'static str {
        "PiElectronegativity"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        context.pi().electronegativity(atom).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::test_support::{evaluate, float, molecule};
    use crate::core::models::topology::BondOrder::*;

    #[test]
    fn sigma_electronegativity_equalises_towards_each_other() {
        let mol = molecule(&[("H", 0), ("F", 0)], &[(0, 1, Single)]);
        let values = evaluate(&SigmaElectronegativity, &mol);
        let chi_h = float(values[0]);
        let chi_f = float(values[1]);
        // Neutral values are 7.17 (H) and 14.66 (F); equalisation narrows the gap.
        assert!(chi_h > 7.17);
        assert!(chi_f < 14.66);
        assert!(chi_f - chi_h < 14.66 - 7.17);
    }

    #[test]
    fn pi_electronegativity_is_zero_for_saturated_atoms() {
        let mol = molecule(
            &[("C", 0), ("C", 0), ("O", 0)],
            &[(0, 1, Single), (1, 2, Double)],
        );
        let values = evaluate(&PiElectronegativity, &mol);
        assert_eq!(values[0], DescriptorValue::Float(0.0));
        assert!(float(values[1]) > 0.0);
        assert!(float(values[2]) > 0.0);
    }

    #[test]
    fn unknown_atoms_are_not_available() {
        let mol = molecule(&[("R#", 0)], &[]);
        assert_eq!(evaluate(&SigmaElectronegativity, &mol)[0], DescriptorValue::NotAvailable);
        assert_eq!(evaluate(&PiElectronegativity, &mol)[0], DescriptorValue::NotAvailable);
    }
}
