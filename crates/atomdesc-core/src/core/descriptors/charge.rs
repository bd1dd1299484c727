use super::context::DescriptorContext;
use super::params::{BOND_CHARGE_INCREMENTS, FALLBACK_INCREMENT_SCALE};
use super::{AtomicDescriptor, DescriptorValue};
use crate::core::models::element::Element;
use crate::core::models::topology::BondOrder;

/// Gasteiger-Marsili sigma partial charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialSigmaCharge;

impl AtomicDescriptor for PartialSigmaCharge {
    fn name(&self) -> &'static str {
        "PartialSigmaCharge"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        context.sigma().charge(atom).into()
    }
}

/// MMFF94-style total partial charge: formal charge plus the sum of bond
/// charge increments over all bonds of the atom.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialTChargeMmff94;

fn bond_symbol(order: BondOrder) -> char {
    match order {
        BondOrder::Single => '-',
        BondOrder::Double => '=',
        BondOrder::Triple => '#',
        BondOrder::Aromatic => ':',
    }
}

/// Charge received by `atom` from its bond to `partner`.
pub fn bond_charge_increment(atom: Element, partner: Element, order: BondOrder) -> Option<f64> {
    let bond = bond_symbol(order);
    let forward = format!("{}{}{}", atom.symbol(), bond, partner.symbol());
    if let Some(value) = BOND_CHARGE_INCREMENTS.get(forward.as_str()) {
        return Some(*value);
    }
    let reverse = format!("{}{}{}", partner.symbol(), bond, atom.symbol());
    if let Some(value) = BOND_CHARGE_INCREMENTS.get(reverse.as_str()) {
        return Some(-*value);
    }
    let chi_atom = atom.pauling_electronegativity()?;
    let chi_partner = partner.pauling_electronegativity()?;
    Some(FALLBACK_INCREMENT_SCALE * (chi_partner - chi_atom))
}

impl AtomicDescriptor for PartialTChargeMmff94 {
    fn name(&self) -> &'static str {
        "PartialTChargeMMFF94"
    }

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue {
        let molecule = context.molecule();
        let Some(center) = molecule.atom(atom) else {
            return DescriptorValue::NotAvailable;
        };
        let Some(element) = center.element else {
            return DescriptorValue::NotAvailable;
        };

        let mut total = f64::from(center.formal_charge);
        for neighbor in molecule.neighbors(atom) {
            let increment = molecule
                .atom(neighbor.atom)
                .and_then(|a| a.element)
                .and_then(|partner| bond_charge_increment(element, partner, neighbor.order));
            match increment {
                Some(value) => total += value,
                None => return DescriptorValue::NotAvailable,
            }
        }
        DescriptorValue::Float(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::test_support::{evaluate, float, molecule};
    use crate::core::models::topology::BondOrder::*;

    #[test]
    fn increments_are_antisymmetric() {
        let forward = bond_charge_increment(Element::C, Element::O, Double).unwrap();
        let reverse = bond_charge_increment(Element::O, Element::C, Double).unwrap();
        assert_eq!(forward, 0.57);
        assert_eq!(reverse, -0.57);
        let fallback = bond_charge_increment(Element::Si, Element::O, Single).unwrap();
        let back = bond_charge_increment(Element::O, Element::Si, Single).unwrap();
        assert!((fallback + back).abs() < 1e-12);
        assert!(fallback > 0.0);
    }

    #[test]
    fn water_charges_sum_to_zero() {
        let mol = molecule(
            &[("O", 0), ("H", 0), ("H", 0)],
            &[(0, 1, Single), (0, 2, Single)],
        );
        let values: Vec<f64> = evaluate(&PartialTChargeMmff94, &mol)
            .into_iter()
            .map(float)
            .collect();
        assert!((values[0] + 0.80).abs() < 1e-12);
        assert!((values[1] - 0.40).abs() < 1e-12);
        assert!(values.iter().sum::<f64>().abs() < 1e-12);
    }

    #[test]
    fn formal_charge_is_included() {
        let mol = molecule(&[("Cl", -1)], &[]);
        assert_eq!(evaluate(&PartialTChargeMmff94, &mol)[0], DescriptorValue::Float(-1.0));
    }

    #[test]
    fn missing_electronegativity_is_not_available() {
        let mol = molecule(&[("C", 0), ("He", 0), ("R#", 0)], &[(0, 1, Single)]);
        let values = evaluate(&PartialTChargeMmff94, &mol);
        assert_eq!(values[0], DescriptorValue::NotAvailable);
        assert_eq!(values[2], DescriptorValue::NotAvailable);
    }

    #[test]
    fn sigma_charge_is_available_for_parameterised_atoms() {
        let mol = molecule(&[("C", 0), ("Cl", 0)], &[(0, 1, Single)]);
        let values = evaluate(&PartialSigmaCharge, &mol);
        assert!(float(values[0]) > 0.0);
        assert!(float(values[1]) < 0.0);
    }
}
