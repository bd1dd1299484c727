use super::AtomicDescriptor;
use super::charge::{PartialSigmaCharge, PartialTChargeMmff94};
use super::electronegativity::{PiElectronegativity, SigmaElectronegativity};
use super::polarizability::EffectiveAtomPolarizability;
use super::stabilization::StabilizationPlusCharge;
use super::structural::{AtomDegree, AtomHybridization, AtomHybridizationVsepr, AtomValance};
use std::fmt;
use thiserror::Error;

/// Names of the standard descriptors, in output column order.
pub const STANDARD_DESCRIPTOR_NAMES: [&str; 10] = [
    "EffectiveAtomPolarizability",
    "StabilizationPlusCharge",
    "SigmaElectronegativity",
    "PiElectronegativity",
    "PartialSigmaCharge",
    "PartialTChargeMMFF94",
    "AtomDegree",
    "AtomValance",
    "AtomHybridizationVSEPR",
    "AtomHybridization",
];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CatalogError {
    #[error("Unknown descriptor '{0}'")]
    Unknown(String),
    #[error("Descriptor '{0}' is listed more than once")]
    Duplicate(String),
    #[error("At least one descriptor must be selected")]
    Empty,
}

fn create(name: &str) -> Option<Box<dyn AtomicDescriptor>> {
    let descriptor: Box<dyn AtomicDescriptor> = match name {
        "EffectiveAtomPolarizability" => Box::new(EffectiveAtomPolarizability),
        "StabilizationPlusCharge" => Box::new(StabilizationPlusCharge),
        "SigmaElectronegativity" => Box::new(SigmaElectronegativity),
        "PiElectronegativity" => Box::new(PiElectronegativity),
        "PartialSigmaCharge" => Box::new(PartialSigmaCharge),
        "PartialTChargeMMFF94" => Box::new(PartialTChargeMmff94),
        "AtomDegree" => Box::new(AtomDegree),
        "AtomValance" => Box::new(AtomValance),
        "AtomHybridizationVSEPR" => Box::new(AtomHybridizationVsepr),
        "AtomHybridization" => Box::new(AtomHybridization),
        _ => return None,
    };
    Some(descriptor)
}

/// Immutable, explicitly ordered sequence of descriptors.
///
/// The order of the catalog is the order of table columns and of injected
/// molecule properties.
pub struct DescriptorCatalog {
    entries: Vec<Box<dyn AtomicDescriptor>>,
}

impl DescriptorCatalog {
    /// All standard descriptors in their canonical order.
    pub fn standard() -> Self {
        Self::with_descriptors(
            STANDARD_DESCRIPTOR_NAMES
                .iter()
                .filter_map(|name| create(name))
                .collect(),
        )
    }

    /// Builds a catalog from an ordered list of descriptor names.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for unknown or repeated names, or an empty list.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, CatalogError> {
        if names.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut entries: Vec<Box<dyn AtomicDescriptor>> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if entries.iter().any(|d| d.name() == name) {
                return Err(CatalogError::Duplicate(name.to_string()));
            }
            entries.push(create(name).ok_or_else(|| CatalogError::Unknown(name.to_string()))?);
        }
        Ok(Self::with_descriptors(entries))
    }

    /// Builds a catalog from custom descriptor implementations.
    pub fn with_descriptors(entries: Vec<Box<dyn AtomicDescriptor>>) -> Self {
        Self { entries }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|d| d.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn AtomicDescriptor> {
        self.entries.iter().map(|d| d.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DescriptorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for DescriptorCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_fixed_order() {
        let catalog = DescriptorCatalog::standard();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.names(), STANDARD_DESCRIPTOR_NAMES.to_vec());
    }

    #[test]
    fn from_names_preserves_requested_order() {
        let catalog =
            DescriptorCatalog::from_names(&["AtomValance", "PartialSigmaCharge"]).unwrap();
        assert_eq!(catalog.names(), vec!["AtomValance", "PartialSigmaCharge"]);
    }

    #[test]
    fn from_names_rejects_bad_selections() {
        assert_eq!(
            DescriptorCatalog::from_names(&["AtomDegree", "Bogus"]).unwrap_err(),
            CatalogError::Unknown("Bogus".to_string())
        );
        assert_eq!(
            DescriptorCatalog::from_names(&["AtomDegree", "AtomDegree"]).unwrap_err(),
            CatalogError::Duplicate("AtomDegree".to_string())
        );
        assert_eq!(
            DescriptorCatalog::from_names::<&str>(&[]).unwrap_err(),
            CatalogError::Empty
        );
    }

    #[test]
    fn every_standard_name_resolves() {
        for name in STANDARD_DESCRIPTOR_NAMES {
            let descriptor = create(name).unwrap();
            assert_eq!(descriptor.name(), name);
        }
    }
}
