//! # Atomic Descriptors Module
//!
//! Named scalar properties computed for every atom of a molecule.
//!
//! ## Overview
//!
//! Each descriptor implements [`AtomicDescriptor`] and is evaluated against a
//! shared, read-only [`context::DescriptorContext`] that caches the expensive
//! per-molecule intermediates (hybridization, sigma and pi charge
//! equalisation, the topological distance matrix). The fixed, ordered set of
//! descriptors used by the pipeline is a [`catalog::DescriptorCatalog`].
//!
//! ## Models
//!
//! The default implementations are compact empirical models:
//!
//! - **Charge equalisation** ([`peoe`], [`pi`]) - Gasteiger-Marsili partial
//!   equalisation of orbital electronegativity
//! - **Bond charge increments** ([`charge`]) - MMFF94-style partial charges
//! - **Polarizability** ([`polarizability`]) - damped atomic hybrid polarizabilities
//! - **Connectivity** ([`structural`]) - degree, valence electrons, hybridization codes
//!
//! Values are approximations of the respective published models.

pub mod catalog;
pub mod charge;
pub mod context;
pub mod electronegativity;
pub mod params;
pub mod peoe;
pub mod pi;
pub mod polarizability;
pub mod stabilization;
pub mod structural;

use crate::core::utils::format::format_decimal;
use context::DescriptorContext;

/// Value of one descriptor for one atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DescriptorValue {
    Float(f64),
    Integer(i64),
    /// The descriptor is not defined for this atom.
    NotAvailable,
}

impl DescriptorValue {
    /// Renders the value as a table/property token; undefined and
    /// non-finite values become `marker`.
    pub fn render(&self, marker: &str) -> String {
        match self {
            Self::Float(v) if v.is_finite() => format_decimal(*v),
            Self::Float(_) | Self::NotAvailable => marker.to_string(),
            Self::Integer(v) => v.to_string(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            Self::NotAvailable => None,
        }
    }
}

impl From<Option<f64>> for DescriptorValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NotAvailable, Self::Float)
    }
}

/// A named per-atom descriptor.
pub trait AtomicDescriptor: Send + Sync {
    /// Name used as table column header and property name.
    fn name(&self) -> &'static str;

    fn calculate(&self, atom: usize, context: &DescriptorContext<'_>) -> DescriptorValue;
}
