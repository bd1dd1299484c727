//! # Core Models Module
//!
//! Data structures representing molecules as read from structure files and the
//! per-atom result records produced by the descriptor pipeline.
//!
//! ## Key Components
//!
//! - [`element`] - Chemical elements and their tabulated properties
//! - [`atom`] - Individual atom representation with symbol, position and formal charge
//! - [`topology`] - Bond orders and bonds
//! - [`molecule`] - A molecule record with adjacency and ordered named properties
//! - [`record`] - Per-atom and per-molecule result records
//!
//! ## Usage
//!
//! ```ignore
//! use atomdesc::core::models::{atom::Atom, element::Element, molecule::Molecule, topology::BondOrder};
//!
//! let mut mol = Molecule::new("hydrogen chloride");
//! let h = mol.add_atom(Atom::new(Element::H, Point3::origin()));
//! let cl = mol.add_atom(Atom::new(Element::Cl, Point3::new(1.27, 0.0, 0.0)));
//! mol.add_bond(h, cl, BondOrder::Single);
//! ```

pub mod atom;
pub mod element;
pub mod molecule;
pub mod record;
pub mod topology;
