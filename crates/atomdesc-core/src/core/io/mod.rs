//! Provides input/output functionality for molecule files and result tables.
//!
//! Molecule files are read and written through the [`traits::MolecularFile`]
//! interface, which streams one record at a time. The [`table`] module writes
//! the flat per-atom result table.

pub mod sdf;
pub mod table;
pub mod traits;
