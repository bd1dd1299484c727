//! # Workflows Module
//!
//! High-level entry points that run a complete descriptor calculation from
//! input file to finished outputs.
//!
//! - **Batch Workflow** ([`batch`]) - Streams every molecule of an SD file through
//!   typing, descriptor calculation and span aggregation, writing the
//!   annotated SD file and the atom table.

pub mod batch;
