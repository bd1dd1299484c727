//! # atomdesc Core Library
//!
//! Per-atom chemical descriptors and topological span metrics for batches of
//! molecules read from MDL SD files.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`, `AtomRecord`),
//!   the streaming SD reader/writer, the atom table writer, graph distances,
//!   atom typing and the descriptor models.
//!
//! - **[`engine`]: The Logic Core.** Per-molecule processing: span aggregation,
//!   annotation of molecules with descriptor properties, configuration and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete batch runs from an input SD
//!   file to an annotated SD file and a per-atom CSV table.

pub mod core;
pub mod engine;
pub mod workflows;
