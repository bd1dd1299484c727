//! # Core Module
//!
//! The stateless foundation of the library: molecule data structures, file
//! formats, graph algorithms and the per-atom chemistry models.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, molecules and result records
//! - **File I/O** ([`io`]) - Streaming SD file reader/writer and the atom table writer
//! - **Graph Algorithms** ([`graph`]) - Topological shortest-path distances
//! - **Atom Typing** ([`typing`]) - Hybridization perception and Sybyl-style atom types
//! - **Descriptors** ([`descriptors`]) - Named per-atom descriptors and their catalog

pub mod descriptors;
pub mod graph;
pub mod io;
pub mod models;
pub mod typing;
pub mod utils;
