//! # Engine Module
//!
//! Per-molecule processing: pipeline configuration, topological span
//! aggregation, molecule annotation, progress reporting and error types.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Pipeline settings and their validation
//! - **Span Aggregation** ([`span`]) - Per-atom and per-molecule topological spans
//! - **Annotation** ([`annotate`]) - Atom records and injected molecule properties
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod annotate;
pub mod config;
pub mod error;
pub mod progress;
pub mod span;
