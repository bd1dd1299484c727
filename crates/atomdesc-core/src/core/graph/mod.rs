//! Topological (bond-count) distances over the molecular graph.

pub mod paths;
