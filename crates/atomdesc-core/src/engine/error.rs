use super::config::ConfigError;
use crate::core::io::sdf::SdfError;
use crate::core::io::table::TableError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),

    #[error("Cannot access '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read molecules from '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: SdfError,
    },

    #[error("Failed to write molecules to '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: SdfError,
    },

    #[error("Failed to write atom table for '{}'", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("Failed to move finished atom table into place at '{}'", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
