use crate::core::descriptors::catalog::{CatalogError, DescriptorCatalog, STANDARD_DESCRIPTOR_NAMES};
use crate::core::descriptors::peoe::DEFAULT_ITERATIONS;
use crate::core::io::table::TableQuoting;
use thiserror::Error;

/// Marker written for values that are undefined for an atom or molecule.
pub const DEFAULT_NA_MARKER: &str = "NA";

/// Upper bound on charge equalisation cycles; damping makes later cycles negligible.
pub const MAX_PEOE_ITERATIONS: usize = 50;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Invalid descriptor selection: {0}")]
    Descriptors(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Descriptor names in output order.
    pub descriptors: Vec<String>,
    pub peoe_iterations: usize,
    pub na_marker: String,
    pub quoting: TableQuoting,
}

impl PipelineConfig {
    /// Instantiates the descriptor catalog named by this configuration.
    pub fn catalog(&self) -> Result<DescriptorCatalog, ConfigError> {
        Ok(DescriptorCatalog::from_names(&self.descriptors)?)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            descriptors: STANDARD_DESCRIPTOR_NAMES.iter().map(|s| s.to_string()).collect(),
            peoe_iterations: DEFAULT_ITERATIONS,
            na_marker: DEFAULT_NA_MARKER.to_string(),
            quoting: TableQuoting::default(),
        }
    }
}

#[derive(Default)]
pub struct PipelineConfigBuilder {
    descriptors: Option<Vec<String>>,
    peoe_iterations: Option<usize>,
    na_marker: Option<String>,
    quoting: Option<TableQuoting>,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn descriptors<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.descriptors = Some(names.into_iter().map(Into::into).collect());
        self
    }
    pub fn peoe_iterations(mut self, iterations: usize) -> Self {
        self.peoe_iterations = Some(iterations);
        self
    }
    pub fn na_marker(mut self, marker: impl Into<String>) -> Self {
        self.na_marker = Some(marker.into());
        self
    }
    pub fn quoting(mut self, quoting: TableQuoting) -> Self {
        self.quoting = Some(quoting);
        self
    }

    /// Validates the settings, filling unset ones with defaults.
    pub fn build(self) -> Result<PipelineConfig, ConfigError> {
        let defaults = PipelineConfig::default();

        let na_marker = self.na_marker.unwrap_or(defaults.na_marker);
        if na_marker.is_empty() || na_marker.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidParameter {
                name: "na_marker",
                reason: "must be non-empty and contain no whitespace".to_string(),
            });
        }

        let peoe_iterations = self.peoe_iterations.unwrap_or(defaults.peoe_iterations);
        if peoe_iterations == 0 || peoe_iterations > MAX_PEOE_ITERATIONS {
            return Err(ConfigError::InvalidParameter {
                name: "peoe_iterations",
                reason: format!("must be between 1 and {}", MAX_PEOE_ITERATIONS),
            });
        }

        let config = PipelineConfig {
            descriptors: self.descriptors.unwrap_or(defaults.descriptors),
            peoe_iterations,
            na_marker,
            quoting: self.quoting.unwrap_or(defaults.quoting),
        };
        config.catalog()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_standard_pipeline() {
        let config = PipelineConfigBuilder::new().build().unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.descriptors.len(), 10);
        assert_eq!(config.na_marker, "NA");
        assert_eq!(config.peoe_iterations, 6);
        assert_eq!(config.quoting, TableQuoting::Never);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = PipelineConfigBuilder::new()
            .descriptors(["AtomDegree"])
            .peoe_iterations(3)
            .na_marker("-")
            .quoting(TableQuoting::Necessary)
            .build()
            .unwrap();
        assert_eq!(config.descriptors, vec!["AtomDegree".to_string()]);
        assert_eq!(config.catalog().unwrap().names(), vec!["AtomDegree"]);
        assert_eq!(config.peoe_iterations, 3);
        assert_eq!(config.na_marker, "-");
    }

    #[test]
    fn builder_rejects_marker_with_whitespace() {
        let err = PipelineConfigBuilder::new()
            .na_marker("not available")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "na_marker",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_out_of_range_iterations() {
        let err = PipelineConfigBuilder::new()
            .peoe_iterations(0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "peoe_iterations",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_unknown_descriptor() {
        let err = PipelineConfigBuilder::new()
            .descriptors(["AtomDegree", "NotADescriptor"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Descriptors(CatalogError::Unknown("NotADescriptor".to_string()))
        );
    }
}
