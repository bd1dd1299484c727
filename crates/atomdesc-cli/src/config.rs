mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use atomdesc::core::io::table::TableQuoting;
use atomdesc::engine::config::{PipelineConfig, PipelineConfigBuilder};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDescriptorsConfig {
    include: Option<Vec<String>>,
    #[serde(rename = "peoe-iterations")]
    peoe_iterations: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "na-marker")]
    na_marker: Option<String>,
    #[serde(rename = "quote-titles")]
    quote_titles: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialPipelineConfig {
    descriptors: Option<PartialDescriptorsConfig>,
    output: Option<PartialOutputConfig>,
}

impl PartialPipelineConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the config file named on the command line, or an empty one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final pipeline settings.
    ///
    /// Command-line values win over the config file, which wins over the
    /// built-in defaults.
    pub fn merge_with_cli(self, args: &Cli) -> Result<PipelineConfig> {
        let defaults = DefaultsConfig::default();
        let descriptors_config = self.descriptors.unwrap_or_default();
        let output_config = self.output.unwrap_or_default();

        let descriptors = args
            .descriptors
            .clone()
            .or(descriptors_config.include)
            .unwrap_or(defaults.descriptors);
        if let Some(blank) = descriptors.iter().find(|name| name.trim().is_empty()) {
            return Err(CliError::Argument(format!(
                "descriptor names must not be blank (got {:?})",
                blank
            )));
        }
        let descriptors: Vec<String> = descriptors
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();

        let quote_titles = args
            .quote_titles_override()
            .or(output_config.quote_titles)
            .unwrap_or(defaults.quote_titles);
        let quoting = if quote_titles {
            TableQuoting::Necessary
        } else {
            TableQuoting::Never
        };

        PipelineConfigBuilder::new()
            .descriptors(descriptors)
            .peoe_iterations(
                descriptors_config
                    .peoe_iterations
                    .unwrap_or(defaults.peoe_iterations),
            )
            .na_marker(
                args.na_marker
                    .clone()
                    .or(output_config.na_marker)
                    .unwrap_or(defaults.na_marker),
            )
            .quoting(quoting)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
