use atomdesc::core::descriptors::catalog::STANDARD_DESCRIPTOR_NAMES;
use atomdesc::core::descriptors::peoe::DEFAULT_ITERATIONS;
use atomdesc::engine::config::DEFAULT_NA_MARKER;

/// Values used when neither the command line nor the config file sets them.
pub struct DefaultsConfig {
    pub descriptors: Vec<String>,
    pub peoe_iterations: usize,
    pub na_marker: String,
    pub quote_titles: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            descriptors: STANDARD_DESCRIPTOR_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            peoe_iterations: DEFAULT_ITERATIONS,
            na_marker: DEFAULT_NA_MARKER.to_string(),
            quote_titles: false,
        }
    }
}
