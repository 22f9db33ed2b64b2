mod errors;
mod loading;
mod types;

pub use errors::ConfigError;
pub use loading::validate_config;
pub use types::{SpecsConfig, ValueFormat};

use std::path::Path;

impl SpecsConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        loading::from_toml_str(content)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        loading::load_config_file(path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        loading::validate_config(self)
    }
}
