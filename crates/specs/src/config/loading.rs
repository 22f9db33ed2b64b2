use std::fs;
use std::path::Path;

use tracing::debug;

use super::errors::ConfigError;
use super::types::SpecsConfig;

/// Parse and validate a TOML document.
pub fn from_toml_str(content: &str) -> Result<SpecsConfig, ConfigError> {
    let config: SpecsConfig =
        toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load a configuration file from the given path.
///
/// Unlike a missing key, a missing file is an error: callers that want
/// defaults should use [`SpecsConfig::default`].
pub fn load_config_file(path: &Path) -> Result<SpecsConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    let config = from_toml_str(&content).map_err(|e| match e {
        ConfigError::ConfigParseError { message } => ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), message),
        },
        other => other,
    })?;

    debug!(
        event = "specs.config.load_completed",
        path = %path.display(),
        value_format = ?config.value_format,
        log_passes = config.log_passes,
    );

    Ok(config)
}

pub fn validate_config(config: &SpecsConfig) -> Result<(), ConfigError> {
    if config.max_table_failures == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "max_table_failures must be greater than 0".to_string(),
        });
    }
    Ok(())
}
