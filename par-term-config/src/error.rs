//! Typed error variants for the par-term-config crate.
//!
//! Callers that only need a message can keep using `anyhow`; `ConfigError`
//! converts automatically because it implements `std::error::Error`.

use thiserror::Error;

/// Errors that can occur when loading or validating editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
