use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ConfigError, CurveSet, ModelParameters, SimulationRequest};

/// A complete simulation setup: module parameters plus the conditions to
/// simulate.
///
/// Both sections are optional in configuration text and fall back to their
/// defaults, as do any omitted fields within them.
///
/// # Example
///
/// ```
/// use pvsim_components::photovoltaic::SimulatorConfig;
///
/// let config = SimulatorConfig::from_toml_str(
///     r#"
///     [parameters]
///     rsh = 500.0
///
///     [request]
///     irradiance = 800.0
///     temperatures = [25.0, 50.0]
///     "#,
/// )?;
///
/// let curves = config.run()?;
/// assert_eq!(curves.len(), 2);
/// # Ok::<(), pvsim_components::photovoltaic::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    pub parameters: ModelParameters,
    pub request: SimulationRequest,
}

impl SimulatorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not a valid configuration.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a configuration file, choosing the format by its extension
    /// (`.toml` or `.json`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&fs::read_to_string(path)?)?,
            "json" => Self::from_json_str(&fs::read_to_string(path)?)?,
            _ => return Err(ConfigError::UnsupportedExtension { extension }),
        };

        info!(path = %path.display(), "loaded simulator configuration");
        Ok(config)
    }

    /// Validates the parameters and simulates the request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Simulation`] if the parameters or request are
    /// invalid, or if the simulation fails.
    pub fn run(&self) -> Result<CurveSet, ConfigError> {
        Ok(self.parameters.validate()?.simulate(&self.request)?)
    }
}
