use pvsim_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that may occur when simulating a PV module.
///
/// All errors are reported before any curve is returned; a failed simulation
/// never yields partial output.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum SimulationError {
    /// A model parameter or request value is outside its valid domain.
    #[error("invalid parameter `{field}`: {source}")]
    InvalidParameter {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The same temperature was requested more than once.
    #[error("temperature {temperature} °C was requested more than once")]
    DuplicateTemperature { temperature: f64 },

    /// The reverse saturation current denominator evaluated to zero.
    #[error("reverse saturation current is undefined at {absolute_temperature} K (division by zero)")]
    DivideByZero { absolute_temperature: f64 },

    /// A computed quantity is NaN or infinite.
    #[error("computed {quantity} is not finite at {absolute_temperature} K")]
    NonFinite {
        quantity: &'static str,
        absolute_temperature: f64,
    },
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, source: ConstraintError) -> Self {
        Self::InvalidParameter { field, source }
    }
}

/// Errors that may occur when loading and running a simulator configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file extension is neither `.toml` nor `.json`.
    #[error("unsupported configuration format `{extension}`")]
    UnsupportedExtension { extension: String },

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
