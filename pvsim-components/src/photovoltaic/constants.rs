//! Fixed constants of the single-diode model.
//!
//! These values are part of the model definition and are intentionally kept
//! at the precision the model was calibrated with.

/// Boltzmann constant in J/K.
pub const BOLTZMANN_CONSTANT: f64 = 1.3805e-23;

/// Elementary charge in C.
pub const ELEMENTARY_CHARGE: f64 = 1.6e-19;

/// Offset added to a Celsius temperature to obtain the absolute temperature.
///
/// The model uses 273, not 273.15.
pub const KELVIN_OFFSET: f64 = 273.0;

/// Cell temperature in °C at which the photocurrent correction vanishes.
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// Number of points in every voltage sweep.
pub const SAMPLE_COUNT: usize = 100;

/// Converts a Celsius temperature to the model's absolute temperature in K.
#[must_use]
pub fn absolute_temperature(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}
