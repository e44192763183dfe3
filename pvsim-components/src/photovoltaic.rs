//! Single-diode I-V and P-V curves of a photovoltaic module.
//!
//! A simulation takes a set of [`ModelParameters`] describing the module and a
//! [`SimulationRequest`] naming an irradiance and a list of cell temperatures.
//! It produces a [`CurveSet`] with one [`Curve`] per temperature, all sharing
//! one 100-point voltage sweep from zero to the reference open-circuit voltage.
//!
//! For each temperature `T` (°C), with `T_K = T + 273`:
//!
//! - photocurrent: `Iph = Isc_ref * (G / G_ref) * (1 + alpha_Isc * (T - 25))`
//! - saturation current: `I0 = Isc_ref / (exp(q * Voc_ref / (n * Ns * k * T_K)) - 1)`
//! - thermal voltage: `Vt = n * Ns * k * T_K / q`
//! - current: `I = max(0, Iph - I0 * (exp((V + Rs) / Vt) - 1) - (V + Rs) / Rsh)`
//! - power: `P = V * I`
//!
//! The constants `k` and `q` and the 273 K offset are fixed by the model; see
//! [`constants`].
//!
//! Temperature and irradiance corrections of `Rs` and `Rsh`, maximum power
//! point tracking, and parameter fitting are out of scope.

pub mod constants;

mod config;
mod curve;
mod error;
mod parameters;
mod request;
mod single_diode;
mod sweep;

pub use config::SimulatorConfig;
pub use curve::{Curve, CurveSet};
pub use error::{ConfigError, SimulationError};
pub use parameters::ModelParameters;
pub use request::{IRRADIANCE_RANGE, IRRADIANCE_STEP, SimulationRequest, TEMPERATURE_OPTIONS};
pub use single_diode::SingleDiodeModel;
pub use sweep::voltage_sweep;

/// Simulates I-V and P-V curves for `params` under `request`.
///
/// This is a convenience for `params.validate()?.simulate(request)`.
///
/// # Example
///
/// ```
/// use pvsim_components::photovoltaic::{ModelParameters, SimulationRequest, simulate};
/// use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};
///
/// let request = SimulationRequest::new(
///     HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
///     [25.0, 50.0],
/// );
/// let curves = simulate(&ModelParameters::default(), &request)?;
///
/// let temperatures: Vec<f64> = curves.iter().map(|c| c.temperature()).collect();
/// assert_eq!(temperatures, [25.0, 50.0]);
/// assert!(curves.iter().all(|c| c.current().iter().all(|&i| i >= 0.0)));
/// # Ok::<(), pvsim_components::photovoltaic::SimulationError>(())
/// ```
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] before any curve is computed
/// if a parameter or request value is invalid, and other variants if the
/// numerical evaluation breaks down.
pub fn simulate(
    params: &ModelParameters,
    request: &SimulationRequest,
) -> Result<CurveSet, SimulationError> {
    params.validate()?.simulate(request)
}
