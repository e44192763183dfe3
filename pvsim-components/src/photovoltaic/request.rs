use std::ops::RangeInclusive;

use pvsim_core::constraint::{ConstraintError, StrictlyPositive};
use serde::{Deserialize, Serialize};
use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};

use super::{SimulationError, constants::absolute_temperature};

/// Irradiance values accepted by a simulation, in W/m².
pub const IRRADIANCE_RANGE: RangeInclusive<f64> = 0.0..=1500.0;

/// Increment, in W/m², of the irradiance values offered to users.
pub const IRRADIANCE_STEP: f64 = 50.0;

/// Cell temperatures, in °C, offered to users.
///
/// The engine accepts any temperature above absolute zero; this list only
/// describes the usual menu of choices.
pub const TEMPERATURE_OPTIONS: [f64; 21] = [
    0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0,
    80.0, 85.0, 90.0, 95.0, 100.0,
];

/// An irradiance and the set of cell temperatures to simulate at it.
///
/// Temperatures are in degrees Celsius and are simulated in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationRequest {
    /// Plane-of-array irradiance.
    pub irradiance: HeatFluxDensity,
    /// Cell temperatures in °C.
    pub temperatures: Vec<f64>,
}

impl SimulationRequest {
    /// Creates a request for the given irradiance and temperatures.
    #[must_use]
    pub fn new(irradiance: HeatFluxDensity, temperatures: impl IntoIterator<Item = f64>) -> Self {
        Self {
            irradiance,
            temperatures: temperatures.into_iter().collect(),
        }
    }

    /// Checks that the request can be simulated.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidParameter`] if the irradiance is not finite
    ///   or lies outside [`IRRADIANCE_RANGE`], or if a temperature is not
    ///   finite or is at or below absolute zero.
    /// - [`SimulationError::DuplicateTemperature`] if a temperature appears
    ///   more than once.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let g = self.irradiance.get::<watt_per_square_meter>();
        check_finite("irradiance", g)?;
        if g < *IRRADIANCE_RANGE.start() {
            return Err(SimulationError::invalid(
                "irradiance",
                ConstraintError::BelowMinimum,
            ));
        }
        if g > *IRRADIANCE_RANGE.end() {
            return Err(SimulationError::invalid(
                "irradiance",
                ConstraintError::AboveMaximum,
            ));
        }

        for (index, &temperature) in self.temperatures.iter().enumerate() {
            check_finite("temperatures", temperature)?;
            StrictlyPositive::new(absolute_temperature(temperature)).map_err(|_| {
                SimulationError::invalid("temperatures", ConstraintError::BelowMinimum)
            })?;

            if self.temperatures[..index].contains(&temperature) {
                return Err(SimulationError::DuplicateTemperature { temperature });
            }
        }

        Ok(())
    }
}

/// Full sun on the usual spread of temperatures from 0 °C to 100 °C.
impl Default for SimulationRequest {
    fn default() -> Self {
        Self::new(
            HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
            [0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        )
    }
}

/// Rejects NaN and infinite values for the named field.
pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_nan() {
        Err(SimulationError::invalid(field, ConstraintError::NotANumber))
    } else if value.is_infinite() {
        Err(SimulationError::invalid(field, ConstraintError::Infinite))
    } else {
        Ok(())
    }
}
