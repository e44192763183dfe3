use serde::{Deserialize, Serialize};
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{
        ElectricCurrent, ElectricPotential, ElectricalResistance, HeatFluxDensity, Ratio,
        TemperatureCoefficient,
    },
    heat_flux_density::watt_per_square_meter,
    ratio::ratio,
    temperature_coefficient::per_kelvin,
};

use super::{SimulationError, SingleDiodeModel};

/// Electrical and thermal parameters of a PV module.
///
/// This is the unvalidated form collected from a user or a configuration file.
/// Call [`ModelParameters::validate`] to obtain a [`SingleDiodeModel`] that can
/// evaluate curves.
///
/// When (de)serialized, each quantity is a plain number in SI base units
/// (A, V, Ω, W/m², 1/K).
/// A temperature coefficient in 1/K has the same magnitude as one in 1/°C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelParameters {
    /// Short-circuit current at reference conditions.
    pub isc_ref: ElectricCurrent,
    /// Open-circuit voltage at reference conditions.
    pub voc_ref: ElectricPotential,
    /// Series resistance.
    pub rs: ElectricalResistance,
    /// Shunt resistance.
    pub rsh: ElectricalResistance,
    /// Number of series-connected cells.
    pub ns: u32,
    /// Diode ideality factor.
    pub n: Ratio,
    /// Irradiance at reference conditions.
    pub g_ref: HeatFluxDensity,
    /// Temperature coefficient of the short-circuit current.
    pub alpha_isc: TemperatureCoefficient,
}

impl ModelParameters {
    /// Validates the parameters and builds a [`SingleDiodeModel`].
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first field
    /// that is non-finite or outside its domain.
    pub fn validate(&self) -> Result<SingleDiodeModel, SimulationError> {
        SingleDiodeModel::new(self)
    }
}

/// A 36-cell module rated at 7.98 A short-circuit and 21.9 V open-circuit.
impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            isc_ref: ElectricCurrent::new::<ampere>(7.98),
            voc_ref: ElectricPotential::new::<volt>(21.9),
            rs: ElectricalResistance::new::<ohm>(0.0001),
            rsh: ElectricalResistance::new::<ohm>(1000.0),
            ns: 36,
            n: Ratio::new::<ratio>(1.2),
            g_ref: HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
            alpha_isc: TemperatureCoefficient::new::<per_kelvin>(0.001_904),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_module_is_valid() {
        assert!(ModelParameters::default().validate().is_ok());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn deserializes_partial_json_over_defaults() {
        let params: ModelParameters =
            serde_json::from_str(r#"{ "rsh": 250.0, "ns": 60 }"#).unwrap();

        assert_eq!(params.rsh.get::<ohm>(), 250.0);
        assert_eq!(params.ns, 60);
        assert_eq!(params.isc_ref, ModelParameters::default().isc_ref);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = serde_json::from_str::<ModelParameters>(r#"{ "rp": 1.0 }"#);
        assert!(result.is_err());
    }
}
