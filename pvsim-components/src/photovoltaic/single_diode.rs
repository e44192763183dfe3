use std::sync::Arc;

use ndarray::Array1;
use pvsim_core::{
    Component,
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
};
use tracing::{debug, trace};
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

use super::{
    Curve, CurveSet, ModelParameters, SimulationError, SimulationRequest,
    constants::{BOLTZMANN_CONSTANT, ELEMENTARY_CHARGE, REFERENCE_TEMPERATURE, absolute_temperature},
    request::check_finite,
    voltage_sweep,
};

/// A validated single-diode model of a PV module.
///
/// The model evaluates the explicit approximation
///
/// ```text
/// I = Iph - I0 * (exp((V + Rs) / Vt) - 1) - (V + Rs) / Rsh
/// ```
///
/// where `V` is the swept terminal voltage, and clips the result to be
/// non-negative. The series resistance is added to `V` directly rather than
/// through an `I * Rs` term, so no implicit equation is solved.
///
/// A `SingleDiodeModel` can only be built from parameters that passed
/// validation, so every method can rely on positive divisors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleDiodeModel {
    isc_ref: Constrained<ElectricCurrent, StrictlyPositive>,
    voc_ref: Constrained<ElectricPotential, StrictlyPositive>,
    rs: Constrained<ElectricalResistance, NonNegative>,
    rsh: Constrained<ElectricalResistance, StrictlyPositive>,
    ns: Constrained<u32, StrictlyPositive>,
    n: Constrained<Ratio, StrictlyPositive>,
    g_ref: Constrained<HeatFluxDensity, StrictlyPositive>,
    alpha_isc: TemperatureCoefficient,
}

impl SingleDiodeModel {
    /// Validates `params` and builds a model from them.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first field
    /// that is non-finite, non-positive (or negative, for `rs`), or zero
    /// (for `ns`).
    pub fn new(params: &ModelParameters) -> Result<Self, SimulationError> {
        check_finite("isc_ref", params.isc_ref.get::<ampere>())?;
        check_finite("voc_ref", params.voc_ref.get::<volt>())?;
        check_finite("rs", params.rs.get::<ohm>())?;
        check_finite("rsh", params.rsh.get::<ohm>())?;
        check_finite("n", params.n.get::<ratio>())?;
        check_finite("g_ref", params.g_ref.get::<watt_per_square_meter>())?;
        check_finite("alpha_isc", params.alpha_isc.get::<per_kelvin>())?;

        let invalid = |field: &'static str| {
            move |source: ConstraintError| SimulationError::invalid(field, source)
        };

        Ok(Self {
            isc_ref: StrictlyPositive::new(params.isc_ref).map_err(invalid("isc_ref"))?,
            voc_ref: StrictlyPositive::new(params.voc_ref).map_err(invalid("voc_ref"))?,
            rs: NonNegative::new(params.rs).map_err(invalid("rs"))?,
            rsh: StrictlyPositive::new(params.rsh).map_err(invalid("rsh"))?,
            ns: StrictlyPositive::new(params.ns).map_err(invalid("ns"))?,
            n: StrictlyPositive::new(params.n).map_err(invalid("n"))?,
            g_ref: StrictlyPositive::new(params.g_ref).map_err(invalid("g_ref"))?,
            alpha_isc: params.alpha_isc,
        })
    }

    /// Returns the parameters this model was built from.
    #[must_use]
    pub fn parameters(&self) -> ModelParameters {
        ModelParameters {
            isc_ref: self.isc_ref.get(),
            voc_ref: self.voc_ref.get(),
            rs: self.rs.get(),
            rsh: self.rsh.get(),
            ns: self.ns.get(),
            n: self.n.get(),
            g_ref: self.g_ref.get(),
            alpha_isc: self.alpha_isc,
        }
    }

    /// Photocurrent at irradiance `irradiance` and cell temperature
    /// `temperature` (°C).
    ///
    /// Scales linearly with irradiance relative to the reference irradiance,
    /// and linearly with temperature relative to 25 °C.
    /// The result is not clamped and may be negative.
    #[must_use]
    pub fn photo_current(&self, irradiance: HeatFluxDensity, temperature: f64) -> ElectricCurrent {
        let isc_ref = self.isc_ref.get().get::<ampere>();
        let g = irradiance.get::<watt_per_square_meter>();
        let g_ref = self.g_ref.get().get::<watt_per_square_meter>();
        let alpha = self.alpha_isc.get::<per_kelvin>();

        ElectricCurrent::new::<ampere>(
            isc_ref * (g / g_ref) * (1.0 + alpha * (temperature - REFERENCE_TEMPERATURE)),
        )
    }

    /// Diode reverse saturation current at absolute temperature `t_k` (K).
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidParameter`] if `t_k` is not positive.
    /// - [`SimulationError::DivideByZero`] if the denominator is exactly zero.
    /// - [`SimulationError::NonFinite`] if the result is NaN or infinite.
    #[allow(clippy::float_cmp)]
    pub fn reverse_saturation_current(&self, t_k: f64) -> Result<ElectricCurrent, SimulationError> {
        check_finite("absolute_temperature", t_k)?;
        StrictlyPositive::new(t_k)
            .map_err(|source| SimulationError::invalid("absolute_temperature", source))?;

        let isc_ref = self.isc_ref.get().get::<ampere>();
        let voc_ref = self.voc_ref.get().get::<volt>();

        let denominator =
            (ELEMENTARY_CHARGE * voc_ref / (self.diode_scale() * BOLTZMANN_CONSTANT * t_k)).exp()
                - 1.0;
        if denominator == 0.0 {
            return Err(SimulationError::DivideByZero {
                absolute_temperature: t_k,
            });
        }

        let i0 = isc_ref / denominator;
        if !i0.is_finite() {
            return Err(SimulationError::NonFinite {
                quantity: "reverse saturation current",
                absolute_temperature: t_k,
            });
        }
        Ok(ElectricCurrent::new::<ampere>(i0))
    }

    /// Thermal voltage `n * Ns * k * T / q` of the whole cell string at
    /// absolute temperature `t_k` (K).
    #[must_use]
    pub fn thermal_voltage(&self, t_k: f64) -> ElectricPotential {
        ElectricPotential::new::<volt>(
            self.diode_scale() * BOLTZMANN_CONSTANT * t_k / ELEMENTARY_CHARGE,
        )
    }

    /// Unclipped module current at terminal voltage `voltage`.
    ///
    /// The result may be negative beyond the open-circuit voltage.
    #[must_use]
    pub fn pv_current(
        &self,
        voltage: ElectricPotential,
        iph: ElectricCurrent,
        i0: ElectricCurrent,
        t_k: f64,
    ) -> ElectricCurrent {
        let diode = self.diode(iph, i0, t_k);
        ElectricCurrent::new::<ampere>(diode.current(voltage.get::<volt>()))
    }

    /// Simulates one curve per requested temperature, in request order.
    ///
    /// Every curve shares a single [`voltage_sweep`] from zero to the
    /// reference open-circuit voltage.
    /// An empty temperature list yields an empty [`CurveSet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid (see
    /// [`SimulationRequest::validate`]) or if any computed quantity is not
    /// finite. No curves are returned on error.
    pub fn simulate(&self, request: &SimulationRequest) -> Result<CurveSet, SimulationError> {
        request.validate()?;

        let voltage = Arc::new(voltage_sweep(self.voc_ref.get()));
        let curves = request
            .temperatures
            .iter()
            .map(|&temperature| self.curve(&voltage, request.irradiance, temperature))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CurveSet::new(voltage, curves))
    }

    fn curve(
        &self,
        voltage: &Arc<Array1<f64>>,
        irradiance: HeatFluxDensity,
        temperature: f64,
    ) -> Result<Curve, SimulationError> {
        let t_k = absolute_temperature(temperature);

        let iph = self.photo_current(irradiance, temperature);
        if !iph.get::<ampere>().is_finite() {
            return Err(SimulationError::NonFinite {
                quantity: "photocurrent",
                absolute_temperature: t_k,
            });
        }
        let i0 = self.reverse_saturation_current(t_k)?;

        let diode = self.diode(iph, i0, t_k);
        let raw = voltage.mapv(|v| diode.current(v));
        if raw.iter().any(|i| i.is_nan()) {
            return Err(SimulationError::NonFinite {
                quantity: "current",
                absolute_temperature: t_k,
            });
        }

        let clipped = raw.iter().filter(|&&i| i < 0.0).count();
        let current = raw.mapv(|i| i.max(0.0));
        let power = &**voltage * &current;

        debug!(
            temperature,
            iph = iph.get::<ampere>(),
            i0 = i0.get::<ampere>(),
            "evaluated single-diode curve"
        );
        trace!(temperature, clipped, "clipped negative current samples");

        Ok(Curve::new(temperature, Arc::clone(voltage), current, power))
    }

    /// The product `n * Ns` that scales the diode exponent.
    fn diode_scale(&self) -> f64 {
        self.n.get().get::<ratio>() * f64::from(self.ns.get())
    }

    fn diode(&self, iph: ElectricCurrent, i0: ElectricCurrent, t_k: f64) -> Diode {
        Diode {
            iph: iph.get::<ampere>(),
            i0: i0.get::<ampere>(),
            vt: self.thermal_voltage(t_k).get::<volt>(),
            rs: self.rs.get().get::<ohm>(),
            rsh: self.rsh.get().get::<ohm>(),
        }
    }
}

/// Coefficients of the current equation at one operating condition, in SI units.
#[derive(Debug, Clone, Copy)]
struct Diode {
    iph: f64,
    i0: f64,
    vt: f64,
    rs: f64,
    rsh: f64,
}

impl Diode {
    fn current(&self, v: f64) -> f64 {
        self.iph - self.i0 * (((v + self.rs) / self.vt).exp() - 1.0) - (v + self.rs) / self.rsh
    }
}

impl Component for SingleDiodeModel {
    type Input = SimulationRequest;
    type Output = CurveSet;
    type Error = SimulationError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.simulate(&input)
    }
}
