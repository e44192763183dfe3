use ndarray::Array1;
use uom::si::{electric_potential::volt, f64::ElectricPotential};

use super::constants::SAMPLE_COUNT;

/// Builds the voltage sweep shared by every curve of a simulation.
///
/// Returns [`SAMPLE_COUNT`] evenly spaced voltages (in volts) from zero to
/// `voc_ref`, inclusive of both endpoints.
/// Interior points are `i * (voc_ref / (SAMPLE_COUNT - 1))` and the last
/// point is exactly `voc_ref`.
#[must_use]
pub fn voltage_sweep(voc_ref: ElectricPotential) -> Array1<f64> {
    let voc = voc_ref.get::<volt>();
    let last = SAMPLE_COUNT - 1;

    #[allow(clippy::cast_precision_loss)]
    let step = voc / last as f64;

    #[allow(clippy::cast_precision_loss)]
    Array1::from_shape_fn(SAMPLE_COUNT, |i| if i == last { voc } else { i as f64 * step })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn spans_zero_to_open_circuit_voltage() {
        let sweep = voltage_sweep(ElectricPotential::new::<volt>(21.9));

        assert_eq!(sweep.len(), 100);
        assert_eq!(sweep[0], 0.0);
        assert_eq!(sweep[99], 21.9);
        assert!(sweep.windows(2).into_iter().all(|w| w[0] < w[1]));
    }

    #[test]
    fn evenly_spaced() {
        let sweep = voltage_sweep(ElectricPotential::new::<volt>(99.0));

        for (i, v) in sweep.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = i as f64;
            assert_relative_eq!(*v, expected);
        }
    }
}
