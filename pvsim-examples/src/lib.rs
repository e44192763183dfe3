//! Helpers shared by the pvsim example programs.

use std::io::{self, Write};

use pvsim_components::photovoltaic::CurveSet;

/// Writes a curve set as CSV in long format.
///
/// The header is `temperature_c,voltage_v,current_a,power_w`, followed by one
/// row per voltage sample of each curve, curves in request order.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_csv(curves: &CurveSet, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "temperature_c,voltage_v,current_a,power_w")?;
    for curve in curves {
        let samples = curve
            .voltage()
            .iter()
            .zip(curve.current())
            .zip(curve.power());
        for ((v, i), p) in samples {
            writeln!(writer, "{},{v},{i},{p}", curve.temperature())?;
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use pvsim_components::photovoltaic::{ModelParameters, SimulationRequest, simulate};
    use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};

    use super::*;

    fn csv_for(temperatures: &[f64]) -> String {
        let request = SimulationRequest::new(
            HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
            temperatures.iter().copied(),
        );
        let curves = simulate(&ModelParameters::default(), &request).unwrap();

        let mut buffer = Vec::new();
        write_csv(&curves, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn one_row_per_sample() {
        let csv = csv_for(&[25.0, 50.0]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 1 + 2 * 100);
        assert_eq!(lines[0], "temperature_c,voltage_v,current_a,power_w");
        assert!(lines[1].starts_with("25,0,"));
        assert!(lines[101].starts_with("50,0,"));
        assert!(lines[100].starts_with("25,21.9,0,"));
    }

    #[test]
    fn empty_set_writes_header_only() {
        assert_eq!(csv_for(&[]), "temperature_c,voltage_v,current_a,power_w\n");
    }
}
