//! # Module Curves
//!
//! This example simulates the I-V and P-V curves of a PV module and writes
//! them to stdout as CSV, one row per voltage sample and temperature.
//!
//! The module and conditions come from an optional configuration file
//! (`.toml` or `.json`). Without one, the default 36-cell module is simulated
//! at 1000 W/m² for 0, 20, 40, 60, 80, and 100 °C.
//!
//! ```toml
//! [parameters]
//! isc_ref = 7.98
//! voc_ref = 21.9
//! rsh = 1000.0
//!
//! [request]
//! irradiance = 800.0
//! temperatures = [25.0, 50.0, 75.0]
//! ```
//!
//! ## Running the Example
//!
//! ```sh
//! RUST_LOG=debug cargo run --example module_curves -- module.toml > curves.csv
//! ```

use std::{env, error::Error, io};

use pvsim_components::photovoltaic::SimulatorConfig;
use pvsim_core::Component;
use pvsim_examples::write_csv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uom::si::heat_flux_density::watt_per_square_meter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => SimulatorConfig::from_path(path)?,
        None => SimulatorConfig::default(),
    };

    let model = config.parameters.validate()?.inspect(
        |request| {
            info!(
                irradiance = request.irradiance.get::<watt_per_square_meter>(),
                temperatures = ?request.temperatures,
                "simulating module"
            );
        },
        |curves| info!(curves = curves.len(), "simulation complete"),
    );
    let curves = model.call(config.request)?;

    write_csv(&curves, io::stdout().lock())?;
    Ok(())
}
