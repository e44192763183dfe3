use std::{env, fs};

use approx::assert_relative_eq;
use integration_tests::REFERENCE_MODULE_TOML;
use pvsim_components::photovoltaic::{
    ConfigError, Curve, ModelParameters, SimulationError, SimulationRequest, SimulatorConfig,
    TEMPERATURE_OPTIONS, simulate,
};
use pvsim_core::{Component, constraint::ConstraintError};
use uom::si::{
    electric_current::ampere, f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter,
};

#[test]
#[allow(clippy::float_cmp)]
fn reference_module_from_toml() {
    let config = SimulatorConfig::from_toml_str(REFERENCE_MODULE_TOML).unwrap();
    assert_eq!(config.parameters, ModelParameters::default());

    let curves = config.run().unwrap();
    let curve = curves.get(25.0).unwrap();

    let model = config.parameters.validate().unwrap();
    let iph = model.photo_current(config.request.irradiance, 25.0);
    assert_eq!(iph.get::<ampere>(), 7.98);

    assert_eq!(curve.voltage().len(), 100);
    assert_relative_eq!(curve.current()[0], iph.get::<ampere>(), max_relative = 1e-6);
    assert_eq!(curve.current()[99], 0.0);
}

#[test]
fn toml_and_json_configurations_agree() {
    let from_toml = SimulatorConfig::from_toml_str(REFERENCE_MODULE_TOML).unwrap();

    let json = serde_json::to_string(&from_toml).unwrap();
    let from_json = SimulatorConfig::from_json_str(&json).unwrap();

    assert_eq!(from_json, from_toml);
    assert_eq!(from_json.run().unwrap(), from_toml.run().unwrap());
}

#[test]
fn configuration_files_are_loaded_by_extension() {
    let dir = env::temp_dir().join(format!("pvsim-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let toml_path = dir.join("module.toml");
    fs::write(&toml_path, REFERENCE_MODULE_TOML).unwrap();
    let json_path = dir.join("module.JSON");
    fs::write(&json_path, r#"{ "request": { "temperatures": [10.0, 70.0] } }"#).unwrap();

    let from_toml = SimulatorConfig::from_path(&toml_path).unwrap();
    let from_json = SimulatorConfig::from_path(&json_path).unwrap();
    let missing = SimulatorConfig::from_path(dir.join("missing.toml"));

    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(from_toml.request.temperatures, [25.0]);
    assert_eq!(from_json.request.temperatures, [10.0, 70.0]);
    assert_eq!(from_json.parameters, ModelParameters::default());
    assert!(matches!(missing, Err(ConfigError::Io(_))));
}

#[test]
fn short_circuit_current_rises_with_temperature() {
    let request = SimulationRequest::new(
        HeatFluxDensity::new::<watt_per_square_meter>(1000.0),
        TEMPERATURE_OPTIONS,
    );
    let curves = simulate(&ModelParameters::default(), &request).unwrap();

    let short_circuit: Vec<f64> = curves.iter().map(|curve: &Curve| curve.current()[0]).collect();

    assert!(
        short_circuit.windows(2).all(|w| w[0] < w[1]),
        "short-circuit current should rise with temperature: {short_circuit:?}"
    );
}

#[test]
fn more_light_means_more_short_circuit_current() {
    let params = ModelParameters::default();
    let short_circuit_current = |g: f64| {
        let request =
            SimulationRequest::new(HeatFluxDensity::new::<watt_per_square_meter>(g), [25.0]);
        simulate(&params, &request).unwrap().get(25.0).unwrap().current()[0]
    };

    let currents: Vec<f64> = (0..=30)
        .map(|step| short_circuit_current(f64::from(step) * 50.0))
        .collect();

    assert!(currents.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn component_rejects_out_of_range_irradiance() {
    let model = ModelParameters::default().validate().unwrap();
    let request =
        SimulationRequest::new(HeatFluxDensity::new::<watt_per_square_meter>(2000.0), [25.0]);

    assert_eq!(
        model.call(request),
        Err(SimulationError::InvalidParameter {
            field: "irradiance",
            source: ConstraintError::AboveMaximum,
        })
    );
}

#[test]
fn invalid_shunt_resistance_in_config() {
    let config = SimulatorConfig::from_toml_str("[parameters]\nrsh = -1.0\n").unwrap();

    assert!(matches!(
        config.run(),
        Err(ConfigError::Simulation(SimulationError::InvalidParameter {
            field: "rsh",
            source: ConstraintError::Negative,
        }))
    ));
}
