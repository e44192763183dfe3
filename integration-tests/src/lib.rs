//! Shared fixtures for the end-to-end tests.

/// Configuration for the reference 36-cell module at full sun and 25 °C,
/// with every parameter spelled out.
pub const REFERENCE_MODULE_TOML: &str = r"
[parameters]
isc_ref = 7.98
voc_ref = 21.9
rs = 0.0001
rsh = 1000.0
ns = 36
n = 1.2
g_ref = 1000.0
alpha_isc = 0.001904

[request]
irradiance = 1000.0
temperatures = [25.0]
";
