//! Component models for pvsim.
//!
//! The [`photovoltaic`] module evaluates the single-diode equivalent circuit
//! of a PV module across a voltage sweep, producing I-V and P-V curves for a
//! batch of cell temperatures.

pub mod photovoltaic;
