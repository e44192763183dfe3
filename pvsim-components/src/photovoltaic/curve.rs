use std::sync::Arc;

use ndarray::Array1;

/// The I-V and P-V characteristic of a module at one cell temperature.
///
/// Voltages are in V, currents in A, and powers in W.
/// All three sequences have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    temperature: f64,
    voltage: Arc<Array1<f64>>,
    current: Array1<f64>,
    power: Array1<f64>,
}

impl Curve {
    pub(crate) fn new(
        temperature: f64,
        voltage: Arc<Array1<f64>>,
        current: Array1<f64>,
        power: Array1<f64>,
    ) -> Self {
        debug_assert_eq!(voltage.len(), current.len());
        debug_assert_eq!(voltage.len(), power.len());
        Self {
            temperature,
            voltage,
            current,
            power,
        }
    }

    /// Cell temperature in °C.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Voltage sweep, shared with every other curve in the same [`CurveSet`].
    #[must_use]
    pub fn voltage(&self) -> &Array1<f64> {
        &self.voltage
    }

    /// Module current at each voltage, never negative.
    #[must_use]
    pub fn current(&self) -> &Array1<f64> {
        &self.current
    }

    /// Module power at each voltage.
    #[must_use]
    pub fn power(&self) -> &Array1<f64> {
        &self.power
    }

    /// Series label for legends, such as `"25°C"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}°C", self.temperature)
    }

    /// `[voltage, current]` pairs for drawing the I-V curve.
    #[must_use]
    pub fn iv_points(&self) -> Vec<[f64; 2]> {
        pairs(&self.voltage, &self.current)
    }

    /// `[voltage, power]` pairs for drawing the P-V curve.
    #[must_use]
    pub fn pv_points(&self) -> Vec<[f64; 2]> {
        pairs(&self.voltage, &self.power)
    }
}

fn pairs(x: &Array1<f64>, y: &Array1<f64>) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&x, &y)| [x, y]).collect()
}

/// The curves produced by one simulation, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    voltage: Arc<Array1<f64>>,
    curves: Vec<Curve>,
}

impl CurveSet {
    pub(crate) fn new(voltage: Arc<Array1<f64>>, curves: Vec<Curve>) -> Self {
        Self { voltage, curves }
    }

    /// The voltage sweep shared by all curves.
    #[must_use]
    pub fn voltage(&self) -> &Array1<f64> {
        &self.voltage
    }

    /// Number of curves, one per requested temperature.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over the curves in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    /// Returns the curve simulated at exactly `temperature` °C, if any.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn get(&self, temperature: f64) -> Option<&Curve> {
        self.curves.iter().find(|c| c.temperature == temperature)
    }
}

impl<'a> IntoIterator for &'a CurveSet {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl IntoIterator for CurveSet {
    type Item = Curve;
    type IntoIter = std::vec::IntoIter<Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn sample_set() -> CurveSet {
        let voltage = Arc::new(array![0.0, 1.0, 2.0]);
        let curves = [25.0, 12.5]
            .into_iter()
            .map(|t| {
                let current = array![3.0, 2.0, 0.0];
                let power = &*voltage * &current;
                Curve::new(t, Arc::clone(&voltage), current, power)
            })
            .collect();
        CurveSet::new(voltage, curves)
    }

    #[test]
    fn labels_match_temperature() {
        let set = sample_set();
        let labels: Vec<_> = set.iter().map(Curve::label).collect();
        assert_eq!(labels, ["25°C", "12.5°C"]);
    }

    #[test]
    fn points_pair_voltage_with_each_series() {
        let set = sample_set();
        let curve = set.get(25.0).unwrap();

        assert_eq!(curve.iv_points(), vec![[0.0, 3.0], [1.0, 2.0], [2.0, 0.0]]);
        assert_eq!(curve.pv_points(), vec![[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]]);
    }

    #[test]
    fn curves_share_one_voltage_sweep() {
        let set = sample_set();
        for curve in &set {
            assert!(std::ptr::eq(curve.voltage(), set.voltage()));
        }
        assert!(set.get(40.0).is_none());
    }
}
