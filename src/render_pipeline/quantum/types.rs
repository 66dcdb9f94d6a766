//! Value map families for quantization

/// Shape of the curve applied between the input window and the discrete
/// output range.
///
/// Every family maps the unit interval onto itself monotonically, with
/// `transfer(0.0) == 0.0` and `transfer(1.0) == 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantumMap {
    /// Straight linear mapping (the default).
    Linear,
    /// Gamma curve `x^gamma`; `gamma == 1.0` is linear.
    Polynomial { gamma: f64 },
    /// Logarithmic curve, emphasizing the dark end of the window.
    Logarithmic,
    /// Exponential curve `(e^(k*x) - 1) / (e^k - 1)`, emphasizing the
    /// bright end of the window.
    Exponential { k: f64 },
}

impl Default for QuantumMap {
    fn default() -> Self {
        QuantumMap::Linear
    }
}

impl QuantumMap {
    /// Applies the family curve to a normalized value in `[0, 1]`.
    pub fn transfer(&self, x: f64) -> f64 {
        match self {
            QuantumMap::Linear => x,
            QuantumMap::Polynomial { gamma } => x.powf(*gamma),
            QuantumMap::Logarithmic => {
                // ln(1 + x*(e-1)) runs 0..1 over the unit interval.
                (1.0 + x * (std::f64::consts::E - 1.0)).ln()
            }
            QuantumMap::Exponential { k } => {
                if *k == 0.0 {
                    x
                } else {
                    ((k * x).exp() - 1.0) / (k.exp() - 1.0)
                }
            }
        }
    }
}
