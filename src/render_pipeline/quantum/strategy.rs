use crate::render_pipeline::common::error::QuantizationError;
use crate::render_pipeline::quantum::types::QuantumMap;

/// Default top of the discrete output range.
pub const DEFAULT_OUTPUT_MAX: i32 = 255;

/// Maps raw pixel intensities into `[0, output_max]`.
///
/// Values at or below the window start map to 0, values at or above the
/// window end map to `output_max`, values in between follow the
/// configured [`QuantumMap`] family. Out-of-window values are clamped,
/// never wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumStrategy {
    window_start: f64,
    window_end: f64,
    output_max: i32,
    map: QuantumMap,
}

impl QuantumStrategy {
    pub fn new(window_start: f64, window_end: f64, output_max: i32, map: QuantumMap) -> Self {
        Self {
            window_start,
            window_end,
            output_max,
            map,
        }
    }

    /// Linear strategy over `[window_start, window_end]` with the default
    /// 8-bit output range.
    pub fn linear(window_start: f64, window_end: f64) -> Self {
        Self::new(window_start, window_end, DEFAULT_OUTPUT_MAX, QuantumMap::Linear)
    }

    pub fn window(&self) -> (f64, f64) {
        (self.window_start, self.window_end)
    }

    /// Interactive window adjustment. A degenerate window is not rejected
    /// here: it is reported by the next `quantize` call so the render
    /// loop can attach the channel index.
    pub fn set_window(&mut self, window_start: f64, window_end: f64) {
        self.window_start = window_start;
        self.window_end = window_end;
    }

    pub fn output_max(&self) -> i32 {
        self.output_max
    }

    pub fn map(&self) -> QuantumMap {
        self.map
    }

    pub fn set_map(&mut self, map: QuantumMap) {
        self.map = map;
    }

    /// Quantizes one raw intensity into the discrete output range.
    pub fn quantize(&self, raw: f64) -> Result<i32, QuantizationError> {
        if self.window_start >= self.window_end {
            return Err(QuantizationError::degenerate_window(
                self.window_start,
                self.window_end,
            ));
        }
        let clamped = raw.clamp(self.window_start, self.window_end);
        let normalized = (clamped - self.window_start) / (self.window_end - self.window_start);
        let mapped = self.map.transfer(normalized).clamp(0.0, 1.0);
        Ok((mapped * self.output_max as f64).round() as i32)
    }
}
