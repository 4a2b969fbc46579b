use crate::foundation::error::{ScaleError, ScaleResult};

/// Reference device height, based on a ~5" phone. All scale factors are relative to it.
pub const BASELINE_HEIGHT: f64 = 680.0;

/// Screen dimensions captured once from the host and read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawMetrics")]
pub struct ScreenMetrics {
    width: f64,
    height: f64,
}

#[derive(serde::Deserialize)]
struct RawMetrics {
    width: f64,
    height: f64,
}

impl TryFrom<RawMetrics> for ScreenMetrics {
    type Error = ScaleError;

    fn try_from(raw: RawMetrics) -> ScaleResult<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl ScreenMetrics {
    /// Validate and capture a `width x height` screen, in the host's logical units.
    pub fn new(width: f64, height: f64) -> ScaleResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ScaleError::metrics(format!(
                "screen width must be finite and > 0, got {width}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ScaleError::metrics(format!(
                "screen height must be finite and > 0, got {height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Horizontal resolution.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Vertical resolution.
    pub fn height(self) -> f64 {
        self.height
    }
}

/// Host-side query for the current window size (the platform's device-metrics API).
///
/// A scaler queries its source exactly once, at construction; later rotations or
/// resizes are not observed.
pub trait MetricsSource {
    /// Report the current window metrics.
    fn window_metrics(&self) -> ScaleResult<ScreenMetrics>;
}

impl MetricsSource for ScreenMetrics {
    fn window_metrics(&self) -> ScaleResult<ScreenMetrics> {
        Ok(*self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/metrics.rs"]
mod tests;
