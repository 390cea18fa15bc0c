use serde::{Deserialize, Serialize};

use crate::error::{BoxError, BoxResult};

/// Tuning for the shared x-sample sequence both curves are evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of evenly spaced samples.
    pub count: usize,
    /// Fraction of the x-range excluded at each end.
    ///
    /// The grid must stay strictly inside `(0, total_x)` so the power
    /// functions never evaluate at zero.
    pub margin_ratio: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            count: 100,
            margin_ratio: 0.01,
        }
    }
}

impl SamplingConfig {
    pub(crate) fn validate(self) -> BoxResult<Self> {
        if self.count < 2 {
            return Err(BoxError::InvalidParameter(format!(
                "sample count must be >= 2, got {}",
                self.count
            )));
        }
        if !self.margin_ratio.is_finite()
            || self.margin_ratio <= 0.0
            || self.margin_ratio >= 0.5
        {
            return Err(BoxError::InvalidParameter(format!(
                "sample margin ratio must lie strictly inside (0, 0.5), got {}",
                self.margin_ratio
            )));
        }
        Ok(self)
    }
}

/// Builds the strictly increasing, strictly interior x-sample sequence over
/// `(0, range_end)`.
pub fn sample_grid(range_end: f64, config: SamplingConfig) -> BoxResult<Vec<f64>> {
    let config = config.validate()?;
    if !range_end.is_finite() || range_end <= 0.0 {
        return Err(BoxError::InvalidParameter(format!(
            "sample range end must be finite and > 0, got {range_end}"
        )));
    }

    let margin = range_end * config.margin_ratio;
    let start = margin;
    let step = (range_end - 2.0 * margin) / (config.count - 1) as f64;

    Ok((0..config.count)
        .map(|index| start + index as f64 * step)
        .collect())
}
