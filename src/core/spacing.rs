use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Body width as a fraction of the slot between two neighbouring bars.
pub const CANDLE_BODY_WIDTH_RATIO: f64 = 0.6;

/// Uniform index-based horizontal placement of bars.
///
/// Bar `i` sits at `axis_padding + i * step` where
/// `step = (width - axis_padding) / (count - 1)`. Elapsed time between bars is
/// ignored on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    origin: f64,
    step: f64,
    count: usize,
}

impl BarSpacing {
    pub fn new(count: usize, viewport: Viewport) -> ChartResult<Self> {
        if count < 2 {
            return Err(ChartError::DegenerateRange(format!(
                "bar spacing needs at least 2 bars, got {count}"
            )));
        }
        let step = (viewport.width_px() - viewport.axis_padding) / (count - 1) as f64;
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::DegenerateRange(format!(
                "bar spacing step {step} is not a positive width"
            )));
        }

        Ok(Self {
            origin: viewport.axis_padding,
            step,
            count,
        })
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn x_at(self, index: usize) -> f64 {
        self.origin + index as f64 * self.step
    }

    #[must_use]
    pub fn body_half_width(self) -> f64 {
        self.step * CANDLE_BODY_WIDTH_RATIO / 2.0
    }

    pub fn positions(self) -> impl Iterator<Item = (usize, f64)> {
        (0..self.count).map(move |index| (index, self.x_at(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bar_is_rejected() {
        let err = BarSpacing::new(1, Viewport::new(400, 300)).expect_err("one bar");
        assert!(matches!(err, ChartError::DegenerateRange(_)));
    }

    #[test]
    fn last_bar_lands_on_right_edge() {
        let spacing = BarSpacing::new(5, Viewport::new(430, 300)).expect("spacing");
        assert_eq!(spacing.step(), 100.0);
        assert_eq!(spacing.x_at(0), 30.0);
        assert_eq!(spacing.x_at(4), 430.0);
        assert_eq!(spacing.body_half_width(), 30.0);
    }
}
