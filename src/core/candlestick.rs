use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bar, BarSpacing, CandleDirection, PriceScale};
use crate::error::{ChartError, ChartResult};

/// Projected candle geometry in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGlyph {
    pub center_x: f64,
    pub half_width: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub direction: CandleDirection,
}

impl CandleGlyph {
    #[must_use]
    pub fn body_left(&self) -> f64 {
        self.center_x - self.half_width
    }

    #[must_use]
    pub fn body_right(&self) -> f64 {
        self.center_x + self.half_width
    }

    /// Vertices of the combined body + wick outline in trace order.
    ///
    /// Open edge left to right, down the right side to close, back across to
    /// the left, into the center, up to high, down to low, back to close and
    /// out to the left body edge again.
    #[must_use]
    pub fn outline(&self) -> [(f64, f64); 9] {
        let left = self.body_left();
        let right = self.body_right();
        let mid = self.center_x;
        [
            (left, self.open_y),
            (right, self.open_y),
            (right, self.close_y),
            (left, self.close_y),
            (mid, self.close_y),
            (mid, self.high_y),
            (mid, self.low_y),
            (mid, self.close_y),
            (left, self.close_y),
        ]
    }
}

/// Projects every bar into glyph geometry using uniform index spacing.
pub fn project_candle_glyphs(
    bars: &[Bar],
    price_scale: PriceScale,
    spacing: BarSpacing,
) -> ChartResult<Vec<CandleGlyph>> {
    if bars.len() != spacing.count() {
        return Err(ChartError::InvalidData(format!(
            "spacing laid out for {} bars but {} were supplied",
            spacing.count(),
            bars.len()
        )));
    }

    #[cfg(feature = "parallel-projection")]
    {
        Ok(bars
            .par_iter()
            .enumerate()
            .map(|(index, bar)| project_single_candle(index, bar, price_scale, spacing))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(bars
            .iter()
            .enumerate()
            .map(|(index, bar)| project_single_candle(index, bar, price_scale, spacing))
            .collect())
    }
}

fn project_single_candle(
    index: usize,
    bar: &Bar,
    price_scale: PriceScale,
    spacing: BarSpacing,
) -> CandleGlyph {
    CandleGlyph {
        center_x: spacing.x_at(index),
        half_width: spacing.body_half_width(),
        open_y: price_scale.price_to_pixel(bar.open),
        close_y: price_scale.price_to_pixel(bar.close),
        high_y: price_scale.price_to_pixel(bar.high),
        low_y: price_scale.price_to_pixel(bar.low),
        direction: bar.direction(),
    }
}
