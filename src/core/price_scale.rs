use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Multipliers applied to the raw price extrema before building the scale.
///
/// The lower bound is scaled by `lower_factor` and the upper bound by
/// `upper_factor`, so padding is proportional to the price level itself
/// rather than to the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePadding {
    pub lower_factor: f64,
    pub upper_factor: f64,
}

impl Default for PricePadding {
    fn default() -> Self {
        Self {
            lower_factor: 0.9,
            upper_factor: 1.1,
        }
    }
}

impl PricePadding {
    #[must_use]
    pub fn apply(self, min: f64, max: f64) -> (f64, f64) {
        (min * self.lower_factor, max * self.upper_factor)
    }
}

/// Price axis mapped onto the plot height with Y inverted.
///
/// Domain `[min, max]` maps to `[height - axis_padding, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    linear: LinearScale,
}

impl PriceScale {
    pub fn new(price_min: f64, price_max: f64, viewport: Viewport) -> ChartResult<Self> {
        let linear = LinearScale::new((price_min, price_max), (viewport.plot_bottom(), 0.0))
            .map_err(|err| match err {
                ChartError::DegenerateRange(_) => ChartError::DegenerateRange(format!(
                    "price domain [{price_min}, {price_max}] collapses to zero width"
                )),
                other => other,
            })?;
        Ok(Self { linear })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn price_to_pixel(self, price: f64) -> f64 {
        self.linear.forward(price)
    }

    #[must_use]
    pub fn pixel_to_price(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }
}
