use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Bar, PricePadding, PriceScale, TimeScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Raw price extrema across every OHLC field of a series, before padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceExtent {
    pub min: f64,
    pub max: f64,
}

impl PriceExtent {
    /// Seeds from the first bar's open/close ordered so `min <= max`, then
    /// folds in all four fields of every bar, the first one included.
    pub fn from_bars(bars: &[Bar]) -> ChartResult<Self> {
        let first = bars.first().ok_or(ChartError::EmptyData)?;
        let seed = Self {
            min: first.open.min(first.close),
            max: first.open.max(first.close),
        };

        let extent = bars.iter().fold(seed, |acc, bar| {
            let (bar_min, bar_max) = bar.price_extent();
            Self {
                min: acc.min.min(bar_min),
                max: acc.max.max(bar_max),
            }
        });

        if !extent.min.is_finite() || !extent.max.is_finite() {
            return Err(ChartError::InvalidData(
                "price extrema must be finite".to_owned(),
            ));
        }
        Ok(extent)
    }

    #[must_use]
    pub fn padded(self, padding: PricePadding) -> Self {
        let (min, max) = padding.apply(self.min, self.max);
        Self { min, max }
    }
}

/// Literal earliest/latest bar dates; series order is not assumed.
pub fn date_extent(bars: &[Bar]) -> ChartResult<(DateTime<Utc>, DateTime<Utc>)> {
    let first = bars.first().ok_or(ChartError::EmptyData)?;
    Ok(bars.iter().fold((first.date, first.date), |(min, max), bar| {
        (min.min(bar.date), max.max(bar.date))
    }))
}

/// Price and time mappings derived from one data set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMapping {
    pub price: PriceScale,
    pub time: TimeScale,
    pub raw_price_extent: PriceExtent,
}

impl ScaleMapping {
    pub fn build(bars: &[Bar], viewport: Viewport) -> ChartResult<Self> {
        Self::build_with_padding(bars, viewport, PricePadding::default())
    }

    pub fn build_with_padding(
        bars: &[Bar],
        viewport: Viewport,
        padding: PricePadding,
    ) -> ChartResult<Self> {
        if bars.is_empty() {
            return Err(ChartError::EmptyData);
        }
        let viewport = viewport.validate()?;

        let raw_price_extent = PriceExtent::from_bars(bars)?;
        let padded = raw_price_extent.padded(padding);
        let price = PriceScale::new(padded.min, padded.max, viewport)?;

        let (min_date, max_date) = date_extent(bars)?;
        let time = TimeScale::new(min_date, max_date, viewport)?;

        Ok(Self {
            price,
            time,
            raw_price_extent,
        })
    }
}
