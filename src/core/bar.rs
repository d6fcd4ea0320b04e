use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// One OHLC observation.
///
/// Only finiteness is enforced. Callers are expected to keep
/// `low <= open, close <= high`, but a malformed bar is accepted and simply
/// widens the price scale; see [`Bar::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Candle coloring class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleDirection {
    Up,
    Down,
}

impl Bar {
    pub fn new(
        date: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> ChartResult<Self> {
        let bar = Self {
            date,
            open,
            high,
            low,
            close,
        };
        bar.validate()?;
        Ok(bar)
    }

    pub fn from_decimal(
        date: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            date,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Rejects non-finite prices. Deserialized bars bypass [`Bar::new`], so the
    /// chart re-checks every bar on `set_data`.
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "bar `{field}` must be finite (bar at {})",
                    self.date
                )));
            }
        }
        Ok(())
    }

    /// `Up` only when close is strictly above open; ties are `Down`.
    #[must_use]
    pub fn direction(&self) -> CandleDirection {
        if self.open < self.close {
            CandleDirection::Up
        } else {
            CandleDirection::Down
        }
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.low <= self.high
            && (self.low..=self.high).contains(&self.open)
            && (self.low..=self.high).contains(&self.close)
    }

    /// Lowest and highest of the four price fields.
    #[must_use]
    pub fn price_extent(&self) -> (f64, f64) {
        let min = self.open.min(self.close).min(self.high).min(self.low);
        let max = self.open.max(self.close).max(self.high).max(self.low);
        (min, max)
    }
}
