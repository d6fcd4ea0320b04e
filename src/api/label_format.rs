use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

const MAX_OFFSET_MINUTES: i16 = 14 * 60;

/// Price label with two fixed decimals.
///
/// Rounds the exact binary value half away from zero, so `10.125` prints as
/// `10.13` while `1.005` (stored just below the tie) prints as `1.00`.
/// Negative values that round to zero keep their sign (`-0.00`); negative
/// zero itself prints as `0.00`.
#[must_use]
pub fn format_price_label(value: f64) -> String {
    let Some(exact) = Decimal::from_f64_retain(value.abs()) else {
        return format!("{value:.2}");
    };
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.2}")
}

/// Formats time-axis labels as `H:mm` on a 24-hour clock in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLabelFormatter {
    offset_minutes: i16,
}

impl Default for TimeLabelFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

impl TimeLabelFormatter {
    #[must_use]
    pub const fn utc() -> Self {
        Self { offset_minutes: 0 }
    }

    pub fn with_offset_minutes(offset_minutes: i16) -> ChartResult<Self> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset_minutes) {
            return Err(ChartError::InvalidData(format!(
                "time label offset must be between -{MAX_OFFSET_MINUTES} and {MAX_OFFSET_MINUTES} minutes, got {offset_minutes}"
            )));
        }
        Ok(Self { offset_minutes })
    }

    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        self.offset_minutes
    }

    pub fn format(self, time: DateTime<Utc>) -> ChartResult<String> {
        let offset = FixedOffset::east_opt(i32::from(self.offset_minutes) * 60).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "invalid time label offset {} minutes",
                self.offset_minutes
            ))
        })?;
        Ok(time.with_timezone(&offset).format("%-H:%M").to_string())
    }
}
