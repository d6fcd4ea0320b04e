use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::{LinearScale, Viewport};
use crate::error::ChartResult;

/// Time axis mapped onto `[axis_padding, width]`.
///
/// A series whose bars all share one date has a zero-width domain. That case
/// is tolerated: every instant maps to the middle of the range and every
/// pixel inverts back to the shared date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    range_start: f64,
    range_end: f64,
    linear: Option<LinearScale>,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, viewport: Viewport) -> ChartResult<Self> {
        let range_start = viewport.axis_padding;
        let range_end = viewport.width_px();
        let linear = if start == end {
            None
        } else {
            Some(LinearScale::new(
                (datetime_to_unix_millis(start), datetime_to_unix_millis(end)),
                (range_start, range_end),
            )?)
        };

        Ok(Self {
            start,
            end,
            range_start,
            range_end,
            linear,
        })
    }

    #[must_use]
    pub fn domain(self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn time_to_pixel(self, time: DateTime<Utc>) -> f64 {
        match self.linear {
            Some(linear) => linear.forward(datetime_to_unix_millis(time)),
            None => (self.range_start + self.range_end) / 2.0,
        }
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        match self.linear {
            Some(linear) => unix_millis_to_datetime(linear.invert(pixel)),
            None => Ok(self.start),
        }
    }
}
