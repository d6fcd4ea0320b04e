use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_AXIS_PADDING_PX: f64 = 30.0;

/// Logical drawing area plus the gutters reserved for the price/time axes.
///
/// `width`/`height` are CSS-like logical pixels. The device pixel ratio is
/// applied once to the surface transform; every coordinate produced by the
/// chart stays in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_axis_padding")]
    pub axis_padding: f64,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            axis_padding: DEFAULT_AXIS_PADDING_PX,
            device_pixel_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn with_axis_padding(mut self, axis_padding: f64) -> Self {
        self.axis_padding = axis_padding;
        self
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }

    /// Y coordinate of the time-axis baseline (bottom edge of the plot area).
    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.height_px() - self.axis_padding
    }

    /// Plot area excluding the left and bottom axis gutters.
    #[must_use]
    pub fn plot_rect(self) -> Rect {
        Rect::new(
            self.axis_padding,
            0.0,
            self.width_px() - self.axis_padding,
            self.plot_bottom(),
        )
    }

    #[must_use]
    pub fn full_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_px(), self.height_px())
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.axis_padding.is_finite() || self.axis_padding < 0.0 {
            return Err(ChartError::InvalidData(
                "axis padding must be finite and >= 0".to_owned(),
            ));
        }
        if self.axis_padding >= self.width_px() || self.axis_padding >= self.height_px() {
            return Err(ChartError::InvalidData(format!(
                "axis padding {} leaves no plot area in a {}x{} viewport",
                self.axis_padding, self.width, self.height
            )));
        }
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

fn default_axis_padding() -> f64 {
    DEFAULT_AXIS_PADDING_PX
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}
