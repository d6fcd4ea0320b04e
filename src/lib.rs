//! candle-canvas: candlestick chart rendering over an abstract drawing surface.
//!
//! Scales are derived from OHLC bar extrema once per `set_data`; every draw
//! pass then issues plain path/fill/stroke/text calls against a
//! [`render::DrawingSurface`], so the same chart logic drives an in-memory
//! command recorder or a Cairo image surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CandlestickChart, ChartConfig, ChartStyles, StylePatch};
pub use error::{ChartError, ChartResult};
