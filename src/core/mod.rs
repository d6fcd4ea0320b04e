pub mod bar;
pub mod candlestick;
pub mod price_scale;
pub mod primitives;
pub mod scale;
pub mod scale_builder;
pub mod spacing;
pub mod time_scale;
pub mod types;

pub use bar::{Bar, CandleDirection};
pub use candlestick::{CandleGlyph, project_candle_glyphs};
pub use price_scale::{PricePadding, PriceScale};
pub use scale::LinearScale;
pub use scale_builder::{PriceExtent, ScaleMapping, date_extent};
pub use spacing::{BarSpacing, CANDLE_BODY_WIDTH_RATIO};
pub use time_scale::TimeScale;
pub use types::{DEFAULT_AXIS_PADDING_PX, Rect, Viewport};
