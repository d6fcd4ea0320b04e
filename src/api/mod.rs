mod axis_renderer;
mod candlestick_renderer;
mod chart;
mod chart_config;
mod current_price_renderer;
mod label_format;
mod plot_frame;
mod style;

pub use axis_renderer::{
    MAJOR_TICK_LENGTH_PX, MINOR_TICK_LENGTH_PX, PRICE_TICK_COUNT, PriceAxisTick,
    TICK_LABEL_OFFSET_PX, TimeAxisTick, draw_scale_x, draw_scale_y, draw_scales,
    price_axis_ticks, time_axis_ticks,
};
pub use candlestick_renderer::draw_bars;
pub use chart::CandlestickChart;
pub use chart_config::ChartConfig;
pub use current_price_renderer::{
    CURRENT_LINE_DASH, FLAG_HALF_HEIGHT_PX, FLAG_LEFT_PX, current_price_flag, draw_current_line,
};
pub use label_format::{TimeLabelFormatter, format_price_label};
pub use plot_frame::{AXIS_LABEL_FONT_PX, PlotFrame, PlotLayout};
pub use style::{ChartStyles, StylePatch};
