use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, Path, StrokeStyle, TextBaseline, TextHAlign};

use super::PlotFrame;
use super::axis_renderer::TICK_LABEL_OFFSET_PX;
use super::label_format::format_price_label;

pub const CURRENT_LINE_DASH: [f64; 2] = [5.0, 10.0];
/// Half height of the price flag, also the depth of its arrow tip.
pub const FLAG_HALF_HEIGHT_PX: f64 = 5.0;
/// X of the flag's flat left edge.
pub const FLAG_LEFT_PX: f64 = 2.0;

/// Flag vertices: tip on the price axis, flat back edge inside the gutter.
#[must_use]
pub fn current_price_flag(axis_x: f64, y: f64) -> [(f64, f64); 6] {
    let shoulder = axis_x - FLAG_HALF_HEIGHT_PX;
    [
        (axis_x, y),
        (shoulder, y + FLAG_HALF_HEIGHT_PX),
        (FLAG_LEFT_PX, y + FLAG_HALF_HEIGHT_PX),
        (FLAG_LEFT_PX, y - FLAG_HALF_HEIGHT_PX),
        (shoulder, y - FLAG_HALF_HEIGHT_PX),
        (axis_x, y),
    ]
}

/// Dashed line at the latest close plus a flag carrying its value.
///
/// Issued after candle clipping has been lifted, so the flag may paint into
/// the left gutter.
pub fn draw_current_line<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    frame: &PlotFrame<'_>,
) -> ChartResult<()> {
    let last = frame.bars.last().ok_or(ChartError::EmptyData)?;
    let color = frame.styles.candle_color(last.direction());
    let left = frame.viewport.axis_padding;
    let y = frame.scales.price.price_to_pixel(last.close);

    surface.stroke_path(
        &Path::line(left, y, frame.viewport.width_px(), y),
        &StrokeStyle::solid(color).with_dash(&CURRENT_LINE_DASH),
    )?;
    surface.fill_path(&Path::polyline(&current_price_flag(left, y)), color)?;
    surface.fill_text(&frame.label(
        format_price_label(last.close),
        left - TICK_LABEL_OFFSET_PX,
        y,
        &frame.styles.current_label_color,
        TextHAlign::Right,
        TextBaseline::Middle,
    ))
}
