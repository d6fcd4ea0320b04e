use crate::core::CandleGlyph;
use crate::error::ChartResult;
use crate::render::{DrawingSurface, Path, StrokeStyle, with_saved_state};

use super::PlotFrame;

/// Draws one body+wick glyph per bar, clipped to the plot area.
///
/// Each glyph is a single outline stroked and then filled in the candle's
/// direction color.
pub fn draw_bars<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    frame: &PlotFrame<'_>,
    glyphs: &[CandleGlyph],
) -> ChartResult<()> {
    with_saved_state(surface, |surface| {
        surface.clip_rect(frame.viewport.plot_rect())?;
        for glyph in glyphs {
            let color = frame.styles.candle_color(glyph.direction);
            let outline = Path::polyline(&glyph.outline());
            surface.stroke_path(&outline, &StrokeStyle::solid(color))?;
            surface.fill_path(&outline, color)?;
        }
        Ok(())
    })
}
