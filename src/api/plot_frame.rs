use crate::core::{Bar, BarSpacing, CandleGlyph, ScaleMapping, Viewport, project_candle_glyphs};
use crate::error::ChartResult;
use crate::render::{FontSpec, StrokeStyle, TextBaseline, TextHAlign, TextPrimitive};

use super::axis_renderer::{PriceAxisTick, TimeAxisTick, price_axis_ticks, time_axis_ticks};
use super::{ChartStyles, TimeLabelFormatter};

pub const AXIS_LABEL_FONT_PX: f64 = 8.0;

/// Everything one draw pass reads, borrowed for the duration of the pass.
#[derive(Debug, Clone, Copy)]
pub struct PlotFrame<'a> {
    pub viewport: Viewport,
    pub bars: &'a [Bar],
    pub scales: &'a ScaleMapping,
    pub spacing: BarSpacing,
    pub styles: &'a ChartStyles,
    pub time_labels: TimeLabelFormatter,
}

impl PlotFrame<'_> {
    pub(super) fn grid_stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.styles.grid_color.as_str())
    }

    pub(super) fn axis_stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.styles.axis_color.as_str())
    }

    pub(super) fn label(
        &self,
        text: String,
        x: f64,
        y: f64,
        color: &str,
        h_align: TextHAlign,
        baseline: TextBaseline,
    ) -> TextPrimitive {
        TextPrimitive {
            text,
            x,
            y,
            font: FontSpec::sans_serif(AXIS_LABEL_FONT_PX),
            color: color.to_owned(),
            h_align,
            baseline,
        }
    }
}

/// Tick and glyph geometry for one pass, with label text already formatted.
///
/// Built before the surface is cleared so a failing projection leaves the
/// previous frame on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub price_ticks: Vec<PriceAxisTick>,
    pub time_ticks: Vec<TimeAxisTick>,
    pub glyphs: Vec<CandleGlyph>,
}

impl PlotLayout {
    pub fn build(frame: &PlotFrame<'_>) -> ChartResult<Self> {
        Ok(Self {
            price_ticks: price_axis_ticks(frame.viewport, frame.scales.price),
            time_ticks: time_axis_ticks(frame.spacing, frame.scales.time, frame.time_labels)?,
            glyphs: project_candle_glyphs(frame.bars, frame.scales.price, frame.spacing)?,
        })
    }
}
