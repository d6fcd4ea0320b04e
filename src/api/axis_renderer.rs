use crate::core::{BarSpacing, PriceScale, TimeScale, Viewport};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, Path, TextBaseline, TextHAlign};

use super::label_format::format_price_label;
use super::{PlotFrame, PlotLayout, TimeLabelFormatter};

pub const PRICE_TICK_COUNT: usize = 10;
pub const MAJOR_TICK_LENGTH_PX: f64 = 4.0;
pub const MINOR_TICK_LENGTH_PX: f64 = 3.0;
/// Distance between the axis line and the near edge of a tick label.
pub const TICK_LABEL_OFFSET_PX: f64 = 10.0;

/// One price-axis tick at a fixed fraction of the plot height.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAxisTick {
    pub index: usize,
    pub y: f64,
    pub tick_length: f64,
    pub label: Option<String>,
    pub has_grid_line: bool,
}

/// One time-axis tick under a candle.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxisTick {
    pub index: usize,
    pub x: f64,
    pub tick_length: f64,
    pub label: Option<String>,
}

fn tick_length(index: usize) -> f64 {
    if index % 2 == 0 {
        MAJOR_TICK_LENGTH_PX
    } else {
        MINOR_TICK_LENGTH_PX
    }
}

/// Ten evenly spaced ticks from the top of the plot down towards the baseline.
///
/// The top tick (index 0) gets neither a label nor a grid line. Other even
/// ticks are labelled with the price under them.
#[must_use]
pub fn price_axis_ticks(viewport: Viewport, price_scale: PriceScale) -> Vec<PriceAxisTick> {
    let distance = viewport.plot_bottom() / PRICE_TICK_COUNT as f64;
    (0..PRICE_TICK_COUNT)
        .map(|index| {
            let y = index as f64 * distance;
            let interior = index != 0;
            PriceAxisTick {
                index,
                y,
                tick_length: tick_length(index),
                label: (interior && index % 2 == 0)
                    .then(|| format_price_label(price_scale.pixel_to_price(y))),
                has_grid_line: interior,
            }
        })
        .collect()
}

/// One tick per bar slot; even slots carry an `H:mm` label read back from the
/// time scale at that pixel.
pub fn time_axis_ticks(
    spacing: BarSpacing,
    time_scale: TimeScale,
    formatter: TimeLabelFormatter,
) -> ChartResult<Vec<TimeAxisTick>> {
    spacing
        .positions()
        .map(|(index, x)| -> ChartResult<TimeAxisTick> {
            let label = if index % 2 == 0 {
                Some(formatter.format(time_scale.pixel_to_time(x)?)?)
            } else {
                None
            };
            Ok(TimeAxisTick {
                index,
                x,
                tick_length: tick_length(index),
                label,
            })
        })
        .collect()
}

pub fn draw_scales<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    frame: &PlotFrame<'_>,
    layout: &PlotLayout,
) -> ChartResult<()> {
    draw_scale_x(surface, frame, &layout.time_ticks)?;
    draw_scale_y(surface, frame, &layout.price_ticks)
}

pub fn draw_scale_x<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    frame: &PlotFrame<'_>,
    ticks: &[TimeAxisTick],
) -> ChartResult<()> {
    let baseline = frame.viewport.plot_bottom();
    let axis = frame.axis_stroke();
    let grid = frame.grid_stroke();

    for tick in ticks {
        surface.stroke_path(
            &Path::line(tick.x, baseline, tick.x, baseline + tick.tick_length),
            &axis,
        )?;
        if let Some(text) = &tick.label {
            surface.fill_text(&frame.label(
                text.clone(),
                tick.x,
                baseline + TICK_LABEL_OFFSET_PX,
                &frame.styles.labels_color,
                TextHAlign::Center,
                TextBaseline::Top,
            ))?;
        }
        surface.stroke_path(&Path::line(tick.x, 0.0, tick.x, baseline), &grid)?;
    }

    surface.stroke_path(
        &Path::line(
            frame.viewport.axis_padding,
            baseline,
            frame.viewport.width_px(),
            baseline,
        ),
        &axis,
    )
}

pub fn draw_scale_y<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    frame: &PlotFrame<'_>,
    ticks: &[PriceAxisTick],
) -> ChartResult<()> {
    let left = frame.viewport.axis_padding;
    let axis = frame.axis_stroke();
    let grid = frame.grid_stroke();

    for tick in ticks {
        surface.stroke_path(&Path::line(left, tick.y, left - tick.tick_length, tick.y), &axis)?;
        if let Some(text) = &tick.label {
            surface.fill_text(&frame.label(
                text.clone(),
                left - TICK_LABEL_OFFSET_PX,
                tick.y,
                &frame.styles.labels_color,
                TextHAlign::Right,
                TextBaseline::Middle,
            ))?;
        }
        if tick.has_grid_line {
            surface.stroke_path(
                &Path::line(left, tick.y, frame.viewport.width_px(), tick.y),
                &grid,
            )?;
        }
    }

    surface.stroke_path(
        &Path::line(left, 0.0, left, frame.viewport.plot_bottom()),
        &axis,
    )
}
