use tracing::{debug, trace, warn};

use crate::core::{Bar, BarSpacing, ScaleMapping, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

use super::axis_renderer::draw_scales;
use super::candlestick_renderer::draw_bars;
use super::current_price_renderer::draw_current_line;
use super::{ChartConfig, ChartStyles, PlotFrame, PlotLayout, StylePatch, TimeLabelFormatter};

/// Bars plus everything derived from them by `set_data`.
#[derive(Debug, Clone)]
struct ChartData {
    bars: Vec<Bar>,
    scales: ScaleMapping,
    spacing: BarSpacing,
}

/// Candlestick chart bound to one drawing surface.
///
/// `set_data` derives scales and bar spacing up front; `draw` replays them
/// onto the surface and never mutates chart state.
pub struct CandlestickChart<S: DrawingSurface> {
    surface: S,
    viewport: Viewport,
    styles: ChartStyles,
    time_labels: TimeLabelFormatter,
    data: Option<ChartData>,
}

impl<S: DrawingSurface> CandlestickChart<S> {
    /// Validates the viewport and applies the device pixel ratio to the
    /// surface transform. This is the only transform the chart ever sets.
    pub fn new(mut surface: S, viewport: Viewport) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        surface.scale(viewport.device_pixel_ratio, viewport.device_pixel_ratio)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            device_pixel_ratio = viewport.device_pixel_ratio,
            "chart surface initialized"
        );

        Ok(Self {
            surface,
            viewport,
            styles: ChartStyles::default(),
            time_labels: TimeLabelFormatter::utc(),
            data: None,
        })
    }

    pub fn from_config(surface: S, config: &ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let mut chart = Self::new(surface, config.viewport)?;
        chart.time_labels = config.time_label_formatter()?;
        chart.set_styles(&config.styles);
        Ok(chart)
    }

    /// Replaces chart data and rebuilds scales.
    ///
    /// Every check runs before anything is stored, so a rejected series
    /// leaves the previous data and scales in place.
    pub fn set_data(&mut self, bars: Vec<Bar>) -> ChartResult<()> {
        if bars.is_empty() {
            return Err(ChartError::EmptyData);
        }
        for bar in &bars {
            bar.validate()?;
        }

        let scales = ScaleMapping::build(&bars, self.viewport)?;
        let spacing = BarSpacing::new(bars.len(), self.viewport)?;

        let malformed = bars.iter().filter(|bar| !bar.is_well_formed()).count();
        if malformed > 0 {
            warn!(
                malformed,
                "bars with open/close outside [low, high] widen the price scale"
            );
        }
        let (price_min, price_max) = scales.price.domain();
        let (time_start, time_end) = scales.time.domain();
        debug!(
            count = bars.len(),
            price_min,
            price_max,
            %time_start,
            %time_end,
            "set data"
        );

        self.data = Some(ChartData {
            bars,
            scales,
            spacing,
        });
        Ok(())
    }

    /// Merges palette overrides into the current styles.
    pub fn set_styles(&mut self, patch: &StylePatch) {
        self.styles.merge(patch);
        trace!(?patch, "styles merged");
    }

    pub fn set_time_label_offset_minutes(&mut self, offset_minutes: i16) -> ChartResult<()> {
        self.time_labels = TimeLabelFormatter::with_offset_minutes(offset_minutes)?;
        Ok(())
    }

    /// Renders one full pass: background, axes and grid, candles, then the
    /// current-price indicator on top.
    ///
    /// The palette is checked against the surface and all geometry is laid
    /// out before the clear, so those failures leave the surface untouched.
    pub fn draw(&mut self) -> ChartResult<()> {
        let data = self.data.as_ref().ok_or(ChartError::NotInitialized)?;
        let frame = PlotFrame {
            viewport: self.viewport,
            bars: &data.bars,
            scales: &data.scales,
            spacing: data.spacing,
            styles: &self.styles,
            time_labels: self.time_labels,
        };
        for color in self.styles.colors() {
            self.surface.check_color(color)?;
        }
        let layout = PlotLayout::build(&frame)?;
        trace!(bars = data.bars.len(), "draw pass");

        let surface = &mut self.surface;
        surface.clear_rect(self.viewport.full_rect())?;
        surface.fill_rect(
            self.viewport.full_rect(),
            &frame.styles.chart_background_color,
        )?;
        draw_scales(surface, &frame, &layout)?;
        draw_bars(surface, &frame, &layout.glyphs)?;
        draw_current_line(surface, &frame)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn styles(&self) -> &ChartStyles {
        &self.styles
    }

    #[must_use]
    pub fn time_labels(&self) -> TimeLabelFormatter {
        self.time_labels
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        self.data
            .as_ref()
            .map(|data| data.bars.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn scales(&self) -> Option<&ScaleMapping> {
        self.data.as_ref().map(|data| &data.scales)
    }

    #[must_use]
    pub fn bar_spacing(&self) -> Option<BarSpacing> {
        self.data.as_ref().map(|data| data.spacing)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
