mod color;
mod primitives;
mod recording;

pub use color::{Color, parse_css_color};
pub use primitives::{
    FontSpec, Path, PathSegment, StrokeStyle, TextBaseline, TextHAlign, TextPrimitive,
};
pub use recording::{DrawCommand, RecordingSurface};

use crate::core::Rect;
use crate::error::ChartResult;

/// Immediate-mode 2D drawing capability the chart paints onto.
///
/// Paint parameters (color, stroke width, dash, font, alignment) travel with
/// each call. The only state a surface keeps between calls is its transform
/// and clip region, and both are scoped with `save`/`restore`; prefer
/// [`with_saved_state`] over pairing them by hand.
pub trait DrawingSurface {
    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    fn scale(&mut self, sx: f64, sy: f64) -> ChartResult<()>;
    /// Intersects the current clip region with `rect`.
    fn clip_rect(&mut self, rect: Rect) -> ChartResult<()>;
    /// Resets `rect` to fully transparent.
    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()>;
    fn fill_rect(&mut self, rect: Rect, color: &str) -> ChartResult<()>;
    fn stroke_path(&mut self, path: &Path, stroke: &StrokeStyle) -> ChartResult<()>;
    fn fill_path(&mut self, path: &Path, color: &str) -> ChartResult<()>;
    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    /// Fails when this surface cannot paint `color`. The chart checks its
    /// palette with this before clearing anything.
    fn check_color(&self, color: &str) -> ChartResult<()> {
        let _ = color;
        Ok(())
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn save(&mut self) -> ChartResult<()> {
        (**self).save()
    }

    fn restore(&mut self) -> ChartResult<()> {
        (**self).restore()
    }

    fn scale(&mut self, sx: f64, sy: f64) -> ChartResult<()> {
        (**self).scale(sx, sy)
    }

    fn clip_rect(&mut self, rect: Rect) -> ChartResult<()> {
        (**self).clip_rect(rect)
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        (**self).clear_rect(rect)
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> ChartResult<()> {
        (**self).fill_rect(rect, color)
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeStyle) -> ChartResult<()> {
        (**self).stroke_path(path, stroke)
    }

    fn fill_path(&mut self, path: &Path, color: &str) -> ChartResult<()> {
        (**self).fill_path(path, color)
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        (**self).fill_text(text)
    }

    fn check_color(&self, color: &str) -> ChartResult<()> {
        (**self).check_color(color)
    }
}

/// Runs `draw` between a `save` and a `restore` on `surface`.
///
/// The restore is issued even when `draw` fails; the drawing error wins over a
/// restore error.
pub fn with_saved_state<S, T, F>(surface: &mut S, draw: F) -> ChartResult<T>
where
    S: DrawingSurface + ?Sized,
    F: FnOnce(&mut S) -> ChartResult<T>,
{
    surface.save()?;
    let drawn = draw(surface);
    let restored = surface.restore();
    let value = drawn?;
    restored?;
    Ok(value)
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
