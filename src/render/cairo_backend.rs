use std::fs::File;
use std::path::Path as FsPath;

use cairo::{Context, Format, ImageSurface, LineCap, Operator};
use pango::FontDescription;

use crate::core::{Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingSurface, Path, PathSegment, StrokeStyle, TextBaseline, TextHAlign,
    TextPrimitive, parse_css_color,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub strokes: usize,
    pub fills: usize,
    pub texts: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Two modes:
/// - offscreen: owns an ARGB image surface sized in device pixels
///   (`viewport * device_pixel_ratio`), exportable as PNG
/// - borrowed: paints onto an external context, e.g. a GTK draw callback
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    stats: CairoSurfaceStats,
}

impl CairoSurface {
    pub fn offscreen(viewport: Viewport) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let width = device_extent(viewport.width_px(), viewport.device_pixel_ratio)?;
        let height = device_extent(viewport.height_px(), viewport.device_pixel_ratio)?;

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
            stats: CairoSurfaceStats::default(),
        })
    }

    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            image: None,
            stats: CairoSurfaceStats::default(),
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }

    pub fn write_png(&self, path: impl AsRef<FsPath>) -> ChartResult<()> {
        let image = self.image.as_ref().ok_or_else(|| {
            ChartError::Backend("png export needs an offscreen surface".to_owned())
        })?;
        let mut file = File::create(path.as_ref()).map_err(|err| {
            ChartError::Backend(format!(
                "failed to create {}: {err}",
                path.as_ref().display()
            ))
        })?;
        image
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn append_path(&self, path: &Path) {
        self.context.new_path();
        for segment in path.segments() {
            match *segment {
                PathSegment::MoveTo { x, y } => self.context.move_to(x, y),
                PathSegment::LineTo { x, y } => self.context.line_to(x, y),
            }
        }
    }
}

impl DrawingSurface for CairoSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))
    }

    fn scale(&mut self, sx: f64, sy: f64) -> ChartResult<()> {
        self.context.scale(sx, sy);
        Ok(())
    }

    fn clip_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context.clip();
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        self.context.set_operator(Operator::Clear);
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        let filled = self
            .context
            .fill()
            .map_err(|err| map_backend_error("failed to clear rectangle", err));
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        filled
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> ChartResult<()> {
        apply_color(&self.context, parse_css_color(color)?);
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeStyle) -> ChartResult<()> {
        apply_color(&self.context, parse_css_color(&stroke.color)?);
        self.context.set_line_width(stroke.width);
        self.context.set_dash(&stroke.dash, 0.0);
        self.context.set_line_cap(LineCap::Butt);
        self.append_path(path);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, color: &str) -> ChartResult<()> {
        apply_color(&self.context, parse_css_color(color)?);
        self.append_path(path);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let mut font_description = FontDescription::new();
        font_description.set_family(pango_family(&text.font.family));
        font_description.set_absolute_size(text.font.size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = match text.baseline {
            TextBaseline::Top => text.y,
            TextBaseline::Middle => text.y - f64::from(text_height) / 2.0,
        };

        apply_color(&self.context, parse_css_color(&text.color)?);
        self.context.move_to(x, y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts += 1;
        Ok(())
    }

    fn check_color(&self, color: &str) -> ChartResult<()> {
        parse_css_color(color).map(|_| ())
    }
}

fn device_extent(logical: f64, ratio: f64) -> ChartResult<i32> {
    let device = (logical * ratio).ceil();
    if !device.is_finite() || device < 1.0 || device > f64::from(i32::MAX) {
        return Err(ChartError::InvalidData(format!(
            "device surface extent {device} is out of range"
        )));
    }
    Ok(device as i32)
}

/// Maps CSS generic families onto fontconfig aliases.
fn pango_family(family: &str) -> &str {
    match family {
        "sans-serif" => "Sans",
        "serif" => "Serif",
        "monospace" => "Monospace",
        other => other,
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
