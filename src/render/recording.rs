use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, Path, StrokeStyle, TextPrimitive};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Save,
    Restore,
    Scale { sx: f64, sy: f64 },
    ClipRect(Rect),
    ClearRect(Rect),
    FillRect { rect: Rect, color: String },
    StrokePath { path: Path, stroke: StrokeStyle },
    FillPath { path: Path, color: String },
    FillText(TextPrimitive),
}

/// Headless surface that records every call as an immutable command list.
///
/// Geometry is validated on the way in, so tests catch non-finite output
/// before a real backend would silently draw nothing.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    save_depth: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains recorded commands, keeping the save depth.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillText(text) => Some(text),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &StrokeStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokePath { path, stroke } => Some((path, stroke)),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillPath { path, color } => Some((path, color.as_str())),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.save_depth += 1;
        self.commands.push(DrawCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        if self.save_depth == 0 {
            return Err(ChartError::Backend(
                "restore without a matching save".to_owned(),
            ));
        }
        self.save_depth -= 1;
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn scale(&mut self, sx: f64, sy: f64) -> ChartResult<()> {
        if !sx.is_finite() || !sy.is_finite() || sx <= 0.0 || sy <= 0.0 {
            return Err(ChartError::InvalidData(
                "surface scale factors must be finite and > 0".to_owned(),
            ));
        }
        self.commands.push(DrawCommand::Scale { sx, sy });
        Ok(())
    }

    fn clip_rect(&mut self, rect: Rect) -> ChartResult<()> {
        validate_rect(rect)?;
        self.commands.push(DrawCommand::ClipRect(rect));
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        validate_rect(rect)?;
        self.commands.push(DrawCommand::ClearRect(rect));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> ChartResult<()> {
        validate_rect(rect)?;
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_owned(),
        });
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeStyle) -> ChartResult<()> {
        path.validate()?;
        stroke.validate()?;
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, color: &str) -> ChartResult<()> {
        path.validate()?;
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color: color.to_owned(),
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.commands.push(DrawCommand::FillText(text.clone()));
        Ok(())
    }
}

fn validate_rect(rect: Rect) -> ChartResult<()> {
    if [rect.x, rect.y, rect.width, rect.height]
        .iter()
        .any(|value| !value.is_finite())
    {
        return Err(ChartError::InvalidData(
            "rect geometry must be finite".to_owned(),
        ));
    }
    Ok(())
}
