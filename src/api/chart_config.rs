use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{StylePatch, TimeLabelFormatter};

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings
/// instead of wiring every field by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    /// Applied over the default palette.
    #[serde(default)]
    pub styles: StylePatch,
    /// UTC offset used for time-axis labels.
    #[serde(default)]
    pub time_label_offset_minutes: i16,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            styles: StylePatch::default(),
            time_label_offset_minutes: 0,
        }
    }

    #[must_use]
    pub fn with_styles(mut self, styles: StylePatch) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_time_label_offset_minutes(mut self, offset_minutes: i16) -> Self {
        self.time_label_offset_minutes = offset_minutes;
        self
    }

    pub fn time_label_formatter(&self) -> ChartResult<TimeLabelFormatter> {
        TimeLabelFormatter::with_offset_minutes(self.time_label_offset_minutes)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        self.time_label_formatter()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
