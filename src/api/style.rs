use serde::{Deserialize, Serialize};

use crate::core::CandleDirection;

/// Chart palette. Values are CSS color strings handed to the surface as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyles {
    pub chart_background_color: String,
    pub grid_color: String,
    pub labels_color: String,
    pub current_label_color: String,
    pub up_color: String,
    pub down_color: String,
    pub axis_color: String,
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self {
            chart_background_color: "#202f42".to_owned(),
            grid_color: "#29394d".to_owned(),
            labels_color: "#bdc0c3".to_owned(),
            current_label_color: "#ffffff".to_owned(),
            up_color: "#09c9be".to_owned(),
            down_color: "#ff534f".to_owned(),
            axis_color: "#999999".to_owned(),
        }
    }
}

impl ChartStyles {
    /// Overwrites only the colors present in `patch`.
    pub fn merge(&mut self, patch: &StylePatch) {
        for (slot, update) in [
            (&mut self.chart_background_color, &patch.chart_background_color),
            (&mut self.grid_color, &patch.grid_color),
            (&mut self.labels_color, &patch.labels_color),
            (&mut self.current_label_color, &patch.current_label_color),
            (&mut self.up_color, &patch.up_color),
            (&mut self.down_color, &patch.down_color),
            (&mut self.axis_color, &patch.axis_color),
        ] {
            // Empty strings count as absent.
            if let Some(value) = update.as_deref().filter(|value| !value.is_empty()) {
                value.clone_into(slot);
            }
        }
    }

    #[must_use]
    pub fn merged(mut self, patch: &StylePatch) -> Self {
        self.merge(patch);
        self
    }

    /// Every palette entry, in field order.
    #[must_use]
    pub fn colors(&self) -> [&str; 7] {
        [
            &self.chart_background_color,
            &self.grid_color,
            &self.labels_color,
            &self.current_label_color,
            &self.up_color,
            &self.down_color,
            &self.axis_color,
        ]
    }

    #[must_use]
    pub fn candle_color(&self, direction: CandleDirection) -> &str {
        match direction {
            CandleDirection::Up => &self.up_color,
            CandleDirection::Down => &self.down_color,
        }
    }
}

/// Partial palette update; `None` keeps the current color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    pub chart_background_color: Option<String>,
    pub grid_color: Option<String>,
    pub labels_color: Option<String>,
    pub current_label_color: Option<String>,
    pub up_color: Option<String>,
    pub down_color: Option<String>,
    pub axis_color: Option<String>,
}

impl StylePatch {
    #[must_use]
    pub fn with_chart_background_color(mut self, color: impl Into<String>) -> Self {
        self.chart_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_grid_color(mut self, color: impl Into<String>) -> Self {
        self.grid_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_labels_color(mut self, color: impl Into<String>) -> Self {
        self.labels_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_current_label_color(mut self, color: impl Into<String>) -> Self {
        self.current_label_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_up_color(mut self, color: impl Into<String>) -> Self {
        self.up_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_down_color(mut self, color: impl Into<String>) -> Self {
        self.down_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_axis_color(mut self, color: impl Into<String>) -> Self {
        self.axis_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ChartStyles> for StylePatch {
    fn from(styles: ChartStyles) -> Self {
        Self {
            chart_background_color: Some(styles.chart_background_color),
            grid_color: Some(styles.grid_color),
            labels_color: Some(styles.labels_color),
            current_label_color: Some(styles.current_label_color),
            up_color: Some(styles.up_color),
            down_color: Some(styles.down_color),
            axis_color: Some(styles.axis_color),
        }
    }
}
