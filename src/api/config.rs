use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoundsOverride, DataPoint, Margin, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::guess::{CompletionTrigger, GuessGrid, SnapRounding, validate_y_step};
use crate::interaction::RevealAnimationConfig;

use super::{LabelFormat, RenderStyle};

/// Widget bootstrap configuration.
///
/// Serializable so hosts can keep widget setups in JSON instead of inventing
/// their own format. Fixed for the lifetime of a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessChartConfig {
    /// Size of the plotting area in pixels.
    #[serde(default = "default_plot")]
    pub plot: Viewport,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default)]
    pub x_axis_text: String,
    #[serde(default)]
    pub y_axis_text: String,
    #[serde(default)]
    pub x_axis_label_format: LabelFormat,
    #[serde(default)]
    pub y_axis_label_format: LabelFormat,
    /// Format of the value part of hover labels.
    #[serde(default)]
    pub hover_value_format: LabelFormat,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    #[serde(default)]
    pub bounds: BoundsOverride,
    /// `None` derives an exact grid from the reference spacing.
    #[serde(default)]
    pub grid: Option<GuessGrid>,
    #[serde(default)]
    pub y_step: Option<f64>,
    #[serde(default)]
    pub completion_trigger: CompletionTrigger,
    #[serde(default = "default_hint_text")]
    pub hint_text: String,
    #[serde(default)]
    pub reveal_animation: RevealAnimationConfig,
    #[serde(default)]
    pub style: RenderStyle,
    /// Additional series drawn next to the answer on reveal, keyed by name.
    #[serde(default)]
    pub other_data: IndexMap<String, Vec<DataPoint>>,
}

impl Default for GuessChartConfig {
    fn default() -> Self {
        Self {
            plot: default_plot(),
            margin: Margin::default(),
            point_radius: default_point_radius(),
            x_axis_text: String::new(),
            y_axis_text: String::new(),
            x_axis_label_format: LabelFormat::default(),
            y_axis_label_format: LabelFormat::default(),
            hover_value_format: LabelFormat::default(),
            x_tick_count: default_tick_count(),
            y_tick_count: default_tick_count(),
            bounds: BoundsOverride::default(),
            grid: None,
            y_step: None,
            completion_trigger: CompletionTrigger::default(),
            hint_text: default_hint_text(),
            reveal_animation: RevealAnimationConfig::default(),
            style: RenderStyle::default(),
            other_data: IndexMap::new(),
        }
    }
}

impl GuessChartConfig {
    #[must_use]
    pub fn new(plot: Viewport) -> Self {
        Self {
            plot,
            ..Self::default()
        }
    }

    /// Setup of the foreign-born population widget the crate grew out of.
    #[must_use]
    pub fn foreign_born_preset() -> Self {
        Self {
            x_axis_text: "Year".to_owned(),
            y_axis_text: "Percentage foreign born".to_owned(),
            x_axis_label_format: LabelFormat::integer(),
            y_axis_label_format: LabelFormat::percent(0),
            hover_value_format: LabelFormat::percent(1),
            x_tick_count: 6,
            bounds: BoundsOverride {
                x_min: Some(1860.0),
                x_max: Some(2010.0),
                y_min: Some(0.0),
                y_max: Some(0.2),
            },
            grid: Some(GuessGrid::Exact {
                step: 10.0,
                rounding: SnapRounding::Floor,
            }),
            y_step: Some(0.01),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_axis_texts(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_text = x.into();
        self.y_axis_text = y.into();
        self
    }

    #[must_use]
    pub fn with_label_formats(mut self, x: LabelFormat, y: LabelFormat) -> Self {
        self.x_axis_label_format = x;
        self.y_axis_label_format = y;
        self
    }

    #[must_use]
    pub fn with_hover_value_format(mut self, format: LabelFormat) -> Self {
        self.hover_value_format = format;
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x: usize, y: usize) -> Self {
        self.x_tick_count = x;
        self.y_tick_count = y;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsOverride) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GuessGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    #[must_use]
    pub fn with_y_step(mut self, y_step: f64) -> Self {
        self.y_step = Some(y_step);
        self
    }

    #[must_use]
    pub fn with_completion_trigger(mut self, trigger: CompletionTrigger) -> Self {
        self.completion_trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_hint_text(mut self, hint: impl Into<String>) -> Self {
        self.hint_text = hint.into();
        self
    }

    #[must_use]
    pub fn with_reveal_animation(mut self, animation: RevealAnimationConfig) -> Self {
        self.reveal_animation = animation;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Adds an overlay series shown on reveal. A repeated name replaces the series.
    #[must_use]
    pub fn with_other_series(mut self, name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        self.other_data.insert(name.into(), points);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot.validate()?;
        self.margin.validate()?;
        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        if let Some(grid) = self.grid {
            grid.validate()?;
        }
        validate_y_step(self.y_step)?;
        for (field, value) in [
            ("line_duration_seconds", self.reveal_animation.line_duration_seconds),
            (
                "circle_duration_seconds",
                self.reveal_animation.circle_duration_seconds,
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "reveal animation `{field}` must be finite and >= 0"
                )));
            }
        }
        for (name, series) in &self.other_data {
            if name.is_empty() {
                return Err(ChartError::InvalidData(
                    "overlay series names must not be empty".to_owned(),
                ));
            }
            if series
                .iter()
                .any(|point| !point.x.is_finite() || !point.y.is_finite())
            {
                return Err(ChartError::InvalidData(format!(
                    "overlay series `{name}` contains non-finite points"
                )));
            }
        }
        self.style.validate()
    }

    /// Full surface size: plot plus margins, rounded up.
    #[must_use]
    pub fn surface(&self) -> Viewport {
        Viewport::new(
            self.plot.width + (self.margin.left + self.margin.right).ceil() as u32,
            self.plot.height + (self.margin.top + self.margin.bottom).ceil() as u32,
        )
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

fn default_plot() -> Viewport {
    Viewport::new(570, 340)
}

fn default_point_radius() -> f64 {
    6.0
}

fn default_tick_count() -> usize {
    10
}

fn default_hint_text() -> String {
    "Draw your line!".to_owned()
}
