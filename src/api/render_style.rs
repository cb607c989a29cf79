use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for the widget's render frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub axis_label_color: Color,
    pub hint_color: Color,
    pub incomplete_range_color: Color,
    pub guess_color: Color,
    pub answer_color: Color,
    pub hover_color: Color,
    /// Cycled across `other_data` overlay series in insertion order.
    pub overlay_colors: Vec<Color>,
    pub grid_line_width: f64,
    pub axis_line_width: f64,
    pub tick_size_px: f64,
    pub guess_line_width: f64,
    pub answer_line_width: f64,
    pub overlay_line_width: f64,
    pub tick_label_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub hint_font_size_px: f64,
    pub hover_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgb(0.827, 0.827, 0.827),
            axis_line_color: Color::rgb(0.0, 0.0, 0.0),
            axis_label_color: Color::rgb(0.0, 0.0, 0.0),
            hint_color: Color::rgb(0.4, 0.4, 0.4),
            incomplete_range_color: Color::rgba(0.5, 0.5, 0.5, 0.15),
            guess_color: Color::from_rgb8(0xFF, 0x41, 0x36),
            answer_color: Color::from_rgb8(70, 130, 180),
            hover_color: Color::from_rgb8(0xFF, 0xC7, 0x00),
            overlay_colors: vec![
                Color::from_rgb8(0x2E, 0xCC, 0x40),
                Color::from_rgb8(0xB1, 0x0D, 0xC9),
                Color::from_rgb8(0xFF, 0x85, 0x1B),
            ],
            grid_line_width: 1.0,
            axis_line_width: 1.0,
            tick_size_px: 6.0,
            guess_line_width: 2.0,
            answer_line_width: 2.0,
            overlay_line_width: 1.5,
            tick_label_font_size_px: 10.0,
            axis_title_font_size_px: 12.0,
            hint_font_size_px: 26.0,
            hover_font_size_px: 12.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.grid_line_color,
            self.axis_line_color,
            self.axis_label_color,
            self.hint_color,
            self.incomplete_range_color,
            self.guess_color,
            self.answer_color,
            self.hover_color,
        ]
        .iter()
        .chain(&self.overlay_colors)
        {
            color.validate()?;
        }

        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("guess_line_width", self.guess_line_width),
            ("answer_line_width", self.answer_line_width),
            ("overlay_line_width", self.overlay_line_width),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("hint_font_size_px", self.hint_font_size_px),
            ("hover_font_size_px", self.hover_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.tick_size_px.is_finite() || self.tick_size_px < 0.0 {
            return Err(ChartError::InvalidData(
                "render style `tick_size_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Overlay color for the series at `index`, cycling the palette.
    #[must_use]
    pub fn overlay_color(&self, index: usize) -> Color {
        if self.overlay_colors.is_empty() {
            return self.answer_color.with_alpha(0.5);
        }
        self.overlay_colors[index % self.overlay_colors.len()]
    }
}
