use crate::core::{DataPoint, LineSegment, nice_ticks, project_line_segments, truncate_line_segments};
use crate::error::ChartResult;
use crate::interaction::{HoverSeries, HoverTarget};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, PrimitiveRole, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::{GuessChart, GuessPhase};

/// Gap between a tick mark and its label.
const TICK_LABEL_PADDING_PX: f64 = 3.0;
/// Vertical offset of the hover label above its circle center.
const HOVER_LABEL_OFFSET_PX: f64 = 10.0;

impl<R: Renderer> GuessChart<R> {
    /// Materializes the current widget state as surface-space primitives.
    ///
    /// Plot coordinates are shifted by the left/top margin. The frame is
    /// validated before it is returned.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.surface());

        self.append_incomplete_range(&mut frame);
        self.append_axes(&mut frame);
        self.append_hint(&mut frame);
        if self.phase == GuessPhase::Revealed {
            self.append_answer(&mut frame);
        }
        self.append_guess(&mut frame);
        self.append_hover_label(&mut frame);

        frame.validate()?;
        Ok(frame)
    }

    fn to_surface(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x + self.config.margin.left, y + self.config.margin.top)
    }

    fn push_segments(
        &self,
        frame: &mut RenderFrame,
        segments: &[LineSegment],
        width: f64,
        color: Color,
        role: PrimitiveRole,
    ) {
        for segment in segments {
            frame.lines.push(LinePrimitive::new(
                self.to_surface((segment.x1, segment.y1)),
                self.to_surface((segment.x2, segment.y2)),
                width,
                color,
                role,
            ));
        }
    }

    fn append_incomplete_range(&self, frame: &mut RenderFrame) {
        let Some(range) = self.state.incomplete_range() else {
            return;
        };
        let points = range
            .corners()
            .into_iter()
            .map(|corner| self.to_surface(self.mapper.to_pixel(corner)))
            .collect();
        frame.polygons.push(PolygonPrimitive {
            points,
            fill: self.config.style.incomplete_range_color,
            role: PrimitiveRole::IncompleteRange,
        });
    }

    fn append_axes(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let bounds = self.mapper.bounds();
        let plot_width = f64::from(self.mapper.plot().width);
        let plot_height = f64::from(self.mapper.plot().height);
        let tick = style.tick_size_px;

        for x in nice_ticks(bounds.x_min, bounds.x_max, self.config.x_tick_count) {
            let px = self.mapper.to_pixel_x(x);
            frame.lines.push(LinePrimitive::new(
                self.to_surface((px, 0.0)),
                self.to_surface((px, plot_height)),
                style.grid_line_width,
                style.grid_line_color,
                PrimitiveRole::Grid,
            ));
            if tick > 0.0 {
                frame.lines.push(LinePrimitive::new(
                    self.to_surface((px, plot_height)),
                    self.to_surface((px, plot_height + tick)),
                    style.axis_line_width,
                    style.axis_line_color,
                    PrimitiveRole::Axis,
                ));
            }
            frame.texts.push(TextPrimitive::new(
                self.config.x_axis_label_format.format(x),
                self.to_surface((
                    px,
                    plot_height + tick + TICK_LABEL_PADDING_PX + style.tick_label_font_size_px,
                )),
                style.tick_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
                PrimitiveRole::AxisLabel,
            ));
        }

        for y in nice_ticks(bounds.y_min, bounds.y_max, self.config.y_tick_count) {
            let py = self.mapper.to_pixel_y(y);
            frame.lines.push(LinePrimitive::new(
                self.to_surface((0.0, py)),
                self.to_surface((plot_width, py)),
                style.grid_line_width,
                style.grid_line_color,
                PrimitiveRole::Grid,
            ));
            if tick > 0.0 {
                frame.lines.push(LinePrimitive::new(
                    self.to_surface((-tick, py)),
                    self.to_surface((0.0, py)),
                    style.axis_line_width,
                    style.axis_line_color,
                    PrimitiveRole::Axis,
                ));
            }
            frame.texts.push(TextPrimitive::new(
                self.config.y_axis_label_format.format(y),
                self.to_surface((
                    -tick - TICK_LABEL_PADDING_PX,
                    py + style.tick_label_font_size_px * 0.35,
                )),
                style.tick_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
                PrimitiveRole::AxisLabel,
            ));
        }

        frame.lines.push(LinePrimitive::new(
            self.to_surface((0.0, plot_height)),
            self.to_surface((plot_width, plot_height)),
            style.axis_line_width,
            style.axis_line_color,
            PrimitiveRole::Axis,
        ));
        frame.lines.push(LinePrimitive::new(
            self.to_surface((0.0, 0.0)),
            self.to_surface((0.0, plot_height)),
            style.axis_line_width,
            style.axis_line_color,
            PrimitiveRole::Axis,
        ));

        if !self.config.x_axis_text.is_empty() {
            frame.texts.push(TextPrimitive::new(
                self.config.x_axis_text.clone(),
                self.to_surface((
                    plot_width,
                    plot_height - TICK_LABEL_PADDING_PX * 2.0,
                )),
                style.axis_title_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
                PrimitiveRole::AxisTitle,
            ));
        }
        if !self.config.y_axis_text.is_empty() {
            frame.texts.push(TextPrimitive::new(
                self.config.y_axis_text.clone(),
                self.to_surface((
                    TICK_LABEL_PADDING_PX * 2.0,
                    style.axis_title_font_size_px,
                )),
                style.axis_title_font_size_px,
                style.axis_label_color,
                TextHAlign::Left,
                PrimitiveRole::AxisTitle,
            ));
        }
    }

    fn append_hint(&self, frame: &mut RenderFrame) {
        if !self.interaction.hint_visible()
            || self.phase == GuessPhase::Revealed
            || self.config.hint_text.is_empty()
        {
            return;
        }
        let plot = self.mapper.plot();
        frame.texts.push(TextPrimitive::new(
            self.config.hint_text.clone(),
            self.to_surface((f64::from(plot.width) / 2.0, f64::from(plot.height) / 2.0)),
            self.config.style.hint_font_size_px,
            self.config.style.hint_color,
            TextHAlign::Center,
            PrimitiveRole::Hint,
        ));
    }

    fn append_answer(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let progress = self.interaction.reveal_progress();

        for (index, series) in self.config.other_data.values().enumerate() {
            let segments = project_line_segments(series, &self.mapper);
            self.push_segments(
                frame,
                &truncate_line_segments(&segments, progress.line),
                style.overlay_line_width,
                style.overlay_color(index),
                PrimitiveRole::OverlayLine,
            );
        }

        let segments = project_line_segments(&self.reference, &self.mapper);
        self.push_segments(
            frame,
            &truncate_line_segments(&segments, progress.line),
            style.answer_line_width,
            style.answer_color,
            PrimitiveRole::AnswerLine,
        );

        let radius = self.config.point_radius * progress.circles;
        for (index, point) in self.reference.iter().enumerate() {
            frame.circles.push(self.point_circle(
                *point,
                radius,
                style.answer_color,
                PrimitiveRole::AnswerPoint,
                self.is_hovered(HoverSeries::Answer, index),
            ));
        }
    }

    fn append_guess(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let defined: Vec<DataPoint> = self
            .state
            .points()
            .iter()
            .filter_map(|slot| slot.as_data_point())
            .collect();

        self.push_segments(
            frame,
            &project_line_segments(&defined, &self.mapper),
            style.guess_line_width,
            style.guess_color,
            PrimitiveRole::GuessLine,
        );

        for (index, slot) in self.state.points().iter().enumerate() {
            let Some(point) = slot.as_data_point() else {
                continue;
            };
            frame.circles.push(self.point_circle(
                point,
                self.config.point_radius,
                style.guess_color,
                PrimitiveRole::GuessPoint,
                self.is_hovered(HoverSeries::Guess, index),
            ));
        }
    }

    fn append_hover_label(&self, frame: &mut RenderFrame) {
        let (Some(target), Some(text)) = (self.interaction.hover().target, self.hover_label())
        else {
            return;
        };
        let (px, py) = self.mapper.to_pixel(DataPoint::new(target.x, target.y));
        frame.texts.push(TextPrimitive::new(
            text,
            self.to_surface((
                px,
                py - self.config.point_radius - HOVER_LABEL_OFFSET_PX,
            )),
            self.config.style.hover_font_size_px,
            self.config.style.axis_label_color,
            TextHAlign::Center,
            PrimitiveRole::HoverLabel,
        ));
    }

    fn point_circle(
        &self,
        point: DataPoint,
        radius: f64,
        fill: Color,
        role: PrimitiveRole,
        hovered: bool,
    ) -> CirclePrimitive {
        let (cx, cy) = self.to_surface(self.mapper.to_pixel(point));
        if hovered {
            CirclePrimitive::new(cx, cy, radius + 1.0, self.config.style.hover_color, role)
        } else {
            CirclePrimitive::new(cx, cy, radius, fill, role)
        }
    }

    fn is_hovered(&self, series: HoverSeries, index: usize) -> bool {
        matches!(
            self.interaction.hover().target,
            Some(HoverTarget { series: hovered, index: hovered_index, .. })
                if hovered == series && hovered_index == index
        )
    }
}
