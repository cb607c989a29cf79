use approx::assert_abs_diff_eq;
use guess_chart::api::{GuessChart, GuessChartConfig};
use guess_chart::core::{DataPoint, Viewport};
use guess_chart::render::{PrimitiveRole, RenderFrame, TextHAlign};
use guess_chart::render::NullRenderer;

const FOREIGN_BORN_SHARE: [f64; 16] = [
    0.132, 0.144, 0.133, 0.148, 0.136, 0.147, 0.132, 0.116, 0.088, 0.069, 0.054, 0.047, 0.062,
    0.079, 0.111, 0.129,
];

fn foreign_born_reference() -> Vec<DataPoint> {
    FOREIGN_BORN_SHARE
        .iter()
        .enumerate()
        .map(|(index, share)| DataPoint::new(1860.0 + 10.0 * index as f64, *share))
        .collect()
}

fn chart_with(config: GuessChartConfig) -> GuessChart<NullRenderer> {
    GuessChart::new(NullRenderer::default(), foreign_born_reference(), config).expect("chart init")
}

fn drag_year(chart: &mut GuessChart<NullRenderer>, year: f64, share: f64) {
    let mapper = chart.mapper();
    let _ = chart.drag_to(mapper.to_pixel_x(year), mapper.to_pixel_y(share));
}

fn rendered(chart: &mut GuessChart<NullRenderer>) -> RenderFrame {
    chart.render().expect("render");
    chart
        .renderer()
        .last_frame
        .clone()
        .expect("renderer keeps last frame")
}

#[test]
fn initial_frame_shows_axes_hint_and_full_incomplete_range() {
    let mut chart = chart_with(
        GuessChartConfig::foreign_born_preset().with_axis_texts("Year", "Foreign born"),
    );
    let frame = rendered(&mut chart);

    assert_eq!(frame.surface, Viewport::new(660, 405));
    assert_eq!(frame.count_role(PrimitiveRole::Hint), 1);
    assert_eq!(frame.count_role(PrimitiveRole::IncompleteRange), 1);
    assert_eq!(frame.count_role(PrimitiveRole::GuessLine), 0);
    assert_eq!(frame.count_role(PrimitiveRole::GuessPoint), 0);
    assert_eq!(frame.count_role(PrimitiveRole::AnswerLine), 0);
    assert_eq!(frame.count_role(PrimitiveRole::Grid), 8 + 11);
    assert_eq!(frame.count_role(PrimitiveRole::AxisLabel), 8 + 11);
    assert_eq!(frame.count_role(PrimitiveRole::AxisTitle), 2);

    let polygon = &frame.polygons[0];
    assert_eq!(polygon.points.len(), 4);
    assert_abs_diff_eq!(polygon.points[0].0, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon.points[0].1, 355.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon.points[2].0, 640.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon.points[2].1, 15.0, epsilon = 1e-9);

    let hint = frame
        .texts
        .iter()
        .find(|text| text.role == PrimitiveRole::Hint)
        .expect("hint text");
    assert_eq!(hint.text, "Draw your line!");
    assert_eq!(hint.font_size_px, 26.0);
    assert_eq!(hint.h_align, TextHAlign::Center);
}

#[test]
fn axis_labels_use_configured_formats() {
    let mut chart = chart_with(GuessChartConfig::foreign_born_preset());
    let frame = rendered(&mut chart);

    let labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.role == PrimitiveRole::AxisLabel)
        .map(|text| text.text.as_str())
        .collect();

    assert!(labels.contains(&"1860"));
    assert!(labels.contains(&"2000"));
    assert!(labels.contains(&"0%"));
    assert!(labels.contains(&"14%"));
    assert!(labels.contains(&"20%"));
}

#[test]
fn drawing_replaces_hint_with_guess_geometry() {
    let mut chart = chart_with(GuessChartConfig::foreign_born_preset());
    drag_year(&mut chart, 1880.0, 0.1);
    let frame = rendered(&mut chart);

    assert_eq!(frame.count_role(PrimitiveRole::Hint), 0);
    assert_eq!(frame.count_role(PrimitiveRole::GuessPoint), 3);
    assert_eq!(frame.count_role(PrimitiveRole::GuessLine), 2);

    let polygon = &frame.polygons[0];
    let expected_left = 70.0 + chart.mapper().to_pixel_x(1880.0);
    assert_abs_diff_eq!(polygon.points[0].0, expected_left, epsilon = 1e-9);

    let circle = frame
        .circles
        .iter()
        .find(|circle| circle.role == PrimitiveRole::GuessPoint)
        .expect("guess circle");
    assert_eq!(circle.radius, 6.0);
    assert_eq!(circle.fill, chart.config().style.guess_color);
}

#[test]
fn hovered_circle_is_enlarged_and_labelled() {
    let mut chart = chart_with(GuessChartConfig::foreign_born_preset());
    drag_year(&mut chart, 1880.0, 0.1);
    let mapper = chart.mapper();
    let _ = chart.pointer_move(mapper.to_pixel_x(1870.0), mapper.to_pixel_y(0.1));
    let frame = rendered(&mut chart);

    let enlarged: Vec<_> = frame
        .circles
        .iter()
        .filter(|circle| circle.radius == 7.0)
        .collect();
    assert_eq!(enlarged.len(), 1);
    assert_eq!(enlarged[0].fill, chart.config().style.hover_color);

    let label = frame
        .texts
        .iter()
        .find(|text| text.role == PrimitiveRole::HoverLabel)
        .expect("hover label");
    assert_eq!(label.text, "1870: 10.0%");
}

#[test]
fn reveal_draws_answer_progressively() {
    let mut chart = chart_with(
        GuessChartConfig::foreign_born_preset()
            .with_other_series("men", vec![DataPoint::new(1860.0, 0.1), DataPoint::new(2010.0, 0.1)]),
    );
    let _ = chart.drag_to(570.0, 170.0);
    chart.reveal().expect("reveal");

    let frame = rendered(&mut chart);
    assert_eq!(frame.count_role(PrimitiveRole::AnswerLine), 0);
    assert_eq!(frame.count_role(PrimitiveRole::OverlayLine), 0);
    assert_eq!(frame.count_role(PrimitiveRole::AnswerPoint), 16);
    assert!(
        frame
            .circles
            .iter()
            .filter(|circle| circle.role == PrimitiveRole::AnswerPoint)
            .all(|circle| circle.radius == 0.0)
    );
    assert_eq!(frame.count_role(PrimitiveRole::IncompleteRange), 0);
    assert_eq!(frame.count_role(PrimitiveRole::Hint), 0);

    let _ = chart.advance_reveal(1.0);
    let frame = rendered(&mut chart);
    let partial = frame.count_role(PrimitiveRole::AnswerLine);
    assert!(partial > 0 && partial < 15);
    assert_eq!(frame.count_role(PrimitiveRole::OverlayLine), 1);

    let _ = chart.advance_reveal(5.0);
    let frame = rendered(&mut chart);
    assert_eq!(frame.count_role(PrimitiveRole::AnswerLine), 15);
    assert!(
        frame
            .circles
            .iter()
            .filter(|circle| circle.role == PrimitiveRole::AnswerPoint)
            .all(|circle| circle.radius == 6.0)
    );
    assert_eq!(chart.renderer().frames_rendered, 3);
}

#[test]
fn empty_axis_texts_and_hint_are_omitted() {
    let mut chart = chart_with(GuessChartConfig::default().with_hint_text(""));
    let frame = rendered(&mut chart);

    assert_eq!(frame.count_role(PrimitiveRole::AxisTitle), 0);
    assert_eq!(frame.count_role(PrimitiveRole::Hint), 0);
    assert!(frame.validate().is_ok());
}
