use guess_chart::api::{
    GUESS_SNAPSHOT_JSON_SCHEMA_V1, GuessChart, GuessChartConfig, GuessPhase, GuessSnapshot,
};
use guess_chart::core::DataPoint;
use guess_chart::render::NullRenderer;

fn chart() -> GuessChart<NullRenderer> {
    let reference = vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::new(2.0, 3.0),
        DataPoint::new(3.0, 4.0),
    ];
    let config = GuessChartConfig::default()
        .with_other_series("trend", vec![DataPoint::new(0.0, 1.5), DataPoint::new(3.0, 3.5)])
        .with_other_series("flat", vec![DataPoint::new(0.0, 2.0), DataPoint::new(3.0, 2.0)]);
    GuessChart::new(NullRenderer::default(), reference, config).expect("chart init")
}

#[test]
fn snapshot_reports_guess_progress() {
    let mut chart = chart();
    let mapper = chart.mapper();
    let _ = chart.drag_to(mapper.to_pixel_x(1.0), mapper.to_pixel_y(2.0));

    let snapshot = chart.snapshot();

    assert_eq!(snapshot.phase, GuessPhase::Drawing);
    assert_eq!(snapshot.defined_count, 2);
    assert_eq!(snapshot.expected_len, 4);
    assert!(!snapshot.complete);
    assert!(!snapshot.hint_visible);
    let range = snapshot.incomplete_range.expect("incomplete range");
    assert_eq!(range.x_start, 1.0);
    let keys: Vec<&str> = snapshot
        .other_data
        .keys()
        .map(std::string::String::as_str)
        .collect();
    assert_eq!(keys, vec!["trend", "flat"]);
}

#[test]
fn snapshot_contract_roundtrip() {
    let mut chart = chart();
    let _ = chart.drag_to(570.0, 0.0);
    chart.reveal().expect("reveal");

    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("snapshot should serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let decoded = GuessSnapshot::from_json_compat_str(&json).expect("contract should parse");
    assert_eq!(decoded.phase, GuessPhase::Revealed);
    assert_eq!(decoded.defined_count, 4);
    assert!(decoded.complete);
    assert!(decoded.reveal_fired);
    assert!(decoded.incomplete_range.is_none());
    assert_eq!(decoded.guess.len(), 4);
    assert!(decoded.guess.iter().all(|point| point.y() == Some(4.0)));
}

#[test]
fn snapshot_compat_parser_accepts_bare_payload() {
    let chart = chart();
    let bare = serde_json::to_string(&chart.snapshot()).expect("bare snapshot json");

    let decoded = GuessSnapshot::from_json_compat_str(&bare).expect("bare payload should parse");
    assert_eq!(decoded.expected_len, 4);
    assert_eq!(decoded.defined_count, 0);
    assert!(decoded.hint_visible);
}

#[test]
fn snapshot_compat_parser_rejects_unknown_schema() {
    let chart = chart();
    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("snapshot should serialize");
    let bumped = json.replacen(
        &format!("\"schema_version\": {GUESS_SNAPSHOT_JSON_SCHEMA_V1}"),
        "\"schema_version\": 2",
        1,
    );

    assert!(GuessSnapshot::from_json_compat_str(&bumped).is_err());
    assert!(GuessSnapshot::from_json_compat_str("{}").is_err());
}
