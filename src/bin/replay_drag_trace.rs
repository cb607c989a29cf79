use guess_chart::api::{GuessChart, GuessChartConfig, GuessSnapshot};
use guess_chart::core::DataPoint;
use guess_chart::render::NullRenderer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: replay_drag_trace --input <path> --output <path>";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DragTraceFile {
    trace_name: String,
    #[serde(default)]
    config: Option<GuessChartConfig>,
    reference: Vec<DataPoint>,
    samples: Vec<DragSample>,
    /// Requests a reveal after the last sample; fails if the guess is incomplete.
    #[serde(default)]
    reveal: bool,
    /// Seconds to advance the reveal animation by after revealing.
    #[serde(default)]
    reveal_seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DragSample {
    Start,
    Move { px: f64, py: f64 },
    End,
    Hover { px: f64, py: f64 },
    Leave,
}

#[derive(Debug, Clone, Serialize)]
struct ReplayReport {
    trace_name: String,
    samples_replayed: usize,
    reveal_armed_at: Option<usize>,
    snapshot: GuessSnapshot,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = guess_chart::telemetry::init_default_tracing();
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace: DragTraceFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let report = replay(trace)?;
    write_json(&args.output, &report)
}

fn replay(trace: DragTraceFile) -> Result<ReplayReport, String> {
    let config = trace
        .config
        .unwrap_or_else(GuessChartConfig::foreign_born_preset);
    let mut chart = GuessChart::new(NullRenderer::default(), trace.reference, config)
        .map_err(|err| format!("failed to build chart: {err}"))?;

    let mut reveal_armed_at = None;
    for (index, sample) in trace.samples.iter().enumerate() {
        match *sample {
            DragSample::Start => chart.drag_start(),
            DragSample::Move { px, py } => {
                let outcome = chart.drag_to(px, py);
                if outcome.fire_reveal && reveal_armed_at.is_none() {
                    reveal_armed_at = Some(index);
                }
            }
            DragSample::End => chart.drag_end(),
            DragSample::Hover { px, py } => {
                let _ = chart.pointer_move(px, py);
            }
            DragSample::Leave => chart.pointer_leave(),
        }
    }

    if trace.reveal {
        chart
            .reveal()
            .map_err(|err| format!("reveal failed: {err}"))?;
        let _ = chart.advance_reveal(trace.reveal_seconds);
    }
    chart
        .render()
        .map_err(|err| format!("render failed: {err}"))?;

    Ok(ReplayReport {
        trace_name: trace.trace_name,
        samples_replayed: trace.samples.len(),
        reveal_armed_at,
        snapshot: chart.snapshot(),
    })
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs { input, output })
}
