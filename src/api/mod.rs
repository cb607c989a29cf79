//! Host-facing widget facade: configuration, drag/hover input, reveal flow,
//! frame building and snapshots.

mod chart;
mod config;
mod drag_controller;
mod frame_builder;
mod label_format;
mod observer_registry;
mod render_style;
mod reveal_controller;
mod snapshot;

pub use chart::{GuessChart, GuessPhase, Reveal};
pub use config::GuessChartConfig;
pub use label_format::LabelFormat;
pub use render_style::RenderStyle;
pub use snapshot::{GUESS_SNAPSHOT_JSON_SCHEMA_V1, GuessSnapshot, GuessSnapshotJsonContractV1};
