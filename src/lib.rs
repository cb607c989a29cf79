//! guess-chart: headless core of a "draw your guess" line chart.
//!
//! The user drags across a plot to sketch where they think a series goes;
//! the crate maps pixels to data, snaps and records the guess, tracks
//! completion and produces backend-agnostic render frames for the reveal.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod guess;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GuessChart, GuessChartConfig};
pub use error::{ChartError, ChartResult};
