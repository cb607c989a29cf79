//! Host-facing extension points.

pub mod observers;

pub use observers::{GuessContext, GuessEvent, GuessObserver};
