//! Guess capture: slots, snapping, prefix backfill and completion detection.

mod completion;
mod grid;
mod incomplete;
mod point;
mod state;

pub use completion::{CompletionLatch, CompletionTrigger};
pub use grid::{GuessGrid, MAX_GUESS_SLOTS, SnapRounding, SnapTarget};
pub use incomplete::{IncompleteRange, incomplete_range};
pub use point::{GuessPoint, select_defined};
pub use state::{DragOutcome, GuessPolicy, GuessState, record_drag};
pub(crate) use state::validate_y_step;
