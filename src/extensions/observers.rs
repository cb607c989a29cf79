use serde::{Deserialize, Serialize};

use crate::api::GuessPhase;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuessContext {
    pub phase: GuessPhase,
    pub interaction_mode: InteractionMode,
    pub defined_count: usize,
    pub slot_count: usize,
}

/// Events a widget emits to its observers, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GuessEvent {
    DragStarted,
    GuessRecorded {
        x: f64,
        y: f64,
        defined_count: usize,
    },
    /// The reveal signal fired; hosts typically enable their reveal control.
    RevealArmed,
    DragEnded,
    Revealed,
    Reset,
}

/// Subscription interface replacing host-specific element lookups.
///
/// Observers react to guess progress without mutating widget internals.
pub trait GuessObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GuessEvent, context: GuessContext);
}
