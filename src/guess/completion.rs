use serde::{Deserialize, Serialize};

/// How the reveal signal is reported while the guess stays complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionTrigger {
    /// Fire once, on the drag that completes the guess.
    #[default]
    Edge,
    /// Fire on every drag while the guess is complete.
    Level,
}

/// Tracks whether the reveal signal has been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionLatch {
    trigger: CompletionTrigger,
    fired: bool,
}

impl CompletionLatch {
    #[must_use]
    pub fn new(trigger: CompletionTrigger) -> Self {
        Self {
            trigger,
            fired: false,
        }
    }

    #[must_use]
    pub fn trigger(self) -> CompletionTrigger {
        self.trigger
    }

    #[must_use]
    pub fn has_fired(self) -> bool {
        self.fired
    }

    /// Feeds the current completion level and returns whether to fire.
    ///
    /// An incomplete observation re-arms the latch.
    pub fn observe(&mut self, complete: bool) -> bool {
        if !complete {
            self.fired = false;
            return false;
        }

        match self.trigger {
            CompletionTrigger::Edge => {
                let fire = !self.fired;
                self.fired = true;
                fire
            }
            CompletionTrigger::Level => {
                self.fired = true;
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.fired = false;
    }
}
