use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::GuessEvent;
use crate::interaction::RevealProgress;
use crate::render::Renderer;

use super::{GuessChart, GuessPhase, Reveal};

impl<R: Renderer> GuessChart<R> {
    /// Shows the answer and locks the guess.
    ///
    /// Fails with [`ChartError::GuessIncomplete`] while any slot is undefined.
    /// Calling it again after a reveal returns the same payload without
    /// restarting the animation.
    pub fn reveal(&mut self) -> ChartResult<Reveal> {
        if self.phase == GuessPhase::Revealed {
            return Ok(self.reveal_payload());
        }
        if !self.state.is_complete() {
            return Err(ChartError::GuessIncomplete {
                defined: self.state.defined_count(),
                required: self.state.expected_len(),
            });
        }

        self.phase = GuessPhase::Revealed;
        self.interaction.on_drag_end();
        self.interaction.on_pointer_leave();
        self.interaction.start_reveal();
        debug!(
            answer_len = self.reference.len(),
            overlay_series = self.config.other_data.len(),
            "guess revealed"
        );
        self.emit_event(GuessEvent::Revealed);
        Ok(self.reveal_payload())
    }

    /// Advances the reveal animation clock by `delta_seconds`.
    ///
    /// Returns `None` when no animation is running.
    pub fn advance_reveal(&mut self, delta_seconds: f64) -> Option<RevealProgress> {
        self.interaction.step_reveal(delta_seconds)
    }

    /// Starts a new session: every slot undefined and the hint shown again.
    pub fn reset(&mut self) {
        self.state.reset();
        self.interaction.reset();
        self.phase = GuessPhase::Drawing;
        self.emit_event(GuessEvent::Reset);
    }
}
