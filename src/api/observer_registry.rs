use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::{GuessContext, GuessEvent, GuessObserver};
use crate::render::Renderer;

use super::GuessChart;

impl<R: Renderer> GuessChart<R> {
    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn GuessObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::ObserverConflict(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::ObserverConflict(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        debug!(
            observer_id = %observer_id,
            observer_count = self.observers.len(),
            "observer registered"
        );
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            debug!(observer_id, "observer unregistered");
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    pub(super) fn observer_context(&self) -> GuessContext {
        GuessContext {
            phase: self.phase,
            interaction_mode: self.interaction.mode(),
            defined_count: self.state.defined_count(),
            slot_count: self.state.expected_len(),
        }
    }

    pub(super) fn emit_event(&mut self, event: GuessEvent) {
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
