use ordered_float::OrderedFloat;
use tracing::trace;

use crate::extensions::GuessEvent;
use crate::guess::DragOutcome;
use crate::interaction::{HoverSeries, HoverTarget, InteractionMode};
use crate::render::Renderer;

use super::{GuessChart, GuessPhase};

impl<R: Renderer> GuessChart<R> {
    /// Begins a drag gesture. Ignored once the answer is revealed.
    pub fn drag_start(&mut self) {
        if self.phase == GuessPhase::Revealed {
            trace!("ignoring drag start on revealed guess");
            return;
        }
        self.interaction.on_drag_start();
        self.emit_event(GuessEvent::DragStarted);
    }

    /// Records the pointer at plot pixel `(px, py)` into the guess.
    ///
    /// Pixels outside the plot are clamped through the domain bounds. Once
    /// revealed the guess is locked and the returned outcome is unchanged.
    pub fn drag_to(&mut self, px: f64, py: f64) -> DragOutcome {
        if self.phase == GuessPhase::Revealed {
            trace!(px, py, "ignoring drag sample on revealed guess");
            return self.state.summary();
        }

        self.interaction.on_drag_move(px, py);
        let domain = self.mapper.to_domain(px, py);
        let outcome = self.state.apply_drag(domain.x, domain.y);
        self.phase = if outcome.complete {
            GuessPhase::Complete
        } else {
            GuessPhase::Drawing
        };

        if outcome.changed {
            if let (Some(x), Some(y)) = (outcome.snapped_x, outcome.recorded_y) {
                self.emit_event(GuessEvent::GuessRecorded {
                    x,
                    y,
                    defined_count: outcome.defined.len(),
                });
            }
        }
        if outcome.fire_reveal {
            self.emit_event(GuessEvent::RevealArmed);
        }
        outcome
    }

    pub fn drag_end(&mut self) {
        if self.interaction.mode() != InteractionMode::Drawing {
            return;
        }
        self.interaction.on_drag_end();
        self.emit_event(GuessEvent::DragEnded);
    }

    /// Updates hover from a pointer position in plot pixels.
    ///
    /// Returns the circle under the pointer, if any. Hover is suppressed
    /// while drawing.
    pub fn pointer_move(&mut self, px: f64, py: f64) -> Option<HoverTarget> {
        if self.interaction.mode() == InteractionMode::Drawing {
            return None;
        }
        let target = self.hit_test(px, py);
        self.interaction.on_pointer_move(px, py, target);
        target
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Text shown next to the hovered circle, e.g. `"1900: 13.6%"`.
    #[must_use]
    pub fn hover_label(&self) -> Option<String> {
        let target = self.interaction.hover().target?;
        Some(format!(
            "{}: {}",
            self.config.x_axis_label_format.format(target.x),
            self.config.hover_value_format.format(target.y)
        ))
    }

    /// Nearest circle within `point_radius + 1` pixels of `(px, py)`.
    fn hit_test(&self, px: f64, py: f64) -> Option<HoverTarget> {
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        let reach = self.config.point_radius + 1.0;

        let guess = self
            .state
            .points()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_data_point()
                    .map(|point| (HoverSeries::Guess, index, point))
            });
        let answer = self
            .reference
            .iter()
            .enumerate()
            .filter(|_| self.phase == GuessPhase::Revealed)
            .map(|(index, point)| (HoverSeries::Answer, index, *point));

        guess
            .chain(answer)
            .map(|(series, index, point)| {
                let (cx, cy) = self.mapper.to_pixel(point);
                (series, index, point, (cx - px).hypot(cy - py))
            })
            .filter(|(_, _, _, distance)| *distance <= reach)
            .min_by_key(|(_, _, _, distance)| OrderedFloat(*distance))
            .map(|(series, index, point, _)| HoverTarget {
                series,
                index,
                x: point.x,
                y: point.y,
            })
    }
}
