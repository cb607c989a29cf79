use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DataPoint, DomainBounds};
use crate::error::{ChartError, ChartResult};
use crate::guess::{
    CompletionLatch, CompletionTrigger, GuessGrid, GuessPoint, IncompleteRange, incomplete_range,
    select_defined,
};

/// Capture rules for one guess session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuessPolicy {
    pub grid: GuessGrid,
    /// Rounds recorded values to the nearest multiple, e.g. `0.01`.
    #[serde(default)]
    pub y_step: Option<f64>,
    #[serde(default)]
    pub trigger: CompletionTrigger,
}

impl GuessPolicy {
    #[must_use]
    pub fn new(grid: GuessGrid) -> Self {
        Self {
            grid,
            y_step: None,
            trigger: CompletionTrigger::default(),
        }
    }

    #[must_use]
    pub fn with_y_step(mut self, y_step: f64) -> Self {
        self.y_step = Some(y_step);
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: CompletionTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        self.grid.validate()?;
        validate_y_step(self.y_step)
    }
}

pub(crate) fn validate_y_step(y_step: Option<f64>) -> ChartResult<()> {
    match y_step {
        Some(step) if !step.is_finite() || step <= 0.0 => Err(ChartError::InvalidData(
            "y step must be finite and > 0".to_owned(),
        )),
        _ => Ok(()),
    }
}

/// What a single drag sample did to the guess, plus the state renderers need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragOutcome {
    /// `false` when the sample was ignored or rewrote identical values.
    pub changed: bool,
    /// Snap position used for assignment; `None` for ignored samples.
    pub snapped_x: Option<f64>,
    pub recorded_y: Option<f64>,
    pub assigned_index: Option<usize>,
    /// Slots newly defined by the prefix fill.
    pub backfilled: usize,
    pub defined: Vec<GuessPoint>,
    pub incomplete_range: Option<IncompleteRange>,
    pub complete: bool,
    /// Reveal signal according to the configured [`CompletionTrigger`].
    pub fire_reveal: bool,
}

/// Owned guess-session state.
///
/// All mutation goes through [`GuessState::apply_drag`] (or the by-value
/// [`record_drag`]) and [`GuessState::reset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessState {
    bounds: DomainBounds,
    policy: GuessPolicy,
    slots: Vec<GuessPoint>,
    expected_len: usize,
    latch: CompletionLatch,
}

impl GuessState {
    /// Seeds undefined slots from an ascending, non-empty reference sequence.
    ///
    /// Every slot must lie inside the x bounds, otherwise it could never be
    /// assigned.
    pub fn new(
        reference: &[DataPoint],
        bounds: DomainBounds,
        policy: GuessPolicy,
    ) -> ChartResult<Self> {
        bounds.validate()?;
        policy.validate()?;
        if reference.windows(2).any(|pair| pair[1].x <= pair[0].x) {
            return Err(ChartError::InvalidData(
                "reference sequence must be strictly ascending by x".to_owned(),
            ));
        }

        let slots: Vec<GuessPoint> = policy
            .grid
            .seed_positions(reference)?
            .into_iter()
            .map(GuessPoint::undefined)
            .collect();
        if let Some(outside) = slots
            .iter()
            .find(|slot| slot.x() < bounds.x_min || slot.x() > bounds.x_max)
        {
            return Err(ChartError::InvalidData(format!(
                "guess slot x = {} lies outside x bounds [{}, {}]",
                outside.x(),
                bounds.x_min,
                bounds.x_max
            )));
        }

        let expected_len = slots.len();
        debug!(
            reference_len = reference.len(),
            slot_count = expected_len,
            grid = ?policy.grid,
            "seeded guess slots"
        );

        Ok(Self {
            bounds,
            policy,
            slots,
            expected_len,
            latch: CompletionLatch::new(policy.trigger),
        })
    }

    #[must_use]
    pub fn bounds(&self) -> DomainBounds {
        self.bounds
    }

    #[must_use]
    pub fn policy(&self) -> GuessPolicy {
        self.policy
    }

    #[must_use]
    pub fn points(&self) -> &[GuessPoint] {
        &self.slots
    }

    #[must_use]
    pub fn defined(&self) -> Vec<GuessPoint> {
        select_defined(&self.slots)
    }

    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_defined()).count()
    }

    /// Number of defined slots required for completion.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        self.expected_len
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_defined()) && self.defined_count() == self.expected_len
    }

    #[must_use]
    pub fn incomplete_range(&self) -> Option<IncompleteRange> {
        incomplete_range(
            &self.slots,
            self.defined_count(),
            self.expected_len,
            self.bounds,
        )
    }

    #[must_use]
    pub fn reveal_fired(&self) -> bool {
        self.latch.has_fired()
    }

    /// Outcome describing the current state without applying a sample.
    #[must_use]
    pub fn summary(&self) -> DragOutcome {
        self.outcome(false, None, None, None, 0, false)
    }

    /// Records one drag sample given in domain coordinates.
    ///
    /// Values are clamped into the bounds; `NaN` on either axis leaves the
    /// state untouched. Never fails.
    pub fn apply_drag(&mut self, x: f64, y: f64) -> DragOutcome {
        if x.is_nan() || y.is_nan() {
            trace!(x, y, "ignoring drag sample with NaN coordinate");
            return self.outcome(false, None, None, None, 0, false);
        }

        let clamped_x = self.bounds.clamp_x(x);
        let recorded_y = self.snap_y(self.bounds.clamp_y(y));
        let target = self.policy.grid.resolve(&self.slots, clamped_x);
        let fill_before = clamped_x.max(target.x) - target.tolerance;

        let mut changed = false;
        if let Some(index) = target.index {
            changed |= self.slots[index].assign(recorded_y);
        }

        let mut backfilled = 0_usize;
        for slot in &mut self.slots {
            if !slot.is_defined() && slot.x() < fill_before {
                slot.assign(recorded_y);
                backfilled += 1;
            }
        }
        changed |= backfilled > 0;

        let complete = self.is_complete();
        let fire_reveal = self.latch.observe(complete);
        trace!(
            x,
            y,
            snapped_x = target.x,
            recorded_y,
            assigned_index = ?target.index,
            backfilled,
            complete,
            "recorded drag sample"
        );
        if fire_reveal && self.policy.trigger == CompletionTrigger::Edge {
            debug!(slot_count = self.expected_len, "guess completed");
        }

        self.outcome(
            changed,
            Some(target.x),
            Some(recorded_y),
            target.index,
            backfilled,
            fire_reveal,
        )
    }

    /// Clears every slot and re-arms the completion latch.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.latch.reset();
        debug!(slot_count = self.expected_len, "guess reset");
    }

    fn snap_y(&self, y: f64) -> f64 {
        let Some(step) = self.policy.y_step else {
            return y;
        };
        let inverse = 1.0 / step;
        let rounded = if (inverse - inverse.round()).abs() <= 1e-9 {
            // Divide by the integral inverse so `0.07` stays `0.07`.
            (y * inverse.round()).round() / inverse.round()
        } else {
            (y / step).round() * step
        };
        self.bounds.clamp_y(rounded)
    }

    fn outcome(
        &self,
        changed: bool,
        snapped_x: Option<f64>,
        recorded_y: Option<f64>,
        assigned_index: Option<usize>,
        backfilled: usize,
        fire_reveal: bool,
    ) -> DragOutcome {
        DragOutcome {
            changed,
            snapped_x,
            recorded_y,
            assigned_index,
            backfilled,
            defined: self.defined(),
            incomplete_range: self.incomplete_range(),
            complete: self.is_complete(),
            fire_reveal,
        }
    }
}

/// By-value form of [`GuessState::apply_drag`].
#[must_use]
pub fn record_drag(mut state: GuessState, x: f64, y: f64) -> (GuessState, DragOutcome) {
    let outcome = state.apply_drag(x, y);
    (state, outcome)
}
