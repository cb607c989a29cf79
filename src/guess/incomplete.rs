use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{DataPoint, DomainBounds};
use crate::guess::GuessPoint;

/// Domain rectangle not yet covered by the guess, shaded by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncompleteRange {
    pub x_start: f64,
    pub x_end: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl IncompleteRange {
    /// Polygon corners: up the left edge, across the top, down the right edge.
    #[must_use]
    pub fn corners(self) -> SmallVec<[DataPoint; 4]> {
        smallvec![
            DataPoint::new(self.x_start, self.y_min),
            DataPoint::new(self.x_start, self.y_max),
            DataPoint::new(self.x_end, self.y_max),
            DataPoint::new(self.x_end, self.y_min),
        ]
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_end - self.x_start
    }
}

/// Computes the uncovered range for a guess with `defined_count` defined slots.
///
/// Returns `None` once `defined_count` reaches `expected_len`. Defined slots
/// always form a prefix, so the range starts at the last defined slot (or at
/// the first slot when nothing is drawn) and runs to `x_max`.
#[must_use]
pub fn incomplete_range(
    slots: &[GuessPoint],
    defined_count: usize,
    expected_len: usize,
    bounds: DomainBounds,
) -> Option<IncompleteRange> {
    if defined_count >= expected_len {
        return None;
    }

    let anchor = defined_count.saturating_sub(1);
    let x_start = slots.get(anchor).map_or(bounds.x_min, |slot| slot.x());
    Some(IncompleteRange {
        x_start,
        x_end: bounds.x_max,
        y_min: bounds.y_min,
        y_max: bounds.y_max,
    })
}
