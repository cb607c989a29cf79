use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// One slot of the guess sequence.
///
/// A slot starts undefined with no value and becomes defined once the pointer
/// reaches or passes its x position. It never reverts to undefined within a
/// session; a later drag at the same x may overwrite the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuessPoint {
    x: f64,
    y: Option<f64>,
    defined: bool,
}

impl GuessPoint {
    #[must_use]
    pub(crate) fn undefined(x: f64) -> Self {
        Self {
            x,
            y: None,
            defined: false,
        }
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> Option<f64> {
        self.y
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        self.defined
    }

    /// Returns the drawn sample, or `None` while undefined.
    #[must_use]
    pub fn as_data_point(self) -> Option<DataPoint> {
        match (self.defined, self.y) {
            (true, Some(y)) => Some(DataPoint::new(self.x, y)),
            _ => None,
        }
    }

    /// Sets the value and marks the slot defined. Returns `true` on change.
    pub(crate) fn assign(&mut self, y: f64) -> bool {
        let changed = !self.defined || self.y != Some(y);
        self.y = Some(y);
        self.defined = true;
        changed
    }

    pub(crate) fn clear(&mut self) {
        self.y = None;
        self.defined = false;
    }
}

/// Defined slots in sequence order.
#[must_use]
pub fn select_defined(points: &[GuessPoint]) -> Vec<GuessPoint> {
    points.iter().copied().filter(|point| point.defined).collect()
}
