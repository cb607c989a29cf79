use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::guess::GuessPoint;

/// Upper bound on seeded slots, guards against a tiny distribution spacing.
pub const MAX_GUESS_SLOTS: usize = 100_000;

/// Relative tolerance used when comparing snapped positions to slot positions.
const SLOT_MATCH_TOLERANCE: f64 = 1e-9;

/// How a pointer x is matched to a slot of the exact grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapRounding {
    /// Snap to the nearest slot; a tie goes to the right.
    #[default]
    Nearest,
    /// Snap to the last slot at or left of the pointer.
    Floor,
}

/// Layout of guess slots and the rule that assigns a pointer x to one of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessGrid {
    /// One slot per reference x. Pointer x goes to the nearest slot, or to the
    /// last slot at or left of it with [`SnapRounding::Floor`]. `step` is the
    /// reference spacing and scales the matching tolerance.
    Exact {
        step: f64,
        #[serde(default)]
        rounding: SnapRounding,
    },
    /// One slot every `spacing` units from the first to the last reference x.
    /// Pointer x goes to the nearest slot within `spacing / 2`.
    Distribution { spacing: f64 },
}

/// Result of resolving a clamped pointer x against the slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    /// Position used for assignment and backfill.
    pub x: f64,
    /// Slot whose x matches `x`, if any.
    pub index: Option<usize>,
    /// Comparison tolerance for `x`.
    pub tolerance: f64,
}

impl GuessGrid {
    /// Exact grid whose step is the smallest positive gap between reference xs.
    ///
    /// A single-point reference falls back to a unit step.
    pub fn exact_for(reference: &[DataPoint]) -> ChartResult<Self> {
        if reference.is_empty() {
            return Err(ChartError::InvalidData(
                "reference sequence must not be empty".to_owned(),
            ));
        }

        let step = reference
            .windows(2)
            .map(|pair| pair[1].x - pair[0].x)
            .filter(|gap| gap.is_finite() && *gap > 0.0)
            .min_by_key(|gap| OrderedFloat(*gap))
            .unwrap_or(1.0);

        Ok(Self::Exact {
            step,
            rounding: SnapRounding::default(),
        })
    }

    pub fn validate(self) -> ChartResult<()> {
        let (name, value) = match self {
            Self::Exact { step, .. } => ("exact grid step", step),
            Self::Distribution { spacing } => ("distribution spacing", spacing),
        };
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn unit(self) -> f64 {
        match self {
            Self::Exact { step, .. } => step,
            Self::Distribution { spacing } => spacing,
        }
    }

    /// X positions of the guess slots for `reference` (sorted ascending).
    pub fn seed_positions(self, reference: &[DataPoint]) -> ChartResult<Vec<f64>> {
        self.validate()?;
        let (Some(first), Some(last)) = (reference.first(), reference.last()) else {
            return Err(ChartError::InvalidData(
                "reference sequence must not be empty".to_owned(),
            ));
        };

        match self {
            Self::Exact { .. } => Ok(reference.iter().map(|point| point.x).collect()),
            Self::Distribution { spacing } => {
                let span = last.x - first.x;
                let steps = (span / spacing + SLOT_MATCH_TOLERANCE).floor();
                if steps + 1.0 > MAX_GUESS_SLOTS as f64 {
                    return Err(ChartError::InvalidData(format!(
                        "distribution spacing {spacing} yields more than {MAX_GUESS_SLOTS} slots"
                    )));
                }

                let mut positions: Vec<f64> = (0..=steps as usize)
                    .map(|index| first.x + index as f64 * spacing)
                    .collect();
                let tolerance = spacing * SLOT_MATCH_TOLERANCE;
                if positions
                    .last()
                    .is_some_and(|tail| (last.x - tail).abs() > tolerance)
                {
                    positions.push(last.x);
                }
                Ok(positions)
            }
        }
    }

    /// Resolves an already clamped pointer x to its snap target.
    #[must_use]
    pub fn resolve(self, slots: &[GuessPoint], x: f64) -> SnapTarget {
        let tolerance = self.unit() * SLOT_MATCH_TOLERANCE;

        match self {
            Self::Exact { rounding, .. } => {
                let index = match rounding {
                    SnapRounding::Nearest => nearest_slot(slots, x, tolerance),
                    SnapRounding::Floor => slots
                        .partition_point(|slot| slot.x() <= x + tolerance)
                        .checked_sub(1),
                };
                SnapTarget {
                    x: index.map_or(x, |index| slots[index].x()),
                    index,
                    tolerance,
                }
            }
            Self::Distribution { spacing } => {
                let reach = spacing / 2.0 + tolerance;
                let nearest = slots
                    .iter()
                    .enumerate()
                    .map(|(index, slot)| (index, (slot.x() - x).abs()))
                    .filter(|(_, distance)| *distance <= reach)
                    .min_by_key(|(_, distance)| OrderedFloat(*distance));
                match nearest {
                    Some((index, _)) => SnapTarget {
                        x: slots[index].x(),
                        index: Some(index),
                        tolerance,
                    },
                    None => SnapTarget {
                        x,
                        index: None,
                        tolerance,
                    },
                }
            }
        }
    }
}

/// Index of the slot closest to `x` in an ascending slot list.
fn nearest_slot(slots: &[GuessPoint], x: f64, tolerance: f64) -> Option<usize> {
    let above = slots.partition_point(|slot| slot.x() < x - tolerance);
    let below = above.checked_sub(1);
    match (below, (above < slots.len()).then_some(above)) {
        (Some(below), Some(above)) if x - slots[below].x() < slots[above].x() - x => Some(below),
        (below, above) => above.or(below),
    }
}
