use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// Pixel size of the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Space reserved around the plotting area for axes and labels, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(15.0, 20.0, 50.0, 70.0)
    }
}

/// One reference measurement, e.g. a year and a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed domain rectangle every recorded guess is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DomainBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> ChartResult<Self> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Derives bounds from the extent of `points`.
    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        let bounds = Self::extent(points)?;
        bounds.validate()?;
        Ok(bounds)
    }

    /// Raw extent of `points`; may be degenerate for a single x or y value.
    pub(crate) fn extent(points: &[DataPoint]) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "cannot derive bounds from an empty sequence".to_owned(),
            ));
        }

        let mut bounds = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for point in points {
            bounds.x_min = bounds.x_min.min(point.x);
            bounds.x_max = bounds.x_max.max(point.x);
            bounds.y_min = bounds.y_min.min(point.y);
            bounds.y_max = bounds.y_max.max(point.y);
        }
        Ok(bounds)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_min >= self.x_max {
            return Err(ChartError::InvalidData(format!(
                "x bounds must be finite with x_min < x_max (got {}..{})",
                self.x_min, self.x_max
            )));
        }
        if !self.y_min.is_finite() || !self.y_max.is_finite() || self.y_min >= self.y_max {
            return Err(ChartError::InvalidData(format!(
                "y bounds must be finite with y_min < y_max (got {}..{})",
                self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn clamp_x(self, x: f64) -> f64 {
        x.clamp(self.x_min, self.x_max)
    }

    #[must_use]
    pub fn clamp_y(self, y: f64) -> f64 {
        y.clamp(self.y_min, self.y_max)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// Per-field overrides applied on top of bounds derived from the reference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundsOverride {
    #[serde(default)]
    pub x_min: Option<f64>,
    #[serde(default)]
    pub x_max: Option<f64>,
    #[serde(default)]
    pub y_min: Option<f64>,
    #[serde(default)]
    pub y_max: Option<f64>,
}

impl BoundsOverride {
    pub fn resolve(self, derived: DomainBounds) -> ChartResult<DomainBounds> {
        DomainBounds::new(
            self.x_min.unwrap_or(derived.x_min),
            self.x_max.unwrap_or(derived.x_max),
            self.y_min.unwrap_or(derived.y_min),
            self.y_max.unwrap_or(derived.y_max),
        )
    }
}

/// Drops non-finite samples, sorts by x and keeps the last sample per x.
#[must_use]
pub fn canonicalize_points(mut points: Vec<DataPoint>) -> Vec<DataPoint> {
    let original_len = points.len();
    points.retain(|point| point.x.is_finite() && point.y.is_finite());
    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut deduped: Vec<DataPoint> = Vec::with_capacity(points.len());
    let mut duplicate_count = 0_usize;
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if point.x.total_cmp(&last.x) == Ordering::Equal {
                *last = point;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(point);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized reference points"
        );
    }
    deduped
}
