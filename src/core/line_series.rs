use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, DataPoint};

/// Projected line segment in plot pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub fn length(self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

/// Projects a polyline into adjacent pixel-space segments.
///
/// Deterministic and side-effect free so the frame builder and tests consume
/// the same geometry.
#[must_use]
pub fn project_line_segments(points: &[DataPoint], mapper: &CoordinateMapper) -> Vec<LineSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    points
        .windows(2)
        .map(|pair| {
            let (x1, y1) = mapper.to_pixel(pair[0]);
            let (x2, y2) = mapper.to_pixel(pair[1]);
            LineSegment { x1, y1, x2, y2 }
        })
        .collect()
}

#[must_use]
pub fn polyline_length(segments: &[LineSegment]) -> f64 {
    segments.iter().map(|segment| segment.length()).sum()
}

/// Keeps the leading `fraction` of the polyline's total length.
///
/// This is the stroke-dash-offset reveal: `0.0` yields nothing, `1.0` yields
/// the whole line, and the segment crossing the cut is shortened.
#[must_use]
pub fn truncate_line_segments(segments: &[LineSegment], fraction: f64) -> Vec<LineSegment> {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if fraction >= 1.0 {
        return segments.to_vec();
    }

    let mut remaining = polyline_length(segments) * fraction;
    let mut kept = Vec::with_capacity(segments.len());
    for segment in segments {
        if remaining <= 0.0 {
            break;
        }
        let length = segment.length();
        if length <= remaining {
            kept.push(*segment);
            remaining -= length;
            continue;
        }

        let t = remaining / length;
        kept.push(LineSegment {
            x1: segment.x1,
            y1: segment.y1,
            x2: segment.x1 + (segment.x2 - segment.x1) * t,
            y2: segment.y1 + (segment.y2 - segment.y1) * t,
        });
        break;
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x1: f64, x2: f64) -> LineSegment {
        LineSegment {
            x1,
            y1: 0.0,
            x2,
            y2: 0.0,
        }
    }

    #[test]
    fn truncation_cuts_inside_crossing_segment() {
        let segments = [segment(0.0, 10.0), segment(10.0, 30.0)];

        let kept = truncate_line_segments(&segments, 0.5);

        assert_eq!(kept.len(), 2);
        assert!((kept[1].x2 - 15.0).abs() <= 1e-9);
        assert!((polyline_length(&kept) - 15.0).abs() <= 1e-9);
    }

    #[test]
    fn truncation_clamps_fraction() {
        let segments = [segment(0.0, 10.0)];

        assert!(truncate_line_segments(&segments, -1.0).is_empty());
        assert!(truncate_line_segments(&segments, f64::NAN).is_empty());
        assert_eq!(truncate_line_segments(&segments, 2.0), segments.to_vec());
    }
}
