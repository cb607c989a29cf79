use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, DomainBounds, Viewport};
use crate::error::ChartResult;

/// Bidirectional mapping between domain units and plot pixels.
///
/// `x` maps `[x_min, x_max]` onto `[0, width]`; `y` maps `[y_min, y_max]`
/// onto `[height, 0]`. Configuration is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    plot: Viewport,
    bounds: DomainBounds,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl CoordinateMapper {
    pub fn new(plot: Viewport, bounds: DomainBounds) -> ChartResult<Self> {
        plot.validate()?;
        bounds.validate()?;

        let x_scale = LinearScale::new(bounds.x_min, bounds.x_max, 0.0, f64::from(plot.width))?;
        let y_scale = LinearScale::new(bounds.y_min, bounds.y_max, f64::from(plot.height), 0.0)?;

        Ok(Self {
            plot,
            bounds,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn plot(&self) -> Viewport {
        self.plot
    }

    #[must_use]
    pub fn bounds(&self) -> DomainBounds {
        self.bounds
    }

    #[must_use]
    pub fn to_pixel_x(&self, x: f64) -> f64 {
        self.x_scale.to_range(x)
    }

    #[must_use]
    pub fn to_pixel_y(&self, y: f64) -> f64 {
        self.y_scale.to_range(y)
    }

    #[must_use]
    pub fn to_domain_x(&self, px: f64) -> f64 {
        self.x_scale.to_domain(px)
    }

    #[must_use]
    pub fn to_domain_y(&self, py: f64) -> f64 {
        self.y_scale.to_domain(py)
    }

    #[must_use]
    pub fn to_pixel(&self, point: DataPoint) -> (f64, f64) {
        (self.to_pixel_x(point.x), self.to_pixel_y(point.y))
    }

    #[must_use]
    pub fn to_domain(&self, px: f64, py: f64) -> DataPoint {
        DataPoint::new(self.to_domain_x(px), self.to_domain_y(py))
    }
}
