use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolygonPrimitive, PrimitiveRole, TextPrimitive};

/// Backend-agnostic scene for one widget draw pass.
///
/// Coordinates are in surface pixels: plot pixels offset by the left/top margin.
/// Primitives are listed in paint order within each kind; polygons paint
/// first, then lines, circles and texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub surface: Viewport,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: Viewport) -> Self {
        Self {
            surface,
            polygons: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.surface.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.surface.width,
                height: self.surface.height,
            });
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    /// Number of primitives of every kind carrying `role`.
    #[must_use]
    pub fn count_role(&self, role: PrimitiveRole) -> usize {
        self.polygons.iter().filter(|p| p.role == role).count()
            + self.lines.iter().filter(|p| p.role == role).count()
            + self.circles.iter().filter(|p| p.role == role).count()
            + self.texts.iter().filter(|p| p.role == role).count()
    }
}
