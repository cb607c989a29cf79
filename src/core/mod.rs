pub mod line_series;
pub mod mapper;
pub mod scale;
pub mod ticks;
pub mod types;

pub use line_series::{LineSegment, polyline_length, project_line_segments, truncate_line_segments};
pub use mapper::CoordinateMapper;
pub use scale::LinearScale;
pub use ticks::{nice_tick_step, nice_ticks};
pub use types::{BoundsOverride, DataPoint, DomainBounds, Margin, Viewport, canonicalize_points};
