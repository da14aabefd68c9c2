//! Radar chart domain
//!
//! Pure layout for the flavor radar chart: where the grid, spokes, data
//! polygon and labels go for a given [`options::ChartOptions`]. Drawing
//! the layout onto a surface is the application layer's job.

pub mod geometry;
pub mod options;

pub use geometry::{AXIS_COUNT, AxisLabel, GRID_RINGS, GridRing, Point, RadarGeometry};
pub use options::{ChartOptions, ChartPalette, ChartStyleOverrides};
