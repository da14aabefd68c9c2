//! Polar layout of the five-axis radar chart
//!
//! Axes start at the top (−90°) and proceed clockwise in screen
//! coordinates (y grows downwards), one every 72°.

use super::options::ChartOptions;
use crate::catalog::score::{FlavorAxis, MAX_SCORE, ScoreVector};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Number of chart axes
pub const AXIS_COUNT: usize = FlavorAxis::ALL.len();

/// Number of concentric grid rings, one per score step
pub const GRID_RINGS: usize = MAX_SCORE as usize;

/// A point in logical chart coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One concentric pentagon of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridRing {
    /// 1-based score level this ring marks
    pub level: usize,
    pub radius: f64,
    pub vertices: [Point; AXIS_COUNT],
}

impl GridRing {
    pub fn is_outer(&self) -> bool {
        self.level == GRID_RINGS
    }
}

/// Anchor of an axis label
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub axis: FlavorAxis,
    pub text: &'static str,
    pub anchor: Point,
}

/// Geometry of a radar chart for one set of options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    center: Point,
    outer_radius: f64,
    label_radius: f64,
    background_radius: f64,
}

impl RadarGeometry {
    pub fn new(options: &ChartOptions) -> Self {
        let outer_radius = options.size * options.radius_scale;
        Self {
            center: Point::new(options.size / 2.0, options.size / 2.0),
            outer_radius,
            label_radius: outer_radius + options.label_offset,
            background_radius: outer_radius + options.background_margin,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn background_radius(&self) -> f64 {
        self.background_radius
    }

    /// Angle of axis `index` in radians
    pub fn axis_angle(index: usize) -> f64 {
        -FRAC_PI_2 + index as f64 * (TAU / AXIS_COUNT as f64)
    }

    /// Project a radius along axis `index` to chart coordinates
    pub fn project(&self, index: usize, radius: f64) -> Point {
        let angle = Self::axis_angle(index);
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }

    /// Radius of a score value after clamping to `[0, MAX_SCORE]`
    pub fn value_radius(&self, value: f64) -> f64 {
        let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, MAX_SCORE) };
        v / MAX_SCORE * self.outer_radius
    }

    /// Concentric grid pentagons, innermost first
    pub fn grid_rings(&self) -> Vec<GridRing> {
        (1..=GRID_RINGS)
            .map(|level| {
                let radius = level as f64 / MAX_SCORE * self.outer_radius;
                GridRing {
                    level,
                    radius,
                    vertices: std::array::from_fn(|i| self.project(i, radius)),
                }
            })
            .collect()
    }

    /// Spoke end points on the outer ring, one per axis
    pub fn spoke_ends(&self) -> [Point; AXIS_COUNT] {
        std::array::from_fn(|i| self.project(i, self.outer_radius))
    }

    /// Data polygon vertices for a score vector
    pub fn data_points(&self, scores: &ScoreVector) -> [Point; AXIS_COUNT] {
        std::array::from_fn(|i| self.project(i, self.value_radius(scores.get(FlavorAxis::ALL[i]))))
    }

    /// Label anchors, one per axis
    pub fn labels(&self) -> [AxisLabel; AXIS_COUNT] {
        std::array::from_fn(|i| {
            let axis = FlavorAxis::ALL[i];
            AxisLabel {
                axis,
                text: axis.label(),
                anchor: self.project(i, self.label_radius),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn geometry() -> RadarGeometry {
        RadarGeometry::new(&ChartOptions::default())
    }

    #[test]
    fn test_default_dimensions() {
        let g = geometry();
        assert_eq!(g.center(), Point::new(140.0, 140.0));
        assert!(approx(g.outer_radius(), 100.8));
        assert!(approx(g.background_radius(), 110.8));
    }

    #[test]
    fn test_first_axis_points_up() {
        let g = geometry();
        let top = g.project(0, 10.0);
        assert!(approx(top.x, 140.0));
        assert!(approx(top.y, 130.0));
    }

    #[test]
    fn test_axes_proceed_clockwise_every_72_degrees() {
        for i in 0..AXIS_COUNT {
            let expected = -90.0 + i as f64 * 72.0;
            assert!(approx(RadarGeometry::axis_angle(i).to_degrees(), expected));
        }
        // Second axis lies to the right of centre and above it
        let p = geometry().project(1, 50.0);
        assert!(p.x > 140.0 && p.y < 140.0);
    }

    #[test]
    fn test_grid_rings_are_evenly_spaced() {
        let g = geometry();
        let rings = g.grid_rings();
        assert_eq!(rings.len(), 5);
        for (k, ring) in rings.iter().enumerate() {
            let expected = (k + 1) as f64 / 5.0 * g.outer_radius();
            assert!(approx(ring.radius, expected));
            for v in &ring.vertices {
                assert!(approx(v.distance_to(g.center()), expected));
            }
        }
        assert!(rings[4].is_outer());
        assert!(!rings[3].is_outer());
    }

    #[test]
    fn test_values_are_clamped() {
        let g = geometry();
        let over = g.data_points(&ScoreVector::new(9.0, 9.0, 9.0, 9.0, 9.0));
        let max = g.data_points(&ScoreVector::new(5.0, 5.0, 5.0, 5.0, 5.0));
        assert_eq!(over, max);
        assert_eq!(max, g.spoke_ends());

        let negative = g.data_points(&ScoreVector::new(-2.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(negative[0], g.center());
    }

    #[test]
    fn test_half_score_lands_half_way() {
        let g = geometry();
        let pts = g.data_points(&ScoreVector::new(2.5, 0.0, 0.0, 0.0, 0.0));
        assert!(approx(pts[0].distance_to(g.center()), g.outer_radius() / 2.0));
    }

    #[test]
    fn test_labels_sit_beyond_outer_ring() {
        let g = geometry();
        let labels = g.labels();
        assert_eq!(labels[0].text, "酸味");
        assert_eq!(labels[4].axis, FlavorAxis::Sweetness);
        for label in &labels {
            assert!(approx(
                label.anchor.distance_to(g.center()),
                g.outer_radius() + 24.0
            ));
        }
    }
}
