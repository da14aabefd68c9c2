//! Radar chart rendering use case
//!
//! Draws a five-axis flavor profile onto a [`DrawingSurface`]. Every render
//! starts by resizing the surface, so rendering the same scores twice
//! leaves exactly the same picture.

use crate::ports::drawing_surface::{DrawingSurface, TextAlign, TextBaseline};
use beanquiz_domain::{ChartOptions, Point, RadarGeometry, ScoreVector};
use std::f64::consts::TAU;

const GRID_LINE_WIDTH: f64 = 0.8;
const OUTER_RING_LINE_WIDTH: f64 = 1.5;
const DATA_LINE_WIDTH: f64 = 2.5;
const MARKER_RADIUS: f64 = 4.0;
const MARKER_OUTLINE_WIDTH: f64 = 2.0;

/// Radar chart painter
#[derive(Debug, Clone, Copy, Default)]
pub struct RadarChartRenderer;

impl RadarChartRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint `scores` onto `surface`.
    ///
    /// Layers, back to front: background disc, grid pentagons, spokes,
    /// data polygon, vertex markers, axis labels.
    pub fn render(
        &self,
        scores: &ScoreVector,
        surface: &mut dyn DrawingSurface,
        options: &ChartOptions,
    ) {
        let size = options.size;
        let ratio = options.pixel_ratio();
        let backing = options.backing_size();
        let geometry = RadarGeometry::new(options);
        let palette = &options.palette;
        let center = geometry.center();

        surface.resize(backing, backing, size, size);
        surface.scale(ratio, ratio);
        surface.clear_rect(0.0, 0.0, size, size);

        surface.begin_path();
        surface.arc(center.x, center.y, geometry.background_radius(), 0.0, TAU);
        surface.set_fill_style(&palette.background);
        surface.fill();

        surface.set_stroke_style(&palette.grid);
        for ring in geometry.grid_rings() {
            trace_polygon(surface, &ring.vertices);
            surface.set_line_width(if ring.is_outer() {
                OUTER_RING_LINE_WIDTH
            } else {
                GRID_LINE_WIDTH
            });
            surface.stroke();
        }

        surface.set_line_width(GRID_LINE_WIDTH);
        for end in geometry.spoke_ends() {
            surface.begin_path();
            surface.move_to(center.x, center.y);
            surface.line_to(end.x, end.y);
            surface.stroke();
        }

        let points = geometry.data_points(scores);
        trace_polygon(surface, &points);
        surface.set_fill_style(&palette.fill);
        surface.fill();
        surface.set_stroke_style(&palette.accent);
        surface.set_line_width(DATA_LINE_WIDTH);
        surface.stroke();

        for point in points {
            surface.begin_path();
            surface.arc(point.x, point.y, MARKER_RADIUS, 0.0, TAU);
            surface.set_fill_style(&palette.accent);
            surface.fill();
            surface.set_stroke_style(&palette.marker_outline);
            surface.set_line_width(MARKER_OUTLINE_WIDTH);
            surface.stroke();
        }

        surface.set_font(&options.font);
        surface.set_fill_style(&palette.label);
        surface.set_text_align(TextAlign::Center);
        surface.set_text_baseline(TextBaseline::Middle);
        for label in geometry.labels() {
            surface.fill_text(label.text, label.anchor.x, label.anchor.y);
        }
    }
}

fn trace_polygon(surface: &mut dyn DrawingSurface, vertices: &[Point]) {
    surface.begin_path();
    for (i, v) in vertices.iter().enumerate() {
        if i == 0 {
            surface.move_to(v.x, v.y);
        } else {
            surface.line_to(v.x, v.y);
        }
    }
    surface.close_path();
}
