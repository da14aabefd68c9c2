//! Radar chart output as SVG

mod svg_sink;
mod svg_surface;

pub use svg_sink::{SvgChartSink, render_svg};
pub use svg_surface::SvgSurface;
