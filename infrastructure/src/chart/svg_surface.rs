//! SVG drawing surface
//!
//! Records canvas-style drawing calls and serializes them as an SVG
//! document. Each `fill` or `stroke` turns the current path into one
//! element carrying the styles and scale in effect at that moment.

use beanquiz_application::{DrawingSurface, TextAlign, TextBaseline};
use std::f64::consts::TAU;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Move(f64, f64),
    Line(f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    Close,
}

/// In-memory SVG canvas
#[derive(Debug, Clone)]
pub struct SvgSurface {
    backing: (u32, u32),
    layout: (f64, f64),
    scale: (f64, f64),
    path: Vec<Segment>,
    fill_style: String,
    stroke_style: String,
    line_width: f64,
    font: String,
    align: TextAlign,
    baseline: TextBaseline,
    elements: Vec<String>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            backing: (0, 0),
            layout: (0.0, 0.0),
            scale: (1.0, 1.0),
            path: Vec::new(),
            fill_style: "#000000".to_string(),
            stroke_style: "#000000".to_string(),
            line_width: 1.0,
            font: "10px sans-serif".to_string(),
            align: TextAlign::Start,
            baseline: TextBaseline::Alphabetic,
            elements: Vec::new(),
        }
    }

    /// Number of drawn elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the drawing.
    ///
    /// The document is `layout` units wide with a `backing` pixel view box,
    /// the same relation a high-DPI canvas has to its CSS box.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            num(self.layout.0),
            num(self.layout.1),
            self.backing.0,
            self.backing.1
        );
        svg.push('\n');
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn transform_attr(&self) -> String {
        if self.scale == (1.0, 1.0) {
            String::new()
        } else {
            format!(
                r#" transform="scale({} {})""#,
                num(self.scale.0),
                num(self.scale.1)
            )
        }
    }

    /// The current path is exactly one full circle
    fn as_circle(&self) -> Option<(f64, f64, f64)> {
        match self.path.as_slice() {
            [Segment::Arc { cx, cy, radius, start, end }] if (end - start).abs() >= TAU - 1e-9 => {
                Some((*cx, *cy, *radius))
            }
            _ => None,
        }
    }

    fn path_data(&self) -> String {
        let mut d = String::new();
        let mut has_point = false;
        for segment in &self.path {
            if !d.is_empty() {
                d.push(' ');
            }
            match *segment {
                Segment::Move(x, y) => {
                    let _ = write!(d, "M{} {}", num(x), num(y));
                    has_point = true;
                }
                Segment::Line(x, y) => {
                    let cmd = if has_point { 'L' } else { 'M' };
                    let _ = write!(d, "{}{} {}", cmd, num(x), num(y));
                    has_point = true;
                }
                Segment::Arc { cx, cy, radius, start, end } => {
                    write_arc(&mut d, cx, cy, radius, start, end, has_point);
                    has_point = true;
                }
                Segment::Close => d.push('Z'),
            }
        }
        d
    }

    fn push_shape(&mut self, paint: &str) {
        if self.path.is_empty() {
            return;
        }
        let transform = self.transform_attr();
        let element = match self.as_circle() {
            Some((cx, cy, r)) => format!(
                r#"<circle cx="{}" cy="{}" r="{}" {}{}/>"#,
                num(cx),
                num(cy),
                num(r),
                paint,
                transform
            ),
            None => format!(r#"<path d="{}" {}{}/>"#, self.path_data(), paint, transform),
        };
        self.elements.push(element);
    }
}

fn write_arc(d: &mut String, cx: f64, cy: f64, r: f64, start: f64, end: f64, connect: bool) {
    let point = |angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());
    let (sx, sy) = point(start);
    let lead = if connect { 'L' } else { 'M' };
    let _ = write!(d, "{}{} {}", lead, num(sx), num(sy));

    let sweep = end - start;
    if sweep.abs() >= TAU - 1e-9 {
        // A full turn is two half arcs; a single SVG arc cannot end where it starts
        let (mx, my) = point(start + sweep / 2.0);
        let flag = if sweep > 0.0 { 1 } else { 0 };
        let _ = write!(
            d,
            " A{r} {r} 0 0 {flag} {} {} A{r} {r} 0 0 {flag} {} {}",
            num(mx),
            num(my),
            num(sx),
            num(sy),
            r = num(r),
            flag = flag
        );
    } else {
        let (ex, ey) = point(end);
        let large = if sweep.abs() > TAU / 2.0 { 1 } else { 0 };
        let flag = if sweep > 0.0 { 1 } else { 0 };
        let _ = write!(
            d,
            " A{r} {r} 0 {large} {flag} {} {}",
            num(ex),
            num(ey),
            r = num(r),
            large = large,
            flag = flag
        );
    }
}

/// Two decimals, trailing zeros trimmed
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

impl DrawingSurface for SvgSurface {
    fn resize(&mut self, backing_width: u32, backing_height: u32, layout_width: f64, layout_height: f64) {
        *self = Self::new();
        self.backing = (backing_width, backing_height);
        self.layout = (layout_width, layout_height);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.scale = (self.scale.0 * sx, self.scale.1 * sy);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // Only whole-surface clears are supported
        if x <= 0.0 && y <= 0.0 && width >= self.layout.0 && height >= self.layout.1 {
            self.elements.clear();
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(Segment::Move(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(Segment::Line(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.path.push(Segment::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn close_path(&mut self) {
        self.path.push(Segment::Close);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_style = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill(&mut self) {
        let paint = format!(r#"fill="{}" stroke="none""#, escape(&self.fill_style));
        self.push_shape(&paint);
    }

    fn stroke(&mut self) {
        let paint = format!(
            r#"fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round""#,
            escape(&self.stroke_style),
            num(self.line_width)
        );
        self.push_shape(&paint);
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let anchor = match self.align {
            TextAlign::Start => "start",
            TextAlign::Center => "middle",
            TextAlign::End => "end",
        };
        let baseline = match self.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
            TextBaseline::Top => "hanging",
            TextBaseline::Bottom => "text-after-edge",
        };
        let element = format!(
            r#"<text x="{}" y="{}" style="font: {}" fill="{}" text-anchor="{}" dominant-baseline="{}"{}>{}</text>"#,
            num(x),
            num(y),
            escape(&self.font),
            escape(&self.fill_style),
            anchor,
            baseline,
            self.transform_attr(),
            escape(text)
        );
        self.elements.push(element);
    }
}
