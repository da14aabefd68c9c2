//! Drawing surface port
//!
//! A minimal 2D canvas contract: path building, fill/stroke with the
//! current style, text, and a scale transform. The radar chart renderer
//! draws through it; the infrastructure layer provides an SVG surface.

/// Horizontal text alignment relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical text alignment relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
    Top,
    Bottom,
}

/// Canvas-like drawing target
pub trait DrawingSurface {
    /// Resize the backing store (device pixels) and the layout box
    /// (logical pixels). Resizing discards all content and resets the
    /// transform and styles.
    fn resize(
        &mut self,
        backing_width: u32,
        backing_height: u32,
        layout_width: f64,
        layout_height: f64,
    );

    /// Multiply the current transform by a scale
    fn scale(&mut self, sx: f64, sy: f64);

    /// Erase a rectangle in logical coordinates
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Circular arc around `(cx, cy)` from `start` to `end` radians
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    fn close_path(&mut self);

    fn set_fill_style(&mut self, color: &str);

    fn set_stroke_style(&mut self, color: &str);

    fn set_line_width(&mut self, width: f64);

    /// Fill the current path
    fn fill(&mut self);

    /// Stroke the current path
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);

    fn set_text_align(&mut self, align: TextAlign);

    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
