use glam::DVec2;
use std::fmt;

/// Straight (non-premultiplied) RGBA color with an `f32` alpha, matching the
/// CSS `rgba()` notation the canvas consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Immediate-mode 2D drawing target.
///
/// The canvas adapter implements this on top of `CanvasRenderingContext2d`;
/// tests implement it with a recorder.
pub trait Surface {
    /// Resize the backing store. Called before the field regenerates.
    fn set_size(&mut self, width: f64, height: f64);
    /// Clear the rectangle `(0, 0)..(width, height)`.
    fn clear(&mut self, width: f64, height: f64) -> anyhow::Result<()>;
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) -> anyhow::Result<()>;
    fn stroke_line(
        &mut self,
        from: DVec2,
        to: DVec2,
        color: Rgba,
        line_width: f64,
    ) -> anyhow::Result<()>;
}
