use crate::core::surface::Rgba;
use glam::DVec2;

/// Look of a cursor-following glow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightOptions {
    /// Diameter in CSS pixels.
    pub size: f64,
    /// Opacity while the pointer is inside the container.
    pub opacity: f32,
    pub blur: f64,
    pub color: Rgba,
    /// Fraction of the remaining distance covered per frame.
    pub easing: f64,
}

/// Fixed glow placed relative to its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticSpotlightOptions {
    pub size: f64,
    /// CSS `left` value.
    pub x: &'static str,
    /// CSS `top` value.
    pub y: &'static str,
    pub blur: f64,
    pub color: Rgba,
}

/// Centered glow that breathes on a CSS animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseSpotlightOptions {
    pub size: f64,
    pub duration_ms: u32,
    pub blur: f64,
    pub color: Rgba,
}

/// Eased follower for one interactive glow, in container space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    /// Last pointer position relative to the container.
    pub target: DVec2,
    /// Current glow center.
    pub pos: DVec2,
    pub easing: f64,
    pub visible: bool,
}

impl Spotlight {
    pub fn new(easing: f64) -> Self {
        Self {
            target: DVec2::ZERO,
            pos: DVec2::ZERO,
            easing,
            visible: false,
        }
    }

    #[inline]
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Ease one frame toward the target. Hidden glows keep their position.
    ///
    /// Returns whether the glow needs repositioning.
    pub fn step(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.pos += (self.target - self.pos) * self.easing;
        true
    }

    /// CSS `left`/`top` of a glow of diameter `size` centered on `pos`.
    #[inline]
    pub fn top_left(&self, size: f64) -> DVec2 {
        self.pos - DVec2::splat(size / 2.0)
    }
}

fn glow_base(size: f64, blur: f64, color: Rgba) -> String {
    format!(
        "position:absolute;pointer-events:none;border-radius:50%;filter:blur({blur}px);\
z-index:0;background:radial-gradient(circle, {color}, transparent 70%);\
width:{size}px;height:{size}px;"
    )
}

/// Inline style of an interactive glow; starts hidden and fades in.
pub fn interactive_style(opts: &SpotlightOptions) -> String {
    format!(
        "{}opacity:0;transition:opacity 0.3s ease;",
        glow_base(opts.size, opts.blur, opts.color)
    )
}

pub fn static_style(opts: &StaticSpotlightOptions) -> String {
    format!(
        "{}left:{};top:{};transform:translate(-50%, -50%);",
        glow_base(opts.size, opts.blur, opts.color),
        opts.x,
        opts.y
    )
}

pub fn pulse_style(opts: &PulseSpotlightOptions, animation: &str) -> String {
    format!(
        "{}left:50%;top:50%;transform:translate(-50%, -50%);\
animation:{} {}ms ease-in-out infinite;",
        glow_base(opts.size, opts.blur, opts.color),
        animation,
        opts.duration_ms
    )
}
