use crate::core::surface::Rgba;
use glam::DVec2;

/// Drawable extent of the surface in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn contains(self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// A point drifting across the surface at a constant per-frame velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Surface units per frame.
    pub velocity: DVec2,
    pub radius: f64,
    pub color: Rgba,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Move one frame and bounce off the edges.
    ///
    /// The velocity component is negated once the position has crossed a
    /// bound; the position itself is not clamped, so a particle can sit just
    /// outside the surface for the frame on which it turns around.
    pub fn advance(&mut self, bounds: Bounds) {
        self.position += self.velocity;
        if self.position.x > bounds.width || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > bounds.height || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Push the particle away from `pointer` by `step` on each axis when it
    /// is within `reach`. Axes are handled independently and never push a
    /// particle closer than `margin_radii * radius` to an edge.
    pub fn repel_from(
        &mut self,
        pointer: DVec2,
        reach: f64,
        step: f64,
        margin_radii: f64,
        bounds: Bounds,
    ) {
        if self.position.distance(pointer) >= reach {
            return;
        }
        let margin = self.radius * margin_radii;
        self.position.x = nudge_axis(
            self.position.x,
            pointer.x,
            step,
            margin,
            bounds.width - margin,
        );
        self.position.y = nudge_axis(
            self.position.y,
            pointer.y,
            step,
            margin,
            bounds.height - margin,
        );
    }
}

#[inline]
fn nudge_axis(value: f64, pointer: f64, step: f64, low: f64, high: f64) -> f64 {
    if pointer < value && value < high {
        (value + step).min(high)
    } else if pointer > value && value > low {
        (value - step).max(low)
    } else {
        value
    }
}

/// Opacity of the line joining two particles `distance` apart, or `None`
/// when they are too far apart to be connected.
///
/// Falls off linearly from `alpha_max` at distance zero to zero at
/// `threshold`.
#[inline]
pub fn connection_alpha(distance: f64, threshold: f64, alpha_max: f32) -> Option<f32> {
    if distance < threshold {
        Some(((1.0 - distance / threshold) * alpha_max as f64) as f32)
    } else {
        None
    }
}
