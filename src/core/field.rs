use crate::constants::*;
use crate::core::particles::{connection_alpha, Bounds, Particle};
use crate::core::surface::{Rgba, Surface};
use glam::DVec2;
use rand::prelude::*;

/// Engine tunables. `Default` mirrors `constants.rs`.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub wide_count: usize,
    pub narrow_count: usize,
    /// Surfaces narrower than this get `narrow_count` particles.
    pub narrow_breakpoint: f64,
    pub radius_min: f64,
    pub radius_span: f64,
    pub speed_max: f64,
    pub connection_distance: f64,
    pub connection_alpha_max: f32,
    pub connection_line_width: f64,
    pub pointer_radius: f64,
    pub repel_step: f64,
    pub edge_margin_radii: f64,
    pub particle_color: Rgba,
    pub connection_color: Rgba,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let (r, g, b, a) = PARTICLE_RGBA;
        let (lr, lg, lb) = CONNECTION_RGB;
        Self {
            wide_count: PARTICLE_COUNT_WIDE,
            narrow_count: PARTICLE_COUNT_NARROW,
            narrow_breakpoint: NARROW_VIEWPORT_BREAKPOINT,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
            speed_max: PARTICLE_SPEED_MAX,
            connection_distance: CONNECTION_DISTANCE,
            connection_alpha_max: CONNECTION_ALPHA_MAX,
            connection_line_width: CONNECTION_LINE_WIDTH,
            pointer_radius: POINTER_RADIUS,
            repel_step: REPEL_STEP,
            edge_margin_radii: EDGE_MARGIN_RADII,
            particle_color: Rgba::new(r, g, b, a),
            connection_color: Rgba::new(lr, lg, lb, 1.0),
        }
    }
}

impl FieldConfig {
    #[inline]
    pub fn target_count(&self, width: f64) -> usize {
        if width < self.narrow_breakpoint {
            self.narrow_count
        } else {
            self.wide_count
        }
    }
}

/// Last observed pointer position plus the fixed interaction radius.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    /// `None` until the first pointer move is seen.
    pub position: Option<DVec2>,
    pub radius: f64,
}

/// The particle backdrop: bounds, particles, pointer and the RNG used to
/// (re)populate them.
pub struct ParticleField {
    config: FieldConfig,
    bounds: Bounds,
    particles: Vec<Particle>,
    pointer: PointerState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self::with_particles(config, width, height, Vec::new(), seed);
        field.regenerate();
        field
    }

    /// Build a field around an explicit particle set. The RNG is only used
    /// by later resizes.
    pub fn with_particles(
        config: FieldConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
        seed: u64,
    ) -> Self {
        let pointer = PointerState {
            position: None,
            radius: config.pointer_radius,
        };
        Self {
            config,
            bounds: Bounds::new(width, height),
            particles,
            pointer,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Adopt new surface dimensions and rebuild the whole particle set.
    pub fn handle_resize(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
        self.regenerate();
        log::debug!(
            "[field] resized to {:.0}x{:.0}, {} particles",
            self.bounds.width,
            self.bounds.height,
            self.particles.len()
        );
    }

    /// Record the pointer. Drawing waits for the next tick.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.position = Some(DVec2::new(x, y));
    }

    /// One frame: clear, then per particle move, draw, connect to the
    /// particles after it and get pushed by the pointer.
    ///
    /// A drawing error does not cut the frame short: every particle still
    /// moves, and the first error is returned once the frame is done.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> anyhow::Result<()> {
        let bounds = self.bounds;
        let cfg = &self.config;
        let mut first_err = None;
        keep_first(&mut first_err, surface.clear(bounds.width, bounds.height));

        for i in 0..self.particles.len() {
            self.particles[i].advance(bounds);
            let p = self.particles[i];
            keep_first(
                &mut first_err,
                surface.fill_circle(p.position, p.radius, p.color),
            );

            for other in &self.particles[i + 1..] {
                let distance = p.position.distance(other.position);
                if let Some(alpha) =
                    connection_alpha(distance, cfg.connection_distance, cfg.connection_alpha_max)
                {
                    keep_first(
                        &mut first_err,
                        surface.stroke_line(
                            p.position,
                            other.position,
                            cfg.connection_color.with_alpha(alpha),
                            cfg.connection_line_width,
                        ),
                    );
                }
            }

            if let Some(pointer) = self.pointer.position {
                self.particles[i].repel_from(
                    pointer,
                    self.pointer.radius,
                    cfg.repel_step,
                    cfg.edge_margin_radii,
                    bounds,
                );
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn regenerate(&mut self) {
        let count = self.config.target_count(self.bounds.width);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(spawn(&mut self.rng, &self.config, self.bounds));
        }
        self.particles = particles;
    }
}

#[inline]
fn keep_first(slot: &mut Option<anyhow::Error>, result: anyhow::Result<()>) {
    if let Err(e) = result {
        slot.get_or_insert(e);
    }
}

fn spawn<R: Rng + ?Sized>(rng: &mut R, cfg: &FieldConfig, bounds: Bounds) -> Particle {
    let radius = rng.gen::<f64>() * cfg.radius_span + cfg.radius_min;
    let position = DVec2::new(
        rng.gen::<f64>() * bounds.width,
        rng.gen::<f64>() * bounds.height,
    );
    let velocity = DVec2::new(
        rng.gen::<f64>() * 2.0 * cfg.speed_max - cfg.speed_max,
        rng.gen::<f64>() * 2.0 * cfg.speed_max - cfg.speed_max,
    );
    Particle::new(position, velocity, radius, cfg.particle_color)
}
