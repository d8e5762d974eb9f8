// Test surfaces shared by the integration tests.

#![allow(dead_code)]

use glam::DVec2;
use site_backdrop::core::{Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Rgba,
        width: f64,
    },
}

/// Records every draw call in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub size: Option<(f64, f64)>,
}

impl RecordingSurface {
    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear { .. }))
            .count()
    }

    pub fn circles(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .collect()
    }

    pub fn lines(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: f64, height: f64) {
        self.size = Some((width, height));
    }

    fn clear(&mut self, width: f64, height: f64) -> anyhow::Result<()> {
        self.calls.push(DrawCall::Clear { width, height });
        Ok(())
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) -> anyhow::Result<()> {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: DVec2,
        to: DVec2,
        color: Rgba,
        line_width: f64,
    ) -> anyhow::Result<()> {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            width: line_width,
        });
        Ok(())
    }
}

/// Fails `clear` for the first `failures_left` frames, then behaves.
pub struct FailingSurface {
    pub failures_left: u32,
    pub successful_clears: u32,
}

impl FailingSurface {
    pub fn new(failures: u32) -> Self {
        Self {
            failures_left: failures,
            successful_clears: 0,
        }
    }
}

impl Surface for FailingSurface {
    fn set_size(&mut self, _width: f64, _height: f64) {}

    fn clear(&mut self, _width: f64, _height: f64) -> anyhow::Result<()> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            anyhow::bail!("context lost");
        }
        self.successful_clears += 1;
        Ok(())
    }

    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Rgba) -> anyhow::Result<()> {
        Ok(())
    }

    fn stroke_line(
        &mut self,
        _from: DVec2,
        _to: DVec2,
        _color: Rgba,
        _line_width: f64,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Counts every draw call and fails the `fail_at`-th circle (0-based).
pub struct FlakyCircleSurface {
    pub fail_at: usize,
    pub circles: usize,
    pub lines: usize,
}

impl FlakyCircleSurface {
    pub fn new(fail_at: usize) -> Self {
        Self {
            fail_at,
            circles: 0,
            lines: 0,
        }
    }
}

impl Surface for FlakyCircleSurface {
    fn set_size(&mut self, _width: f64, _height: f64) {}

    fn clear(&mut self, _width: f64, _height: f64) -> anyhow::Result<()> {
        Ok(())
    }

    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Rgba) -> anyhow::Result<()> {
        let n = self.circles;
        self.circles += 1;
        if n == self.fail_at {
            anyhow::bail!("circle {n} failed");
        }
        Ok(())
    }

    fn stroke_line(
        &mut self,
        _from: DVec2,
        _to: DVec2,
        _color: Rgba,
        _line_width: f64,
    ) -> anyhow::Result<()> {
        self.lines += 1;
        if self.lines == 1 {
            anyhow::bail!("line failed");
        }
        Ok(())
    }
}

pub fn particle(x: f64, y: f64, vx: f64, vy: f64) -> site_backdrop::core::Particle {
    site_backdrop::core::Particle::new(
        DVec2::new(x, y),
        DVec2::new(vx, vy),
        2.0,
        Rgba::new(124, 92, 255, 0.4),
    )
}
