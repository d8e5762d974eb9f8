use crate::constants::FPS_LOG_INTERVAL_MS;
use crate::core::field::ParticleField;
use crate::core::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame.
    Continue,
    /// The driver was stopped; do not reschedule.
    Stopped,
}

/// Counters kept across frames. Timestamps are whatever clock the frame
/// source hands in (rAF milliseconds on the web).
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub failed_frames: u64,
    pub last_timestamp_ms: Option<f64>,
    window_start_ms: Option<f64>,
    window_frames: u32,
}

impl FrameStats {
    /// Count a frame; returns the measured rate whenever a full logging
    /// window has elapsed.
    pub fn record(&mut self, timestamp_ms: f64) -> Option<f64> {
        self.frames += 1;
        self.last_timestamp_ms = Some(timestamp_ms);
        let start = *self.window_start_ms.get_or_insert(timestamp_ms);
        self.window_frames += 1;
        let elapsed = timestamp_ms - start;
        if elapsed >= FPS_LOG_INTERVAL_MS {
            let fps = self.window_frames as f64 * 1000.0 / elapsed;
            self.window_start_ms = Some(timestamp_ms);
            self.window_frames = 0;
            Some(fps)
        } else {
            None
        }
    }
}

/// Owns a field and the surface it draws to, and runs one tick per frame
/// handed in by the scheduler.
pub struct FrameDriver<S> {
    field: ParticleField,
    surface: S,
    stats: FrameStats,
    stopped: bool,
}

impl<S: Surface> FrameDriver<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self {
            field,
            surface,
            stats: FrameStats::default(),
            stopped: false,
        }
    }

    /// Run a single frame. A failing tick is logged and counted; the loop
    /// keeps going on the next frame.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> FrameOutcome {
        if self.stopped {
            return FrameOutcome::Stopped;
        }
        if let Some(fps) = self.stats.record(timestamp_ms) {
            log::debug!(
                "[frame] {:.1} fps, {} particles",
                fps,
                self.field.particles().len()
            );
        }
        if let Err(e) = self.field.tick(&mut self.surface) {
            self.stats.failed_frames += 1;
            log::warn!("[frame] tick {} failed: {:?}", self.stats.frames, e);
        }
        FrameOutcome::Continue
    }

    /// Resize the surface backing store, then regenerate the field.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.set_size(width, height);
        self.field.handle_resize(width, height);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.field.handle_pointer_move(x, y);
    }

    pub fn stop(&mut self) {
        if !self.stopped {
            log::info!(
                "[frame] stopped after {} frames ({} failed)",
                self.stats.frames,
                self.stats.failed_frames
            );
        }
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}
