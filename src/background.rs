use crate::core::{FieldConfig, FrameDriver, ParticleField, Surface};
use crate::dom;
use crate::events::{self, EventListener};
use crate::frame::{self, FrameLoop, SharedDriver};
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Live particle backdrop on the current page.
///
/// Owns everything `initialize` registered; dropping it undoes all of it.
pub struct ParticleBackground {
    driver: SharedDriver,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<EventListener>,
}

impl ParticleBackground {
    /// Create the canvas, populate the field, hook up resize and pointer
    /// input, and start the frame loop.
    ///
    /// Returns `Ok(None)` when no 2D context is available; nothing is
    /// inserted into the page in that case.
    pub fn initialize(window: &web::Window, document: &web::Document) -> anyhow::Result<Option<Self>> {
        let canvas = dom::create_background_canvas(document)?;
        let Some(mut surface) = CanvasSurface::new(canvas) else {
            log::info!("[particles] 2d canvas unavailable; skipping");
            return Ok(None);
        };

        let (w, h) = dom::viewport_size(window);
        surface.set_size(w, h);
        let field = ParticleField::new(FieldConfig::default(), w, h, rand::random());
        let count = field.particles().len();
        let driver: SharedDriver = Rc::new(RefCell::new(FrameDriver::new(field, surface)));

        let listeners = vec![
            events::wire_resize(window, driver.clone())?,
            events::wire_pointer_move(window, driver.clone())?,
        ];
        let driver_frame = driver.clone();
        let frame_loop = frame::start_loop(window, move |timestamp_ms| {
            driver_frame.borrow_mut().on_frame(timestamp_ms)
        })?;
        let background = Self {
            driver,
            frame_loop: Some(frame_loop),
            listeners,
        };
        let canvas = background.driver.borrow().surface().canvas().clone();
        dom::attach_as_first_child(document, &canvas)?;

        log::info!("[particles] started {:.0}x{:.0} with {} particles", w, h, count);
        Ok(Some(background))
    }

    /// Stop the loop, deregister input and remove the canvas from the page.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.driver.borrow_mut().stop();
        self.frame_loop.take();
        self.listeners.clear();
        self.driver.borrow().surface().canvas().remove();
    }
}
