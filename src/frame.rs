use crate::core::{FrameDriver, FrameOutcome};
use crate::dom;
use crate::render::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub type SharedDriver = Rc<RefCell<FrameDriver<CanvasSurface>>>;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A running `requestAnimationFrame` chain. Dropping it cancels the pending
/// frame and releases the callback.
pub struct FrameLoop {
    window: web::Window,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

/// Call `on_frame` once per display frame until it returns
/// `FrameOutcome::Stopped` or the loop is dropped.
pub fn start_loop(
    window: &web::Window,
    mut on_frame: impl FnMut(f64) -> FrameOutcome + 'static,
) -> anyhow::Result<FrameLoop> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let callback_tick = callback.clone();
    let pending_tick = pending.clone();
    let window_tick = window.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        pending_tick.set(None);
        if on_frame(timestamp_ms) == FrameOutcome::Stopped {
            return;
        }
        // Rescheduling does not depend on the tick having succeeded.
        if let Some(cb) = callback_tick.borrow().as_ref() {
            match dom::request_frame(&window_tick, cb) {
                Ok(handle) => pending_tick.set(Some(handle)),
                Err(e) => log::error!("[frame] could not schedule next frame: {:?}", e),
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let frame_loop = FrameLoop {
        window: window.clone(),
        callback,
        pending,
    };
    let first = match frame_loop.callback.borrow().as_ref() {
        Some(cb) => Some(dom::request_frame(window, cb)),
        None => None,
    };
    // An error drops `frame_loop`, which releases the callback.
    if let Some(handle) = first.transpose()? {
        frame_loop.pending.set(Some(handle));
    }
    Ok(frame_loop)
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            dom::cancel_frame(&self.window, handle);
        }
        // Breaks the callback's reference to itself.
        self.callback.borrow_mut().take();
    }
}
