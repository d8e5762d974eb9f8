use super::EventListener;
use crate::frame::SharedDriver;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window `pointermove` client coordinates into the field. The canvas
/// covers the viewport, so client space is surface space.
pub fn wire_pointer_move(
    window: &web::Window,
    driver: SharedDriver,
) -> anyhow::Result<EventListener> {
    EventListener::attach(window, "pointermove", move |ev: web::Event| {
        let Some(pointer) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        driver
            .borrow_mut()
            .pointer_moved(pointer.client_x() as f64, pointer.client_y() as f64);
    })
}
