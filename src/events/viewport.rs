use super::EventListener;
use crate::dom;
use crate::frame::SharedDriver;
use web_sys as web;

pub fn wire_resize(window: &web::Window, driver: SharedDriver) -> anyhow::Result<EventListener> {
    let window_resize = window.clone();
    EventListener::attach(window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::viewport_size(&window_resize);
        driver.borrow_mut().resize(w, h);
    })
}
