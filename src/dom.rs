use crate::constants::{CANVAS_ID, CANVAS_STYLE, PAGE_ATTRIBUTE};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::warn!("click listener error: {:?}", e);
    }
    closure.forget();
}

/// Run `f` once the DOM is parsed: immediately if it already is, otherwise
/// on `DOMContentLoaded`.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::warn!("DOMContentLoaded listener error: {:?}", e);
    }
}

/// `data-page` of `<body>`, if any.
pub fn page_id(document: &web::Document) -> Option<String> {
    document.body()?.get_attribute(PAGE_ATTRIBUTE)
}

/// Viewport size in CSS pixels; zero when the window cannot report it.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Create the fixed, click-through backdrop canvas. It is not attached yet.
pub fn create_background_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    canvas
        .set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow!("canvas style: {:?}", e))?;
    Ok(canvas)
}

/// Insert the canvas as the first child of `<body>` so it sits behind all
/// page content.
pub fn attach_as_first_child(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow!("document has no <body>"))?;
    body.prepend_with_node_1(canvas)
        .map_err(|e| anyhow!("prepend canvas: {:?}", e))
}

pub fn request_frame(
    window: &web::Window,
    callback: &Closure<dyn FnMut(f64)>,
) -> anyhow::Result<i32> {
    let f: &js_sys::Function = callback.as_ref().unchecked_ref();
    window
        .request_animation_frame(f)
        .map_err(|e| anyhow!("requestAnimationFrame: {:?}", e))
}

#[inline]
pub fn cancel_frame(window: &web::Window, handle: i32) {
    _ = window.cancel_animation_frame(handle);
}
