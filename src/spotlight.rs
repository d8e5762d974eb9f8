use crate::constants::*;
use crate::core::spotlight::{
    self, PulseSpotlightOptions, SpotlightOptions, StaticSpotlightOptions,
};
use crate::core::{FrameOutcome, Spotlight};
use crate::events::EventListener;
use crate::frame::{self, FrameLoop};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A glow that follows the mouse inside one container.
///
/// Owns its listeners and frame loop; dropping it removes the glow.
pub struct SpotlightEffect {
    glow: web::HtmlElement,
    _listeners: Vec<EventListener>,
    _frame_loop: FrameLoop,
}

impl SpotlightEffect {
    /// Returns `Ok(None)` when `selector` matches nothing.
    pub fn install(
        window: &web::Window,
        document: &web::Document,
        selector: &str,
        opts: SpotlightOptions,
    ) -> anyhow::Result<Option<Self>> {
        let Some(container) = find_container(document, selector)? else {
            return Ok(None);
        };
        let glow = insert_glow(
            document,
            &container,
            SPOTLIGHT_CLASS,
            &spotlight::interactive_style(&opts),
        )?;
        let state = Rc::new(RefCell::new(Spotlight::new(opts.easing)));

        let state_move = state.clone();
        let container_move = container.clone();
        let on_move = EventListener::attach(&container, "mousemove", move |ev: web::Event| {
            let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = container_move.get_bounding_client_rect();
            state_move.borrow_mut().pointer_moved(
                mouse.client_x() as f64 - rect.left(),
                mouse.client_y() as f64 - rect.top(),
            );
        })?;

        let state_enter = state.clone();
        let glow_enter = glow.clone();
        let opacity = opts.opacity.to_string();
        let on_enter = EventListener::attach(&container, "mouseenter", move |_| {
            state_enter.borrow_mut().set_visible(true);
            _ = glow_enter.style().set_property("opacity", &opacity);
        })?;

        let state_leave = state.clone();
        let glow_leave = glow.clone();
        let on_leave = EventListener::attach(&container, "mouseleave", move |_| {
            state_leave.borrow_mut().set_visible(false);
            _ = glow_leave.style().set_property("opacity", "0");
        })?;

        let glow_frame = glow.clone();
        let size = opts.size;
        let frame_loop = frame::start_loop(window, move |_| {
            let mut spot = state.borrow_mut();
            if spot.step() {
                let corner = spot.top_left(size);
                let style = glow_frame.style();
                _ = style.set_property("left", &format!("{}px", corner.x));
                _ = style.set_property("top", &format!("{}px", corner.y));
            }
            FrameOutcome::Continue
        })?;

        log::debug!("[spotlight] following pointer in {}", selector);
        Ok(Some(Self {
            glow,
            _listeners: vec![on_move, on_enter, on_leave],
            _frame_loop: frame_loop,
        }))
    }
}

impl Drop for SpotlightEffect {
    fn drop(&mut self) {
        self.glow.remove();
    }
}

/// Fixed, non-interactive glow. Returns whether `selector` matched.
pub fn install_static(
    document: &web::Document,
    selector: &str,
    opts: &StaticSpotlightOptions,
) -> anyhow::Result<bool> {
    let Some(container) = find_container(document, selector)? else {
        return Ok(false);
    };
    insert_glow(document, &container, STATIC_SPOTLIGHT_CLASS, &spotlight::static_style(opts))?;
    Ok(true)
}

/// Centered glow on a CSS pulse animation. Returns whether `selector`
/// matched.
pub fn install_pulse(
    document: &web::Document,
    selector: &str,
    opts: &PulseSpotlightOptions,
) -> anyhow::Result<bool> {
    let Some(container) = find_container(document, selector)? else {
        return Ok(false);
    };
    ensure_pulse_keyframes(document)?;
    insert_glow(
        document,
        &container,
        PULSE_SPOTLIGHT_CLASS,
        &spotlight::pulse_style(opts, PULSE_ANIMATION),
    )?;
    Ok(true)
}

/// Install every configured glow whose container is on the page. The
/// interactive ones are returned and must be kept alive.
pub fn install_all(window: &web::Window, document: &web::Document) -> Vec<SpotlightEffect> {
    let mut effects = Vec::new();
    for (selector, opts) in INTERACTIVE_SPOTLIGHTS {
        match SpotlightEffect::install(window, document, selector, opts) {
            Ok(Some(effect)) => effects.push(effect),
            Ok(None) => log::debug!("[spotlight] no {} on this page", selector),
            Err(e) => log::warn!("[spotlight] {} not installed: {:?}", selector, e),
        }
    }
    for (selector, opts) in &STATIC_SPOTLIGHTS {
        if let Err(e) = install_static(document, selector, opts) {
            log::warn!("[spotlight] {} not installed: {:?}", selector, e);
        }
    }
    for (selector, opts) in &PULSE_SPOTLIGHTS {
        if let Err(e) = install_pulse(document, selector, opts) {
            log::warn!("[spotlight] {} not installed: {:?}", selector, e);
        }
    }
    effects
}

fn find_container(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Option<web::HtmlElement>> {
    let found = document
        .query_selector(selector)
        .map_err(|e| anyhow!("query {}: {:?}", selector, e))?;
    Ok(found.and_then(|el| el.dyn_into::<web::HtmlElement>().ok()))
}

/// Make `container` a positioning context and insert a glow div as its
/// first child.
fn insert_glow(
    document: &web::Document,
    container: &web::HtmlElement,
    class: &str,
    style: &str,
) -> anyhow::Result<web::HtmlElement> {
    let glow = document
        .create_element("div")
        .map_err(|e| anyhow!("create glow: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("glow is not an HtmlElement"))?;
    glow.set_class_name(class);
    glow.set_attribute("style", style)
        .map_err(|e| anyhow!("style glow: {:?}", e))?;
    container
        .style()
        .set_property("position", "relative")
        .map_err(|e| anyhow!("position container: {:?}", e))?;
    container
        .insert_before(&glow, container.first_child().as_ref())
        .map_err(|e| anyhow!("insert glow: {:?}", e))?;
    Ok(glow)
}

fn ensure_pulse_keyframes(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(PULSE_KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| anyhow!("no <head>"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("create keyframes: {:?}", e))?;
    style.set_id(PULSE_KEYFRAMES_ID);
    style.set_text_content(Some(PULSE_KEYFRAMES_CSS));
    head.append_child(&style)
        .map_err(|e| anyhow!("append keyframes: {:?}", e))?;
    Ok(())
}
