pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod background;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod spotlight;
#[cfg(target_arch = "wasm32")]
mod theme;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::background::ParticleBackground;
    use crate::core::wants_particle_field;
    use crate::spotlight::{self, SpotlightEffect};
    use crate::{dom, theme};
    use anyhow::anyhow;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    thread_local! {
        // At most one backdrop per page.
        static BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
        static SPOTLIGHTS: RefCell<Vec<SpotlightEffect>> = const { RefCell::new(Vec::new()) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("site-backdrop starting");

        let Some(document) = dom::window_document() else {
            log::warn!("no document; nothing to decorate");
            return Ok(());
        };
        let doc = document.clone();
        dom::on_ready(&document, move || {
            if let Err(e) = init(&doc) {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    fn init(document: &web::Document) -> anyhow::Result<()> {
        if document.body().is_none() {
            log::warn!("document has no <body>; skipping decorations");
            return Ok(());
        }
        if let Err(e) = theme::wire_theme_toggle(document) {
            log::warn!("[theme] toggle not installed: {:?}", e);
        }
        install_spotlights(document)?;
        let page = dom::page_id(document);
        if !wants_particle_field(page.as_deref()) {
            log::info!("[particles] page {:?} has no backdrop", page);
            return Ok(());
        }
        mount(document).map(|_| ())
    }

    fn install_spotlights(document: &web::Document) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        SPOTLIGHTS.with(|slot| {
            let mut slot = slot.borrow_mut();
            if !slot.is_empty() {
                return;
            }
            *slot = spotlight::install_all(&window, document);
            log::info!("[spotlight] {} interactive glows", slot.len());
        });
        Ok(())
    }

    fn mount(document: &web::Document) -> anyhow::Result<bool> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        BACKGROUND.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_some() {
                log::warn!("[particles] already running; ignoring second initialization");
                return Ok(false);
            }
            *slot = ParticleBackground::initialize(&window, document)?;
            Ok(slot.is_some())
        })
    }

    /// Start the backdrop regardless of page identity, for hosts that mount
    /// it as a component. Returns whether a new backdrop was started.
    #[wasm_bindgen]
    pub fn mount_particle_background() -> bool {
        let Some(document) = dom::window_document() else {
            log::warn!("no document; backdrop not mounted");
            return false;
        };
        match mount(&document) {
            Ok(started) => started,
            Err(e) => {
                log::error!("[particles] mount error: {:?}", e);
                false
            }
        }
    }

    /// Tear down the running backdrop, if any. Returns whether one was
    /// running.
    #[wasm_bindgen]
    pub fn stop_particle_background() -> bool {
        match BACKGROUND.with(|slot| slot.borrow_mut().take()) {
            Some(background) => {
                background.stop();
                log::info!("[particles] stopped");
                true
            }
            None => false,
        }
    }
}
