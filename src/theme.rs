use crate::constants::{
    DARK_MODE_CLASS, THEME_STORAGE_KEY, THEME_TOGGLE_CLASS, THEME_TOGGLE_HTML, THEME_TOGGLE_LABEL,
};
use crate::core::Theme;
use crate::dom;
use anyhow::anyhow;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    match web::window()?.local_storage() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[theme] localStorage unavailable: {:?}", e);
            None
        }
    }
}

pub fn stored_theme() -> Theme {
    let value = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(value.as_deref())
}

fn persist(theme: Theme) {
    if let Some(s) = storage() {
        if let Err(e) = s.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] could not save preference: {:?}", e);
        }
    }
}

#[inline]
pub fn current(body: &web::HtmlElement) -> Theme {
    if body.class_list().contains(DARK_MODE_CLASS) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[inline]
pub fn apply(body: &web::HtmlElement, theme: Theme) {
    let cl = body.class_list();
    _ = if theme.is_dark() {
        cl.add_1(DARK_MODE_CLASS)
    } else {
        cl.remove_1(DARK_MODE_CLASS)
    };
}

/// Apply the saved theme and append the light/dark toggle button to
/// `<body>`. Each click flips the theme and saves it.
pub fn wire_theme_toggle(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow!("document has no <body>"))?;
    let saved = stored_theme();
    if saved.is_dark() {
        apply(&body, saved);
    }

    let button = document
        .create_element("button")
        .map_err(|e| anyhow!("create toggle: {:?}", e))?;
    button.set_class_name(THEME_TOGGLE_CLASS);
    button
        .set_attribute("aria-label", THEME_TOGGLE_LABEL)
        .map_err(|e| anyhow!("toggle label: {:?}", e))?;
    button.set_inner_html(THEME_TOGGLE_HTML);
    body.append_child(&button)
        .map_err(|e| anyhow!("append toggle: {:?}", e))?;

    let body_click = body.clone();
    dom::add_click_listener(&button, move || {
        let next = current(&body_click).toggled();
        apply(&body_click, next);
        persist(next);
        log::info!("[theme] switched to {}", next);
    });
    Ok(())
}
