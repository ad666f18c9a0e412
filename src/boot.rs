//! Browser entry points.
//!
//! `boot` runs when the WASM module is instantiated: it sets up logging and
//! the panic hook, loads the config, applies the stored theme right away, and
//! defers the DOM controllers until the document has been parsed.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::controllers::{header, menu, newsletter, reservation, reveal, smooth_scroll};
use crate::dom::web;
use crate::util::preferences::LocalStorage;
use crate::util::theme;

thread_local! {
    static CONFIG: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

/// Install every DOM controller. Each one silently stands down when its
/// markup is missing.
fn install_controllers(config: &SiteConfig) {
    menu::install(&config.menu);
    smooth_scroll::install(&config.header.selector);
    header::install(&config.header);
    newsletter::install(config);
    reservation::install(config);
    reveal::install(&config.reveal);
    log::info!("site behavior ready");
}

#[wasm_bindgen(start)]
pub fn boot() {
    init_logging();

    let config = SiteConfig::load();
    if let Some(root) = web::document_element() {
        if let Some(applied) = theme::init_theme(&LocalStorage, &config.theme.storage_key, &root) {
            log::debug!("applied stored theme {}", applied.as_str());
        }
    }
    CONFIG.with(|slot| *slot.borrow_mut() = config);

    let Some(doc) = web::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        web::listen(doc.as_ref(), "DOMContentLoaded", |_: web_sys::Event| {
            CONFIG.with(|slot| install_controllers(&slot.borrow()));
        });
    } else {
        CONFIG.with(|slot| install_controllers(&slot.borrow()));
    }
}

/// Flip between the light and dark themes and persist the choice. Returns the
/// new theme name. Not bound to any control on the stock page.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    let root = web::document_element()?;
    let key = CONFIG.with(|slot| slot.borrow().theme.storage_key.clone());
    Some(theme::toggle_theme(&LocalStorage, &key, &root).as_str().to_owned())
}
