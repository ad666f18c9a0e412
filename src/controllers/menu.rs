//! Mobile navigation toggle.
//!
//! Open state is mirrored three ways: an `active` class on the toggle and on
//! the panel, `aria-expanded` on the toggle, and `overflow: hidden` on the
//! body to freeze page scroll while the menu covers it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::Element;
use crate::state::menu::MenuState;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone)]
pub struct MobileMenu<E: Element> {
    toggle: E,
    panel: E,
    body: Option<E>,
    state: Rc<Cell<MenuState>>,
}

impl<E: Element> MobileMenu<E> {
    /// `None` when the toggle or the panel is missing from the page.
    pub fn new(toggle: Option<E>, panel: Option<E>, body: Option<E>) -> Option<Self> {
        Some(Self { toggle: toggle?, panel: panel?, body, state: Rc::new(Cell::new(MenuState::default())) })
    }

    pub fn is_open(&self) -> bool {
        self.state.get().open
    }

    pub fn toggle(&self) {
        let mut state = self.state.get();
        state.toggle();
        self.render(state);
    }

    /// Force the menu closed. Safe to call when already closed.
    pub fn close(&self) {
        let mut state = self.state.get();
        state.close();
        self.render(state);
    }

    /// Close on Escape while open. Returns `true` when the key was handled.
    pub fn handle_key(&self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    fn render(&self, state: MenuState) {
        self.state.set(state);
        self.toggle.set_class(ACTIVE_CLASS, state.open);
        self.panel.set_class(ACTIVE_CLASS, state.open);
        self.toggle.set_attribute("aria-expanded", state.aria_expanded());
        if let Some(body) = &self.body {
            if state.open {
                body.set_style("overflow", "hidden");
            } else {
                body.clear_style("overflow");
            }
        }
    }
}

/// Wire the menu to the page. No-op when the markup is absent.
#[cfg(feature = "hydrate")]
pub fn install(config: &crate::config::MenuConfig) {
    use crate::dom::web;

    let Some(menu) = MobileMenu::new(
        web::query(&config.toggle_selector),
        web::query(&config.panel_selector),
        web::body(),
    ) else {
        log::debug!("mobile menu markup not found, skipping");
        return;
    };

    let on_toggle = menu.clone();
    web::listen(menu.toggle.as_target(), "click", move |_: web_sys::Event| on_toggle.toggle());

    for link in web::query_all(&config.link_selector) {
        let on_link = menu.clone();
        web::listen(link.as_target(), "click", move |_: web_sys::Event| on_link.close());
    }

    if let Some(doc) = web::document() {
        let on_key = menu.clone();
        web::listen(doc.as_ref(), "keydown", move |ev: web_sys::KeyboardEvent| {
            on_key.handle_key(&ev.key());
        });
    }
    log::debug!("mobile menu installed");
}
