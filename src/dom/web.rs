//! `web-sys` implementation of the DOM seam.
//!
//! Listener closures are leaked with `Closure::forget`: every controller is
//! installed once per page load and lives as long as the document.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::{Element, Scheduler};

/// Log a failed DOM call at `warn` and carry on.
pub fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{what} failed: {err:?}");
            None
        }
    }
}

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

/// Current vertical scroll offset of the window, `0.0` when unavailable.
pub fn scroll_offset() -> f64 {
    window()
        .and_then(|w| warn_on_err(w.page_y_offset(), "read pageYOffset"))
        .unwrap_or(0.0)
}

/// Whether `query` (a media query string) currently matches.
pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| warn_on_err(w.match_media(query), "matchMedia"))
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// First element in the document matching `selector`.
///
/// Invalid selectors are treated as "no match".
pub fn query(selector: &str) -> Option<WebElement> {
    let doc = document()?;
    match doc.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().map(WebElement).ok()),
        Err(_) => {
            log::debug!("selector {selector:?} is not valid");
            None
        }
    }
}

/// Every element in the document matching `selector`.
pub fn query_all(selector: &str) -> Vec<WebElement> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Some(list) = warn_on_err(doc.query_selector_all(selector), "querySelectorAll") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(WebElement)
        .collect()
}

pub fn element_by_id(id: &str) -> Option<WebElement> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(WebElement)
}

pub fn body() -> Option<WebElement> {
    document()?.body().map(WebElement)
}

pub fn document_element() -> Option<WebElement> {
    document()?
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(WebElement)
}

/// Attach a page-lifetime event listener.
pub fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let cb = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
        if let Ok(ev) = raw.dyn_into::<E>() {
            handler(ev);
        }
    });
    if warn_on_err(
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()),
        "addEventListener",
    )
    .is_some()
    {
        cb.forget();
    }
}

/// Browser element handle.
#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(pub HtmlElement);

impl WebElement {
    pub fn as_target(&self) -> &web_sys::EventTarget {
        self.0.as_ref()
    }

    /// Distance from the viewport top to this element's top edge.
    pub fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    pub fn offset_height(&self) -> f64 {
        f64::from(self.0.offset_height())
    }
}

impl Element for WebElement {
    fn add_class(&self, class: &str) {
        warn_on_err(self.0.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, class: &str) {
        warn_on_err(self.0.class_list().remove_1(class), "classList.remove");
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        warn_on_err(self.0.set_attribute(name, value), "setAttribute");
    }

    fn style(&self, property: &str) -> Option<String> {
        warn_on_err(self.0.style().get_property_value(property), "style.getPropertyValue")
            .filter(|v| !v.is_empty())
    }

    fn set_style(&self, property: &str, value: &str) {
        warn_on_err(self.0.style().set_property(property, value), "style.setProperty");
    }

    fn clear_style(&self, property: &str) {
        warn_on_err(self.0.style().remove_property(property), "style.removeProperty");
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn value(&self) -> String {
        self.0
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn is_disabled(&self) -> bool {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            return button.disabled();
        }
        self.0.has_attribute("disabled")
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            self.set_attribute("disabled", "");
        } else {
            warn_on_err(self.0.remove_attribute("disabled"), "removeAttribute");
        }
    }

    fn find(&self, selector: &str) -> Option<Self> {
        match self.0.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().map(WebElement).ok()),
            Err(_) => None,
        }
    }

    fn append_element(&self, tag: &str) -> Option<Self> {
        let doc = document()?;
        let el = warn_on_err(doc.create_element(tag), "createElement")?;
        let el = el.dyn_into::<HtmlElement>().ok()?;
        warn_on_err(self.0.append_child(&el), "appendChild")?;
        Some(WebElement(el))
    }

    fn remove(&self) {
        self.0.remove();
    }
}

/// Scheduler backed by `setTimeout` and `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, callback).forget();
    }

    fn next_frame(&self, callback: Box<dyn FnOnce()>) {
        let Some(window) = window() else {
            callback();
            return;
        };
        let slot = Rc::new(RefCell::new(Some(callback)));
        let slot_for_cb = Rc::clone(&slot);
        let cb = Closure::once_into_js(move |_ts: f64| {
            if let Some(callback) = slot_for_cb.borrow_mut().take() {
                callback();
            }
        });
        if window.request_animation_frame(cb.unchecked_ref()).is_err() {
            log::warn!("requestAnimationFrame unavailable, running frame work inline");
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }
    }
}
