//! One-shot scroll reveal for cards and sections.
//!
//! Elements start faded and offset, and settle into place the first time the
//! viewport watcher reports them intersecting. Revealed elements are
//! unwatched, so scrolling away never hides them again. When the user prefers
//! reduced motion nothing is styled and no watcher is created.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::Element;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(30px)";
const SHOWN_OPACITY: &str = "1";
const SHOWN_TRANSFORM: &str = "translateY(0)";
const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Options handed to the platform intersection watcher.
#[derive(Clone, Debug, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl From<&crate::config::RevealConfig> for WatchOptions {
    fn from(cfg: &crate::config::RevealConfig) -> Self {
        Self { threshold: cfg.threshold, root_margin: cfg.root_margin.clone() }
    }
}

/// A single intersection report.
#[derive(Clone, Debug)]
pub struct IntersectionEntry<E> {
    pub element: E,
    pub is_intersecting: bool,
}

/// The platform's viewport-intersection primitive.
pub trait ViewportWatcher<E> {
    fn observe(&self, element: &E);
    fn unobserve(&self, element: &E);
}

/// Tracks which elements have already been revealed.
pub struct RevealTracker<E: Element> {
    revealed: RefCell<Vec<E>>,
}

impl<E: Element> Default for RevealTracker<E> {
    fn default() -> Self {
        Self { revealed: RefCell::new(Vec::new()) }
    }
}

impl<E: Element> RevealTracker<E> {
    /// Put `element` in its hidden starting state.
    pub fn prepare(element: &E) {
        element.set_style("opacity", HIDDEN_OPACITY);
        element.set_style("transform", HIDDEN_TRANSFORM);
        element.set_style("transition", TRANSITION);
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.borrow().len()
    }

    pub fn is_revealed(&self, element: &E) -> bool {
        self.revealed.borrow().contains(element)
    }

    /// Reveal every newly intersecting element and stop watching it.
    /// Returns how many elements were revealed by this batch.
    pub fn on_entries<W: ViewportWatcher<E>>(&self, entries: &[IntersectionEntry<E>], watcher: &W) -> usize {
        let mut count = 0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if self.is_revealed(&entry.element) {
                continue;
            }
            entry.element.set_style("opacity", SHOWN_OPACITY);
            entry.element.set_style("transform", SHOWN_TRANSFORM);
            watcher.unobserve(&entry.element);
            self.revealed.borrow_mut().push(entry.element.clone());
            count += 1;
        }
        count
    }
}

/// Prepare `elements` and start watching them through a watcher built by
/// `make_watcher`. Returns `None` (and touches nothing) under reduced motion
/// or when there is nothing to reveal.
pub fn install_reveal<E, W, F>(
    reduced_motion: bool,
    elements: &[E],
    options: &WatchOptions,
    make_watcher: F,
) -> Option<(Rc<RevealTracker<E>>, W)>
where
    E: Element,
    W: ViewportWatcher<E>,
    F: FnOnce(&WatchOptions, Rc<RevealTracker<E>>) -> Option<W>,
{
    if reduced_motion {
        log::debug!("reduced motion requested, scroll reveal disabled");
        return None;
    }
    if elements.is_empty() {
        return None;
    }

    let tracker = Rc::new(RevealTracker::default());
    let watcher = make_watcher(options, Rc::clone(&tracker))?;
    for element in elements {
        RevealTracker::prepare(element);
        watcher.observe(element);
    }
    Some((tracker, watcher))
}

#[cfg(feature = "hydrate")]
mod web_watcher {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{IntersectionEntry, RevealTracker, ViewportWatcher, WatchOptions};
    use crate::dom::web::{WebElement, warn_on_err};

    pub struct WebWatcher(pub IntersectionObserver);

    impl ViewportWatcher<WebElement> for WebWatcher {
        fn observe(&self, element: &WebElement) {
            self.0.observe(&element.0);
        }

        fn unobserve(&self, element: &WebElement) {
            self.0.unobserve(&element.0);
        }
    }

    fn entries_from(raw: &js_sys::Array) -> Vec<IntersectionEntry<WebElement>> {
        raw.iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let element = entry.target().dyn_into::<HtmlElement>().ok()?;
                Some(IntersectionEntry { element: WebElement(element), is_intersecting: entry.is_intersecting() })
            })
            .collect()
    }

    /// Build an `IntersectionObserver` that feeds `tracker`.
    pub fn build(options: &WatchOptions, tracker: Rc<RevealTracker<WebElement>>) -> Option<WebWatcher> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |raw: js_sys::Array, observer: IntersectionObserver| {
                let watcher = WebWatcher(observer);
                tracker.on_entries(&entries_from(&raw), &watcher);
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer = warn_on_err(
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
            "new IntersectionObserver",
        )?;
        callback.forget();
        Some(WebWatcher(observer))
    }
}

/// Start scroll reveal for the configured element set.
#[cfg(feature = "hydrate")]
pub fn install(config: &crate::config::RevealConfig) {
    use crate::dom::web;

    let reduced_motion = web::media_matches(REDUCED_MOTION_QUERY);
    let elements = web::query_all(&config.selectors.join(", "));
    let options = WatchOptions::from(config);
    match install_reveal(reduced_motion, &elements, &options, web_watcher::build) {
        Some((_, _watcher)) => log::debug!("scroll reveal watching {} elements", elements.len()),
        None => log::debug!("scroll reveal not started"),
    }
}
