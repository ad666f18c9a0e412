//! Header "scrolled" state.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::dom::{Element, Scheduler};
use crate::util::frame_throttle::FrameThrottle;

pub const SCROLLED_CLASS: &str = "scrolled";

/// Exclusive: an offset equal to the threshold is not scrolled.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Clone)]
pub struct HeaderScroll<E: Element> {
    header: E,
    threshold: f64,
}

impl<E: Element> HeaderScroll<E> {
    pub fn new(header: E, threshold: f64) -> Self {
        Self { header, threshold }
    }

    /// Set the class for `offset`.
    pub fn apply(&self, offset: f64) {
        self.header.set_class(SCROLLED_CLASS, is_scrolled(offset, self.threshold));
    }

    /// Handle a scroll event. The offset is read inside the frame callback so
    /// the coalesced update reflects the latest position.
    pub fn on_scroll<S, F>(&self, throttle: &FrameThrottle<S>, read_offset: F) -> bool
    where
        S: Scheduler,
        F: FnOnce() -> f64 + 'static,
    {
        let header = self.clone();
        throttle.schedule(move || header.apply(read_offset()))
    }
}

/// Apply the initial state and follow window scroll.
#[cfg(feature = "hydrate")]
pub fn install(config: &crate::config::HeaderConfig) {
    use crate::dom::web::{self, WebScheduler};

    let Some(header) = web::query(&config.selector) else {
        log::debug!("header {:?} not found, skipping scroll state", config.selector);
        return;
    };
    let Some(window) = web::window() else {
        return;
    };

    let controller = HeaderScroll::new(header, config.scrolled_threshold);
    controller.apply(web::scroll_offset());

    let throttle = FrameThrottle::new(WebScheduler);
    web::listen(window.as_ref(), "scroll", move |_: web_sys::Event| {
        controller.on_scroll(&throttle, web::scroll_offset);
    });
}
