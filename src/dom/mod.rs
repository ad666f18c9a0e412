//! Minimal DOM seam used by every controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never talk to `web-sys` directly. They operate on the
//! [`Element`] and [`Scheduler`] traits so the same code runs against real
//! browser nodes (`web`, hydrate only) and against the in-memory tree used by
//! native unit tests (`fake`).

#[cfg(test)]
pub mod fake;
#[cfg(feature = "hydrate")]
pub mod web;

/// Handle to a single DOM element.
///
/// Handles are cheap to clone and compare by node identity. Every mutator is
/// infallible from the caller's point of view: operations against a detached
/// node, or failures reported by the platform, are absorbed by the
/// implementation.
pub trait Element: Clone + PartialEq + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` depending on `on`.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    /// Inline style value, `None` when unset or empty.
    fn style(&self, property: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);
    fn clear_style(&self, property: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Current value for form controls; empty for anything else.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);

    /// First descendant matching `selector`.
    fn find(&self, selector: &str) -> Option<Self>;

    /// Create a `<tag>` element and append it as the last child.
    fn append_element(&self, tag: &str) -> Option<Self>;

    /// Detach from the parent. No-op when already detached.
    fn remove(&self);
}

/// One-shot timers and animation-frame requests.
///
/// Callbacks are fire-and-forget: nothing can cancel them once scheduled.
pub trait Scheduler: Clone + 'static {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
    fn next_frame(&self, callback: Box<dyn FnOnce()>);
}
