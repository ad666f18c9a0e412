//! Inline, self-expiring form feedback.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::dom::{Element, Scheduler};

/// Class carried by every inline message; used to find and replace it.
pub const MESSAGE_CLASS: &str = "form-message";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn palette(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("#d4edda", "#155724"),
            Self::Error => ("#f8d7da", "#721c24"),
        }
    }
}

/// Shows at most one message per form and removes it after `ttl_ms`.
#[derive(Clone)]
pub struct MessagePresenter<S: Scheduler> {
    scheduler: S,
    ttl_ms: u32,
}

impl<S: Scheduler> MessagePresenter<S> {
    pub fn new(scheduler: S, ttl_ms: u32) -> Self {
        Self { scheduler, ttl_ms }
    }

    /// Replace any message inside `form` with `text` and schedule its removal.
    ///
    /// The removal timer is never cancelled. If a newer message replaced this
    /// one first, the timer removes an already-detached node, which is a
    /// no-op.
    pub fn show<E: Element>(&self, form: &E, text: &str, severity: Severity) -> Option<E> {
        if let Some(existing) = form.find(&format!(".{MESSAGE_CLASS}")) {
            existing.remove();
        }

        let Some(message) = form.append_element("div") else {
            log::warn!("could not create form message {text:?}");
            return None;
        };
        message.add_class(MESSAGE_CLASS);
        message.add_class(&format!("{MESSAGE_CLASS}--{}", severity.as_str()));
        message.set_attribute("role", if severity == Severity::Error { "alert" } else { "status" });
        message.set_text(text);

        let (background, color) = severity.palette();
        message.set_style("margin-top", "1rem");
        message.set_style("padding", "0.75rem 1rem");
        message.set_style("border-radius", "8px");
        message.set_style("font-size", "0.9rem");
        message.set_style("background", background);
        message.set_style("color", color);

        let expiring = message.clone();
        self.scheduler.after(self.ttl_ms, Box::new(move || expiring.remove()));
        Some(message)
    }
}
