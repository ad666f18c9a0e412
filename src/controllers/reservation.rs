//! Reservation request form.
//!
//! With the simulated transport this is a visual overlay only: the native
//! submission is left alone and the success panel replaces the form once the
//! simulated delay elapses. With a real transport the controller owns the
//! request, suppresses native submission, and reports failures inline.

#[cfg(test)]
#[path = "reservation_test.rs"]
mod reservation_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::controllers::messages::{MessagePresenter, Severity};
use crate::dom::{Element, Scheduler};
use crate::net::submit::{Submission, Submitter};
use crate::state::form::{FormEvent, FormMachine, FormPhase};

pub const FAILURE_MESSAGE: &str = "We couldn't send your reservation. Please try again or call us.";

pub struct ReservationForm<E: Element, S: Scheduler, T: Submitter> {
    form: E,
    success: E,
    button: Option<E>,
    pending_label: String,
    messages: MessagePresenter<S>,
    submitter: Rc<T>,
    machine: Cell<FormMachine>,
}

impl<E: Element, S: Scheduler, T: Submitter> ReservationForm<E, S, T> {
    /// `None` when the form or its success panel is missing.
    pub fn new(
        form: Option<E>,
        success: Option<E>,
        pending_label: &str,
        messages: MessagePresenter<S>,
        submitter: Rc<T>,
        button_selector: &str,
    ) -> Option<Self> {
        let form = form?;
        let button = form.find(button_selector);
        Some(Self {
            form,
            success: success?,
            button,
            pending_label: pending_label.to_owned(),
            messages,
            submitter,
            machine: Cell::new(FormMachine::default()),
        })
    }

    pub fn phase(&self) -> FormPhase {
        self.machine.get().phase()
    }

    /// Whether the browser's own submission must be cancelled.
    pub fn intercepts_native_submit(&self) -> bool {
        self.submitter.replaces_native_submit()
    }

    fn fire(&self, event: FormEvent) -> bool {
        let mut machine = self.machine.get();
        let applied = machine.apply(event);
        self.machine.set(machine);
        applied
    }

    /// Run one submission and return the phase it settled in. Field
    /// validation is left to the browser's native constraint checks, which
    /// run before the submit event fires.
    pub async fn submit(&self, submission: Submission) -> FormPhase {
        if !self.fire(FormEvent::Submit) {
            return self.phase();
        }
        self.fire(FormEvent::ValidationPassed);

        let original_label = self.button.as_ref().map(E::text);
        if let Some(button) = &self.button {
            button.set_disabled(true);
            button.set_text(&self.pending_label);
        }

        let settled = match self.submitter.submit(&submission).await {
            Ok(()) => {
                self.fire(FormEvent::Succeeded);
                self.form.set_style("display", "none");
                self.success.set_style("display", "block");
                FormPhase::Succeeded
            }
            Err(err) => {
                log::warn!("reservation request failed: {err}");
                self.fire(FormEvent::Failed);
                if let (Some(button), Some(label)) = (&self.button, original_label) {
                    button.set_disabled(false);
                    button.set_text(&label);
                }
                self.messages.show(&self.form, FAILURE_MESSAGE, Severity::Error);
                FormPhase::Failed
            }
        };
        self.fire(FormEvent::Reset);
        settled
    }
}

/// Collect `name=value` pairs from a form element. File inputs are skipped.
#[cfg(feature = "hydrate")]
fn form_fields(form: &web_sys::HtmlElement) -> Vec<(String, String)> {
    use wasm_bindgen::JsCast;

    let Some(form) = form.dyn_ref::<web_sys::HtmlFormElement>() else {
        return Vec::new();
    };
    let Some(data) = crate::dom::web::warn_on_err(web_sys::FormData::new_with_form(form), "new FormData") else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// Wire the reservation form. No-op when the form or success panel is absent.
#[cfg(feature = "hydrate")]
pub fn install(config: &crate::config::SiteConfig) {
    use crate::dom::web::{self, WebScheduler};
    use crate::net::submit::ConfiguredSubmitter;

    let cfg = &config.reservation;
    let form_el = web::element_by_id(&cfg.form_id);
    let Some(controller) = ReservationForm::new(
        form_el.clone(),
        web::element_by_id(&cfg.success_id),
        &cfg.pending_label,
        MessagePresenter::new(WebScheduler, config.messages.ttl_ms),
        Rc::new(ConfiguredSubmitter::from_config(&config.transport, WebScheduler, cfg.simulated_delay_ms)),
        &cfg.button_selector,
    ) else {
        log::debug!("reservation form markup not found, skipping");
        return;
    };
    let Some(form_el) = form_el else {
        return;
    };

    let controller = Rc::new(controller);
    let fields_from = form_el.0.clone();
    web::listen(form_el.as_target(), "submit", move |ev: web_sys::Event| {
        if controller.intercepts_native_submit() {
            ev.prevent_default();
        }
        let submission = Submission::reservation(form_fields(&fields_from));
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            let phase = controller.submit(submission).await;
            log::debug!("reservation submission settled as {phase:?}");
        });
    });
    log::debug!("reservation form installed");
}
