//! Newsletter signup forms.
//!
//! DESIGN
//! ======
//! Each form owns a [`FormMachine`]; the DOM (button label, disabled flag,
//! inline message, input value) is updated at each transition. Validation
//! short-circuits on the first failure and never reaches the transport.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::controllers::messages::{MessagePresenter, Severity};
use crate::dom::{Element, Scheduler};
use crate::net::submit::{Submission, Submitter};
use crate::state::form::{FormEvent, FormMachine, FormPhase};
use crate::util::email::is_valid_email;

pub const SUCCESS_MESSAGE: &str = "Thank you for subscribing! Check your inbox for confirmation.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email address.")]
    Empty,

    #[error("Please enter a valid email address.")]
    Malformed,
}

/// Trim and validate raw input. Emptiness is checked before shape.
///
/// # Errors
///
/// Returns the first failing check as a [`ValidationError`].
pub fn validate_email_input(raw: &str) -> Result<&str, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::Malformed);
    }
    Ok(email)
}

pub struct NewsletterForm<E: Element, S: Scheduler, T: Submitter> {
    form: E,
    input: E,
    button: Option<E>,
    pending_label: String,
    messages: MessagePresenter<S>,
    submitter: Rc<T>,
    machine: Cell<FormMachine>,
}

impl<E: Element, S: Scheduler, T: Submitter> NewsletterForm<E, S, T> {
    /// `None` when the form has no email input.
    pub fn new(
        form: E,
        input: Option<E>,
        button: Option<E>,
        pending_label: &str,
        messages: MessagePresenter<S>,
        submitter: Rc<T>,
    ) -> Option<Self> {
        Some(Self {
            form,
            input: input?,
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

    fn fire(&self, event: FormEvent) -> bool {
        let mut machine = self.machine.get();
        let applied = machine.apply(event);
        self.machine.set(machine);
        applied
    }

    /// Run one submission attempt and return the phase it settled in
    /// (`Invalid`, `Succeeded` or `Failed`). The form is back in `Idle` when
    /// this returns. A call while another attempt is in flight returns the
    /// current phase without doing anything.
    pub async fn submit(&self) -> FormPhase {
        if !self.fire(FormEvent::Submit) {
            return self.phase();
        }

        let raw = self.input.value();
        let email = match validate_email_input(&raw) {
            Ok(email) => email.to_owned(),
            Err(err) => {
                self.fire(FormEvent::ValidationFailed);
                self.messages.show(&self.form, &err.to_string(), Severity::Error);
                self.fire(FormEvent::Reset);
                return FormPhase::Invalid;
            }
        };
        self.fire(FormEvent::ValidationPassed);

        let original_label = self.button.as_ref().map(E::text);
        if let Some(button) = &self.button {
            button.set_disabled(true);
            button.set_text(&self.pending_label);
        }

        let settled = match self.submitter.submit(&Submission::newsletter(&email)).await {
            Ok(()) => {
                self.fire(FormEvent::Succeeded);
                self.messages.show(&self.form, SUCCESS_MESSAGE, Severity::Success);
                self.input.set_value("");
                FormPhase::Succeeded
            }
            Err(err) => {
                log::warn!("newsletter signup failed: {err}");
                self.fire(FormEvent::Failed);
                self.messages.show(&self.form, FAILURE_MESSAGE, Severity::Error);
                FormPhase::Failed
            }
        };

        if let (Some(button), Some(label)) = (&self.button, original_label) {
            button.set_disabled(false);
            button.set_text(&label);
        }
        self.fire(FormEvent::Reset);
        settled
    }
}

/// Wire every newsletter form on the page.
#[cfg(feature = "hydrate")]
pub fn install(config: &crate::config::SiteConfig) {
    use crate::dom::web::{self, WebScheduler};
    use crate::net::submit::ConfiguredSubmitter;

    let cfg = &config.newsletter;
    let submitter = Rc::new(ConfiguredSubmitter::from_config(
        &config.transport,
        WebScheduler,
        cfg.simulated_delay_ms,
    ));
    let mut wired = 0_usize;
    for form_el in web::query_all(&cfg.form_selector) {
        let input = form_el.find(&cfg.input_selector);
        let button = form_el.find(&cfg.button_selector);
        let Some(form) = NewsletterForm::new(
            form_el.clone(),
            input,
            button,
            &cfg.pending_label,
            MessagePresenter::new(WebScheduler, config.messages.ttl_ms),
            Rc::clone(&submitter),
        ) else {
            log::debug!("newsletter form without email input, skipping");
            continue;
        };
        let form = Rc::new(form);
        web::listen(form_el.as_target(), "submit", move |ev: web_sys::Event| {
            ev.prevent_default();
            let form = Rc::clone(&form);
            wasm_bindgen_futures::spawn_local(async move {
                let phase = form.submit().await;
                log::debug!("newsletter submission settled as {phase:?}");
            });
        });
        wired += 1;
    }
    log::debug!("newsletter wired to {wired} forms");
}
