//! Submission lifecycle shared by the newsletter and reservation forms.
//!
//! ```text
//! Idle ──Submit──▶ Validating ──ValidationFailed──▶ Invalid ──Reset──▶ Idle
//!                      │
//!                ValidationPassed
//!                      ▼
//!                 Submitting ──Succeeded──▶ Succeeded ──Reset──▶ Idle
//!                      └──────Failed─────▶ Failed ────Reset──▶ Idle
//! ```
//!
//! Events that do not apply to the current phase are rejected, which is how a
//! second submit while one is in flight gets ignored.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    ValidationFailed,
    ValidationPassed,
    Succeeded,
    Failed,
    Reset,
}

/// Next phase for `event` in `phase`, or `None` when the event is not
/// allowed there.
pub fn transition(phase: FormPhase, event: FormEvent) -> Option<FormPhase> {
    use FormEvent as E;
    use FormPhase as P;

    match (phase, event) {
        (P::Idle, E::Submit) => Some(P::Validating),
        (P::Validating, E::ValidationFailed) => Some(P::Invalid),
        (P::Validating, E::ValidationPassed) => Some(P::Submitting),
        (P::Submitting, E::Succeeded) => Some(P::Succeeded),
        (P::Submitting, E::Failed) => Some(P::Failed),
        (P::Invalid | P::Succeeded | P::Failed, E::Reset) => Some(P::Idle),
        _ => None,
    }
}

/// Mutable holder around [`transition`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormMachine {
    phase: FormPhase,
}

impl FormMachine {
    pub fn phase(self) -> FormPhase {
        self.phase
    }

    pub fn is_busy(self) -> bool {
        matches!(self.phase, FormPhase::Validating | FormPhase::Submitting)
    }

    /// Apply `event`. Returns `false` and leaves the phase unchanged when the
    /// event is not allowed.
    pub fn apply(&mut self, event: FormEvent) -> bool {
        match transition(self.phase, event) {
            Some(next) => {
                self.phase = next;
                true
            }
            None => {
                log::debug!("form event {event:?} ignored in phase {:?}", self.phase);
                false
            }
        }
    }
}
