//! Submission payloads and transports.
//!
//! Client-side (hydrate): `HttpSubmitter` POSTs the fields form-encoded via
//! `gloo-net`, the same body a native form submission would send.
//! Everywhere: `SimulatedSubmitter` waits a fixed delay and succeeds.
//!
//! ERROR HANDLING
//! ==============
//! Transports return [`SubmitError`] instead of panicking; controllers turn
//! it into an inline error message and return the form to idle.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::config::TransportConfig;
use crate::dom::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Newsletter,
    Reservation,
}

/// Fields sent to the submission endpoint.
///
/// Entries keep document order and repeated names (checkbox groups,
/// multi-selects), like the browser's own form data set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub form: FormKind,
    pub fields: Vec<(String, String)>,
}

impl Submission {
    pub fn newsletter(email: &str) -> Self {
        Self { form: FormKind::Newsletter, fields: vec![("email".to_owned(), email.to_owned())] }
    }

    pub fn reservation<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self { form: FormKind::Reservation, fields: fields.into_iter().collect() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission request failed: {0}")]
    Network(String),

    #[error("submission rejected: status {0}")]
    Status(u16),

    #[error("submission payload could not be encoded: {0}")]
    Encode(String),

    #[error("submission dropped before completing")]
    Cancelled,
}

#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;

    /// Whether this transport performs the real network request itself. When
    /// it does, native form submission must be suppressed.
    fn replaces_native_submit(&self) -> bool;
}

/// Fixed-delay stand-in for a backend. Always succeeds.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
}

impl<S: Scheduler> SimulatedSubmitter<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms }
    }
}

#[async_trait(?Send)]
impl<S: Scheduler> Submitter for SimulatedSubmitter<S> {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        log::info!("simulating {:?} submission ({} ms)", submission.form, self.delay_ms);
        let (tx, rx) = oneshot::channel::<()>();
        self.scheduler.after(
            self.delay_ms,
            Box::new(move || {
                if tx.send(()).is_err() {
                    log::debug!("simulated submission finished after its caller went away");
                }
            }),
        );
        rx.await.map_err(|_| SubmitError::Cancelled)
    }

    fn replaces_native_submit(&self) -> bool {
        false
    }
}

#[cfg(feature = "hydrate")]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Form-encoded POST to a configured endpoint.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl Submitter for HttpSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let body = web_sys::UrlSearchParams::new().map_err(|e| SubmitError::Encode(format!("{e:?}")))?;
        for (name, value) in &submission.fields {
            body.append(name, value);
        }
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(SubmitError::Status(resp.status()));
        }
        log::info!("{:?} submission accepted by {}", submission.form, self.endpoint);
        Ok(())
    }

    fn replaces_native_submit(&self) -> bool {
        true
    }
}

/// Transport picked from [`TransportConfig`] at boot.
#[derive(Clone, Debug)]
pub enum ConfiguredSubmitter<S: Scheduler> {
    Simulated(SimulatedSubmitter<S>),
    #[cfg(feature = "hydrate")]
    Http(HttpSubmitter),
}

impl<S: Scheduler> ConfiguredSubmitter<S> {
    /// Build the transport for one form. `simulated_delay_ms` only applies to
    /// the simulated transport.
    pub fn from_config(transport: &TransportConfig, scheduler: S, simulated_delay_ms: u32) -> Self {
        match transport {
            TransportConfig::Simulated => Self::Simulated(SimulatedSubmitter::new(scheduler, simulated_delay_ms)),
            #[cfg(feature = "hydrate")]
            TransportConfig::Http { endpoint } => Self::Http(HttpSubmitter::new(endpoint.clone())),
            #[cfg(not(feature = "hydrate"))]
            TransportConfig::Http { endpoint } => {
                log::warn!("http transport to {endpoint} needs a browser, simulating instead");
                Self::Simulated(SimulatedSubmitter::new(scheduler, simulated_delay_ms))
            }
        }
    }
}

#[async_trait(?Send)]
impl<S: Scheduler> Submitter for ConfiguredSubmitter<S> {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        match self {
            Self::Simulated(inner) => inner.submit(submission).await,
            #[cfg(feature = "hydrate")]
            Self::Http(inner) => inner.submit(submission).await,
        }
    }

    fn replaces_native_submit(&self) -> bool {
        match self {
            Self::Simulated(inner) => inner.replaces_native_submit(),
            #[cfg(feature = "hydrate")]
            Self::Http(inner) => inner.replaces_native_submit(),
        }
    }
}
