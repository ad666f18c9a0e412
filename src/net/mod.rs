//! Form submission transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both form controllers hand a [`submit::Submission`] to a
//! [`submit::Submitter`] and only react to its outcome, so swapping the
//! simulated delay for a real endpoint is a configuration change.

pub mod submit;
