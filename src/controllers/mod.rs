//! Page behavior controllers.
//!
//! ARCHITECTURE
//! ============
//! Each controller is generic over [`crate::dom::Element`] (and
//! [`crate::dom::Scheduler`] where it needs time). The behavior lives in
//! plain methods that tests call directly; the hydrate-only `install`
//! functions look up the real nodes and wire browser events to those methods.
//! A missing element disables only its own controller.

pub mod header;
pub mod menu;
pub mod messages;
pub mod newsletter;
pub mod reservation;
pub mod reveal;
pub mod smooth_scroll;
