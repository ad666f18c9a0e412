//! Plain state types mirrored into the DOM by controllers.
//!
//! DESIGN
//! ======
//! Keeping transitions here, free of DOM handles, lets tests drive the form
//! and menu lifecycles without any browser or timer.

pub mod form;
pub mod menu;
