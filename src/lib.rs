//! # site-ui
//!
//! Client-side behavior for the static marketing site, compiled to WASM.
//! The page markup is served as-is; this crate attaches the interactive
//! layer on top of it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | `Element`/`Scheduler` seam over `web-sys` (and test fakes) |
//! | [`controllers`] | Menu, smooth scroll, header, forms, scroll reveal |
//! | [`state`] | Menu and form state machines |
//! | [`net`] | Submission payloads and transports |
//! | [`util`] | Email check, theme, preferences, frame throttle |
//! | [`config`] | Selectors, timings and transport settings |
//!
//! With the `hydrate` feature the crate exports `boot` (run on module start)
//! and `toggleTheme` to JavaScript. Without it, only the browser-independent
//! logic is compiled, which is what the unit tests exercise.

#[cfg(feature = "hydrate")]
pub mod boot;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod net;
pub mod state;
pub mod util;
