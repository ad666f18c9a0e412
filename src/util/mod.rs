//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure logic (email shape, theme values, frame
//! coalescing) and browser storage glue from controller wiring.

pub mod email;
pub mod frame_throttle;
pub mod preferences;
pub mod theme;
