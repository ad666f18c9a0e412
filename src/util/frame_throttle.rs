//! At-most-one-pending-frame scheduling.
//!
//! A burst of calls to [`FrameThrottle::schedule`] between two animation
//! frames collapses into one frame callback. Later calls in the burst are
//! dropped rather than queued, so the work should read live state when it
//! runs instead of capturing it at schedule time.

#[cfg(test)]
#[path = "frame_throttle_test.rs"]
mod frame_throttle_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::Scheduler;

#[derive(Clone)]
pub struct FrameThrottle<S: Scheduler> {
    scheduler: S,
    pending: Rc<Cell<bool>>,
}

impl<S: Scheduler> FrameThrottle<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: Rc::new(Cell::new(false)) }
    }

    /// Request `work` on the next frame unless a frame is already pending.
    ///
    /// Returns `true` when a frame was requested, `false` when the call was
    /// coalesced into the outstanding one.
    pub fn schedule(&self, work: impl FnOnce() + 'static) -> bool {
        if self.pending.replace(true) {
            return false;
        }
        let pending = Rc::clone(&self.pending);
        self.scheduler.next_frame(Box::new(move || {
            work();
            pending.set(false);
        }));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
