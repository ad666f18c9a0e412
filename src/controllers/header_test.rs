use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::dom::fake::{FakeElement, ManualScheduler};

#[test]
fn threshold_is_exclusive() {
    assert!(!is_scrolled(49.0, 50.0));
    assert!(!is_scrolled(50.0, 50.0));
    assert!(is_scrolled(51.0, 50.0));
}

#[test]
fn apply_sets_and_clears_class() {
    let header = FakeElement::new("header");
    let controller = HeaderScroll::new(header.clone(), 50.0);

    controller.apply(49.0);
    assert!(!header.has_class(SCROLLED_CLASS));
    controller.apply(51.0);
    assert!(header.has_class(SCROLLED_CLASS));
    controller.apply(0.0);
    assert!(!header.has_class(SCROLLED_CLASS));
}

#[test]
fn initial_apply_reflects_mid_page_load() {
    let header = FakeElement::new("header");
    HeaderScroll::new(header.clone(), 50.0).apply(640.0);
    assert!(header.has_class(SCROLLED_CLASS));
}

#[test]
fn scroll_burst_updates_once_with_latest_offset() {
    let scheduler = ManualScheduler::new();
    let throttle = FrameThrottle::new(scheduler.clone());
    let header = FakeElement::new("header");
    let controller = HeaderScroll::new(header.clone(), 50.0);
    let offset = Rc::new(Cell::new(0.0));
    let reads = Rc::new(Cell::new(0));

    for y in [10.0, 30.0, 70.0] {
        offset.set(y);
        let offset = Rc::clone(&offset);
        let reads = Rc::clone(&reads);
        controller.on_scroll(&throttle, move || {
            reads.set(reads.get() + 1);
            offset.get()
        });
    }
    assert!(!header.has_class(SCROLLED_CLASS));

    assert_eq!(scheduler.run_frames(), 1);
    assert_eq!(reads.get(), 1);
    assert!(header.has_class(SCROLLED_CLASS));
}

#[test]
fn scroll_back_to_top_clears_on_next_frame() {
    let scheduler = ManualScheduler::new();
    let throttle = FrameThrottle::new(scheduler.clone());
    let header = FakeElement::new("header");
    let controller = HeaderScroll::new(header.clone(), 50.0);

    controller.on_scroll(&throttle, || 120.0);
    scheduler.run_frames();
    assert!(header.has_class(SCROLLED_CLASS));

    assert!(controller.on_scroll(&throttle, || 12.0));
    scheduler.run_frames();
    assert!(!header.has_class(SCROLLED_CLASS));
}
