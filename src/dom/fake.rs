//! In-memory DOM and manual clock for native tests.
//!
//! The fake tree understands compound selectors only (`tag`, `.class`,
//! `#id`, `[attr="value"]`), which is all the controllers use when scoped to
//! a single form or container.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{Element, Scheduler};

#[derive(Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    children: Vec<FakeElement>,
    parent: Option<Weak<RefCell<Node>>>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.0.borrow();
        write!(f, "<{} class=\"{}\">", node.tag, node.classes.join(" "))
    }
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node { tag: tag.to_owned(), ..Node::default() })))
    }

    /// Builder: add a class.
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder: set text content.
    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Append an existing element as the last child.
    pub fn append(&self, child: &FakeElement) {
        child.remove();
        child.0.borrow_mut().parent = Some(Rc::downgrade(&self.0));
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.borrow().children.clone()
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().parent.as_ref().and_then(Weak::upgrade).is_some()
    }

    /// All descendants matching `selector`, in document order.
    pub fn find_all(&self, selector: &str) -> Vec<FakeElement> {
        let Some(parsed) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        self.collect(&parsed, &mut out);
        out
    }

    fn collect(&self, selector: &Selector, out: &mut Vec<FakeElement>) {
        for child in self.children() {
            if selector.matches(&child) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).filter(|v| !v.is_empty()).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0.borrow_mut().styles.insert(property.to_owned(), value.to_owned());
    }

    fn clear_style(&self, property: &str) {
        self.0.borrow_mut().styles.remove(property);
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_owned();
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }

    fn append_element(&self, tag: &str) -> Option<Self> {
        let child = FakeElement::new(tag);
        self.append(&child);
        Some(child)
    }

    fn remove(&self) {
        let parent = self.0.borrow_mut().parent.take().and_then(|p| p.upgrade());
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|c| c != self);
        }
    }
}

struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    id: Option<String>,
    attrs: Vec<(String, String)>,
}

impl Selector {
    fn parse(raw: &str) -> Option<Self> {
        let mut selector = Selector { tag: None, classes: Vec::new(), id: None, attrs: Vec::new() };
        let mut rest = raw.trim();
        let tag_end = rest.find(['.', '#', '[']).unwrap_or(rest.len());
        if tag_end > 0 {
            selector.tag = Some(rest[..tag_end].to_owned());
        }
        rest = &rest[tag_end..];
        while !rest.is_empty() {
            if let Some(body) = rest.strip_prefix('[') {
                let close = body.find(']')?;
                let (name, value) = body[..close].split_once('=')?;
                selector.attrs.push((name.to_owned(), value.trim_matches('"').to_owned()));
                rest = &body[close + 1..];
                continue;
            }
            let marker = rest.chars().next()?;
            let body = &rest[1..];
            let end = body.find(['.', '#', '[']).unwrap_or(body.len());
            match marker {
                '.' => selector.classes.push(body[..end].to_owned()),
                '#' => selector.id = Some(body[..end].to_owned()),
                _ => return None,
            }
            rest = &body[end..];
        }
        Some(selector)
    }

    fn matches(&self, el: &FakeElement) -> bool {
        if self.tag.as_ref().is_some_and(|t| *t != el.tag()) {
            return false;
        }
        if self.id.as_ref().is_some_and(|id| el.attribute("id").as_ref() != Some(id)) {
            return false;
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs
            .iter()
            .all(|(name, value)| el.attribute(name).as_deref() == Some(value.as_str()))
    }
}

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct Clock {
    now_ms: u64,
    seq: u64,
    timers: Vec<(u64, u64, Callback)>,
    frames: Vec<Callback>,
}

/// Scheduler driven by hand from tests.
#[derive(Clone, Default)]
pub struct ManualScheduler(Rc<RefCell<Clock>>);

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.0.borrow().now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.0.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.0.borrow().frames.len()
    }

    /// Move the clock forward, firing every timer that comes due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let next = {
                let mut clock = self.0.borrow_mut();
                let due = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(idx, _)| idx);
                due.map(|idx| {
                    let (at, _, cb) = clock.timers.remove(idx);
                    clock.now_ms = at;
                    cb
                })
            };
            match next {
                Some(cb) => cb(),
                None => break,
            }
        }
        self.0.borrow_mut().now_ms = target;
    }

    /// Run the frame callbacks queued so far. Returns how many ran.
    pub fn run_frames(&self) -> usize {
        let frames = std::mem::take(&mut self.0.borrow_mut().frames);
        let count = frames.len();
        for cb in frames {
            cb();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let mut clock = self.0.borrow_mut();
        let at = clock.now_ms + u64::from(delay_ms);
        clock.seq += 1;
        let seq = clock.seq;
        clock.timers.push((at, seq, callback));
    }

    fn next_frame(&self, callback: Box<dyn FnOnce()>) {
        self.0.borrow_mut().frames.push(callback);
    }
}
