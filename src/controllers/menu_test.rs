use super::*;
use crate::dom::fake::FakeElement;

fn menu() -> (MobileMenu<FakeElement>, FakeElement, FakeElement, FakeElement) {
    let toggle = FakeElement::new("button").with_class("mobile-menu-toggle");
    let panel = FakeElement::new("nav").with_class("mobile-nav");
    let body = FakeElement::new("body");
    let menu = MobileMenu::new(Some(toggle.clone()), Some(panel.clone()), Some(body.clone())).unwrap();
    (menu, toggle, panel, body)
}

#[test]
fn missing_toggle_or_panel_disables_controller() {
    let el = FakeElement::new("div");
    assert!(MobileMenu::new(None, Some(el.clone()), None).is_none());
    assert!(MobileMenu::new(Some(el), None, None).is_none());
}

#[test]
fn toggle_opens_everything() {
    let (menu, toggle, panel, body) = menu();
    menu.toggle();
    assert!(menu.is_open());
    assert!(toggle.has_class(ACTIVE_CLASS));
    assert!(panel.has_class(ACTIVE_CLASS));
    assert_eq!(toggle.attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(body.style("overflow").as_deref(), Some("hidden"));
}

#[test]
fn toggling_twice_restores_closed_state() {
    let (menu, toggle, panel, body) = menu();
    menu.toggle();
    menu.toggle();
    assert!(!menu.is_open());
    assert!(!toggle.has_class(ACTIVE_CLASS));
    assert!(!panel.has_class(ACTIVE_CLASS));
    assert_eq!(toggle.attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(body.style("overflow"), None);
}

#[test]
fn close_is_idempotent() {
    let (menu, toggle, panel, _) = menu();
    menu.close();
    menu.close();
    assert!(!toggle.has_class(ACTIVE_CLASS));
    assert!(!panel.has_class(ACTIVE_CLASS));
    assert_eq!(toggle.attribute("aria-expanded").as_deref(), Some("false"));
}

#[test]
fn escape_closes_only_when_open() {
    let (menu, toggle, _, _) = menu();
    assert!(!menu.handle_key("Escape"));

    menu.toggle();
    assert!(!menu.handle_key("Enter"));
    assert!(menu.is_open());
    assert!(menu.handle_key("Escape"));
    assert!(!menu.is_open());
    assert!(!toggle.has_class(ACTIVE_CLASS));
}

#[test]
fn clones_share_state() {
    let (menu, _, panel, _) = menu();
    let link_handler = menu.clone();
    menu.toggle();
    link_handler.close();
    assert!(!menu.is_open());
    assert!(!panel.has_class(ACTIVE_CLASS));
}

#[test]
fn works_without_body() {
    let toggle = FakeElement::new("button");
    let panel = FakeElement::new("nav");
    let menu = MobileMenu::new(Some(toggle.clone()), Some(panel), None).unwrap();
    menu.toggle();
    assert!(toggle.has_class(ACTIVE_CLASS));
}
