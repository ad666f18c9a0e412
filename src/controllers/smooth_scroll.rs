//! Header-aware smooth scrolling for in-page anchors.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// Whether `href` points somewhere on the current page. The bare `#`
/// placeholder link is excluded.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}

/// Document-space scroll position that puts a target just below the fixed
/// header.
///
/// `target_top` is the target's distance from the viewport top (as reported by
/// `getBoundingClientRect`), `page_offset` the current vertical scroll.
pub fn scroll_destination(target_top: f64, page_offset: f64, header_height: f64) -> f64 {
    target_top + page_offset - header_height
}

/// Where a click on `href` should scroll to, or `None` when the click must be
/// left to the browser.
///
/// `target_top` resolves the anchor's target to its viewport-relative top
/// edge; a missing target yields `None`, so default navigation proceeds.
/// `header_height` measures the fixed header, which counts as zero when
/// absent.
pub fn click_destination<T, H>(href: &str, target_top: T, header_height: H, page_offset: f64) -> Option<f64>
where
    T: FnOnce(&str) -> Option<f64>,
    H: FnOnce() -> Option<f64>,
{
    if !is_in_page_anchor(href) {
        return None;
    }
    let top = target_top(href)?;
    Some(scroll_destination(top, page_offset, header_height().unwrap_or(0.0)))
}

/// Intercept every in-page anchor on the page.
///
/// The default navigation is cancelled only after the target is confirmed to
/// exist, so links to missing targets behave like ordinary links.
#[cfg(feature = "hydrate")]
pub fn install(header_selector: &str) {
    use crate::dom::{Element, web};

    let anchors = web::query_all("a[href^=\"#\"]");
    let mut wired = 0_usize;
    for anchor in anchors {
        let Some(href) = anchor.attribute("href") else {
            continue;
        };
        if !is_in_page_anchor(&href) {
            continue;
        }
        let header_selector = header_selector.to_owned();
        web::listen(anchor.as_target(), "click", move |ev: web_sys::Event| {
            let Some(top) = click_destination(
                &href,
                |selector| web::query(selector).as_ref().map(web::WebElement::viewport_top),
                || web::query(&header_selector).as_ref().map(web::WebElement::offset_height),
                web::scroll_offset(),
            ) else {
                return;
            };
            ev.prevent_default();
            if let Some(window) = web::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
        wired += 1;
    }
    log::debug!("smooth scroll wired to {wired} anchors");
}
