//! Smooth scrolling to in-page anchors.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Window scroll position that puts an element's top edge just below a
/// fixed bar of the given height.
pub fn anchor_top(element_top: f64, navbar_height: f64) -> f64 {
    element_top - navbar_height
}

/// Smooth-scroll the window so the element matching `anchor` (an `#id`
/// selector) lands just below the fixed navbar. Unknown anchors and
/// non-browser environments are no-ops.
pub fn to_anchor(anchor: &str, navbar_height: f64) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(target) = document.query_selector(anchor).ok().flatten() else {
            return;
        };
        let Some(target) = target.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };

        let top = anchor_top(f64::from(target.offset_top()), navbar_height);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (anchor, navbar_height);
    }
}

/// Like [`to_anchor`], measuring the fixed navbar's height from the
/// document. For in-page links that live outside the navbar itself.
pub fn to_anchor_below_nav(anchor: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let height = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(".navbar").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |el| f64::from(el.offset_height()));
        to_anchor(anchor, height);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = anchor;
    }
}
