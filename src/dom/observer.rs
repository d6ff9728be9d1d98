//! One-shot viewport intersection observation.

#![cfg(feature = "csr")]

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Invoke `on_intersect` the first time `element` crosses `threshold`
/// visibility, then disconnect the observer.
///
/// The callback closure is leaked (`forget`); it is a one-shot whose
/// observer disconnects after firing, and the page outlives the widget.
pub fn once_visible(
    element: &web_sys::Element,
    threshold: f64,
    on_intersect: impl FnOnce() + 'static,
) {
    let mut on_intersect = Some(on_intersect);
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_ref::<web_sys::IntersectionObserverEntry>()
                    .is_some_and(web_sys::IntersectionObserverEntry::is_intersecting)
            });
            if intersecting {
                if let Some(f) = on_intersect.take() {
                    f();
                }
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    if let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    {
        observer.observe(element);
    }
    cb.forget();
}
