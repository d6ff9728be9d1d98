//! Frame-synchronized stepping loops.

/// Run `step` once per animation frame until it returns `false`.
///
/// The closure holder keeps the callback alive across frames and releases
/// it when the loop ends. Outside the browser the loop never starts.
pub fn animate(step: impl FnMut() -> bool + 'static) {
    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let mut step = step;
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            let again = step();
            if again {
                if let Some(window) = web_sys::window() {
                    if let Some(cb) = holder_for_cb.borrow().as_ref() {
                        if window
                            .request_animation_frame(cb.as_ref().unchecked_ref())
                            .is_ok()
                        {
                            return;
                        }
                    }
                }
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        let Some(window) = web_sys::window() else {
            return;
        };
        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok()
        {
            *holder.borrow_mut() = Some(cb);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = step;
    }
}
