//! Scroll-triggered reveal wrapper.

use leptos::prelude::*;

/// Reveal geometry is checked once scrolling settles.
#[cfg(feature = "csr")]
const REVEAL_DEBOUNCE_MS: u32 = 100;

/// Wraps a section in a `.reveal` container that gains `active` once it
/// scrolls far enough into the viewport. The class is a one-way latch:
/// scrolling back out does not hide revealed content again.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::dom::viewport;
        use crate::state::reveal::is_revealed;
        use crate::timing::{BrowserScheduler, Debouncer};

        let check = move || {
            if revealed.get_untracked() {
                return;
            }
            let Some(el) = node_ref.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            if is_revealed(rect.top(), rect.bottom(), viewport::height()) {
                revealed.set(true);
            }
        };

        // Elements already in view reveal on mount, before any scrolling.
        Effect::new(move || {
            if node_ref.get().is_some() {
                check();
            }
        });

        let debounce = Rc::new(RefCell::new(Debouncer::new(
            BrowserScheduler,
            REVEAL_DEBOUNCE_MS,
        )));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            debounce.borrow_mut().call(check);
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="reveal" class:active=move || revealed.get() node_ref=node_ref>
            {children()}
        </div>
    }
}
