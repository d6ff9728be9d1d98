//! Hero section with scroll parallax on the background video layer.

use leptos::prelude::*;

use crate::state::effects::{overlay_opacity, parallax_shift};

/// Parallax tracks scrolling closely; one update per frame-ish interval.
#[cfg(feature = "csr")]
const PARALLAX_THROTTLE_MS: u32 = 16;

/// Full-bleed hero: background layer slides at half scroll speed while the
/// overlay deepens, giving the fade-to-content effect.
#[component]
pub fn Hero() -> impl IntoView {
    let scroll = RwSignal::new(0.0_f64);

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::dom::viewport;
        use crate::timing::{BrowserScheduler, Throttler};

        let throttle = Rc::new(RefCell::new(Throttler::new(
            BrowserScheduler,
            PARALLAX_THROTTLE_MS,
        )));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            throttle.borrow_mut().call(move || {
                scroll.set(viewport::scroll_y());
            });
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <section id="hero" class="hero">
            <div
                class="hero-video-bg"
                style:transform=move || format!("translateY({}px)", parallax_shift(scroll.get()))
            ></div>
            <div
                class="hero-overlay"
                style:opacity=move || overlay_opacity(scroll.get()).to_string()
            ></div>
            <div class="hero-content">
                <h1>"Espresso, engineered."</h1>
                <p>
                    "Hand-built lever and dual-boiler machines for bars that "
                    "take their coffee personally."
                </p>
                <a
                    href="#machines"
                    class="btn btn--primary"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        crate::dom::scroll::to_anchor_below_nav("#machines");
                    }
                >
                    "Browse machines"
                </a>
            </div>
        </section>
    }
}
