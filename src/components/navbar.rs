//! Fixed navigation bar: scroll styling, mobile menu, dropdowns, and
//! smooth-scroll anchor links.

use leptos::prelude::*;

use crate::dom::viewport;
use crate::state::nav::{NavState, is_mobile};

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Scroll events drive a visible style change; throttle keeps the first
/// event of a burst immediate.
#[cfg(feature = "csr")]
const SCROLL_THROTTLE_MS: u32 = 100;

/// Resize only matters once the user settles on a size.
#[cfg(feature = "csr")]
const RESIZE_DEBOUNCE_MS: u32 = 250;

struct NavEntry {
    label: &'static str,
    anchor: &'static str,
    dropdown: &'static [(&'static str, &'static str)],
}

const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        anchor: "#hero",
        dropdown: &[],
    },
    NavEntry {
        label: "Machines",
        anchor: "#machines",
        dropdown: &[
            ("Lever Series", "#leva-uno"),
            ("Dual Boiler", "#doppia-58"),
            ("Grinders", "#macina-ti"),
        ],
    },
    NavEntry {
        label: "Testimonials",
        anchor: "#testimonials",
        dropdown: &[],
    },
    NavEntry {
        label: "Contact",
        anchor: "#contact",
        dropdown: &[],
    },
];

/// Fixed top navigation.
///
/// Desktop: dropdowns open on hover (CSS) and links smooth-scroll to their
/// sections. Mobile (≤768px): the hamburger toggles the menu, dropdown
/// parents expand on tap with only one open at a time, and a click outside
/// the menu closes it. Resizing to desktop force-clears the mobile state.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    // Smooth-scroll to an anchor, compensating for the bar's own height,
    // and fold the mobile menu away.
    let go_to = move |anchor: &str| {
        let offset = nav_ref
            .get_untracked()
            .map_or(0.0, |el| f64::from(el.offset_height()));
        crate::dom::scroll::to_anchor(anchor, offset);
        nav.update(NavState::close_menu);
    };

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;

        use crate::timing::{BrowserScheduler, Debouncer, Throttler};

        // Initial state for a page restored mid-scroll.
        nav.update(|n| n.set_scrolled(viewport::scroll_y()));

        let scroll_throttle = Rc::new(RefCell::new(Throttler::new(
            BrowserScheduler,
            SCROLL_THROTTLE_MS,
        )));
        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            scroll_throttle.borrow_mut().call(move || {
                nav.update(|n| n.set_scrolled(viewport::scroll_y()));
            });
        });
        on_cleanup(move || scroll_handle.remove());

        let resize_debounce = Rc::new(RefCell::new(Debouncer::new(
            BrowserScheduler,
            RESIZE_DEBOUNCE_MS,
        )));
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
            resize_debounce.borrow_mut().call(move || {
                if !is_mobile(viewport::width()) {
                    nav.update(NavState::collapse_for_desktop);
                }
            });
        });
        on_cleanup(move || resize_handle.remove());

        // Click anywhere outside the menu closes it (mobile only).
        let outside_handle = window_event_listener(leptos::ev::click, move |ev| {
            if !is_mobile(viewport::width()) || !nav.get_untracked().menu_open {
                return;
            }
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".nav-wrapper, .hamburger").ok().flatten())
                .is_some();
            if !inside {
                nav.update(NavState::close_menu);
            }
        });
        on_cleanup(move || outside_handle.remove());

        // The open menu locks body scrolling.
        Effect::new(move || {
            let open = nav.get().menu_open;
            let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            else {
                return;
            };
            let _ = if open {
                body.class_list().add_1("menu-open")
            } else {
                body.class_list().remove_1("menu-open")
            };
        });
    }

    let entries = NAV_ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let has_dropdown = !entry.dropdown.is_empty();
            let on_link = move |ev: leptos::ev::MouseEvent| {
                if has_dropdown && is_mobile(viewport::width()) {
                    // On mobile the parent link is an expander, not a jump.
                    ev.prevent_default();
                    nav.update(|n| n.toggle_dropdown(index));
                } else {
                    ev.prevent_default();
                    go_to(entry.anchor);
                }
            };

            let sublinks = entry
                .dropdown
                .iter()
                .map(|&(label, anchor)| {
                    let on_sublink = move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        go_to(anchor);
                    };
                    view! {
                        <li>
                            <a class="dropdown-link" href=anchor on:click=on_sublink>
                                {label}
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>();

            let arrow = has_dropdown
                .then(|| view! { <span class="dropdown-arrow" aria-hidden="true"></span> });
            let dropdown = has_dropdown
                .then(|| view! { <ul class="dropdown-menu">{sublinks}</ul> });

            view! {
                <li
                    class="nav-item"
                    class:active=move || nav.get().open_dropdown == Some(index)
                >
                    <a class="nav-link" href=entry.anchor on:click=on_link>
                        {entry.label}
                        {arrow}
                    </a>
                    {dropdown}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar" class:scrolled=move || nav.get().scrolled node_ref=nav_ref>
            <a
                class="navbar__logo"
                href="#hero"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    go_to("#hero");
                }
            >
                "Macchina"
            </a>

            <button
                class="hamburger"
                class:active=move || nav.get().menu_open
                aria-label="Toggle menu"
                on:click=move |_| nav.update(NavState::toggle_menu)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <div class="nav-wrapper" class:active=move || nav.get().menu_open>
                <ul class="nav-list">{entries}</ul>
            </div>
        </nav>
    }
}
