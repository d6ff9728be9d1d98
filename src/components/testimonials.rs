//! Testimonial carousel with dot navigation and cursor-tracked card glow.

use leptos::prelude::*;

use crate::state::carousel::CarouselState;
use crate::state::effects::pointer_offset;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The Leva Due paid for itself in a season. Service is the \
                best in the business.",
        author: "Marta Keller",
        role: "Owner, Kaffeewerk Zurich",
    },
    Testimonial {
        quote: "Shot-to-shot consistency we could never get out of our old \
                dual boiler. The bar runs itself now.",
        author: "Tomas Riva",
        role: "Head barista, Northline Roasters",
    },
    Testimonial {
        quote: "Forty-seven years of craft shows in every weld. It is the \
                last machine we will buy.",
        author: "June Park",
        role: "Founder, Dawn Patrol Coffee",
    },
];

/// Testimonial section: one active slide at a time, auto-advancing every
/// five seconds. Picking a dot shows that slide and restarts the timer, so
/// the next automatic advance is a full period after the manual action.
#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(TESTIMONIALS.len()));

    #[cfg(feature = "csr")]
    let metronome = {
        use std::rc::Rc;

        use crate::state::carousel::AUTO_ADVANCE_MS;
        use crate::timing::{BrowserScheduler, Metronome};

        let metronome = Rc::new(Metronome::new(BrowserScheduler, AUTO_ADVANCE_MS, move || {
            let _ = carousel.try_update(CarouselState::advance);
        }));
        metronome.restart();
        let for_cleanup = send_wrapper::SendWrapper::new(Rc::clone(&metronome));
        on_cleanup(move || for_cleanup.stop());
        metronome
    };

    let on_dot = {
        #[cfg(feature = "csr")]
        let metronome = std::rc::Rc::clone(&metronome);
        move |index: usize| {
            carousel.update(|c| c.select(index));
            #[cfg(feature = "csr")]
            metronome.restart();
        }
    };

    let slides = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(index, t)| {
            view! {
                <TestimonialCard
                    quote=t.quote
                    author=t.author
                    role=t.role
                    active=Signal::derive(move || carousel.get().active() == index)
                />
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..TESTIMONIALS.len())
        .map(|index| {
            let on_dot = on_dot.clone();
            view! {
                <button
                    class="dot"
                    class:active=move || carousel.get().active() == index
                    aria-label=format!("Show testimonial {}", index + 1)
                    on:click=move |_| on_dot(index)
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="testimonials">
            <h2>"From the counter"</h2>
            <div class="testimonials__track">{slides}</div>
            <div class="testimonials__dots">{dots}</div>
        </section>
    }
}

/// A single testimonial slide. While hovered, the card tracks the cursor
/// through the `--x`/`--y` custom properties that position its radial glow.
#[component]
fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    let glow = RwSignal::new((0.0_f64, 0.0_f64));
    let card_ref = NodeRef::<leptos::html::Article>::new();

    let on_mousemove = move |ev: leptos::ev::MouseEvent| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        glow.set(pointer_offset(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            rect.left(),
            rect.top(),
        ));
    };

    view! {
        <article
            class="testimonial testimonial-card"
            class:active=move || active.get()
            node_ref=card_ref
            on:mousemove=on_mousemove
            style=("--x", move || format!("{}px", glow.get().0))
            style=("--y", move || format!("{}px", glow.get().1))
        >
            <blockquote>{quote}</blockquote>
            <footer>
                <span class="testimonial__author">{author}</span>
                <span class="testimonial__role">{role}</span>
            </footer>
        </article>
    }
}
