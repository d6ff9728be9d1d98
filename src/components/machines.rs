//! Machine showcase cards: hover lift, icon-button ripples, spec links.

use leptos::prelude::*;

use crate::state::effects::lift_enabled;

pub(crate) struct Machine {
    pub(crate) name: &'static str,
    pub(crate) tagline: &'static str,
    pub(crate) group: &'static str,
    /// Element id, so in-page links can target the card.
    pub(crate) slug: &'static str,
}

pub(crate) const MACHINES: &[Machine] = &[
    Machine {
        name: "Leva Uno",
        tagline: "Single-group spring lever, walnut accents.",
        group: "Lever Series",
        slug: "leva-uno",
    },
    Machine {
        name: "Leva Due",
        tagline: "Two-group lever for the busy counter.",
        group: "Lever Series",
        slug: "leva-due",
    },
    Machine {
        name: "Doppia 58",
        tagline: "Dual boiler, PID on both circuits.",
        group: "Dual Boiler",
        slug: "doppia-58",
    },
    Machine {
        name: "Macina Ti",
        tagline: "83mm titanium flat burrs, single dose.",
        group: "Grinders",
        slug: "macina-ti",
    },
];

/// Machine grid section.
#[component]
pub fn Machines() -> impl IntoView {
    let cards = MACHINES
        .iter()
        .map(|machine| {
            view! {
                <MachineCard
                    name=machine.name
                    tagline=machine.tagline
                    group=machine.group
                    slug=machine.slug
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="machines" class="machines">
            <h2>"The machines"</h2>
            <div class="machines__grid">{cards}</div>
        </section>
    }
}

/// One product card. Lifts on hover in the desktop layout only; touch-width
/// screens keep cards flat so a tap does not leave one stuck mid-lift.
#[component]
fn MachineCard(
    name: &'static str,
    tagline: &'static str,
    group: &'static str,
    slug: &'static str,
) -> impl IntoView {
    let lifted = RwSignal::new(false);

    let on_specs = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        leptos::logging::log!("View specs for: {name}");
        crate::dom::scroll::to_anchor_below_nav("#contact");
    };

    view! {
        <article
            id=slug
            class="machine-card"
            on:mouseenter=move |_| {
                if lift_enabled(crate::dom::viewport::width()) {
                    lifted.set(true);
                }
            }
            on:mouseleave=move |_| lifted.set(false)
            style:transform=move || {
                if lifted.get() { "translateY(-10px)".to_owned() } else { String::new() }
            }
        >
            <span class="machine-card__group">{group}</span>
            <h3>{name}</h3>
            <p class="machine-card__tagline">{tagline}</p>
            <div class="machine-card__actions">
                <IconButton label="Favorite" glyph="\u{2764}"/>
                <IconButton label="Compare" glyph="\u{2194}"/>
                <a href="#contact" class="view-specs" on:click=on_specs>
                    "View specifications"
                </a>
            </div>
        </article>
    }
}

/// Favorite/compare toggle button with a click ripple. Each click spawns a
/// ripple span at the pointer position; the span removes itself after its
/// animation finishes.
#[component]
fn IconButton(label: &'static str, glyph: &'static str) -> impl IntoView {
    let active = RwSignal::new(false);
    let ripples = RwSignal::new(Vec::<(u64, f64, f64)>::new());
    let next_ripple = StoredValue::new(0_u64);
    let button_ref = NodeRef::<leptos::html::Button>::new();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        active.update(|a| *a = !*a);

        #[cfg(feature = "csr")]
        {
            use crate::state::effects::{RIPPLE_LIFETIME_MS, pointer_offset};

            let Some(button) = button_ref.get_untracked() else {
                return;
            };
            let rect = button.get_bounding_client_rect();
            let (x, y) = pointer_offset(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                rect.left(),
                rect.top(),
            );
            let id = next_ripple.get_value();
            next_ripple.set_value(id + 1);
            ripples.update(|r| r.push((id, x, y)));

            // try_update: the card may be gone before the ripple expires.
            gloo_timers::callback::Timeout::new(RIPPLE_LIFETIME_MS, move || {
                let _ = ripples.try_update(|r| r.retain(|&(ripple_id, _, _)| ripple_id != id));
            })
            .forget();
        }
    };

    view! {
        <button
            class="btn-icon"
            class:active=move || active.get()
            aria-label=label
            node_ref=button_ref
            on:click=on_click
        >
            <span aria-hidden="true">{glyph}</span>
            {move || {
                ripples
                    .get()
                    .into_iter()
                    .map(|(_, x, y)| {
                        view! {
                            <span
                                class="ripple"
                                style:left=format!("{x}px")
                                style:top=format!("{y}px")
                            ></span>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </button>
    }
}
