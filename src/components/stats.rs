//! Stat counters that animate up when scrolled into view.

use leptos::prelude::*;

/// Fraction of the counter that must be visible before it starts.
#[cfg(feature = "csr")]
const VISIBILITY_THRESHOLD: f64 = 0.5;

const STATS: &[(&str, u32, &str)] = &[
    ("Machines in service", 12_500, "+"),
    ("Cafes supplied", 840, ""),
    ("Years of craft", 47, ""),
    ("Countries shipped", 38, ""),
];

/// Stats band for the landing page.
#[component]
pub fn Stats() -> impl IntoView {
    let counters = STATS
        .iter()
        .map(|&(label, target, suffix)| {
            view! { <StatCounter label=label target=target suffix=suffix/> }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="stats" class="stats">
            <div class="stats__grid">{counters}</div>
        </section>
    }
}

/// A single stat: starts at zero and counts up to `target` the first time
/// half of it enters the viewport. The `counted` latch keeps re-entries
/// from replaying the animation.
#[component]
fn StatCounter(label: &'static str, target: u32, suffix: &'static str) -> impl IntoView {
    let value = RwSignal::new(0_i64);
    let counted = RwSignal::new(false);
    let span_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "csr")]
    {
        use crate::state::counter::CounterAnimation;

        let observed = StoredValue::new(false);
        Effect::new(move || {
            let Some(el) = span_ref.get() else {
                return;
            };
            if observed.get_value() {
                return;
            }
            observed.set_value(true);

            crate::dom::observer::once_visible(&el, VISIBILITY_THRESHOLD, move || {
                if counted.get_untracked() {
                    return;
                }
                counted.set(true);
                let mut animation = CounterAnimation::new(f64::from(target));
                crate::dom::raf::animate(move || {
                    let again = animation.step();
                    value.set(animation.display());
                    again
                });
            });
        });
    }

    view! {
        <div class="stat">
            <span
                class="stat-number"
                class:counted=move || counted.get()
                data-count=target.to_string()
                node_ref=span_ref
            >
                {move || value.get()}
                {suffix}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
