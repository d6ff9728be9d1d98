//! Client logo strip with a continuous scroll loop.

use leptos::prelude::*;

const CLIENTS: &[&str] = &[
    "Kaffeewerk",
    "Northline",
    "Dawn Patrol",
    "Borough Beans",
    "Stazione",
    "Fern & Filter",
];

/// Logo strip. The list is rendered twice back to back so the CSS keyframe
/// animation can translate by half the track width and wrap seamlessly.
#[component]
pub fn Clients() -> impl IntoView {
    let logos = CLIENTS
        .iter()
        .chain(CLIENTS.iter())
        .map(|name| view! { <div class="client-logo">{*name}</div> })
        .collect::<Vec<_>>();

    view! {
        <section id="clients" class="clients">
            <div class="clients-track">{logos}</div>
        </section>
    }
}
