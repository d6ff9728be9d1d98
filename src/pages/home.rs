//! Landing page: all sections in display order.

use leptos::prelude::*;

use crate::components::clients::Clients;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::machines::Machines;
use crate::components::reveal::Reveal;
use crate::components::stats::Stats;
use crate::components::testimonials::Testimonials;

/// The single marketing page. Sections below the hero are wrapped in
/// [`Reveal`] so they fade in as the visitor scrolls.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <Reveal>
                <Machines/>
            </Reveal>
            <Reveal>
                <Stats/>
            </Reveal>
            <Reveal>
                <Testimonials/>
            </Reveal>
            <Reveal>
                <Clients/>
            </Reveal>
            <Reveal>
                <Contact/>
            </Reveal>
        </main>
        <footer class="footer">
            <p>"\u{a9} Macchina Espresso. Built by hand in Trieste."</p>
        </footer>
    }
}
