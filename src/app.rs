//! Root application component and shared context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::state::nav::NavState;

/// Root component.
///
/// The navbar state is the only shared context: the navbar itself mutates
/// it, and anchor navigation from anywhere closes the mobile menu through
/// it. Every other widget owns its state locally.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    view! {
        <Stylesheet id="macchina" href="/assets/macchina.css"/>
        <Title text="Macchina Espresso Machines"/>

        <Navbar/>
        <HomePage/>
    }
}
