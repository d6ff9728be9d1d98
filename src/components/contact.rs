//! Contact form with required-field validation.

use leptos::prelude::*;

use crate::state::form::{ContactForm, Field};

/// Contact section. Submission is blocked while any required field is
/// blank (after trimming); offending fields carry the `error` class until
/// the user edits them. A valid submission resets the form.
#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submitted = false;
        form.update(|f| submitted = f.submit());
        if submitted {
            leptos::logging::log!("Contact form submitted");
        }
    };

    let field_input = move |field: Field| {
        move |ev: leptos::ev::Event| {
            form.update(|f| f.edit(field, event_target_value(&ev)));
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2>"Talk to us"</h2>
            <form class="contact-form" on:submit=on_submit novalidate=true>
                <input
                    type="text"
                    name="name"
                    placeholder="Name"
                    required=true
                    class:error=move || form.with(|f| f.has_error(Field::Name))
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=field_input(Field::Name)
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    required=true
                    class:error=move || form.with(|f| f.has_error(Field::Email))
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=field_input(Field::Email)
                />
                <textarea
                    name="message"
                    placeholder="What are you brewing?"
                    required=true
                    class:error=move || form.with(|f| f.has_error(Field::Message))
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=field_input(Field::Message)
                ></textarea>
                <button type="submit" class="btn btn--primary">
                    "Send"
                </button>
            </form>
        </section>
    }
}
