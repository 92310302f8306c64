use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Stand-in delivery; swap for a real endpoint when one exists.
async fn deliver() -> Result<(), ()> {
    TimeoutFuture::new(1_500).await;
    Ok(())
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let missing = use_state(HashSet::<&'static str>::new);
    let status = use_state(|| SubmitState::Idle);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let missing = missing.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *status == SubmitState::Sending {
                return;
            }

            let mut empty = HashSet::new();
            for (field, value) in [
                ("name", (*name).clone()),
                ("email", (*email).clone()),
                ("message", (*message).clone()),
            ] {
                if value.trim().is_empty() {
                    empty.insert(field);
                }
            }
            if !empty.is_empty() {
                missing.set(empty);
                return;
            }
            missing.set(HashSet::new());
            status.set(SubmitState::Sending);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                match deliver().await {
                    Ok(()) => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        status.set(SubmitState::Sent);
                    }
                    Err(()) => {
                        status.set(SubmitState::Failed);
                    }
                }
                // Restore the idle button after a beat either way.
                TimeoutFuture::new(3_000).await;
                status.set(SubmitState::Idle);
            });
        })
    };

    let field_class = |field: &'static str, base: &'static str| {
        classes!(base, missing.contains(field).then_some("error"))
    };
    let button_label = match *status {
        SubmitState::Idle => "Send Message",
        SubmitState::Sending => "Sending...",
        SubmitState::Sent => "Sent!",
        SubmitState::Failed => "Error. Try again.",
    };
    let button_class = classes!(
        "submit-button",
        (*status == SubmitState::Sent).then_some("success"),
        (*status == SubmitState::Failed).then_some("error"),
    );

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-field">
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    class={field_class("name", "form-input")}
                    value={(*name).clone()}
                    oninput={on_name}
                    required={true}
                />
            </div>
            <div class="form-field">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    class={field_class("email", "form-input")}
                    value={(*email).clone()}
                    oninput={on_email}
                    required={true}
                />
            </div>
            <div class="form-field">
                <label for="contact-message">{"What are you building?"}</label>
                <textarea
                    id="contact-message"
                    class={field_class("message", "form-textarea")}
                    value={(*message).clone()}
                    oninput={on_message}
                    required={true}
                />
            </div>
            <button
                type="submit"
                class={button_class}
                disabled={*status == SubmitState::Sending}
            >
                { button_label }
            </button>
            {
                if *status == SubmitState::Sent {
                    html! {
                        <p class="form-success">{"Thanks! We'll get back to you within a day."}</p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
