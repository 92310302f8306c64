use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config;

fn stored_consent() -> Option<bool> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::COOKIE_CONSENT_KEY).ok())
        .flatten()
        .map(|value| value == "true")
}

fn store_consent(accepted: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(
            config::COOKIE_CONSENT_KEY,
            if accepted { "true" } else { "false" },
        );
    }
}

/// Shown until the visitor decides either way; the decision is a plain
/// last-write-wins flag.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let decided = use_state(|| stored_consent().is_some());

    if *decided {
        return html! {};
    }

    let choose = |accepted: bool| {
        let decided = decided.clone();
        Callback::from(move |_: MouseEvent| {
            store_consent(accepted);
            decided.set(true);
        })
    };

    html! {
        <div class="cookie-banner">
            <p class="cookie-text">
                {"We use cookies to keep the lights on and the analytics honest."}
            </p>
            <div class="cookie-actions">
                <button class="cookie-accept" onclick={choose(true)}>{"Accept"}</button>
                <button class="cookie-decline" onclick={choose(false)}>{"Decline"}</button>
            </div>
        </div>
    }
}
