use yew::prelude::*;

use crate::animations::hooks::use_scroll_animations;
use crate::components::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_animations();

    html! {
        <div class="page contact-page">
            <section class="page-header" data-animate="">
                <h1>{"Let's talk"}</h1>
                <p>{"Tell us about the project. We read everything and reply within a day."}</p>
            </section>

            <section class="contact-layout">
                <div class="contact-details" data-animate="">
                    <h2>{"TechVancer"}</h2>
                    <p>{"hello@techvancer.com"}</p>
                    <p>{"+1 (555) 010-7341"}</p>
                    <p>{"Vancouver · remote-friendly"}</p>
                </div>
                <div class="contact-form-wrap" data-animate="">
                    <ContactForm />
                </div>
            </section>
        </div>
    }
}
