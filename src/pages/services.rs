use yew::prelude::*;
use yew_router::prelude::*;

use crate::animations::hooks::use_scroll_animations;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_animations();

    html! {
        <div class="page services-page">
            <section class="page-header" data-animate="">
                <h1>{"Services"}</h1>
                <p>{"Everything between the whiteboard sketch and the status page staying green."}</p>
            </section>

            <section class="service-list" data-stagger="120">
                <div class="service-card" data-animate="">
                    <h2>{"Web applications"}</h2>
                    <p>{"Single-page apps and dashboards built for the long haul, with the \
                         boring parts automated and the fast parts measured."}</p>
                </div>
                <div class="service-card" data-animate="">
                    <h2>{"Marketing sites"}</h2>
                    <p>{"Landing pages that load before the visitor finishes blinking and \
                         keep scoring green on every audit you throw at them."}</p>
                </div>
                <div class="service-card" data-animate="">
                    <h2>{"Performance rescue"}</h2>
                    <p>{"We take the site that embarrasses your lighthouse report and hand \
                         back one that doesn't."}</p>
                </div>
                <div class="service-card" data-animate="">
                    <h2>{"Design systems"}</h2>
                    <p>{"Tokens, components and documentation your next three hires can \
                         pick up in a week."}</p>
                </div>
            </section>

            <section class="cta-band" data-animate="">
                <h2>{"Not sure which one you need?"}</h2>
                <Link<Route> to={Route::Contact} classes="button primary">
                    {"Ask us"}
                </Link<Route>>
            </section>
        </div>
    }
}
