use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animations::hooks::use_scroll_animations;
use crate::{scroll_to_section, Route};

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_animations();

    let jump_to_features = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll_to_section("features");
    });

    html! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero-backdrop" data-parallax="0.3"></div>
                <div class="hero-content" data-animate="">
                    <h1>{"Engineering the web you actually ship"}</h1>
                    <p class="hero-lede">
                        {"TechVancer designs and builds fast, resilient digital products \
                          for teams that measure twice and deploy on Fridays anyway."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="button primary">
                            {"Start a project"}
                        </Link<Route>>
                        <a href="#features" class="button ghost" onclick={jump_to_features}>
                            {"See what we do"}
                        </a>
                    </div>
                </div>
            </section>

            <section class="stats" data-animate="">
                <div class="stat">
                    <span class="stat-value" data-counter="250" data-suffix="+">{"0"}</span>
                    <span class="stat-label">{"Projects delivered"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value" data-counter="98" data-suffix="%">{"0"}</span>
                    <span class="stat-label">{"Client retention"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value" data-counter="1200" data-duration="2500" data-suffix="+">{"0"}</span>
                    <span class="stat-label">{"Deploys a year"}</span>
                </div>
            </section>

            <section id="features" class="features">
                <h2 data-animate="">{"What we bring"}</h2>
                <div class="feature-grid" data-stagger="150">
                    <div class="feature-card" data-animate="">
                        <h3>{"Performance first"}</h3>
                        <p>{"Budgets in milliseconds, not vibes. Every page is profiled before it ships."}</p>
                    </div>
                    <div class="feature-card" data-animate="">
                        <h3>{"Design systems"}</h3>
                        <p>{"Component libraries your team can extend without calling us back."}</p>
                    </div>
                    <div class="feature-card" data-animate="">
                        <h3>{"Boring reliability"}</h3>
                        <p>{"Monitoring, rollbacks and runbooks baked in from the first sprint."}</p>
                    </div>
                    <div class="feature-card" data-animate="">
                        <h3>{"Honest estimates"}</h3>
                        <p>{"Scope written down, trade-offs spelled out, surprises kept for birthdays."}</p>
                    </div>
                </div>
            </section>

            <section class="cta-band" data-animate="">
                <h2>{"Have a deadline already?"}</h2>
                <p>{"Tell us what you need and we'll tell you what it takes."}</p>
                <Link<Route> to={Route::Contact} classes="button primary">
                    {"Talk to an engineer"}
                </Link<Route>>
            </section>
        </div>
    }
}
