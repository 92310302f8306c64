use yew::prelude::*;

use crate::animations::hooks::use_scroll_animations;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_animations();

    html! {
        <div class="page about-page">
            <section class="page-header" data-animate="">
                <h1>{"About TechVancer"}</h1>
                <p>{"A small studio with strong opinions about shipping."}</p>
            </section>

            <section class="about-story" data-animate="">
                <p>{"We started TechVancer after one too many projects where the handoff \
                     deck was prettier than the product. Since then we've kept the team \
                     deliberately small: senior engineers and designers who sit in the \
                     same calls and own what they build."}</p>
                <p>{"No account managers, no layers. You talk to the people writing \
                     the code."}</p>
            </section>

            <section class="team-stats" data-animate="">
                <div class="stat">
                    <span class="stat-value" data-counter="12">{"0"}</span>
                    <span class="stat-label">{"Engineers and designers"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value" data-counter="9">{"0"}</span>
                    <span class="stat-label">{"Years in business"}</span>
                </div>
                <div class="stat">
                    <span class="stat-value" data-counter="40000" data-duration="2500" data-suffix="+">{"0"}</span>
                    <span class="stat-label">{"Commits and counting"}</span>
                </div>
            </section>

            <section class="values" data-stagger="100">
                <div class="value-card" data-animate="">
                    <h3>{"Clarity"}</h3>
                    <p>{"Plain words in proposals, plain names in code."}</p>
                </div>
                <div class="value-card" data-animate="">
                    <h3>{"Craft"}</h3>
                    <p>{"The details users never notice are the ones that keep them around."}</p>
                </div>
                <div class="value-card" data-animate="">
                    <h3>{"Candor"}</h3>
                    <p>{"If a feature is a bad idea, we say so before billing for it."}</p>
                </div>
            </section>
        </div>
    }
}
