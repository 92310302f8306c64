use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod theme;

mod animations {
    pub mod attrs;
    pub mod counter;
    pub mod dom;
    pub mod hooks;
    pub mod parallax;
    pub mod reveal;
    pub mod stagger;
    pub mod viewport;

    #[cfg(test)]
    pub mod fake;
}

mod components {
    pub mod contact_form;
    pub mod cookie_banner;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
}

use components::cookie_banner::CookieBanner;
use pages::{about::About, contact::Contact, home::Home, services::Services};
use theme::ThemeToggle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

/// Smooth-scroll to an in-page section, keeping the fixed navbar clear of it.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let nav_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height())
        .unwrap_or(0);
    let top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
        - f64::from(nav_height)
        - 20.0;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > 100.0);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // Opening the mobile menu locks body scrolling behind it.
    {
        let open = *menu_open;
        use_effect_with_deps(
            move |open| {
                if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body
                        .style()
                        .set_property("overflow", if *open { "hidden" } else { "" });
                }
                || ()
            },
            open,
        );
    }

    // Escape closes the menu from anywhere on the page.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        menu_open.set(false);
                    }
                });
                let document = window().and_then(|w| w.document());
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        on_key.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let link_class = |target: Route| {
        if route == Some(target) {
            "navbar-link active"
        } else {
            "navbar-link"
        }
    };

    let menu_class = if *menu_open {
        "navbar-menu active"
    } else {
        "navbar-menu"
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "navbar-scrolled"))}>
            <div class="navbar-content">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    {"TechVancer"}
                </Link<Route>>

                <button
                    class="navbar-toggle"
                    onclick={toggle_menu}
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes={link_class(Route::Home)}>
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes={link_class(Route::Services)}>
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes={link_class(Route::About)}>
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes={link_class(Route::Contact)}>
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            theme::init_theme();
            // Stylesheet hook for the initial page fade.
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.class_list().add_1("page-transition");
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <CookieBanner />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
