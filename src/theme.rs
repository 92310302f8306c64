use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryListEvent, MouseEvent, Storage};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn meta_color(self) -> &'static str {
        match self {
            Theme::Light => config::LIGHT_META_COLOR,
            Theme::Dark => config::DARK_META_COLOR,
        }
    }
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn stored_theme() -> Option<Theme> {
    local_storage()
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
        .flatten()
        .and_then(|name| Theme::from_name(&name))
}

pub fn preferred_theme() -> Theme {
    stored_theme().unwrap_or(Theme::Light)
}

/// Write the theme to the document root, the storage flag and the mobile
/// browser chrome color. Last write wins.
pub fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str());
    }
    if let Some(meta) = document
        .query_selector("meta[name=\"theme-color\"]")
        .ok()
        .flatten()
    {
        let _ = meta.set_attribute("content", theme.meta_color());
    }
}

pub fn current_theme() -> Theme {
    window()
        .and_then(|w| w.document())
        .and_then(|document| document.document_element())
        .and_then(|root| root.get_attribute("data-theme"))
        .and_then(|name| Theme::from_name(&name))
        .unwrap_or(Theme::Light)
}

/// Apply the saved (or default) theme and follow system changes for as
/// long as the visitor has not picked one themselves.
pub fn init_theme() {
    apply_theme(preferred_theme());

    let Some(window) = window() else {
        return;
    };
    if let Ok(Some(media)) = window.match_media("(prefers-color-scheme: dark)") {
        let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| {
                if stored_theme().is_none() {
                    apply_theme(if event.matches() {
                        Theme::Dark
                    } else {
                        Theme::Light
                    });
                }
            },
        );
        let _ = media
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        // Follows the system for the rest of the page's life.
        on_change.forget();
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(current_theme);

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = current_theme().flipped();
            info!("Switching theme to {}", next.as_str());
            apply_theme(next);
            theme.set(next);
        })
    };

    html! {
        <button class="theme-toggle" onclick={toggle} aria-label="Toggle color theme">
            { if *theme == Theme::Dark { "☀" } else { "🌙" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn names_round_trip() {
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Theme::from_name("solarized"), None);
        assert_eq!(Theme::from_name(""), None);
    }

    #[test]
    fn flipping_alternates() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    }
}
