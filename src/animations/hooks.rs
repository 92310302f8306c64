use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};
use yew::prelude::*;

use super::attrs::{parse_opt, parse_or};
use super::counter::{CounterAnimator, CounterSpec, DEFAULT_DURATION_MS};
use super::dom::{DomElement, DomViewport};
use super::parallax::{ParallaxDriver, DEFAULT_SPEED};
use super::reveal::RevealTrigger;
use super::stagger::{apply_stagger, DEFAULT_STAGGER_MS};

/// Everything a page keeps alive while its animations run. Dropping it
/// disconnects the observers and removes the scroll listener; classes,
/// delays and text already written stay as they are.
pub struct PageAnimations {
    _viewport: Rc<DomViewport>,
    _reveal: Option<RevealTrigger>,
    _parallax: Option<ParallaxDriver>,
    _counters: Option<CounterAnimator>,
}

/// Wires the declarative animation attributes present in the rendered
/// page: `data-animate`, `data-stagger`, `data-parallax`, `data-counter`.
/// Installed on mount, torn down on unmount.
#[hook]
pub fn use_scroll_animations() {
    use_effect_with_deps(
        move |_| {
            let animations = install();
            move || drop(animations)
        },
        (),
    );
}

pub fn install() -> Option<PageAnimations> {
    let document = web_sys::window()?.document()?;
    let viewport = DomViewport::new()?;

    let reveal_targets: Vec<DomElement> = select(&document, "[data-animate]")
        .into_iter()
        .map(DomElement::new)
        .collect();
    let reveal = RevealTrigger::install(viewport.as_ref(), reveal_targets);

    for container in select(&document, "[data-stagger]") {
        let interval = parse_or(container.get_attribute("data-stagger"), DEFAULT_STAGGER_MS);
        apply_stagger(&direct_children(&container), interval);
    }

    let layers: Vec<(DomElement, f64)> = select(&document, "[data-parallax]")
        .into_iter()
        .map(|element| {
            let speed = parse_or(element.get_attribute("data-parallax"), DEFAULT_SPEED);
            (DomElement::new(element), speed)
        })
        .collect();
    let parallax = ParallaxDriver::install(&viewport, layers);

    let counters: Vec<(DomElement, CounterSpec)> = select(&document, "[data-counter]")
        .into_iter()
        .filter_map(|element| {
            let target = parse_opt(element.get_attribute("data-counter"))?;
            let spec = CounterSpec {
                target,
                duration_ms: parse_or(element.get_attribute("data-duration"), DEFAULT_DURATION_MS),
                suffix: element.get_attribute("data-suffix").unwrap_or_default(),
            };
            Some((DomElement::new(element), spec))
        })
        .collect();
    let counters = CounterAnimator::install(&viewport, counters);

    debug!(
        "animations wired: reveal={} parallax={} counters={}",
        reveal.is_some(),
        parallax.is_some(),
        counters.is_some()
    );

    Some(PageAnimations {
        _viewport: viewport,
        _reveal: reveal,
        _parallax: parallax,
        _counters: counters,
    })
}

fn select(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut matches = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                matches.push(element);
            }
        }
    }
    matches
}

fn direct_children(container: &HtmlElement) -> Vec<DomElement> {
    let children = container.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .map(DomElement::new)
        .collect()
}
