use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::viewport::{AnimationTarget, Subscription, Viewport, VisibilityPolicy};

/// A live page element the drivers may mutate.
#[derive(Clone, PartialEq)]
pub struct DomElement(HtmlElement);

impl DomElement {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl AnimationTarget for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn set_translation_y(&self, px: f64) {
        let _ = self
            .0
            .style()
            .set_property("transform", &format!("translateY({}px)", px));
    }

    fn set_transition_delay(&self, delay_ms: u32) {
        let _ = self
            .0
            .style()
            .set_property("transition-delay", &format!("{}ms", delay_ms));
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

type TargetList = Rc<RefCell<Vec<(HtmlElement, Rc<dyn Fn(bool)>)>>>;

/// One `IntersectionObserver` plus the elements registered under its policy.
/// The observer callback fans each entry out to the element's own callback.
struct VisibilityWatcher {
    policy: VisibilityPolicy,
    observer: IntersectionObserver,
    targets: TargetList,
    _on_intersect: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityWatcher {
    fn new(policy: VisibilityPolicy) -> Option<Self> {
        let targets: TargetList = Rc::new(RefCell::new(Vec::new()));
        let on_intersect = {
            let targets = Rc::clone(&targets);
            Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    // Clone the callback out before invoking it so a callback
                    // that cancels its own subscription can re-borrow the list.
                    let notify = targets
                        .borrow()
                        .iter()
                        .find(|(element, _)| AsRef::<Element>::as_ref(element) == &target)
                        .map(|(_, callback)| Rc::clone(callback));
                    if let Some(notify) = notify {
                        notify(entry.is_intersecting());
                    }
                }
            })
        };
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(policy.threshold));
        options.set_root_margin(&format!("0px 0px {}px 0px", policy.bottom_margin_px));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .ok()?;
        Some(Self {
            policy,
            observer,
            targets,
            _on_intersect: on_intersect,
        })
    }

    fn watch(&self, element: &HtmlElement, on_change: Rc<dyn Fn(bool)>) -> Subscription {
        self.targets
            .borrow_mut()
            .push((element.clone(), on_change));
        self.observer.observe(element);

        let observer = self.observer.clone();
        let targets = Rc::clone(&self.targets);
        let element = element.clone();
        Subscription::new(move || {
            observer.unobserve(&element);
            targets.borrow_mut().retain(|(el, _)| el != &element);
        })
    }
}

/// Browser-backed viewport. Watchers are created lazily, one per distinct
/// policy, and live until the viewport is dropped.
pub struct DomViewport {
    window: web_sys::Window,
    watchers: RefCell<Vec<VisibilityWatcher>>,
}

impl DomViewport {
    pub fn new() -> Option<Rc<Self>> {
        let window = web_sys::window()?;
        Some(Rc::new(Self {
            window,
            watchers: RefCell::new(Vec::new()),
        }))
    }
}

impl Viewport for DomViewport {
    type Element = DomElement;

    fn observe(
        &self,
        policy: VisibilityPolicy,
        element: &DomElement,
        on_change: Rc<dyn Fn(bool)>,
    ) -> Subscription {
        let mut watchers = self.watchers.borrow_mut();
        let position = match watchers.iter().position(|watcher| watcher.policy == policy) {
            Some(position) => position,
            None => match VisibilityWatcher::new(policy) {
                Some(watcher) => {
                    watchers.push(watcher);
                    watchers.len() - 1
                }
                None => return Subscription::noop(),
            },
        };
        watchers[position].watch(&element.0, on_change)
    }

    fn on_scroll(&self, callback: Rc<dyn Fn()>) -> Subscription {
        let closure = Closure::<dyn FnMut()>::new(move || callback());
        if self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return Subscription::noop();
        }
        let window = self.window.clone();
        Subscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        })
    }

    fn schedule_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let frame = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        let _ = self.window.request_animation_frame(frame.unchecked_ref());
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }
}

impl Drop for DomViewport {
    fn drop(&mut self) {
        for watcher in self.watchers.borrow().iter() {
            watcher.observer.disconnect();
        }
    }
}
