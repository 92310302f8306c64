use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::viewport::{AnimationTarget, Subscription, Viewport, VisibilityPolicy};

#[derive(Default)]
struct ElementState {
    classes: Vec<String>,
    class_writes: usize,
    texts: Vec<String>,
    translation: Option<f64>,
    translation_writes: usize,
    transition_delay_ms: Option<u32>,
}

/// Records every mutation a driver applies, for assertions.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    pub fn class_writes(&self) -> usize {
        self.0.borrow().class_writes
    }

    pub fn text(&self) -> Option<String> {
        self.0.borrow().texts.last().cloned()
    }

    /// Every text value ever written, in order.
    pub fn texts(&self) -> Vec<String> {
        self.0.borrow().texts.clone()
    }

    pub fn translation(&self) -> Option<f64> {
        self.0.borrow().translation
    }

    pub fn translation_writes(&self) -> usize {
        self.0.borrow().translation_writes
    }

    pub fn transition_delay_ms(&self) -> Option<u32> {
        self.0.borrow().transition_delay_ms
    }

    pub fn is_untouched(&self) -> bool {
        let state = self.0.borrow();
        state.classes.is_empty()
            && state.texts.is_empty()
            && state.translation.is_none()
            && state.transition_delay_ms.is_none()
    }
}

impl AnimationTarget for FakeElement {
    fn add_class(&self, class: &str) {
        let mut state = self.0.borrow_mut();
        state.class_writes += 1;
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn set_translation_y(&self, px: f64) {
        let mut state = self.0.borrow_mut();
        state.translation = Some(px);
        state.translation_writes += 1;
    }

    fn set_transition_delay(&self, delay_ms: u32) {
        self.0.borrow_mut().transition_delay_ms = Some(delay_ms);
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().texts.push(text.to_string());
    }
}

struct Observation {
    policy: VisibilityPolicy,
    element: FakeElement,
    on_change: Rc<dyn Fn(bool)>,
    active: Rc<Cell<bool>>,
}

/// Host fake with a manual clock, an explicit frame queue, and scripted
/// visibility/scroll delivery.
#[derive(Default)]
pub struct FakeViewport {
    clock: Cell<f64>,
    scroll: Cell<f64>,
    frames: RefCell<VecDeque<Box<dyn FnOnce(f64)>>>,
    observations: RefCell<Vec<Observation>>,
    scroll_listeners: RefCell<Vec<(Rc<dyn Fn()>, Rc<Cell<bool>>)>>,
}

impl FakeViewport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn advance(&self, ms: f64) {
        self.clock.set(self.clock.get() + ms);
    }

    /// Deliver the oldest pending animation frame at the current clock.
    /// Returns false once the queue is empty.
    pub fn run_frame(&self) -> bool {
        let frame = self.frames.borrow_mut().pop_front();
        match frame {
            Some(frame) => {
                frame(self.clock.get());
                true
            }
            None => false,
        }
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Deliver a visibility transition for `element` to every active watcher.
    pub fn set_visible(&self, element: &FakeElement, visible: bool) {
        let callbacks: Vec<_> = self
            .observations
            .borrow()
            .iter()
            .filter(|observation| observation.active.get() && observation.element == *element)
            .map(|observation| Rc::clone(&observation.on_change))
            .collect();
        for callback in callbacks {
            callback(visible);
        }
    }

    /// Move the scroll position and notify every active scroll listener.
    pub fn emit_scroll(&self, y: f64) {
        self.scroll.set(y);
        let listeners: Vec<_> = self
            .scroll_listeners
            .borrow()
            .iter()
            .filter(|(_, active)| active.get())
            .map(|(callback, _)| Rc::clone(callback))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn active_observations(&self, element: &FakeElement) -> usize {
        self.observations
            .borrow()
            .iter()
            .filter(|observation| observation.active.get() && observation.element == *element)
            .count()
    }

    pub fn observed_policies(&self, element: &FakeElement) -> Vec<VisibilityPolicy> {
        self.observations
            .borrow()
            .iter()
            .filter(|observation| observation.element == *element)
            .map(|observation| observation.policy)
            .collect()
    }
}

impl Viewport for FakeViewport {
    type Element = FakeElement;

    fn observe(
        &self,
        policy: VisibilityPolicy,
        element: &FakeElement,
        on_change: Rc<dyn Fn(bool)>,
    ) -> Subscription {
        let active = Rc::new(Cell::new(true));
        self.observations.borrow_mut().push(Observation {
            policy,
            element: element.clone(),
            on_change,
            active: Rc::clone(&active),
        });
        Subscription::new(move || active.set(false))
    }

    fn on_scroll(&self, callback: Rc<dyn Fn()>) -> Subscription {
        let active = Rc::new(Cell::new(true));
        self.scroll_listeners
            .borrow_mut()
            .push((callback, Rc::clone(&active)));
        Subscription::new(move || active.set(false))
    }

    fn schedule_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        self.frames.borrow_mut().push_back(callback);
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll.get()
    }

    fn now(&self) -> f64 {
        self.clock.get()
    }
}
