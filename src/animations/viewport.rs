use std::rc::Rc;

/// Mutations the animation drivers apply to a page element.
pub trait AnimationTarget: Clone + PartialEq + 'static {
    fn add_class(&self, class: &str);
    fn set_translation_y(&self, px: f64);
    fn set_transition_delay(&self, delay_ms: u32);
    fn set_text(&self, text: &str);
}

/// How much of an element must be on screen before it counts as visible,
/// and how far the viewport's bottom edge is pulled in while judging that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityPolicy {
    pub threshold: f64,
    pub bottom_margin_px: i32,
}

/// Host capabilities the drivers run against. The browser implementation
/// lives in `dom`; tests drive a fake with a manual clock and frame queue.
pub trait Viewport {
    type Element: AnimationTarget;

    /// Start delivering visibility transitions for `element` under `policy`
    /// until the returned subscription is cancelled.
    fn observe(
        &self,
        policy: VisibilityPolicy,
        element: &Self::Element,
        on_change: Rc<dyn Fn(bool)>,
    ) -> Subscription;

    fn on_scroll(&self, callback: Rc<dyn Fn()>) -> Subscription;

    /// Run `callback` on the next animation frame, passing the frame timestamp.
    fn schedule_frame(&self, callback: Box<dyn FnOnce(f64)>);

    fn scroll_offset(&self) -> f64;

    /// Monotonic milliseconds, same timebase as the frame timestamps.
    fn now(&self) -> f64;
}

/// Handle for an `observe`/`on_scroll` registration. Cancels on drop;
/// `cancel` makes the teardown explicit at call sites that hand the
/// handle back mid-callback.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to tear down, for hosts that could not
    /// register the requested observation.
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    pub fn cancel(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::Subscription;

    #[test]
    fn cancel_runs_teardown_once() {
        let calls = Rc::new(Cell::new(0));
        let subscription = Subscription::new({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        });
        subscription.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_runs_teardown() {
        let calls = Rc::new(Cell::new(0));
        {
            let _subscription = Subscription::new({
                let calls = Rc::clone(&calls);
                move || calls.set(calls.get() + 1)
            });
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn noop_tears_down_nothing() {
        Subscription::noop().cancel();
    }
}
