use std::cell::RefCell;
use std::rc::Rc;

use super::viewport::{AnimationTarget, Subscription, Viewport, VisibilityPolicy};

/// Class the stylesheet keys entrance transitions off of.
pub const REVEALED_CLASS: &str = "animate-in";

// Trip slightly before the element reaches the exact viewport edge.
const POLICY: VisibilityPolicy = VisibilityPolicy {
    threshold: 0.1,
    bottom_margin_px: -50,
};

/// Tags elements with the revealed class the first time they come
/// sufficiently on screen. The class is never taken back off; once an
/// element has revealed, its watcher has nothing more to tell us, so the
/// subscription is cancelled on the spot.
pub struct RevealTrigger {
    _subscriptions: Vec<Rc<RefCell<Option<Subscription>>>>,
}

impl RevealTrigger {
    pub fn install<V: Viewport>(viewport: &V, elements: Vec<V::Element>) -> Option<Self> {
        if elements.is_empty() {
            return None;
        }
        let mut subscriptions = Vec::with_capacity(elements.len());
        for element in elements {
            let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
            let subscription = viewport.observe(POLICY, &element, {
                let element = element.clone();
                let slot = Rc::clone(&slot);
                Rc::new(move |visible| {
                    if !visible {
                        return;
                    }
                    element.add_class(REVEALED_CLASS);
                    if let Some(subscription) = slot.borrow_mut().take() {
                        subscription.cancel();
                    }
                })
            });
            *slot.borrow_mut() = Some(subscription);
            subscriptions.push(slot);
        }
        Some(Self {
            _subscriptions: subscriptions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::{FakeElement, FakeViewport};
    use super::{RevealTrigger, REVEALED_CLASS};

    #[test]
    fn untouched_until_visible() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _trigger = RevealTrigger::install(viewport.as_ref(), vec![element.clone()]);

        assert!(element.is_untouched());
    }

    #[test]
    fn reveals_once_and_stops_watching() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _trigger = RevealTrigger::install(viewport.as_ref(), vec![element.clone()]);

        viewport.set_visible(&element, true);
        assert!(element.has_class(REVEALED_CLASS));
        assert_eq!(element.class_writes(), 1);
        assert_eq!(viewport.active_observations(&element), 0);
    }

    #[test]
    fn reveal_survives_later_transitions() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _trigger = RevealTrigger::install(viewport.as_ref(), vec![element.clone()]);

        viewport.set_visible(&element, true);
        viewport.set_visible(&element, false);
        viewport.set_visible(&element, true);

        assert!(element.has_class(REVEALED_CLASS));
        assert_eq!(element.class_writes(), 1);
    }

    #[test]
    fn hidden_transition_alone_reveals_nothing() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _trigger = RevealTrigger::install(viewport.as_ref(), vec![element.clone()]);

        viewport.set_visible(&element, false);
        assert!(element.is_untouched());
        assert_eq!(viewport.active_observations(&element), 1);
    }

    #[test]
    fn empty_set_is_a_noop() {
        let viewport = FakeViewport::new();
        assert!(RevealTrigger::install(viewport.as_ref(), Vec::new()).is_none());
    }
}
