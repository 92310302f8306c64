use std::cell::RefCell;
use std::rc::Rc;

use super::viewport::{AnimationTarget, Subscription, Viewport, VisibilityPolicy};

pub const DEFAULT_DURATION_MS: u32 = 2_000;

// Counters wait for half the element; no early trigger margin.
const POLICY: VisibilityPolicy = VisibilityPolicy {
    threshold: 0.5,
    bottom_margin_px: 0,
};

/// What a statistic counts up to, and how.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub target: i64,
    pub duration_ms: u32,
    pub suffix: String,
}

/// Runs each counter exactly once, the first time enough of it is on
/// screen. Observation stops at that instant, so an element scrolling out
/// and back in never re-counts.
pub struct CounterAnimator {
    _subscriptions: Vec<Rc<RefCell<Option<Subscription>>>>,
}

impl CounterAnimator {
    pub fn install<V: Viewport + 'static>(
        viewport: &Rc<V>,
        counters: Vec<(V::Element, CounterSpec)>,
    ) -> Option<Self> {
        if counters.is_empty() {
            return None;
        }
        let mut subscriptions = Vec::with_capacity(counters.len());
        for (element, spec) in counters {
            let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
            let subscription = viewport.observe(POLICY, &element, {
                let weak = Rc::downgrade(viewport);
                let slot = Rc::clone(&slot);
                let element = element.clone();
                Rc::new(move |visible| {
                    if !visible {
                        return;
                    }
                    // First positive transition only; the slot stays empty
                    // for good, so a late-delivered entry cannot restart us.
                    let Some(subscription) = slot.borrow_mut().take() else {
                        return;
                    };
                    subscription.cancel();
                    if let Some(viewport) = weak.upgrade() {
                        let started = viewport.now();
                        tick(viewport, element.clone(), Rc::new(spec.clone()), started);
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

fn tick<V: Viewport + 'static>(viewport: Rc<V>, element: V::Element, spec: Rc<CounterSpec>, started: f64) {
    let scheduler = Rc::clone(&viewport);
    scheduler.schedule_frame(Box::new(move |timestamp| {
        let elapsed = (timestamp - started).max(0.0);
        let progress = (elapsed / f64::from(spec.duration_ms)).min(1.0);
        let current = (spec.target as f64 * ease_out_cubic(progress)).floor() as i64;
        element.set_text(&format!("{}{}", group_thousands(current), spec.suffix));
        if progress < 1.0 {
            tick(viewport, element, spec, started);
        }
    }));
}

/// Cubic ease-out: fast start, slow landing. Combined with the floor in
/// `tick`, intermediate values never overshoot the target; the frame where
/// progress reaches 1 writes it exactly.
fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Comma thousands grouping, the way `toLocaleString` renders en dashboards.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::{FakeElement, FakeViewport};
    use super::{group_thousands, CounterAnimator, CounterSpec};

    fn spec(target: i64, duration_ms: u32, suffix: &str) -> CounterSpec {
        CounterSpec {
            target,
            duration_ms,
            suffix: suffix.to_string(),
        }
    }

    fn parse_value(text: &str, suffix: &str) -> i64 {
        text.trim_end_matches(suffix).replace(',', "").parse().unwrap()
    }

    #[test]
    fn untouched_until_visible() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _animator =
            CounterAnimator::install(&viewport, vec![(element.clone(), spec(1000, 2000, "+"))]);

        assert!(element.is_untouched());
        assert_eq!(viewport.pending_frames(), 0);
    }

    #[test]
    fn counts_up_to_exact_target_then_goes_quiet() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _animator =
            CounterAnimator::install(&viewport, vec![(element.clone(), spec(1000, 2000, "+"))]);

        viewport.set_visible(&element, true);
        assert_eq!(viewport.pending_frames(), 1);

        // 16 ms frame cadence until the run completes.
        while viewport.run_frame() {
            viewport.advance(16.0);
        }

        let texts = element.texts();
        assert!(!texts.is_empty());
        assert_eq!(texts.last().unwrap(), "1,000+");

        let values: Vec<i64> = texts.iter().map(|text| parse_value(text, "+")).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.windows(2).any(|pair| pair[0] < pair[1]));
        assert!(values.iter().all(|value| *value <= 1000));

        // Nothing scheduled after the terminal frame.
        assert_eq!(viewport.pending_frames(), 0);
    }

    #[test]
    fn intermediate_values_truncate_below_target() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _animator =
            CounterAnimator::install(&viewport, vec![(element.clone(), spec(1000, 2000, ""))]);

        viewport.set_visible(&element, true);
        viewport.run_frame();
        viewport.advance(500.0);
        viewport.run_frame();

        // progress 0.25, eased = 1 - 0.75^3 = 0.578125, floored.
        assert_eq!(element.text().unwrap(), "578");
    }

    #[test]
    fn runs_once_despite_visibility_oscillation() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _animator =
            CounterAnimator::install(&viewport, vec![(element.clone(), spec(500, 100, ""))]);

        viewport.set_visible(&element, true);
        assert_eq!(viewport.active_observations(&element), 0);

        viewport.set_visible(&element, false);
        viewport.set_visible(&element, true);
        assert_eq!(viewport.pending_frames(), 1);

        while viewport.run_frame() {
            viewport.advance(50.0);
        }
        let writes = element.texts().len();
        assert_eq!(element.text().unwrap(), "500");

        viewport.set_visible(&element, true);
        assert_eq!(viewport.pending_frames(), 0);
        assert_eq!(element.texts().len(), writes);
    }

    #[test]
    fn zero_duration_completes_in_a_single_frame() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _animator =
            CounterAnimator::install(&viewport, vec![(element.clone(), spec(250, 0, "+"))]);

        viewport.set_visible(&element, true);
        viewport.run_frame();

        assert_eq!(element.text().unwrap(), "250+");
        assert_eq!(viewport.pending_frames(), 0);
    }

    #[test]
    fn waits_for_half_visibility() {
        let viewport = FakeViewport::new();
        let element = FakeElement::new();
        let _animator =
            CounterAnimator::install(&viewport, vec![(element.clone(), spec(10, 100, ""))]);

        let policies = viewport.observed_policies(&element);
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].threshold, 0.5);
        assert_eq!(policies[0].bottom_margin_px, 0);
    }

    #[test]
    fn no_counters_is_a_noop() {
        let viewport = FakeViewport::new();
        assert!(CounterAnimator::install(&viewport, Vec::new()).is_none());
    }

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-42000), "-42,000");
    }
}
