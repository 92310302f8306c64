use super::viewport::AnimationTarget;

pub const DEFAULT_STAGGER_MS: u32 = 100;

/// Spread a container's children across time: child N transitions N
/// intervals after child 0. Runs once against the children present at
/// initialization; children added later receive no delay.
pub fn apply_stagger<T: AnimationTarget>(children: &[T], interval_ms: u32) {
    for (index, child) in children.iter().enumerate() {
        child.set_transition_delay(index as u32 * interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::FakeElement;
    use super::apply_stagger;

    #[test]
    fn delays_grow_by_interval_in_document_order() {
        let children: Vec<FakeElement> = (0..4).map(|_| FakeElement::new()).collect();
        apply_stagger(&children, 150);

        let delays: Vec<_> = children
            .iter()
            .map(|child| child.transition_delay_ms().unwrap())
            .collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
    }

    #[test]
    fn no_children_is_a_noop() {
        apply_stagger::<FakeElement>(&[], 150);
    }

    #[test]
    fn zero_interval_collapses_all_delays() {
        let children: Vec<FakeElement> = (0..3).map(|_| FakeElement::new()).collect();
        apply_stagger(&children, 0);
        assert!(children
            .iter()
            .all(|child| child.transition_delay_ms() == Some(0)));
    }
}
