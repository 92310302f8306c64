use std::cell::Cell;
use std::rc::Rc;

use super::viewport::{AnimationTarget, Subscription, Viewport};

pub const DEFAULT_SPEED: f64 = 0.5;

/// Scroll-linked vertical translation for backdrop layers.
///
/// Scroll notifications are coalesced to animation-frame cadence: while a
/// frame is pending, further notifications are dropped rather than queued,
/// and the frame samples the scroll offset when it runs, so only the latest
/// position matters. The pending flag is cleared inside the frame callback
/// itself, which keeps at most one callback in flight.
pub struct ParallaxDriver {
    _scroll: Subscription,
}

impl ParallaxDriver {
    pub fn install<V: Viewport + 'static>(
        viewport: &Rc<V>,
        layers: Vec<(V::Element, f64)>,
    ) -> Option<Self> {
        if layers.is_empty() {
            return None;
        }
        let layers = Rc::new(layers);
        let frame_pending = Rc::new(Cell::new(false));
        let weak = Rc::downgrade(viewport);
        let scroll = viewport.on_scroll(Rc::new(move || {
            let Some(viewport) = weak.upgrade() else {
                return;
            };
            if frame_pending.get() {
                return;
            }
            frame_pending.set(true);
            let frame_pending = Rc::clone(&frame_pending);
            let layers = Rc::clone(&layers);
            let sampler = Rc::clone(&viewport);
            viewport.schedule_frame(Box::new(move |_| {
                let scrolled = sampler.scroll_offset();
                for (element, speed) in layers.iter() {
                    element.set_translation_y(-(scrolled * speed));
                }
                frame_pending.set(false);
            }));
        }));
        Some(Self { _scroll: scroll })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::{FakeElement, FakeViewport};
    use super::ParallaxDriver;

    #[test]
    fn translation_is_scroll_times_negative_speed() {
        let viewport = FakeViewport::new();
        let layer = FakeElement::new();
        let _driver = ParallaxDriver::install(&viewport, vec![(layer.clone(), 0.5)]);

        viewport.emit_scroll(200.0);
        viewport.run_frame();

        assert_eq!(layer.translation(), Some(-100.0));
    }

    #[test]
    fn untouched_before_first_scroll() {
        let viewport = FakeViewport::new();
        let layer = FakeElement::new();
        let _driver = ParallaxDriver::install(&viewport, vec![(layer.clone(), 0.5)]);

        assert!(layer.is_untouched());
        assert_eq!(viewport.pending_frames(), 0);
    }

    #[test]
    fn scroll_bursts_coalesce_into_one_frame() {
        let viewport = FakeViewport::new();
        let layer = FakeElement::new();
        let _driver = ParallaxDriver::install(&viewport, vec![(layer.clone(), 1.0)]);

        for y in [10.0, 40.0, 90.0, 160.0, 250.0] {
            viewport.emit_scroll(y);
        }
        assert_eq!(viewport.pending_frames(), 1);

        viewport.run_frame();
        assert_eq!(layer.translation_writes(), 1);
        // The frame samples the offset when it runs, so only the last
        // position of the burst is ever applied.
        assert_eq!(layer.translation(), Some(-250.0));
    }

    #[test]
    fn next_scroll_after_a_frame_schedules_again() {
        let viewport = FakeViewport::new();
        let layer = FakeElement::new();
        let _driver = ParallaxDriver::install(&viewport, vec![(layer.clone(), 1.0)]);

        viewport.emit_scroll(100.0);
        viewport.run_frame();
        viewport.emit_scroll(300.0);
        assert_eq!(viewport.pending_frames(), 1);

        viewport.run_frame();
        assert_eq!(layer.translation(), Some(-300.0));
        assert_eq!(layer.translation_writes(), 2);
    }

    #[test]
    fn every_layer_moves_at_its_own_speed() {
        let viewport = FakeViewport::new();
        let slow = FakeElement::new();
        let fast = FakeElement::new();
        let _driver =
            ParallaxDriver::install(&viewport, vec![(slow.clone(), 0.25), (fast.clone(), 0.75)]);

        viewport.emit_scroll(400.0);
        viewport.run_frame();

        assert_eq!(slow.translation(), Some(-100.0));
        assert_eq!(fast.translation(), Some(-300.0));
    }

    #[test]
    fn no_layers_is_a_noop() {
        let viewport = FakeViewport::new();
        assert!(ParallaxDriver::install::<FakeViewport>(&viewport, Vec::new()).is_none());
    }
}
