//! # Carousel
//!
//! `CarouselController` owns the active slide index over a fixed, non-empty
//! list of items. The auto-advance timer, the global key listener and the
//! prev/next/dot buttons all end up in the same two operations, `advance`
//! and `select_index`, so automatic and manual navigation share one index
//! semantics.
//!
//! Concurrency policy is last-write-wins: a timer tick and a key press are
//! serialized by the event loop and each simply moves the index from
//! wherever the previous one left it. Manual input does not pause the timer.
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use folio_core::carousel::CarouselController;
//!
//! let c = CarouselController::new(NonZeroUsize::new(3).unwrap());
//! c.on_timer_tick();
//! assert_eq!(c.active_index(), 1);
//! c.advance(-1);
//! c.advance(-1);
//! assert_eq!(c.active_index(), 2);
//! ```

use std::num::NonZeroUsize;

use crate::content::CarouselItem;
use crate::input::{Key, KeyEvent};
use crate::{Dispose, Signal, signal};

/// Read-only view of the carousel handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub active_index: usize,
    pub len: usize,
}

impl CarouselSnapshot {
    /// Horizontal translation of the slide strip, in percent of one slide.
    pub fn offset_percent(&self) -> f64 {
        self.active_index as f64 * 100.0
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }
}

pub struct CarouselController {
    len: NonZeroUsize,
    state: Signal<CarouselSnapshot>,
    next_key: Key,
    previous_key: Key,
}

impl CarouselController {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            state: signal(CarouselSnapshot {
                active_index: 0,
                len: len.get(),
            }),
            next_key: Key::ArrowRight,
            previous_key: Key::ArrowLeft,
        }
    }

    /// `None` for an empty item list.
    pub fn for_items(items: &[CarouselItem]) -> Option<Self> {
        NonZeroUsize::new(items.len()).map(Self::new)
    }

    pub fn with_keys(mut self, next: Key, previous: Key) -> Self {
        self.next_key = next;
        self.previous_key = previous;
        self
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn active_index(&self) -> usize {
        self.state.get().active_index
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.state.get()
    }

    /// Move by `delta` slides, wrapping in both directions.
    pub fn advance(&self, delta: isize) {
        let n = self.len.get();
        // Reduce first so extreme deltas cannot overflow.
        let step = delta.rem_euclid(n as isize) as usize;
        self.set_active((self.active_index() + step) % n);
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn select_index(&self, index: usize) -> bool {
        if index >= self.len.get() {
            log::debug!(
                "carousel: ignoring select_index({index}), only {} items",
                self.len
            );
            return false;
        }
        self.set_active(index);
        true
    }

    pub fn on_timer_tick(&self) {
        self.advance(1);
    }

    /// Returns whether the key moved the carousel.
    pub fn on_key(&self, event: &KeyEvent) -> bool {
        if event.key == self.next_key {
            self.advance(1);
            true
        } else if event.key == self.previous_key {
            self.advance(-1);
            true
        } else {
            false
        }
    }

    /// Called with every new snapshot. Re-selecting the current slide does
    /// not notify.
    pub fn watch(&self, f: impl Fn(&CarouselSnapshot) + 'static) -> Dispose {
        self.state.watch(f)
    }

    fn set_active(&self, index: usize) {
        let snapshot = CarouselSnapshot {
            active_index: index,
            len: self.len.get(),
        };
        if self.state.set_if_changed(snapshot) {
            log::debug!("carousel: active slide {index}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn carousel(n: usize) -> CarouselController {
        CarouselController::new(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_advance_stays_in_bounds() {
        for n in 1..=7 {
            let c = carousel(n);
            // deterministic mixed walk
            for step in 0..50isize {
                let delta = if (step * 7 + n as isize) % 3 == 0 { -1 } else { 1 };
                c.advance(delta);
                assert!(c.active_index() < n, "n={n} step={step}");
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for n in 1..=6 {
            for start in 0..n {
                let c = carousel(n);
                assert!(c.select_index(start));
                for _ in 0..n {
                    c.advance(1);
                }
                assert_eq!(c.active_index(), start);
            }
        }
    }

    #[test]
    fn test_previous_wraps_from_zero() {
        let c = carousel(4);
        c.advance(-1);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn test_large_delta_wraps() {
        let c = carousel(3);
        c.advance(-7);
        assert_eq!(c.active_index(), 2);
        c.advance(10);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_extreme_delta_does_not_overflow() {
        let c = carousel(3);
        assert!(c.select_index(2));
        // isize::MAX is 1 mod 3, isize::MIN is 1 mod 3 (euclidean).
        c.advance(isize::MAX);
        assert_eq!(c.active_index(), 0);
        c.advance(isize::MIN);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let c = carousel(3);
        c.advance(1);
        assert!(!c.select_index(3));
        assert!(!c.select_index(usize::MAX));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_keys() {
        let c = carousel(3);
        assert!(c.on_key(&KeyEvent::new(Key::ArrowRight)));
        assert_eq!(c.active_index(), 1);
        assert!(c.on_key(&KeyEvent::new(Key::ArrowLeft)));
        assert!(c.on_key(&KeyEvent::new(Key::ArrowLeft)));
        assert_eq!(c.active_index(), 2);
        assert!(!c.on_key(&KeyEvent::new(Key::ArrowUp)));
        assert!(!c.on_key(&KeyEvent::new(Key::Character('l'))));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_custom_keys() {
        let c = carousel(3).with_keys(Key::Character('l'), Key::Character('h'));
        assert!(!c.on_key(&KeyEvent::new(Key::ArrowRight)));
        assert!(c.on_key(&KeyEvent::new(Key::Character('l'))));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_watch_only_on_change() {
        let c = carousel(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let guard = {
            let seen = seen.clone();
            c.watch(move |s| seen.borrow_mut().push(s.active_index))
        };
        c.select_index(0); // already active
        c.on_timer_tick();
        c.select_index(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);

        guard.run();
        c.advance(1);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_single_item_never_moves() {
        let c = carousel(1);
        c.advance(1);
        c.advance(-1);
        c.on_timer_tick();
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_snapshot_helpers() {
        let c = carousel(3);
        c.select_index(2);
        let s = c.snapshot();
        assert_eq!(s.offset_percent(), 200.0);
        assert!(s.is_active(2));
        assert!(!s.is_active(0));
        assert_eq!(s.len, 3);
    }

    #[test]
    fn test_for_items_rejects_empty() {
        assert!(CarouselController::for_items(&[]).is_none());
    }
}
