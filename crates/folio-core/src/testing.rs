//! Deterministic host for tests.
//!
//! `TestHost` implements every host seam in memory: viewport metrics and the
//! element table are set directly, the key/value store can be told to fail,
//! and timers only move when the test calls [`TestHost::advance_time`].
//! Live registrations are kept in a slot map so tests can check that a
//! teardown really removed them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slotmap::SlotMap;
use web_time::Duration;

use crate::Dispose;
use crate::carousel::CarouselSnapshot;
use crate::error::StoreError;
use crate::host::{
    Callback, ElementLookup, EventHost, KeyCallback, KeyValueStore, Viewport,
    ViewportMetrics,
};
use crate::input::{Key, KeyEvent};
use crate::theme::ThemePreference;
use crate::view_root::Presenter;

slotmap::new_key_type! {
    pub struct RegistrationKey;
}

enum Registration {
    Scroll(Rc<dyn Fn()>),
    Key(Rc<dyn Fn(&KeyEvent)>),
    Interval {
        period: Duration,
        elapsed: Duration,
        f: Rc<dyn Fn()>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreMode {
    #[default]
    Normal,
    /// No store at all (private browsing, disabled storage).
    Unavailable,
    FailReads,
    /// Reads work, writes fail (quota exceeded).
    FailWrites,
}

#[derive(Default)]
struct State {
    metrics: ViewportMetrics,
    elements: HashMap<String, f64>,
    store: HashMap<String, String>,
    store_mode: StoreMode,
    store_writes: usize,
    scroll_requests: Vec<f64>,
    registrations: SlotMap<RegistrationKey, Registration>,
}

#[derive(Default)]
pub struct TestHost {
    state: Rc<RefCell<State>>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    // --- viewport ---

    pub fn set_metrics(&self, metrics: ViewportMetrics) {
        self.state.borrow_mut().metrics = metrics;
    }

    pub fn set_scroll_top(&self, top: f64) {
        self.state.borrow_mut().metrics.scroll_top = top;
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.state.borrow().scroll_requests.clone()
    }

    // --- elements ---

    pub fn add_element(&self, id: &str, top: f64) {
        self.state.borrow_mut().elements.insert(id.to_string(), top);
    }

    pub fn remove_element(&self, id: &str) {
        self.state.borrow_mut().elements.remove(id);
    }

    // --- store ---

    /// Seed the store directly, bypassing the failure mode and write count.
    pub fn put(&self, key: &str, value: &str) {
        self.state
            .borrow_mut()
            .store
            .insert(key.to_string(), value.to_string());
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.borrow().store.get(key).cloned()
    }

    pub fn set_store_mode(&self, mode: StoreMode) {
        self.state.borrow_mut().store_mode = mode;
    }

    /// Successful writes through [`KeyValueStore::set`].
    pub fn store_writes(&self) -> usize {
        self.state.borrow().store_writes
    }

    // --- registrations ---

    pub fn active_listeners(&self) -> usize {
        self.state
            .borrow()
            .registrations
            .values()
            .filter(|r| !matches!(r, Registration::Interval { .. }))
            .count()
    }

    pub fn active_timers(&self) -> usize {
        self.state
            .borrow()
            .registrations
            .values()
            .filter(|r| matches!(r, Registration::Interval { .. }))
            .count()
    }

    // --- event injection ---

    /// Move the viewport and dispatch a scroll event.
    pub fn scroll_to_offset(&self, top: f64) {
        self.set_scroll_top(top);
        self.fire_scroll();
    }

    /// Change the geometry and dispatch it like a resize.
    pub fn resize(&self, metrics: ViewportMetrics) {
        self.set_metrics(metrics);
        self.fire_scroll();
    }

    pub fn fire_scroll(&self) -> usize {
        let live: Vec<(RegistrationKey, Rc<dyn Fn()>)> = self
            .state
            .borrow()
            .registrations
            .iter()
            .filter_map(|(k, r)| match r {
                Registration::Scroll(f) => Some((k, f.clone())),
                _ => None,
            })
            .collect();
        self.dispatch(live)
    }

    pub fn press_key(&self, key: Key) -> usize {
        self.dispatch_key(&KeyEvent::new(key))
    }

    pub fn dispatch_key(&self, event: &KeyEvent) -> usize {
        let live: Vec<(RegistrationKey, Rc<dyn Fn(&KeyEvent)>)> = self
            .state
            .borrow()
            .registrations
            .iter()
            .filter_map(|(k, r)| match r {
                Registration::Key(f) => Some((k, f.clone())),
                _ => None,
            })
            .collect();
        let mut ran = 0;
        for (key, f) in live {
            if self.is_live(key) {
                f(event);
                ran += 1;
            }
        }
        ran
    }

    /// Fire every live timer once, regardless of elapsed time.
    pub fn tick_timers(&self) -> usize {
        let live: Vec<(RegistrationKey, Rc<dyn Fn()>)> = self
            .state
            .borrow()
            .registrations
            .iter()
            .filter_map(|(k, r)| match r {
                Registration::Interval { f, .. } => Some((k, f.clone())),
                _ => None,
            })
            .collect();
        self.dispatch(live)
    }

    /// Advance the fake clock, firing timers as their periods elapse.
    /// Returns the number of timer callbacks run.
    pub fn advance_time(&self, by: Duration) -> usize {
        let mut remaining = by;
        let mut fired = 0;
        loop {
            let next_due = self
                .state
                .borrow()
                .registrations
                .values()
                .filter_map(|r| match r {
                    Registration::Interval {
                        period, elapsed, ..
                    } => Some(period.saturating_sub(*elapsed)),
                    _ => None,
                })
                .min();

            let Some(step) = next_due.filter(|due| *due <= remaining) else {
                self.elapse(remaining);
                return fired;
            };
            remaining -= step;
            self.elapse(step);

            let due: Vec<(RegistrationKey, Rc<dyn Fn()>)> = {
                let mut st = self.state.borrow_mut();
                st.registrations
                    .iter_mut()
                    .filter_map(|(k, r)| match r {
                        Registration::Interval {
                            period,
                            elapsed,
                            f,
                        } if *elapsed >= *period => {
                            *elapsed -= *period;
                            Some((k, f.clone()))
                        }
                        _ => None,
                    })
                    .collect()
            };
            fired += self.dispatch(due);
        }
    }

    fn elapse(&self, by: Duration) {
        for r in self.state.borrow_mut().registrations.values_mut() {
            if let Registration::Interval { elapsed, .. } = r {
                *elapsed += by;
            }
        }
    }

    // A callback may tear down later registrations in the same batch; those
    // are skipped.
    fn dispatch(&self, batch: Vec<(RegistrationKey, Rc<dyn Fn()>)>) -> usize {
        let mut ran = 0;
        for (key, f) in batch {
            if self.is_live(key) {
                f();
                ran += 1;
            }
        }
        ran
    }

    fn is_live(&self, key: RegistrationKey) -> bool {
        self.state.borrow().registrations.contains_key(key)
    }

    fn register(&self, r: Registration) -> Dispose {
        let key = self.state.borrow_mut().registrations.insert(r);
        let weak = Rc::downgrade(&self.state);
        Dispose::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().registrations.remove(key);
            }
        })
    }
}

impl Viewport for TestHost {
    fn metrics(&self) -> ViewportMetrics {
        self.state.borrow().metrics
    }

    fn scroll_to(&self, top: f64) {
        self.state.borrow_mut().scroll_requests.push(top);
    }
}

impl ElementLookup for TestHost {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.state.borrow().elements.get(id).copied()
    }
}

impl KeyValueStore for TestHost {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let st = self.state.borrow();
        match st.store_mode {
            StoreMode::Unavailable => Err(StoreError::Unavailable("storage disabled".into())),
            StoreMode::FailReads => Err(StoreError::Unavailable("read refused".into())),
            StoreMode::Normal | StoreMode::FailWrites => Ok(st.store.get(key).cloned()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut st = self.state.borrow_mut();
        match st.store_mode {
            StoreMode::Unavailable => Err(StoreError::Unavailable("storage disabled".into())),
            StoreMode::FailWrites => Err(StoreError::Write("quota exceeded".into())),
            StoreMode::Normal | StoreMode::FailReads => {
                st.store.insert(key.to_string(), value.to_string());
                st.store_writes += 1;
                Ok(())
            }
        }
    }
}

impl EventHost for TestHost {
    fn on_scroll(&self, f: Callback) -> Dispose {
        self.register(Registration::Scroll(Rc::from(f)))
    }

    fn on_key_down(&self, f: KeyCallback) -> Dispose {
        self.register(Registration::Key(Rc::from(f)))
    }

    fn set_interval(&self, period: Duration, f: Callback) -> Dispose {
        // Browsers clamp tiny intervals too; a zero period would never let time advance.
        let period = period.max(Duration::from_millis(1));
        self.register(Registration::Interval {
            period,
            elapsed: Duration::ZERO,
            f: Rc::from(f),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PresenterCall {
    Progress(f64),
    Carousel(CarouselSnapshot),
    Theme(ThemePreference),
    Menu(bool),
}

/// Presenter that records every call in order.
#[derive(Default)]
pub struct RecordingPresenter {
    calls: RefCell<Vec<PresenterCall>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.borrow().clone()
    }

    pub fn take(&self) -> Vec<PresenterCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn last_progress(&self) -> Option<f64> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            PresenterCall::Progress(p) => Some(*p),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn progress(&self, percent: f64) {
        self.calls.borrow_mut().push(PresenterCall::Progress(percent));
    }

    fn carousel(&self, snapshot: CarouselSnapshot) {
        self.calls.borrow_mut().push(PresenterCall::Carousel(snapshot));
    }

    fn theme(&self, theme: ThemePreference) {
        self.calls.borrow_mut().push(PresenterCall::Theme(theme));
    }

    fn menu(&self, open: bool) {
        self.calls.borrow_mut().push(PresenterCall::Menu(open));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_interval_fires_per_period() {
        let host = TestHost::new();
        let count = Rc::new(Cell::new(0));
        let _d = {
            let count = count.clone();
            host.set_interval(
                Duration::from_secs(5),
                Box::new(move || count.set(count.get() + 1)),
            )
        };
        assert_eq!(host.advance_time(Duration::from_millis(4_999)), 0);
        assert_eq!(host.advance_time(Duration::from_millis(1)), 1);
        assert_eq!(host.advance_time(Duration::from_secs(12)), 2);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_dispose_removes_registration() {
        let host = TestHost::new();
        let d = host.on_scroll(Box::new(|| {}));
        let k = host.on_key_down(Box::new(|_| {}));
        let t = host.set_interval(Duration::from_secs(1), Box::new(|| {}));
        assert_eq!(host.active_listeners(), 2);
        assert_eq!(host.active_timers(), 1);

        d.run();
        k.run();
        t.run();
        t.run();
        assert_eq!(host.active_listeners(), 0);
        assert_eq!(host.active_timers(), 0);
        assert_eq!(host.fire_scroll(), 0);
        assert_eq!(host.advance_time(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_callback_cancelling_later_registration() {
        let host = Rc::new(TestHost::new());
        let second_ran = Rc::new(Cell::new(false));
        let slot: Rc<RefCell<Option<Dispose>>> = Rc::new(RefCell::new(None));

        let _first = {
            let slot = slot.clone();
            host.on_scroll(Box::new(move || {
                if let Some(d) = slot.borrow_mut().take() {
                    d.run();
                }
            }))
        };
        let second = {
            let second_ran = second_ran.clone();
            host.on_scroll(Box::new(move || second_ran.set(true)))
        };
        *slot.borrow_mut() = Some(second);

        assert_eq!(host.fire_scroll(), 1);
        assert!(!second_ran.get());
    }
}
