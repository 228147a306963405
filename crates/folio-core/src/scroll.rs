//! Scroll progress.
//!
//! `ScrollTracker` turns viewport metrics into a 0..=100 percentage of the
//! page traversed. Sampling is O(1) and runs on every scroll/resize event
//! without throttling.

use std::rc::Rc;

use crate::host::{Viewport, ViewportMetrics};
use crate::{Dispose, Signal, signal};

/// `100 * offset / (total - visible)`, clamped to `[0, 100]`.
///
/// Pages without scrollable overflow, and any non-finite ratio, map to 0.
pub fn progress_percent(m: ViewportMetrics) -> f64 {
    let scrollable = m.scrollable();
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    let percent = 100.0 * m.scroll_top / scrollable;
    if !percent.is_finite() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

pub struct ScrollTracker {
    viewport: Rc<dyn Viewport>,
    percent: Signal<f64>,
}

impl ScrollTracker {
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self {
            viewport,
            percent: signal(0.0),
        }
    }

    /// Read the viewport and publish the new percentage.
    pub fn sample(&self) -> f64 {
        let percent = progress_percent(self.viewport.metrics());
        self.percent.set_if_changed(percent);
        percent
    }

    /// Last sampled value.
    pub fn percent(&self) -> f64 {
        self.percent.get()
    }

    pub fn watch(&self, f: impl Fn(&f64) + 'static) -> Dispose {
        self.percent.watch(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;

    #[test]
    fn test_no_overflow_is_zero() {
        for h in [0.0, 1.0, 600.0, 10_000.0] {
            assert_eq!(progress_percent(ViewportMetrics::new(0.0, h, h)), 0.0);
            assert_eq!(progress_percent(ViewportMetrics::new(50.0, h, h)), 0.0);
        }
        // content shorter than viewport
        assert_eq!(progress_percent(ViewportMetrics::new(0.0, 300.0, 800.0)), 0.0);
    }

    #[test]
    fn test_midpoint_and_ends() {
        assert_eq!(progress_percent(ViewportMetrics::new(0.0, 2000.0, 1000.0)), 0.0);
        assert_eq!(progress_percent(ViewportMetrics::new(500.0, 2000.0, 1000.0)), 50.0);
        assert_eq!(progress_percent(ViewportMetrics::new(1000.0, 2000.0, 1000.0)), 100.0);
    }

    #[test]
    fn test_always_clamped() {
        let tops = [-500.0, -1.0, 0.0, 10.0, 999.0, 5000.0, f64::MAX];
        let heights = [0.0, 100.0, 1000.0, 4000.0];
        for &top in &tops {
            for &total in &heights {
                for &visible in &heights {
                    let p = progress_percent(ViewportMetrics::new(top, total, visible));
                    assert!((0.0..=100.0).contains(&p), "{top} {total} {visible} -> {p}");
                }
            }
        }
    }

    #[test]
    fn test_nan_inputs_map_to_zero() {
        assert_eq!(progress_percent(ViewportMetrics::new(f64::NAN, 2000.0, 1000.0)), 0.0);
        assert_eq!(progress_percent(ViewportMetrics::new(10.0, f64::NAN, 1000.0)), 0.0);
        assert_eq!(
            progress_percent(ViewportMetrics::new(f64::INFINITY, f64::INFINITY, 0.0)),
            0.0
        );
    }

    #[test]
    fn test_tracker_publishes_changes() {
        let host = Rc::new(TestHost::new());
        host.set_metrics(ViewportMetrics::new(0.0, 3000.0, 1000.0));
        let tracker = ScrollTracker::new(host.clone());

        let calls = Rc::new(std::cell::Cell::new(0));
        let _guard = {
            let calls = calls.clone();
            tracker.watch(move |_| calls.set(calls.get() + 1))
        };

        assert_eq!(tracker.sample(), 0.0);
        assert_eq!(calls.get(), 0);

        host.set_scroll_top(500.0);
        assert_eq!(tracker.sample(), 25.0);
        assert_eq!(tracker.percent(), 25.0);
        assert_eq!(tracker.sample(), 25.0);
        assert_eq!(calls.get(), 1);
    }
}
