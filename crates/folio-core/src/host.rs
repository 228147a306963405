//! # Host seams
//!
//! Everything the core needs from its environment goes through these traits:
//! viewport geometry and programmatic scrolling, element lookup, the
//! persisted key/value store, and event/timer registration.
//!
//! Every registration hands back a [`Dispose`]. Running it must remove the
//! listener (or cancel the timer) synchronously, so that no callback fires
//! afterwards. The browser implementation lives in `folio-platform`; the
//! in-memory one used by tests is [`crate::testing::TestHost`].
//!
//! All callbacks are invoked from the host's single event loop. A host must
//! never run two callbacks concurrently; the controllers rely on that instead
//! of locking.

use web_time::Duration;

use crate::Dispose;
use crate::error::StoreError;
use crate::input::KeyEvent;

/// Scroll offset, total scrollable height and visible height, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ViewportMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Height that can actually be scrolled through.
    pub fn scrollable(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

pub trait Viewport {
    fn metrics(&self) -> ViewportMetrics;
    /// Smooth scroll to `top`. Fire-and-forget; a later call re-targets an
    /// in-flight scroll.
    fn scroll_to(&self, top: f64);
}

pub trait ElementLookup {
    /// Document-relative top offset of the element with this id.
    fn element_top(&self, id: &str) -> Option<f64>;
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub type Callback = Box<dyn Fn()>;
pub type KeyCallback = Box<dyn Fn(&KeyEvent)>;

pub trait EventHost {
    /// Scroll and resize of the viewport.
    fn on_scroll(&self, f: Callback) -> Dispose;
    /// Global (window-level) keydown.
    fn on_key_down(&self, f: KeyCallback) -> Dispose;
    /// Repeating timer.
    fn set_interval(&self, period: Duration, f: Callback) -> Dispose;
}

pub trait Host: Viewport + ElementLookup + KeyValueStore + EventHost {}

impl<T> Host for T where T: Viewport + ElementLookup + KeyValueStore + EventHost {}
