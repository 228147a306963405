use serde::Deserialize;
use web_time::Duration;

use crate::input::Key;
use crate::theme::ThemePreference;

pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5_000;
/// Height reserved for the fixed nav bar when scrolling to a section.
pub const DEFAULT_HEADER_OFFSET: f64 = 64.0;
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Tunables of a mounted view. Missing fields in a serialized config take
/// their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub carousel_interval_ms: u64,
    pub header_offset: f64,
    pub storage_key: String,
    pub default_theme: ThemePreference,
    pub next_key: Key,
    pub previous_key: Key,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            header_offset: DEFAULT_HEADER_OFFSET,
            storage_key: DEFAULT_THEME_KEY.to_string(),
            default_theme: ThemePreference::Dark,
            next_key: Key::ArrowRight,
            previous_key: Key::ArrowLeft,
        }
    }
}

impl ViewConfig {
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn with_carousel_interval(mut self, interval: Duration) -> Self {
        self.carousel_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn with_header_offset(mut self, px: f64) -> Self {
        self.header_offset = px;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_default_theme(mut self, theme: ThemePreference) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn with_keys(mut self, next: Key, previous: Key) -> Self {
        self.next_key = next;
        self.previous_key = previous;
        self
    }
}
