//! # Theme
//!
//! The in-memory theme is the source of truth for rendering. The store is a
//! write-through cache that only matters for the next session, so every
//! persistence failure degrades to "the preference is not remembered":
//!
//! - `initialize` falls back to the default (dark) when the store is
//!   unavailable, empty or holds garbage.
//! - `set_theme` updates memory first, then tries to persist and only logs
//!   if that fails.
//!
//! Re-applying the current theme is a no-op: no notification, no store write.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::preference::PreferenceStore;
use crate::{Dispose, Signal, signal};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn other(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// The single presentation flag the styling layer consumes.
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

pub struct ThemeController {
    current: Signal<ThemePreference>,
    store: PreferenceStore,
}

impl ThemeController {
    /// Best-effort synchronous read of the persisted theme.
    pub fn initialize(store: PreferenceStore, fallback: ThemePreference) -> Self {
        let initial = match store.load_theme() {
            Ok(Some(theme)) => theme,
            Ok(None) => fallback,
            Err(e) => {
                log::warn!("theme: {e}; using {fallback}");
                fallback
            }
        };
        log::debug!("theme: initial {initial}");
        Self {
            current: signal(initial),
            store,
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }

    /// Returns whether the theme actually changed.
    pub fn set_theme(&self, theme: ThemePreference) -> bool {
        if !self.current.set_if_changed(theme) {
            return false;
        }
        log::debug!("theme: now {theme}");
        if let Err(e) = self.store.save_theme(theme) {
            log::warn!("theme: could not persist {theme}: {e}");
        }
        true
    }

    pub fn toggle(&self) -> ThemePreference {
        let next = self.current().other();
        self.set_theme(next);
        next
    }

    pub fn watch(&self, f: impl Fn(&ThemePreference) + 'static) -> Dispose {
        self.current.watch(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StoreMode, TestHost};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller(host: &Rc<TestHost>) -> ThemeController {
        ThemeController::initialize(PreferenceStore::new(host.clone()), ThemePreference::Dark)
    }

    #[test]
    fn test_defaults_to_dark_when_empty() {
        let host = Rc::new(TestHost::new());
        assert_eq!(controller(&host).current(), ThemePreference::Dark);
    }

    #[test]
    fn test_reads_stored_value() {
        let host = Rc::new(TestHost::new());
        host.put("theme", "light");
        assert_eq!(controller(&host).current(), ThemePreference::Light);
    }

    #[test]
    fn test_read_failure_yields_dark() {
        for mode in [StoreMode::Unavailable, StoreMode::FailReads] {
            let host = Rc::new(TestHost::new());
            host.put("theme", "light");
            host.set_store_mode(mode);
            assert_eq!(controller(&host).current(), ThemePreference::Dark);
        }
    }

    #[test]
    fn test_malformed_yields_dark() {
        let host = Rc::new(TestHost::new());
        host.put("theme", "LIGHT");
        assert_eq!(controller(&host).current(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for start in ["dark", "light"] {
            let host = Rc::new(TestHost::new());
            host.put("theme", start);
            let t = controller(&host);
            let before = t.current();
            t.toggle();
            assert_ne!(t.current(), before);
            t.toggle();
            assert_eq!(t.current(), before);
            assert_eq!(host.stored("theme").as_deref(), Some(start));
        }
    }

    #[test]
    fn test_set_theme_writes_through() {
        let host = Rc::new(TestHost::new());
        let t = controller(&host);
        assert!(t.set_theme(ThemePreference::Light));
        assert_eq!(host.stored("theme").as_deref(), Some("light"));
        assert_eq!(host.store_writes(), 1);
    }

    #[test]
    fn test_same_theme_is_idempotent() {
        let host = Rc::new(TestHost::new());
        let t = controller(&host);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _g = {
            let seen = seen.clone();
            t.watch(move |v| seen.borrow_mut().push(*v))
        };
        assert!(!t.set_theme(ThemePreference::Dark));
        assert!(seen.borrow().is_empty());
        assert_eq!(host.store_writes(), 0);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let host = Rc::new(TestHost::new());
        let t = controller(&host);
        host.set_store_mode(StoreMode::FailWrites);
        assert_eq!(t.toggle(), ThemePreference::Light);
        assert_eq!(t.current(), ThemePreference::Light);
        assert_eq!(host.stored("theme"), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(
            "blue".parse::<ThemePreference>(),
            Err(UnknownTheme("blue".into()))
        );
        assert_eq!(ThemePreference::Light.to_string(), "light");
        assert!(ThemePreference::Dark.is_dark());
        assert!(!ThemePreference::Light.is_dark());
    }
}
