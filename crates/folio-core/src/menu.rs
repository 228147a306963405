use crate::{Dispose, Signal, signal};

/// Open/closed state of the compact nav menu.
pub struct MenuController {
    open: Signal<bool>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            open: signal(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn open(&self) {
        self.open.set_if_changed(true);
    }

    pub fn close(&self) {
        self.open.set_if_changed(false);
    }

    pub fn toggle(&self) -> bool {
        let next = !self.is_open();
        self.open.set(next);
        next
    }

    pub fn watch(&self, f: impl Fn(&bool) + 'static) -> Dispose {
        self.open.watch(f)
    }
}
