//! Ownership of mounted resources.
//!
//! A `Scope` collects the teardown of everything registered while it is
//! active. Disposing the scope (or dropping its last handle) runs every
//! teardown exactly once, last registered first.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::Dispose;

thread_local! {
    static CURRENT_SCOPE: RefCell<Option<Weak<ScopeInner>>> = const { RefCell::new(None) };
}

pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
    disposed: Cell<bool>,
}

impl ScopeInner {
    fn teardown(&self) {
        if self.disposed.replace(true) {
            return;
        }

        // Reverse registration order: last acquired, first released.
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers.into_iter().rev() {
            disposer();
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
                disposed: Cell::new(false),
            }),
        }
    }

    /// Run `f` with this scope as the current scope.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        CURRENT_SCOPE.with(|current| {
            let prev = current.borrow_mut().replace(Rc::downgrade(&self.inner));
            let result = f();
            *current.borrow_mut() = prev;
            result
        })
    }

    /// Registers a teardown. On an already disposed scope it runs immediately.
    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        if self.inner.disposed.get() {
            log::warn!("scope: disposer added after dispose; running it now");
            disposer();
            return;
        }
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    /// Attach a `Dispose` guard to this scope.
    pub fn adopt(&self, guard: Dispose) {
        self.add_disposer(move || guard.run());
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    pub fn pending_disposers(&self) -> usize {
        self.inner.disposers.borrow().len()
    }

    pub fn dispose(self) {
        self.inner.teardown();
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub fn current_scope() -> Option<Scope> {
    CURRENT_SCOPE.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|weak| weak.upgrade().map(|inner| Scope { inner }))
    })
}

/// Scoped effect that auto-cleans up.
///
/// Outside of any scope the guard is returned to nobody; the resource then
/// lives for the rest of the page.
pub fn scoped_effect<F>(f: F)
where
    F: FnOnce() -> Dispose,
{
    let guard = f();
    match current_scope() {
        Some(scope) => scope.adopt(guard),
        None => log::warn!("scoped_effect: no current scope, resource will not be released"),
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.teardown();
    }
}
