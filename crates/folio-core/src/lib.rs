//! # View state for a single-page site
//!
//! Folio keeps the few interactive pieces of an otherwise static page in one
//! place: a carousel that auto-advances and follows the arrow keys, a scroll
//! progress indicator, smooth in-page anchor navigation under a fixed header,
//! and a persisted dark/light theme.
//!
//! ## Signals
//!
//! Every controller keeps its state in a `Signal<T>`, a cloneable observable
//! value. `watch` subscribes and returns a `Dispose` that unsubscribes:
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! let guard = count.watch(|v| log::debug!("count = {v}"));
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! guard.run();
//! assert_eq!(count.subscriber_count(), 0);
//! ```
//!
//! ## Resources and scopes
//!
//! Anything the page registers with its host (listeners, timers) comes back
//! as a `Dispose` guard. Guards registered through `scoped_effect` while a
//! `Scope` is running belong to that scope and are released together when it
//! is disposed:
//!
//! ```rust
//! use folio_core::*;
//!
//! let scope = Scope::new();
//! scope.run(|| {
//!     scoped_effect(|| on_unmount(|| log::info!("released")));
//! });
//! scope.dispose();
//! ```
//!
//! `ViewRoot` uses exactly this to tie the carousel timer and the global
//! listeners to the page's mounted lifetime.
//!
//! ## Hosts
//!
//! The core never touches the DOM. It talks to a [`host::Host`]; the browser
//! implementation is in `folio-platform`, and [`testing::TestHost`] is an
//! in-memory one with a manually driven clock.
//!
//! ## Threading
//!
//! Everything here is single-threaded (`Rc`/`RefCell`). Host callbacks are
//! serialized by the event loop, which is the only concurrency guarantee the
//! controllers need; timer ticks and user input interleave with
//! last-write-wins semantics.

pub mod anchor;
pub mod carousel;
pub mod config;
pub mod content;
pub mod effects;
pub mod error;
pub mod host;
pub mod input;
pub mod menu;
pub mod preference;
pub mod prelude;
pub mod scope;
pub mod scroll;
pub mod signal;
pub mod testing;
pub mod theme;
pub mod view_root;

pub use prelude::*;
pub use signal::*;
