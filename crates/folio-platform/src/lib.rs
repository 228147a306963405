//! Browser runner for Folio.
//!
//! `web::WebHost` implements the `folio_core::host` seams on top of
//! `web-sys`: document geometry, `window.scrollTo`, `localStorage`, window
//! listeners and `setInterval`. `presenter::DomPresenter` writes derived view
//! state back into the page (progress bar width, carousel translation, dot
//! highlighting, the `dark` class on `<html>`).
//!
//! Only `common` is compiled off-wasm; it holds the DOM ids, CSS helpers and
//! config parsing the web modules share.

pub mod common;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod presenter;
#[cfg(target_arch = "wasm32")]
pub mod web;
