//! The portfolio page: compiled-in content plus the wasm entry point.
//!
//! `index.html` carries the static layout; `start` mounts the view-state core
//! onto it once the module loads.

pub mod content;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use folio_platform::web::{MountedPage, WebOptions, run_web_page};

    thread_local! {
        static PAGE: std::cell::RefCell<Option<MountedPage>> = const { std::cell::RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        let site = crate::content::site().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let page = run_web_page(site, WebOptions::default())?;
        log::info!("portfolio mounted");
        // The page lives as long as the document.
        PAGE.with(|p| *p.borrow_mut() = Some(page));
        Ok(())
    }

    /// Tear the page down (hot reload, tests in a real browser).
    #[wasm_bindgen]
    pub fn unmount() {
        PAGE.with(|p| {
            if let Some(mut page) = p.borrow_mut().take() {
                page.unmount();
            }
        });
    }
}
