//! Web runner (wasm32): `WebHost` plus page mounting and click wiring.
use std::rc::Rc;

use anyhow::Context;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, ScrollToOptions, Window};
use web_time::Duration;

use folio_core::error::StoreError;
use folio_core::host::{
    Callback, ElementLookup, EventHost, KeyCallback, KeyValueStore, Viewport,
    ViewportMetrics,
};
use folio_core::input::{Key, KeyEvent, Modifiers};
use folio_core::{Dispose, SiteContent, ViewRoot};

use crate::common::{self, DomIds};
use crate::dom;
use crate::presenter::DomPresenter;

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> anyhow::Result<Self> {
        let window = web_sys::window().context("no global `window`")?;
        let document = window.document().context("window has no document")?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        self.window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_err(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".into()))
    }
}

impl Viewport for WebHost {
    fn metrics(&self) -> ViewportMetrics {
        let Some(root) = self.document.document_element() else {
            return ViewportMetrics::default();
        };
        ViewportMetrics::new(
            root.scroll_top() as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        )
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

impl ElementLookup for WebHost {
    fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(el.offset_top() as f64)
    }
}

impl KeyValueStore for WebHost {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_err(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(js_err(&e)))
    }
}

impl EventHost for WebHost {
    fn on_scroll(&self, f: Callback) -> Dispose {
        let closure = Closure::<dyn FnMut()>::new(move || f());
        listen(self.window.clone().into(), &["scroll", "resize"], closure)
    }

    fn on_key_down(&self, f: KeyCallback) -> Dispose {
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            f(&key_event(&e));
        });
        listen(self.window.clone().into(), &["keydown"], closure)
    }

    fn set_interval(&self, period: Duration, f: Callback) -> Dispose {
        let closure = Closure::<dyn FnMut()>::new(move || f());
        let ms = period.as_millis().min(i32::MAX as u128) as i32;
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            ) {
            Ok(handle) => {
                let window = self.window.clone();
                Dispose::new(move || {
                    window.clear_interval_with_handle(handle);
                    drop(closure);
                })
            }
            Err(e) => {
                log::error!("setInterval failed: {}", js_err(&e));
                Dispose::noop()
            }
        }
    }
}

/// Attach `closure` for each event name; the returned guard detaches it and
/// frees the closure.
fn listen<T: ?Sized + 'static>(
    target: EventTarget,
    events: &'static [&'static str],
    closure: Closure<T>,
) -> Dispose {
    for event in events {
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("addEventListener({event}) failed: {}", js_err(&e));
        }
    }
    Dispose::new(move || {
        for event in events {
            if let Err(e) =
                target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::debug!("removeEventListener({event}) failed: {}", js_err(&e));
            }
        }
        drop(closure);
    })
}

fn key_event(e: &KeyboardEvent) -> KeyEvent {
    KeyEvent {
        key: Key::from_dom(&e.key()),
        modifiers: Modifiers {
            shift: e.shift_key(),
            ctrl: e.ctrl_key(),
            alt: e.alt_key(),
            meta: e.meta_key(),
        },
        is_repeat: e.repeat(),
    }
}

fn js_err(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

#[wasm_bindgen]
pub struct WebOptions {
    ids: DomIds,
    config_json: Option<String>,
}

#[wasm_bindgen]
impl WebOptions {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        Self {
            ids: DomIds::default(),
            config_json,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn config_json(&self) -> Option<String> {
        self.config_json.clone()
    }

    /// Override one element id, e.g. `options.setId("theme_toggle", "mode")`.
    /// Accepted names: progress, nav, nav_links, menu_toggle, theme_toggle,
    /// carousel_track, carousel_dots, carousel_prev, carousel_next, skills, social.
    #[wasm_bindgen(js_name = setId)]
    pub fn set_id(&mut self, name: &str, id: String) -> Result<(), JsValue> {
        if self.ids.set(name, id) {
            Ok(())
        } else {
            Err(JsValue::from_str(&format!(
                "unknown element name {name:?}; expected one of {:?}",
                DomIds::NAMES
            )))
        }
    }
}

impl Default for WebOptions {
    fn default() -> Self {
        Self::new(None)
    }
}

/// A mounted page. Dropping it (or calling `unmount`) releases every listener
/// and the carousel timer.
#[wasm_bindgen]
pub struct MountedPage {
    root: Option<ViewRoot<WebHost>>,
}

#[wasm_bindgen]
impl MountedPage {
    pub fn unmount(&mut self) {
        if let Some(root) = self.root.take() {
            root.unmount();
        }
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.root.as_ref().map(|r| r.carousel().active_index())
    }

    pub fn theme(&self) -> Option<String> {
        self.root
            .as_ref()
            .map(|r| r.theme().current().as_str().to_string())
    }

    pub fn toggle_theme(&self) {
        if let Some(root) = &self.root {
            root.theme().toggle();
        }
    }
}

/// Install browser logging and mount `content` into the current document.
pub fn run_web_page(content: SiteContent, options: WebOptions) -> Result<MountedPage, JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(log::Level::Info);

    mount_page(content, options).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

pub fn mount_page(content: SiteContent, options: WebOptions) -> anyhow::Result<MountedPage> {
    let host = Rc::new(WebHost::new()?);
    let config = common::parse_config(options.config_json.as_deref());
    let ids = options.ids;

    dom::render_content(host.document(), &ids, &content);

    let presenter = Rc::new(DomPresenter::new(host.document().clone(), ids.clone()));
    let root = ViewRoot::mount(host.clone(), content, &config, presenter)?;
    wire_clicks(&root, &ids);

    Ok(MountedPage { root: Some(root) })
}

fn wire_clicks(root: &ViewRoot<WebHost>, ids: &DomIds) {
    let document = root.host().document().clone();

    // Delegated: covers nav links, the logo and hero buttons alike.
    let router = root.anchor_router();
    root.adopt(on_click(document.clone().into(), move |e| {
        let Some(href) = closest(e, "a[href]").and_then(|a| a.get_attribute("href")) else {
            return;
        };
        if router.route(&href).suppresses_default() {
            e.prevent_default();
        }
    }));

    let carousel = Rc::downgrade(root.carousel());
    if let Some(prev) = document.get_element_by_id(&ids.carousel_prev) {
        let carousel = carousel.clone();
        root.adopt(on_click(prev.into(), move |_| {
            if let Some(c) = carousel.upgrade() {
                c.advance(-1);
            }
        }));
    }
    if let Some(next) = document.get_element_by_id(&ids.carousel_next) {
        let carousel = carousel.clone();
        root.adopt(on_click(next.into(), move |_| {
            if let Some(c) = carousel.upgrade() {
                c.advance(1);
            }
        }));
    }
    if let Some(dots) = document.get_element_by_id(&ids.carousel_dots) {
        root.adopt(on_click(dots.into(), move |e| {
            let index = closest(e, "[data-index]")
                .and_then(|d| d.get_attribute("data-index"))
                .and_then(|i| i.parse::<usize>().ok());
            if let (Some(i), Some(c)) = (index, carousel.upgrade()) {
                c.select_index(i);
            }
        }));
    }

    if let Some(toggle) = document.get_element_by_id(&ids.theme_toggle) {
        let theme = Rc::downgrade(root.theme());
        root.adopt(on_click(toggle.into(), move |_| {
            if let Some(t) = theme.upgrade() {
                t.toggle();
            }
        }));
    }
    if let Some(toggle) = document.get_element_by_id(&ids.menu_toggle) {
        let menu = Rc::downgrade(root.menu());
        root.adopt(on_click(toggle.into(), move |_| {
            if let Some(m) = menu.upgrade() {
                m.toggle();
            }
        }));
    }
}

fn on_click(target: EventTarget, f: impl Fn(&Event) + 'static) -> Dispose {
    let closure = Closure::<dyn FnMut(Event)>::new(move |e: Event| f(&e));
    listen(target, &["click"], closure)
}

fn closest(e: &Event, selector: &str) -> Option<Element> {
    e.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}
