use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use folio_core::carousel::CarouselSnapshot;
use folio_core::{Presenter, ThemePreference};

use crate::common::{self, ACTIVE_CLASS, DARK_CLASS, DomIds, MENU_OPEN_CLASS};

/// Writes view state into the DOM. Elements that are not on the page are
/// skipped; DOM failures are logged at debug and otherwise ignored.
pub struct DomPresenter {
    document: Document,
    ids: DomIds,
}

impl DomPresenter {
    pub fn new(document: Document, ids: DomIds) -> Self {
        Self { document, ids }
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn set_style(&self, id: &str, property: &str, value: &str) {
        if let Some(el) = self.html_element(id)
            && let Err(e) = el.style().set_property(property, value)
        {
            log::debug!("presenter: {property} on #{id}: {e:?}");
        }
    }
}

fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::debug!("presenter: {name}={value}: {e:?}");
    }
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::debug!("presenter: toggle .{class}: {e:?}");
    }
}

impl Presenter for DomPresenter {
    fn progress(&self, percent: f64) {
        self.set_style(
            &self.ids.progress,
            "width",
            &common::progress_width(percent),
        );
    }

    fn carousel(&self, snapshot: CarouselSnapshot) {
        self.set_style(
            &self.ids.carousel_track,
            "transform",
            &common::track_transform(&snapshot),
        );

        let Some(dots) = self.document.get_element_by_id(&self.ids.carousel_dots) else {
            return;
        };
        let children = dots.children();
        for i in 0..children.length() {
            if let Some(dot) = children.item(i) {
                let active = snapshot.is_active(i as usize);
                toggle_class(&dot, ACTIVE_CLASS, active);
                set_attr(&dot, "aria-current", common::aria_bool(active));
            }
        }
    }

    fn theme(&self, theme: ThemePreference) {
        if let Some(root) = self.document.document_element() {
            toggle_class(&root, DARK_CLASS, theme.is_dark());
        }
    }

    fn menu(&self, open: bool) {
        if let Some(nav) = self.document.get_element_by_id(&self.ids.nav) {
            toggle_class(&nav, MENU_OPEN_CLASS, open);
        }
        if let Some(toggle) = self.document.get_element_by_id(&self.ids.menu_toggle) {
            set_attr(&toggle, "aria-expanded", common::aria_bool(open));
        }
    }
}
