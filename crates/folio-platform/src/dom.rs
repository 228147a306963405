//! Fills the page's empty containers from the compiled-in content.
//!
//! Containers that already have children are left alone, so hand-written
//! markup always wins. Text goes through `textContent`, never `innerHTML`.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use folio_core::SiteContent;

use crate::common::{self, DomIds, ElementSpec};

pub fn render_content(document: &Document, ids: &DomIds, content: &SiteContent) {
    let sections = [
        (&ids.nav_links, common::nav_items(content)),
        (&ids.skills, common::skill_items(content)),
        (&ids.carousel_track, common::slide_items(content)),
        (&ids.carousel_dots, common::dot_items(content.projects.len())),
        (&ids.social, common::social_items(content)),
    ];
    for (id, items) in sections {
        let Some(container) = empty_container(document, id) else {
            continue;
        };
        if let Err(e) = fill(document, &container, &items) {
            log::warn!("dom: could not render #{id}: {e:?}");
        }
    }
}

fn fill(document: &Document, container: &Element, items: &[ElementSpec]) -> Result<(), JsValue> {
    for item in items {
        let node = build(document, item)?;
        container.append_child(&node)?;
    }
    Ok(())
}

fn build(document: &Document, spec: &ElementSpec) -> Result<Element, JsValue> {
    let e = document.create_element(spec.tag)?;
    if let Some(class) = spec.class {
        e.set_class_name(class);
    }
    if let Some(text) = &spec.text {
        e.set_text_content(Some(text.as_str()));
    }
    for (name, value) in &spec.attrs {
        e.set_attribute(name, value)?;
    }
    fill(document, &e, &spec.children)?;
    Ok(e)
}

fn empty_container(document: &Document, id: &str) -> Option<Element> {
    document
        .get_element_by_id(id)
        .filter(|e| e.child_element_count() == 0)
}
