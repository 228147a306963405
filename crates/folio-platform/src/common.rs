use folio_core::carousel::CarouselSnapshot;
use folio_core::{SiteContent, ViewConfig};

/// Class on `<html>` that the stylesheet keys dark mode on.
pub const DARK_CLASS: &str = "dark";
pub const ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "menu-open";

/// Ids of the elements the page wires up. Missing elements are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomIds {
    pub progress: String,
    pub nav: String,
    pub nav_links: String,
    pub menu_toggle: String,
    pub theme_toggle: String,
    pub carousel_track: String,
    pub carousel_dots: String,
    pub carousel_prev: String,
    pub carousel_next: String,
    pub skills: String,
    pub social: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            progress: "scroll-progress".into(),
            nav: "site-nav".into(),
            nav_links: "nav-links".into(),
            menu_toggle: "menu-toggle".into(),
            theme_toggle: "theme-toggle".into(),
            carousel_track: "carousel-track".into(),
            carousel_dots: "carousel-dots".into(),
            carousel_prev: "carousel-prev".into(),
            carousel_next: "carousel-next".into(),
            skills: "skills-grid".into(),
            social: "social-links".into(),
        }
    }
}

impl DomIds {
    /// Names accepted by [`DomIds::set`], one per field.
    pub const NAMES: [&'static str; 11] = [
        "progress",
        "nav",
        "nav_links",
        "menu_toggle",
        "theme_toggle",
        "carousel_track",
        "carousel_dots",
        "carousel_prev",
        "carousel_next",
        "skills",
        "social",
    ];

    fn slot(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "progress" => &mut self.progress,
            "nav" => &mut self.nav,
            "nav_links" => &mut self.nav_links,
            "menu_toggle" => &mut self.menu_toggle,
            "theme_toggle" => &mut self.theme_toggle,
            "carousel_track" => &mut self.carousel_track,
            "carousel_dots" => &mut self.carousel_dots,
            "carousel_prev" => &mut self.carousel_prev,
            "carousel_next" => &mut self.carousel_next,
            "skills" => &mut self.skills,
            "social" => &mut self.social,
            _ => return None,
        })
    }

    /// Override the id for `name`. Returns false for an unknown name.
    pub fn set(&mut self, name: &str, id: impl Into<String>) -> bool {
        match self.slot(name) {
            Some(slot) => {
                *slot = id.into();
                true
            }
            None => false,
        }
    }
}

pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}

pub fn aria_bool(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

pub fn track_transform(snapshot: &CarouselSnapshot) -> String {
    format!("translateX(-{}%)", snapshot.offset_percent())
}

/// An element to create, as plain data. `dom::render_content` materializes
/// these into empty containers; text always ends up as `textContent`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub text: Option<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

fn external_link(label: &str, url: &str) -> ElementSpec {
    ElementSpec::new("a")
        .text(label)
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noreferrer")
}

/// Nav entries followed by the resume link.
pub fn nav_items(content: &SiteContent) -> Vec<ElementSpec> {
    let mut items: Vec<_> = content
        .nav_links
        .iter()
        .map(|l| ElementSpec::new("a").text(l.label).attr("href", l.anchor))
        .collect();
    items.push(external_link("Resume", content.assets.resume).class("resume-link"));
    items
}

pub fn skill_items(content: &SiteContent) -> Vec<ElementSpec> {
    content
        .skills
        .iter()
        .map(|s| ElementSpec::new("div").class("skill").text(*s))
        .collect()
}

pub fn slide_items(content: &SiteContent) -> Vec<ElementSpec> {
    content
        .projects
        .iter()
        .map(|p| {
            let tags = p.tags.iter().fold(ElementSpec::new("div").class("tags"), |t, tag| {
                t.child(ElementSpec::new("span").class("tag").text(*tag))
            });
            ElementSpec::new("div")
                .class("slide")
                .attr("data-id", p.id.to_string())
                .child(ElementSpec::new("h3").text(p.title))
                .child(ElementSpec::new("p").class("subtitle").text(p.subtitle))
                .child(ElementSpec::new("p").class("description").text(p.description))
                .child(tags)
        })
        .collect()
}

/// One button per slide; the click handler reads `data-index`.
pub fn dot_items(len: usize) -> Vec<ElementSpec> {
    (0..len)
        .map(|i| {
            ElementSpec::new("button")
                .class("dot")
                .attr("type", "button")
                .attr("data-index", i.to_string())
                .attr("aria-label", format!("Show project {}", i + 1))
        })
        .collect()
}

pub fn social_items(content: &SiteContent) -> Vec<ElementSpec> {
    content
        .social
        .iter()
        .map(|l| external_link(l.label, l.url).attr("aria-label", l.label))
        .collect()
}

/// Parse a JSON `ViewConfig`. Anything unparsable falls back to the defaults.
pub fn parse_config(json: Option<&str>) -> ViewConfig {
    let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
        return ViewConfig::default();
    };
    match serde_json::from_str::<ViewConfig>(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config: ignoring invalid JSON ({e}); using defaults");
            ViewConfig::default()
        }
    }
}
