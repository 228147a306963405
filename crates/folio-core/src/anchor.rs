//! In-page anchor navigation.

use std::rc::Rc;

use crate::config::DEFAULT_HEADER_OFFSET;
use crate::content::is_section_anchor;
use crate::host::{ElementLookup, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavOutcome {
    /// Not an in-page anchor; the link's default behaviour proceeds.
    PassThrough,
    /// Smooth scroll requested to `top`.
    Scrolled { top: f64 },
    /// Default suppressed, but no element carries that id.
    MissingTarget,
}

impl NavOutcome {
    /// Whether the click's default navigation must be prevented.
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, NavOutcome::PassThrough)
    }
}

pub struct SmoothAnchorNavigator {
    viewport: Rc<dyn Viewport>,
    elements: Rc<dyn ElementLookup>,
    header_offset: f64,
}

impl SmoothAnchorNavigator {
    pub fn new(viewport: Rc<dyn Viewport>, elements: Rc<dyn ElementLookup>) -> Self {
        Self {
            viewport,
            elements,
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }

    pub fn with_header_offset(mut self, px: f64) -> Self {
        self.header_offset = px;
        self
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// Scroll so the section named by `href` sits just below the fixed header.
    ///
    /// Fire-and-forget: a second call simply re-targets the scroll.
    pub fn navigate(&self, href: &str) -> NavOutcome {
        if !is_section_anchor(href) {
            return NavOutcome::PassThrough;
        }
        let id = &href[1..];
        let Some(element_top) = self.elements.element_top(id) else {
            log::debug!("anchor: no element with id {id:?}");
            return NavOutcome::MissingTarget;
        };
        let top = (element_top - self.header_offset).max(0.0);
        self.viewport.scroll_to(top);
        NavOutcome::Scrolled { top }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;

    fn nav(host: &Rc<TestHost>) -> SmoothAnchorNavigator {
        SmoothAnchorNavigator::new(host.clone(), host.clone())
    }

    #[test]
    fn test_scrolls_below_header() {
        let host = Rc::new(TestHost::new());
        host.add_element("projects", 1200.0);
        let out = nav(&host).navigate("#projects");
        assert_eq!(out, NavOutcome::Scrolled { top: 1136.0 });
        assert!(out.suppresses_default());
        assert_eq!(host.scroll_requests(), vec![1136.0]);
    }

    #[test]
    fn test_missing_target_is_silent() {
        let host = Rc::new(TestHost::new());
        let out = nav(&host).navigate("#projects");
        assert_eq!(out, NavOutcome::MissingTarget);
        assert!(out.suppresses_default());
        assert!(host.scroll_requests().is_empty());
    }

    #[test]
    fn test_pass_through() {
        let host = Rc::new(TestHost::new());
        host.add_element("", 0.0);
        let n = nav(&host);
        for href in ["#", "", "/bharath_resume.pdf", "https://github.com", "projects"] {
            let out = n.navigate(href);
            assert_eq!(out, NavOutcome::PassThrough, "{href}");
            assert!(!out.suppresses_default());
        }
        assert!(host.scroll_requests().is_empty());
    }

    #[test]
    fn test_top_section_never_negative() {
        let host = Rc::new(TestHost::new());
        host.add_element("hero", 20.0);
        assert_eq!(nav(&host).navigate("#hero"), NavOutcome::Scrolled { top: 0.0 });
    }

    #[test]
    fn test_second_request_retargets() {
        let host = Rc::new(TestHost::new());
        host.add_element("about", 700.0);
        host.add_element("contact", 3000.0);
        let n = nav(&host).with_header_offset(100.0);
        n.navigate("#about");
        n.navigate("#contact");
        assert_eq!(
            host.scroll_requests(),
            vec![600.0, 2900.0]
        );
    }
}
