//! Compiled-in page content.
//!
//! Everything here is `'static` and never mutated at runtime. The core only
//! reads the project count and the nav anchors; the rest is handed through to
//! the presentation layer untouched.

use crate::error::ContentError;

/// One carousel slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselItem {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Section id this link scrolls to.
    pub fn target(&self) -> &'static str {
        self.anchor.trim_start_matches('#')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Short logo text in the nav bar.
    pub brand: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
}

/// Fixed asset references. Loaded by the presentation layer, never by the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assets {
    pub resume: &'static str,
    pub profile_image: &'static str,
    pub background_video: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub nav_links: &'static [NavLink],
    pub skills: &'static [&'static str],
    pub projects: &'static [CarouselItem],
    pub social: &'static [SocialLink],
    pub assets: Assets,
}

impl SiteContent {
    pub fn new(
        profile: Profile,
        nav_links: &'static [NavLink],
        skills: &'static [&'static str],
        projects: &'static [CarouselItem],
        social: &'static [SocialLink],
        assets: Assets,
    ) -> Result<Self, ContentError> {
        if projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        if let Some(bad) = nav_links.iter().find(|l| !is_section_anchor(l.anchor)) {
            return Err(ContentError::InvalidAnchor(bad.anchor.to_string()));
        }
        Ok(Self {
            profile,
            nav_links,
            skills,
            projects,
            social,
            assets,
        })
    }

    /// Anchor of the first nav link, used by the logo link.
    pub fn home_anchor(&self) -> &'static str {
        self.nav_links.first().map(|l| l.anchor).unwrap_or("#hero")
    }
}

/// `#` followed by at least one character.
pub fn is_section_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: Profile = Profile {
        name: "Test Person",
        brand: "Test.",
        greeting: "Hello",
        tagline: "tagline",
        about: "about",
    };
    const ASSETS: Assets = Assets {
        resume: "/resume.pdf",
        profile_image: "/me.jpg",
        background_video: "/bg.mp4",
    };
    const ONE: &[CarouselItem] = &[CarouselItem {
        id: 1,
        title: "A",
        subtitle: "a",
        description: "first",
        tags: &["Rust"],
    }];

    #[test]
    fn test_content_requires_projects() {
        let err = SiteContent::new(PROFILE, &[], &[], &[], &[], ASSETS).unwrap_err();
        assert_eq!(err, ContentError::NoProjects);
    }

    #[test]
    fn test_content_rejects_bad_anchor() {
        const LINKS: &[NavLink] = &[
            NavLink {
                anchor: "#about",
                label: "About",
            },
            NavLink {
                anchor: "#",
                label: "Nowhere",
            },
        ];
        let err = SiteContent::new(PROFILE, LINKS, &[], ONE, &[], ASSETS).unwrap_err();
        assert_eq!(err, ContentError::InvalidAnchor("#".into()));
    }

    #[test]
    fn test_home_anchor_and_targets() {
        const LINKS: &[NavLink] = &[NavLink {
            anchor: "#top",
            label: "Home",
        }];
        let c = SiteContent::new(PROFILE, LINKS, &[], ONE, &[], ASSETS).unwrap();
        assert_eq!(c.home_anchor(), "#top");
        assert_eq!(LINKS[0].target(), "top");

        let c = SiteContent::new(PROFILE, &[], &[], ONE, &[], ASSETS).unwrap();
        assert_eq!(c.home_anchor(), "#hero");
    }

    #[test]
    fn test_section_anchor() {
        assert!(is_section_anchor("#projects"));
        assert!(!is_section_anchor("#"));
        assert!(!is_section_anchor("/resume.pdf"));
        assert!(!is_section_anchor(""));
    }
}
