//! # ViewRoot
//!
//! Composition layer. `ViewRoot::mount` builds every controller, wires host
//! events to them inside a fresh [`Scope`], and pushes derived state to a
//! [`Presenter`]. `ViewRoot::unmount` disposes the scope: the scroll and key
//! listeners are removed, the carousel timer is cancelled and presenter
//! subscriptions are dropped, each exactly once.
//!
//! Host callbacks only hold weak references to the controllers, so even a
//! host that (wrongly) fires after teardown cannot change any state.
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_core::prelude::*;
//! use folio_core::testing::{RecordingPresenter, TestHost};
//! # use folio_core::content::*;
//! # const PROJECTS: &[CarouselItem] = &[
//! #     CarouselItem { id: 1, title: "a", subtitle: "", description: "", tags: &[] },
//! #     CarouselItem { id: 2, title: "b", subtitle: "", description: "", tags: &[] },
//! # ];
//! # let profile = Profile { name: "", brand: "", greeting: "", tagline: "", about: "" };
//! # let assets = Assets { resume: "", profile_image: "", background_video: "" };
//! # let content = SiteContent::new(profile, &[], &[], PROJECTS, &[], assets).unwrap();
//!
//! let host = Rc::new(TestHost::new());
//! let root = ViewRoot::mount(
//!     host.clone(),
//!     content,
//!     &ViewConfig::default(),
//!     Rc::new(RecordingPresenter::new()),
//! )
//! .unwrap();
//!
//! host.press_key(Key::ArrowRight);
//! assert_eq!(root.carousel().active_index(), 1);
//!
//! root.unmount();
//! assert_eq!(host.active_timers(), 0);
//! ```

use std::rc::{Rc, Weak};

use crate::Dispose;
use crate::anchor::{NavOutcome, SmoothAnchorNavigator};
use crate::carousel::{CarouselController, CarouselSnapshot};
use crate::config::ViewConfig;
use crate::content::SiteContent;
use crate::error::ContentError;
use crate::host::Host;
use crate::menu::MenuController;
use crate::preference::PreferenceStore;
use crate::scope::{Scope, scoped_effect};
use crate::scroll::ScrollTracker;
use crate::theme::{ThemeController, ThemePreference};

/// Receives derived view state. Implementations render it however they like
/// and never call back into the core.
pub trait Presenter {
    fn progress(&self, percent: f64);
    fn carousel(&self, snapshot: CarouselSnapshot);
    fn theme(&self, theme: ThemePreference);
    fn menu(&self, open: bool);
}

/// Anchor routing for a mounted view; inert once the view is gone.
#[derive(Clone)]
pub struct AnchorRouter {
    navigator: Weak<SmoothAnchorNavigator>,
    menu: Weak<MenuController>,
}

impl AnchorRouter {
    pub fn route(&self, href: &str) -> NavOutcome {
        let Some(navigator) = self.navigator.upgrade() else {
            return NavOutcome::PassThrough;
        };
        let outcome = navigator.navigate(href);
        if outcome.suppresses_default()
            && let Some(menu) = self.menu.upgrade()
        {
            menu.close();
        }
        outcome
    }
}

pub struct ViewRoot<H: Host + 'static> {
    host: Rc<H>,
    content: SiteContent,
    carousel: Rc<CarouselController>,
    scroll: Rc<ScrollTracker>,
    theme: Rc<ThemeController>,
    menu: Rc<MenuController>,
    navigator: Rc<SmoothAnchorNavigator>,
    scope: Scope,
}

impl<H: Host + 'static> ViewRoot<H> {
    pub fn mount(
        host: Rc<H>,
        content: SiteContent,
        config: &ViewConfig,
        presenter: Rc<dyn Presenter>,
    ) -> Result<Self, ContentError> {
        let carousel = Rc::new(
            CarouselController::for_items(content.projects)
                .ok_or(ContentError::NoProjects)?
                .with_keys(config.next_key.clone(), config.previous_key.clone()),
        );
        let theme = Rc::new(ThemeController::initialize(
            PreferenceStore::with_key(host.clone(), config.storage_key.as_str()),
            config.default_theme,
        ));
        let scroll = Rc::new(ScrollTracker::new(host.clone()));
        let menu = Rc::new(MenuController::new());
        let navigator = Rc::new(
            SmoothAnchorNavigator::new(host.clone(), host.clone())
                .with_header_offset(config.header_offset),
        );

        let scope = Scope::new();
        scope.run(|| {
            // First paint matches the loaded preference and current position.
            presenter.theme(theme.current());
            presenter.progress(scroll.sample());
            presenter.carousel(carousel.snapshot());
            presenter.menu(menu.is_open());

            scoped_effect(|| {
                let p = presenter.clone();
                theme.watch(move |t| p.theme(*t))
            });
            scoped_effect(|| {
                let p = presenter.clone();
                scroll.watch(move |percent| p.progress(*percent))
            });
            scoped_effect(|| {
                let p = presenter.clone();
                carousel.watch(move |s| p.carousel(*s))
            });
            scoped_effect(|| {
                let p = presenter.clone();
                menu.watch(move |open| p.menu(*open))
            });

            scoped_effect(|| {
                let tracker = Rc::downgrade(&scroll);
                host.on_scroll(Box::new(move || {
                    if let Some(t) = tracker.upgrade() {
                        t.sample();
                    }
                }))
            });
            scoped_effect(|| {
                let c = Rc::downgrade(&carousel);
                host.on_key_down(Box::new(move |e| {
                    if let Some(c) = c.upgrade() {
                        c.on_key(e);
                    }
                }))
            });
            scoped_effect(|| {
                let c = Rc::downgrade(&carousel);
                host.set_interval(
                    config.carousel_interval(),
                    Box::new(move || {
                        if let Some(c) = c.upgrade() {
                            c.on_timer_tick();
                        }
                    }),
                )
            });
        });

        log::info!(
            "view root: mounted ({} projects, theme {})",
            content.projects.len(),
            theme.current()
        );

        Ok(Self {
            host,
            content,
            carousel,
            scroll,
            theme,
            menu,
            navigator,
            scope,
        })
    }

    /// Route an anchor click. Callers prevent the default navigation when
    /// the outcome says so.
    pub fn navigate(&self, href: &str) -> NavOutcome {
        self.anchor_router().route(href)
    }

    /// Detached handle for click listeners that must not keep the view alive.
    pub fn anchor_router(&self) -> AnchorRouter {
        AnchorRouter {
            navigator: Rc::downgrade(&self.navigator),
            menu: Rc::downgrade(&self.menu),
        }
    }

    /// Tie an extra resource (e.g. a click listener) to this view's lifetime.
    pub fn adopt(&self, guard: Dispose) {
        self.scope.adopt(guard);
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn carousel(&self) -> &Rc<CarouselController> {
        &self.carousel
    }

    pub fn scroll(&self) -> &Rc<ScrollTracker> {
        &self.scroll
    }

    pub fn theme(&self) -> &Rc<ThemeController> {
        &self.theme
    }

    pub fn menu(&self) -> &Rc<MenuController> {
        &self.menu
    }

    pub fn navigator(&self) -> &Rc<SmoothAnchorNavigator> {
        &self.navigator
    }

    pub fn unmount(self) {
        self.scope.dispose();
        log::info!("view root: unmounted");
    }
}
