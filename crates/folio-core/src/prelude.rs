pub use crate::anchor::{NavOutcome, SmoothAnchorNavigator};
pub use crate::carousel::{CarouselController, CarouselSnapshot};
pub use crate::config::ViewConfig;
pub use crate::content::{
    Assets, CarouselItem, NavLink, Profile, SiteContent, SocialLink, is_section_anchor,
};
pub use crate::effects::{Dispose, on_unmount};
pub use crate::error::*;
pub use crate::host::{ElementLookup, EventHost, Host, KeyValueStore, Viewport, ViewportMetrics};
pub use crate::input::*;
pub use crate::menu::MenuController;
pub use crate::preference::PreferenceStore;
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::scroll::{ScrollTracker, progress_percent};
pub use crate::signal::{Signal, signal};
pub use crate::theme::{ThemeController, ThemePreference};
pub use crate::view_root::{AnchorRouter, Presenter, ViewRoot};
