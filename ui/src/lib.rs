//! Shared UI crate for Research Briefs. Catalogs, the selector state machine,
//! chart rendering and both pages live here; `web` and `desktop` only launch.

pub mod charts;
pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod brief_view;
    mod bundle_panel;
    mod data_table;
    mod empty_state;
    mod insight;
    pub mod rich_text;
    mod stats;
    mod tabs;

    pub use brief_view::BriefView;
    pub use bundle_panel::BundlePanel;
    pub use data_table::DataTableView;
    pub use empty_state::EmptyPanel;
    pub use insight::InsightCard;
    pub use rich_text::RichText;
    pub use stats::{HeaderStat, StatCard};
    pub use tabs::{TabItem, TabRow};
}

/// Shared theme stylesheet, inlined by launchers that cannot serve assets.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
