#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Components in `ui` emit class names that only the shared theme
(`ui/assets/theme/main.css`) styles. A refactor that drops or renames one of
those selectors fails here instead of shipping an unstyled page.

When you rename a class:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.

A substring check is enough; no CSS parser is pulled in for this.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors / tokens the shared components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global
    ":root",
    "body {",
    ".visually-hidden",
    // Tabs
    ".tab-row",
    ".tab-row--vertical",
    ".tab--active",
    ".tab__icon",
    // Explorer
    ".explorer__header",
    ".explorer__header-stats",
    ".header-stat__value",
    ".stat-card__number",
    ".viz-panel__title",
    ".viz-panel__chart--sankey",
    ".viz-empty__icon",
    ".badge--illustrative",
    ".key-points__item",
    ".print-button",
    // Briefs
    ".paper-switcher",
    ".brief__masthead",
    ".brief__overview",
    ".findings__item",
    ".figure-grid--two",
    ".figure__caption",
    ".info-card__title",
    ".callout--success",
    ".callout--warning",
    ".callout--neutral",
    ".explainer__step",
    ".policy-group__list",
    // Tables
    ".data-table",
    ".number-cell",
    "tr.highlight",
    "tr.total",
    // Charts
    ".chart-card__title",
    ".chart__svg",
    ".chart__reference",
    ".chart__line",
    ".chart__arc",
    ".chart__node-label",
    ".chart-legend__swatch",
    // Responsive + print
    "@media (max-width: 720px)",
    "@media print",
    ".no-print",
];

/// Every `Tone` has a palette.
const INSIGHT_TONES: &[&str] = &[
    ".insight--info",
    ".insight--highlight",
    ".insight--success",
    ".insight--warning",
    ".insight--concern",
    ".insight--innovation",
    ".insight--accent",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .chain(INSIGHT_TONES)
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn navbar_stylesheet_covers_links_and_locale() {
    for sel in [".navbar__link", ".navbar__link.active", ".navbar__locale"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css is missing `{sel}`");
    }
}
