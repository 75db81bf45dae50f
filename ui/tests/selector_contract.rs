//! Behavioural contract of the visualization selector, checked against small
//! literal catalogs and the shipped participation / paper catalogs.

use ui::content::{PAPER_CATALOG, PARTICIPATION_CATALOG};
use ui::core::bundle::{DoughnutChart, Slice};
use ui::core::{
    Catalog, CatalogError, Category, ChartSpec, EmptyState, Presentation, PresentationBundle,
    Selector, SelectorError,
};

fn bundle(title: &str) -> PresentationBundle {
    PresentationBundle {
        title: title.into(),
        subtitle: String::new(),
        chart: ChartSpec::Doughnut(DoughnutChart {
            slices: vec![Slice::new("Stable Volume", 60.0, "#10b981")],
            value_suffix: "%".into(),
        }),
        table: None,
        insights: Vec::new(),
        illustrative: false,
    }
}

fn two_tab_catalog() -> Catalog<PresentationBundle> {
    Catalog::new(
        EmptyState::new("Select a Visualization to Explore", "Choose a tab."),
        vec![
            Category::new("overview", "Overview", bundle("bundle A")),
            Category::new("specialty", "By Specialty", bundle("bundle B")),
        ],
    )
    .expect("valid catalog")
}

fn labels<B>(selector: &Selector<'_, B>) -> Vec<String> {
    selector
        .categories()
        .iter()
        .map(|c| format!("{}:{}", c.id, c.label))
        .collect()
}

#[test]
fn fresh_selector_presents_empty_state() {
    let catalog = two_tab_catalog();
    let selector = Selector::new(&catalog);
    assert_eq!(
        selector.current_presentation(),
        Presentation::Empty(catalog.empty_state())
    );
    assert_eq!(selector.current_id(), None);
}

#[test]
fn every_category_presents_its_own_bundle() {
    let mut selector = Selector::new(&*PARTICIPATION_CATALOG);
    for category in PARTICIPATION_CATALOG.categories() {
        selector.select(&category.id).expect("catalog id");
        let shown = selector.current_presentation().bundle().expect("selected");
        assert!(std::ptr::eq(shown, &category.bundle), "{}", category.id);
    }

    let mut papers = Selector::new(&*PAPER_CATALOG);
    for category in PAPER_CATALOG.categories() {
        papers.select(&category.id).expect("catalog id");
        let shown = papers.current_presentation().bundle().expect("selected");
        assert!(std::ptr::eq(shown, &category.bundle), "{}", category.id);
    }
}

#[test]
fn selecting_twice_matches_selecting_once() {
    let catalog = two_tab_catalog();
    let mut once = Selector::new(&catalog);
    once.select("specialty").unwrap();

    let mut twice = Selector::new(&catalog);
    twice.select("specialty").unwrap();
    twice.select("specialty").unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.current_presentation(), twice.current_presentation());
}

#[test]
fn selection_never_reorders_categories() {
    let catalog = two_tab_catalog();
    let mut selector = Selector::new(&catalog);
    let before = labels(&selector);

    selector.select("specialty").unwrap();
    selector.select("overview").unwrap();
    let _ = selector.select("bogus");
    selector.clear_selection();
    selector.select("specialty").unwrap();

    assert_eq!(labels(&selector), before);
    assert_eq!(before, ["overview:Overview", "specialty:By Specialty"]);
}

#[test]
fn unknown_id_is_rejected_without_side_effects() {
    let catalog = two_tab_catalog();
    let mut selector = Selector::new(&catalog);
    selector.select("overview").unwrap();

    let err = selector.select("not-a-real-id").unwrap_err();
    assert_eq!(err, SelectorError::UnknownCategory("not-a-real-id".into()));
    assert_eq!(selector.current_id(), Some("overview"));
}

#[test]
fn clearing_returns_to_empty_state() {
    let mut selector = Selector::new(&*PARTICIPATION_CATALOG);
    for category in PARTICIPATION_CATALOG.categories() {
        selector.select(&category.id).unwrap();
        selector.clear_selection();
        assert!(selector.current_presentation().is_empty());
    }
    // Clearing while unselected is a no-op.
    selector.clear_selection();
    assert_eq!(selector.current_id(), None);
}

#[test]
fn two_tab_walkthrough() {
    let catalog = two_tab_catalog();
    let mut selector = Selector::new(&catalog);
    assert!(selector.current_presentation().is_empty());

    selector.select("specialty").unwrap();
    assert_eq!(
        selector.current_presentation().bundle().map(|b| b.title.as_str()),
        Some("bundle B")
    );

    selector.select("overview").unwrap();
    assert_eq!(
        selector.current_presentation().bundle().map(|b| b.title.as_str()),
        Some("bundle A")
    );

    selector.clear_selection();
    assert_eq!(
        selector.current_presentation(),
        Presentation::Empty(catalog.empty_state())
    );
}

#[test]
fn bogus_id_from_empty_stays_empty() {
    let catalog = two_tab_catalog();
    let mut selector = Selector::new(&catalog);

    let err = selector.select("bogus").unwrap_err();
    assert_eq!(err, SelectorError::UnknownCategory("bogus".into()));
    assert!(selector.current_presentation().is_empty());
}

#[test]
fn selectors_over_one_catalog_are_independent() {
    let catalog = two_tab_catalog();
    let mut first = Selector::new(&catalog);
    let second = Selector::new(&catalog);

    first.select("overview").unwrap();
    assert!(first.is_active("overview"));
    assert!(second.current_presentation().is_empty());
}

#[test]
fn json_catalog_round_trips() {
    let catalog = two_tab_catalog();
    let json = catalog.to_json_pretty().expect("serialize");
    let parsed = Catalog::from_json(&json).expect("parse");
    assert_eq!(parsed, catalog);

    let mut selector = Selector::new(&parsed);
    selector.select("specialty").unwrap();
    assert_eq!(
        selector.current_presentation().bundle().map(|b| b.title.as_str()),
        Some("bundle B")
    );
}

#[test]
fn json_catalog_keeps_participation_structure() {
    let json = PARTICIPATION_CATALOG.to_json_pretty().expect("serialize");
    let parsed = Catalog::from_json(&json).expect("parse");

    let ids: Vec<&str> = parsed.ids().collect();
    assert_eq!(ids, ["overview", "specialty", "trends", "baseline", "flow"]);
    for (ours, theirs) in parsed.categories().iter().zip(PARTICIPATION_CATALOG.categories()) {
        assert_eq!(ours.label, theirs.label);
        assert_eq!(ours.icon, theirs.icon);
        assert_eq!(ours.bundle.title, theirs.bundle.title);
        assert_eq!(ours.bundle.chart.kind(), theirs.bundle.chart.kind());
        assert_eq!(ours.bundle.illustrative, theirs.bundle.illustrative);
    }
    assert_eq!(parsed.empty_state(), PARTICIPATION_CATALOG.empty_state());
}

#[test]
fn json_catalog_rejects_duplicate_ids() {
    let catalog = two_tab_catalog();
    let json = catalog
        .to_json_pretty()
        .expect("serialize")
        .replace("\"specialty\"", "\"overview\"");
    let err = Catalog::from_json(&json).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCategory(id) if id == "overview"));
}
