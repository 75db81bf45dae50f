//! Page-level components. Each page owns exactly one selector.

mod briefs;
mod explorer;

pub use briefs::Briefs;
pub use explorer::Explorer;

use crate::core::selector::Selector;

/// Routes a tab click into the selector.
///
/// Tabs are generated from the same catalog, so a rejection means the two
/// drifted apart. Debug builds stop here; release builds keep the previous
/// selection and log the error.
pub(crate) fn apply_selection<B>(selector: &mut Selector<'_, B>, id: &str) {
    if let Err(err) = selector.select(id) {
        tracing::error!(%err, "selection rejected");
        if cfg!(debug_assertions) {
            panic!("{err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::apply_selection;
    use crate::core::catalog::{Catalog, Category, EmptyState};
    use crate::core::selector::Selector;

    fn catalog() -> Catalog<&'static str> {
        Catalog::new(
            EmptyState::new("Select a Visualization to Explore", "Choose a tab."),
            vec![
                Category::new("overview", "Overview", "bundle-a"),
                Category::new("specialty", "By Specialty", "bundle-b"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn known_tab_selects_its_category() {
        let catalog = catalog();
        let mut selector = Selector::new(&catalog);
        apply_selection(&mut selector, "specialty");
        assert_eq!(selector.current_id(), Some("specialty"));
        assert_eq!(selector.current_presentation().bundle(), Some(&"bundle-b"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unknown visualization category `bogus`")]
    fn unknown_tab_fails_fast_in_debug_builds() {
        let catalog = catalog();
        let mut selector = Selector::new(&catalog);
        apply_selection(&mut selector, "bogus");
    }
}
