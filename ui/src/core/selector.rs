//! Visualization selector: which single category of a catalog is active.
//!
//! Two logical modes, Unselected (initial) and Selected(id):
//! - `select(id)` moves any mode to Selected(id), or fails without touching
//!   state when `id` is not in the catalog;
//! - `clear_selection()` moves any mode back to Unselected.
//!
//! The selector stores a catalog position rather than the raw id, so a selected
//! state always resolves to an existing entry.
//!
//! ```ignore
//! let mut selector = use_signal(|| Selector::new(&*PARTICIPATION_CATALOG));
//! // tab click
//! selector.write().select("specialty")?;
//! // render
//! match selector.read().current_presentation() {
//!     Presentation::Empty(empty) => { /* placeholder */ }
//!     Presentation::Bundle(bundle) => { /* chart, table, insights */ }
//! }
//! ```

use thiserror::Error;

use super::catalog::{Catalog, Category, EmptyState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("unknown visualization category `{0}`")]
    UnknownCategory(String),
}

/// What the render consumer should draw right now.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a, B> {
    Empty(&'a EmptyState),
    Bundle(&'a B),
}

impl<B> Clone for Presentation<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Presentation<'_, B> {}

impl<'a, B> Presentation<'a, B> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Presentation::Empty(_))
    }

    pub fn bundle(&self) -> Option<&'a B> {
        match self {
            Presentation::Bundle(bundle) => Some(bundle),
            Presentation::Empty(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct Selector<'c, B> {
    catalog: &'c Catalog<B>,
    current: Option<usize>,
}

impl<B> Clone for Selector<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Selector<'_, B> {}

impl<B> PartialEq for Selector<'_, B> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog) && self.current == other.current
    }
}

impl<'c, B> Selector<'c, B> {
    /// Fresh selector in the Unselected mode.
    pub fn new(catalog: &'c Catalog<B>) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    pub fn catalog(&self) -> &'c Catalog<B> {
        self.catalog
    }

    /// Full catalog in declaration order (drives the tab row).
    pub fn categories(&self) -> &'c [Category<B>] {
        self.catalog.categories()
    }

    pub fn select(&mut self, id: &str) -> Result<(), SelectorError> {
        let position = self
            .catalog
            .position(id)
            .ok_or_else(|| SelectorError::UnknownCategory(id.to_string()))?;
        if self.current != Some(position) {
            tracing::debug!(category = id, "visualization selected");
        }
        self.current = Some(position);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if let Some(id) = self.current_id() {
            tracing::debug!(category = id, "visualization selection cleared");
        }
        self.current = None;
    }

    pub fn current(&self) -> Option<&'c Category<B>> {
        self.current.map(|idx| &self.catalog.categories()[idx])
    }

    pub fn current_id(&self) -> Option<&'c str> {
        self.current().map(|c| c.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current_id() == Some(id)
    }

    pub fn current_presentation(&self) -> Presentation<'c, B> {
        match self.current() {
            Some(category) => Presentation::Bundle(&category.bundle),
            None => Presentation::Empty(self.catalog.empty_state()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn starts_unselected() {
        let catalog = catalog();
        let selector = Selector::new(&catalog);
        assert!(selector.current_presentation().is_empty());
        assert_eq!(selector.current_id(), None);
    }

    #[test]
    fn active_flag_tracks_selection() {
        let catalog = catalog();
        let mut selector = Selector::new(&catalog);
        selector.select("specialty").unwrap();
        assert!(selector.is_active("specialty"));
        assert!(!selector.is_active("overview"));
        assert_eq!(selector.current_presentation().bundle(), Some(&"bundle-b"));
    }

    #[test]
    fn failed_select_keeps_previous_choice() {
        let catalog = catalog();
        let mut selector = Selector::new(&catalog);
        selector.select("overview").unwrap();
        let err = selector.select("bogus").unwrap_err();
        assert_eq!(err, SelectorError::UnknownCategory("bogus".into()));
        assert_eq!(selector.current_id(), Some("overview"));
        assert_eq!(err.to_string(), "unknown visualization category `bogus`");
    }
}
