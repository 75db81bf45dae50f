//! Fixed, ordered catalogs of selectable categories.
//!
//! A catalog is validated once when it is built (non-empty, unique ids) and is
//! immutable afterwards. Selectors borrow it; see `crate::core::selector`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bundle::PresentationBundle;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no categories")]
    Empty,
    #[error("duplicate category id `{0}`")]
    DuplicateCategory(String),
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One selectable entry: identifier, label and the content it presents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category<B> {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub bundle: B,
}

impl<B> Category<B> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, bundle: B) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            bundle,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Placeholder presented while nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl EmptyState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog<B> {
    empty_state: EmptyState,
    categories: Vec<Category<B>>,
}

/// Unvalidated wire form; `Catalog::from_json` funnels it through `Catalog::new`.
#[derive(Deserialize)]
struct RawCatalog<B> {
    empty_state: EmptyState,
    categories: Vec<Category<B>>,
}

impl<B> Catalog<B> {
    pub fn new(empty_state: EmptyState, categories: Vec<Category<B>>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }
        Ok(Self {
            empty_state,
            categories,
        })
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category<B>] {
        &self.categories
    }

    pub fn empty_state(&self) -> &EmptyState {
        &self.empty_state
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Category<B>> {
        self.position(id).map(|idx| &self.categories[idx])
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Catalog<PresentationBundle> {
    /// Load a data-driven catalog, applying the same validation as literal ones.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let parsed: RawCatalog<PresentationBundle> = serde_json::from_str(raw)?;
        Self::new(parsed.empty_state, parsed.categories)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> EmptyState {
        EmptyState::new("Nothing yet", "Pick a tab.")
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(
            empty(),
            vec![
                Category::new("overview", "Overview", 1),
                Category::new("overview", "Overview again", 2),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(id) if id == "overview"));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::<u8>::new(empty(), Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn lookup_follows_declaration_order() {
        let catalog = Catalog::new(
            empty(),
            vec![
                Category::new("overview", "Overview", 'a'),
                Category::new("specialty", "By Specialty", 'b').with_icon("🏥"),
            ],
        )
        .unwrap();
        assert_eq!(catalog.position("specialty"), Some(1));
        assert_eq!(catalog.get("specialty").map(|c| c.bundle), Some('b'));
        assert!(catalog.get("bogus").is_none());
        assert_eq!(catalog.ids().collect::<Vec<_>>(), ["overview", "specialty"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
