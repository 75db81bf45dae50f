//! Framework-independent core: catalogs, bundles, briefs, the selector state
//! machine and display formatting.

pub mod brief;
pub mod bundle;
pub mod catalog;
pub mod format;
pub mod selector;

pub use brief::Brief;
pub use bundle::{ChartSpec, Insight, PresentationBundle, Tone};
pub use catalog::{Catalog, CatalogError, Category, EmptyState};
pub use selector::{Presentation, Selector, SelectorError};
