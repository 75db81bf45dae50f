//! The three NIHCM research briefs and the paper switcher catalog.

mod chc_workforce;
mod panel_equity;
mod participation;

use once_cell::sync::Lazy;

use crate::core::brief::{Brief, Masthead};
use crate::core::catalog::{Catalog, Category, EmptyState};

pub use chc_workforce::chc_workforce_brief;
pub use panel_equity::panel_equity_brief;
pub use participation::participation_brief;

pub const SWITCHER_HEADING: &str = "Research Papers";

pub static PAPER_CATALOG: Lazy<Catalog<Brief>> = Lazy::new(|| {
    Catalog::new(
        EmptyState::new(SWITCHER_HEADING, "Choose a paper to read its research brief."),
        vec![
            Category::new(
                "participation-brief",
                "Paper 1: Medicaid Provider Participation",
                participation_brief(),
            ),
            Category::new(
                "chc-workforce",
                "Paper 2: CHC Workforce Growth",
                chc_workforce_brief(),
            ),
            Category::new(
                "panel-equity",
                "Paper 3: Panel Equity Study",
                panel_equity_brief(),
            ),
        ],
    )
    .expect("paper catalog ids are unique")
});

fn nihcm_march_2025() -> Masthead {
    Masthead::new("NIHCM Research Brief", time::macros::date!(2025 - 03 - 01))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn papers_are_listed_in_publication_order() {
        let ids: Vec<&str> = PAPER_CATALOG.ids().collect();
        assert_eq!(ids, ["participation-brief", "chc-workforce", "panel-equity"]);
    }

    #[test]
    fn every_brief_carries_the_march_masthead() {
        for category in PAPER_CATALOG.categories() {
            assert_eq!(
                category.bundle.masthead.label(),
                "NIHCM Research Brief / March 2025"
            );
            assert_eq!(category.bundle.findings.len(), 5);
            assert!(category.bundle.figures().count() >= 2);
        }
    }
}
