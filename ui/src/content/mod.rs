//! Literal research content. Values are copied from the published papers and
//! must not be recomputed.

pub mod briefs;
pub mod participation;

pub use briefs::PAPER_CATALOG;
pub use participation::PARTICIPATION_CATALOG;
