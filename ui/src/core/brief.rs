//! Research brief documents: a fixed newsletter layout filled with literal
//! findings, charts and policy lists.

use time::Date;

use super::bundle::{ChartSpec, Insight, Tone};

#[derive(Debug, Clone, PartialEq)]
pub struct Masthead {
    pub series: String,
    pub published: Date,
}

impl Masthead {
    pub fn new(series: impl Into<String>, published: Date) -> Self {
        Self {
            series: series.into(),
            published,
        }
    }

    /// "NIHCM Research Brief / March 2025"
    pub fn label(&self) -> String {
        format!(
            "{} / {} {}",
            self.series,
            self.published.month(),
            self.published.year()
        )
    }
}

/// Labelled statement: a key finding or a methodology paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub label: String,
    pub text: String,
}

impl Finding {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub chart: ChartSpec,
    pub caption: Option<String>,
}

impl Figure {
    pub fn new(title: impl Into<String>, chart: ChartSpec) -> Self {
        Self {
            title: title.into(),
            chart,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Small titled box of short lines; `**bold**` emphasis allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<String>,
}

impl Card {
    pub fn new(title: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            title: title.into(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolicyGroup {
    pub title: String,
    pub items: Vec<String>,
}

impl PolicyGroup {
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// One or two charts side by side.
    Figures(Vec<Figure>),
    /// Chart next to a column of labelled paragraphs.
    FigureWithNotes {
        figure: Figure,
        title: String,
        notes: Vec<Finding>,
    },
    Insight(Insight),
    Cards(Vec<Card>),
    /// Tinted bullet list ("Key Provider Factors").
    Callout {
        tone: Tone,
        title: String,
        items: Vec<Finding>,
    },
    Prose {
        title: String,
        paragraphs: Vec<Finding>,
    },
    /// Formula plus a short interpretation scale (PRR explainer).
    Explainer {
        title: String,
        formula: Finding,
        scale: Vec<Finding>,
    },
    Policy(Vec<PolicyGroup>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BriefSection {
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

impl BriefSection {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: Some(title.into()),
            blocks,
        }
    }

    pub fn untitled(blocks: Vec<Block>) -> Self {
        Self {
            title: None,
            blocks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    pub text: String,
    pub doi: Option<String>,
}

impl Citation {
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{doi}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brief {
    pub masthead: Masthead,
    pub topic: String,
    pub subtitle: String,
    pub tags: Vec<String>,
    pub overview: Finding,
    pub findings: Vec<Finding>,
    /// Sections rendered between the findings list and the resources block.
    pub sections: Vec<BriefSection>,
    pub resources: Vec<Finding>,
    pub citation: Citation,
}

impl Brief {
    /// Every chart in reading order.
    pub fn figures(&self) -> impl Iterator<Item = &Figure> + '_ {
        self.sections.iter().flat_map(|section| {
            section.blocks.iter().flat_map(|block| match block {
                Block::Figures(figures) => figures.iter().collect::<Vec<_>>(),
                Block::FigureWithNotes { figure, .. } => vec![figure],
                _ => Vec::new(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn masthead_shows_month_and_year() {
        let masthead = Masthead::new("NIHCM Research Brief", date!(2025 - 03 - 01));
        assert_eq!(masthead.label(), "NIHCM Research Brief / March 2025");
    }

    #[test]
    fn doi_links_resolve_through_doi_org() {
        let citation = Citation {
            text: "Healthcare, 2025.".into(),
            doi: Some("10.3390/healthcare13162062".into()),
        };
        assert_eq!(
            citation.doi_url().as_deref(),
            Some("https://doi.org/10.3390/healthcare13162062")
        );
        let without = Citation {
            text: "Journal of Primary Care & Community Health, 2025.".into(),
            doi: None,
        };
        assert_eq!(without.doi_url(), None);
    }
}
