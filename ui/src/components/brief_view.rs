use dioxus::prelude::*;

use crate::charts::ChartView;
use crate::core::brief::{Block, Brief, Card, Figure, Finding, PolicyGroup};
use crate::core::bundle::Tone;
use crate::t;

use super::insight::InsightCard;
use super::rich_text::RichText;

/// Full newsletter layout for one research brief.
#[component]
pub fn BriefView(brief: Brief) -> Element {
    let masthead = brief.masthead.label();
    let tags = brief.tags.join(" • ");
    let doi_url = brief.citation.doi_url();

    rsx! {
        article { class: "brief",
            header { class: "brief__header",
                p { class: "brief__masthead", "{masthead}" }
                h1 { class: "brief__topic", "{brief.topic}" }
                p { class: "brief__subtitle", "{brief.subtitle}" }
                div { class: "brief__tags", "{tags}" }
            }

            section { class: "brief__section",
                div { class: "brief__overview",
                    strong { "{brief.overview.label}" }
                    p { "{brief.overview.text}" }
                }
                h3 { class: "brief__section-title", {t!("brief-key-findings")} }
                ul { class: "findings",
                    for finding in brief.findings.iter() {
                        li { key: "{finding.label}", class: "findings__item",
                            span { class: "findings__bullet", aria_hidden: "true", "•" }
                            div {
                                strong { class: "findings__label", "{finding.label}" }
                                " {finding.text}"
                            }
                        }
                    }
                }
            }

            for (idx, part) in brief.sections.iter().enumerate() {
                section { key: "{idx}", class: "brief__section",
                    if let Some(title) = part.title.as_deref() {
                        h3 { class: "brief__section-title", "{title}" }
                    }
                    for (block_idx, block) in part.blocks.iter().enumerate() {
                        div { key: "{block_idx}", {render_block(block)} }
                    }
                }
            }

            section { class: "brief__section brief__resources",
                h3 { class: "brief__section-title", {t!("brief-resources")} }
                for resource in brief.resources.iter() {
                    p { key: "{resource.label}",
                        strong { "{resource.label}" }
                        " {resource.text}"
                    }
                }
                p {
                    strong { {t!("brief-published")} }
                    " {brief.citation.text}"
                    if let (Some(doi), Some(url)) = (brief.citation.doi.as_deref(), doi_url) {
                        " DOI: "
                        a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "{doi}" }
                    }
                }
            }
        }
    }
}

fn render_block(block: &Block) -> Element {
    match block {
        Block::Figures(figures) => {
            let layout = if figures.len() > 1 {
                "figure-grid figure-grid--two"
            } else {
                "figure-grid"
            };
            rsx! {
                div { class: layout,
                    for (idx, figure) in figures.iter().enumerate() {
                        div { key: "{idx}", {render_figure(figure)} }
                    }
                }
            }
        }
        Block::FigureWithNotes {
            figure,
            title,
            notes,
        } => rsx! {
            div { class: "figure-grid figure-grid--two",
                {render_figure(figure)}
                div { class: "notes-panel",
                    h4 { class: "notes-panel__title", "{title}" }
                    {render_paragraphs(notes)}
                }
            }
        },
        Block::Insight(insight) => rsx! {
            InsightCard { insight: insight.clone() }
        },
        Block::Cards(cards) => rsx! {
            div { class: "card-grid",
                for (idx, card) in cards.iter().enumerate() {
                    div { key: "{idx}", {render_card(card)} }
                }
            }
        },
        Block::Callout { tone, title, items } => {
            let modifier = callout_modifier(*tone);
            rsx! {
                div { class: "callout {modifier}",
                    h4 { class: "callout__title", "{title}" }
                    ul { class: "callout__list",
                        for item in items.iter() {
                            li { key: "{item.label}",
                                strong { "{item.label}" }
                                " {item.text}"
                            }
                        }
                    }
                }
            }
        }
        Block::Prose { title, paragraphs } => rsx! {
            div { class: "prose-panel",
                h4 { class: "prose-panel__title", "{title}" }
                {render_paragraphs(paragraphs)}
            }
        },
        Block::Explainer {
            title,
            formula,
            scale,
        } => rsx! {
            div { class: "explainer",
                h4 { class: "explainer__title", "{title}" }
                p { class: "explainer__formula",
                    strong { "{formula.label}" }
                    " {formula.text}"
                }
                div { class: "explainer__scale",
                    for step in scale.iter() {
                        div { key: "{step.label}", class: "explainer__step",
                            strong { "{step.label}" }
                            br {}
                            "{step.text}"
                        }
                    }
                }
            }
        },
        Block::Policy(groups) => rsx! {
            for (idx, group) in groups.iter().enumerate() {
                div { key: "{idx}", {render_policy(group)} }
            }
        },
    }
}

fn render_figure(figure: &Figure) -> Element {
    rsx! {
        div { class: "figure",
            ChartView { spec: figure.chart.clone(), title: figure.title.clone() }
            if let Some(caption) = figure.caption.as_deref() {
                p { class: "figure__caption", "{caption}" }
            }
        }
    }
}

fn render_card(card: &Card) -> Element {
    rsx! {
        div { class: "info-card",
            h4 { class: "info-card__title", "{card.title}" }
            for (idx, line) in card.lines.iter().enumerate() {
                p { key: "{idx}", class: "info-card__line",
                    RichText { text: line.clone() }
                }
            }
        }
    }
}

fn render_paragraphs(paragraphs: &[Finding]) -> Element {
    rsx! {
        for paragraph in paragraphs.iter() {
            p { key: "{paragraph.label}", class: "labelled-paragraph",
                strong { "{paragraph.label}" }
                " {paragraph.text}"
            }
        }
    }
}

fn render_policy(group: &PolicyGroup) -> Element {
    rsx! {
        div { class: "policy-group",
            h4 { class: "policy-group__title", "{group.title}" }
            ul { class: "policy-group__list",
                for (idx, item) in group.items.iter().enumerate() {
                    li { key: "{idx}", "{item}" }
                }
            }
        }
    }
}

fn callout_modifier(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "callout--success",
        Tone::Warning | Tone::Concern => "callout--warning",
        _ => "callout--neutral",
    }
}
