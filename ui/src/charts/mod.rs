//! Inline-SVG chart widgets driven by `ChartSpec`.
//!
//! Layout math lives in [`geometry`] and is unit-tested there; the render
//! functions only translate shapes into `svg` elements and CSS hooks
//! (`chart__*` classes in `assets/theme/main.css`).

pub mod geometry;

mod cartesian;
mod radial;
mod sankey;

use dioxus::prelude::*;

use crate::core::bundle::ChartSpec;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LegendEntry {
    pub label: String,
    pub color: String,
}

impl LegendEntry {
    pub(crate) fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Chart with a heading; an empty title renders none.
#[component]
pub fn ChartView(spec: ChartSpec, #[props(default)] title: String) -> Element {
    rsx! {
        figure { class: "chart-card",
            if !title.is_empty() {
                figcaption { class: "chart-card__title", "{title}" }
            }
            {render_chart(&spec)}
        }
    }
}

pub fn render_chart(spec: &ChartSpec) -> Element {
    match spec {
        ChartSpec::Bar(chart) => cartesian::render_bar(chart),
        ChartSpec::Line(chart) => cartesian::render_line(chart),
        ChartSpec::Doughnut(chart) => radial::render_doughnut(chart),
        ChartSpec::Radar(chart) => radial::render_radar(chart),
        ChartSpec::Sankey(chart) => sankey::render_sankey(chart),
    }
}

pub(crate) fn legend(entries: &[LegendEntry]) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul { class: "chart-legend",
            for entry in entries.iter() {
                li { key: "{entry.label}", class: "chart-legend__item",
                    span {
                        class: "chart-legend__swatch",
                        style: "background: {entry.color};",
                    }
                    span { class: "chart-legend__label", "{entry.label}" }
                }
            }
        }
    }
}
