use dioxus::prelude::*;

use crate::charts::render_chart;
use crate::core::bundle::PresentationBundle;
use crate::t;

use super::data_table::DataTableView;
use super::insight::InsightCard;
use super::rich_text::RichText;

/// Detail panel for the active category: chart, optional table, insights.
#[component]
pub fn BundlePanel(bundle: PresentationBundle) -> Element {
    let kind = bundle.chart.kind();
    let insight_class = if bundle.insights.len() > 1 {
        "insight-grid insight-grid--two"
    } else {
        "insight-grid"
    };

    rsx! {
        section { class: "viz-panel",
            header { class: "viz-panel__header",
                h2 { class: "viz-panel__title", "{bundle.title}" }
                if bundle.illustrative {
                    span { class: "badge badge--illustrative", {t!("badge-illustrative")} }
                }
            }
            if !bundle.subtitle.is_empty() {
                p { class: "viz-panel__subtitle",
                    RichText { text: bundle.subtitle.clone() }
                }
            }
            div { class: "viz-panel__chart viz-panel__chart--{kind}",
                {render_chart(&bundle.chart)}
            }
            if let Some(table) = bundle.table.clone() {
                DataTableView { table }
            }
            if !bundle.insights.is_empty() {
                div { class: insight_class,
                    for (idx, insight) in bundle.insights.iter().enumerate() {
                        InsightCard { key: "{idx}", insight: insight.clone() }
                    }
                }
            }
        }
    }
}
