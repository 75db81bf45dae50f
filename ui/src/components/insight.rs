use dioxus::prelude::*;

use crate::core::bundle::Insight;

use super::rich_text::RichText;

/// Tinted annotation box; the tone picks the palette (`insight--*` in the theme).
#[component]
pub fn InsightCard(insight: Insight) -> Element {
    let modifier = insight.tone.css_modifier();

    rsx! {
        aside { class: "insight {modifier}",
            h4 { class: "insight__title", "{insight.title}" }
            p { class: "insight__body",
                RichText { text: insight.body.clone() }
            }
        }
    }
}
