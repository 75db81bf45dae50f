use dioxus::prelude::*;

use crate::core::catalog::EmptyState;

#[component]
pub fn EmptyPanel(state: EmptyState) -> Element {
    rsx! {
        div { class: "viz-empty",
            if let Some(icon) = state.icon {
                div { class: "viz-empty__icon", aria_hidden: "true", "{icon}" }
            }
            h3 { class: "viz-empty__title", "{state.title}" }
            p { class: "viz-empty__text", "{state.message}" }
        }
    }
}
