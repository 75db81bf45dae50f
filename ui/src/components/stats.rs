use dioxus::prelude::*;

/// Headline figure in the page header ("220,556 / Clinicians Tracked").
#[component]
pub fn HeaderStat(value: String, label: String) -> Element {
    rsx! {
        div { class: "header-stat",
            span { class: "header-stat__value", "{value}" }
            span { class: "header-stat__label", "{label}" }
        }
    }
}

#[component]
pub fn StatCard(value: String, label: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-card__number", "{value}" }
            span { class: "stat-card__label", "{label}" }
        }
    }
}
