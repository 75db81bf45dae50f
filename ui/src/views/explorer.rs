use dioxus::prelude::*;

use crate::components::{BundlePanel, EmptyPanel, HeaderStat, StatCard, TabItem, TabRow};
use crate::content::participation::{
    FOOTER_AUTHORS, FOOTER_STUDY, HEADER_STATS, KEY_FINDINGS, PAGE_SUBTITLE, PAGE_TITLE,
    PARTICIPATION_CATALOG, POLICY_IMPLICATIONS, PREDICTORS, STAT_CARDS, STUDY_OVERVIEW,
};
use crate::core::selector::{Presentation, Selector};
use crate::t;

use super::apply_selection;

/// Opens the host print dialog; `.no-print` chrome is hidden by the theme.
const PRINT_SCRIPT: &str = "window.print();";

/// Participation explorer: headline figures, a five-tab visualization
/// switcher that starts empty, and the study summary.
#[component]
pub fn Explorer() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut selector = use_signal(|| Selector::new(&*PARTICIPATION_CATALOG));
    let current = selector();
    let tabs = TabItem::from_categories(current.categories());
    let active = current.current_id().map(str::to_string);

    let panel = match current.current_presentation() {
        Presentation::Empty(state) => rsx! {
            EmptyPanel { state: state.clone() }
        },
        Presentation::Bundle(bundle) => rsx! {
            BundlePanel { bundle: bundle.clone() }
        },
    };

    let print = move |_: MouseEvent| {
        tracing::debug!("opening print dialog");
        // window.print() returns nothing, so the handle is dropped unawaited.
        let _dialog = document::eval(PRINT_SCRIPT);
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        div { class: "explorer",
            header { class: "explorer__header",
                div { class: "explorer__heading",
                    h1 { class: "explorer__title", "{PAGE_TITLE}" }
                    p { class: "explorer__subtitle", "{PAGE_SUBTITLE}" }
                }
                div { class: "explorer__header-stats",
                    for (value, label) in HEADER_STATS {
                        HeaderStat { key: "{label}", value: value.to_string(), label: label.to_string() }
                    }
                }
            }

            div { class: "explorer__content",
                div { class: "stats-row",
                    for (value, label) in STAT_CARDS {
                        StatCard { key: "{label}", value: value.to_string(), label: label.to_string() }
                    }
                }

                div { class: "viz-selector no-print",
                    TabRow {
                        tabs,
                        active,
                        onselect: move |id: String| {
                            selector.with_mut(|s| apply_selection(s, &id));
                        },
                    }
                }

                {panel}

                div { class: "explorer__grid",
                    div {
                        section { class: "explorer__section",
                            h3 { class: "explorer__section-title", {t!("explorer-study-overview")} }
                            p { class: "explorer__text", "{STUDY_OVERVIEW}" }
                        }
                        section { class: "explorer__section",
                            h3 { class: "explorer__section-title", {t!("explorer-key-findings")} }
                            ul { class: "key-points",
                                for point in KEY_FINDINGS {
                                    li { key: "{point}", class: "key-points__item", "{point}" }
                                }
                            }
                        }
                    }
                    div {
                        section { class: "explorer__section",
                            h3 { class: "explorer__section-title", {t!("explorer-predictors")} }
                            p { class: "explorer__text", "{PREDICTORS}" }
                        }
                        section { class: "explorer__section",
                            h3 { class: "explorer__section-title", {t!("explorer-policy")} }
                            ul { class: "key-points",
                                for point in POLICY_IMPLICATIONS {
                                    li { key: "{point}", class: "key-points__item", "{point}" }
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "explorer__footer",
                p { class: "explorer__footer-text",
                    strong { "{FOOTER_STUDY}" }
                    " | {FOOTER_AUTHORS}"
                }
                button { class: "print-button no-print", onclick: print,
                    span { aria_hidden: "true", "🖨 " }
                    {t!("explorer-print")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PRINT_SCRIPT;

    #[test]
    fn print_script_only_opens_the_dialog() {
        assert_eq!(PRINT_SCRIPT.trim(), "window.print();");
    }
}
