use dioxus::prelude::*;

use crate::components::{BriefView, EmptyPanel, TabItem, TabRow};
use crate::content::PAPER_CATALOG;
use crate::core::selector::{Presentation, Selector};
use crate::t;

use super::apply_selection;

/// Research briefs with a floating paper switcher. The first paper is
/// selected on mount, so the empty state only shows if that fails.
#[component]
pub fn Briefs() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut selector = use_signal(|| {
        let mut selector = Selector::new(&*PAPER_CATALOG);
        if let Some(first) = PAPER_CATALOG.categories().first() {
            apply_selection(&mut selector, &first.id);
        }
        selector
    });
    let current = selector();
    let tabs = TabItem::from_categories(current.categories());
    let active = current.current_id().map(str::to_string);

    let body = match current.current_presentation() {
        Presentation::Empty(state) => rsx! {
            EmptyPanel { state: state.clone() }
        },
        Presentation::Bundle(brief) => rsx! {
            BriefView { brief: brief.clone() }
        },
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        div { class: "briefs",
            aside { class: "paper-switcher no-print",
                div { class: "paper-switcher__heading", {t!("switcher-heading")} }
                TabRow {
                    tabs,
                    active,
                    vertical: true,
                    onselect: move |id: String| {
                        selector.with_mut(|s| apply_selection(s, &id));
                    },
                }
            }
            {body}
        }
    }
}
