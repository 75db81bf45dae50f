use dioxus::prelude::*;

use crate::core::catalog::Category;

/// Renderable view of one catalog entry. Tabs are always built from the
/// catalog so every button maps to an id the selector accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
}

impl TabItem {
    pub fn from_categories<B>(categories: &[Category<B>]) -> Vec<TabItem> {
        categories
            .iter()
            .map(|c| TabItem {
                id: c.id.clone(),
                label: c.label.clone(),
                icon: c.icon.clone(),
            })
            .collect()
    }
}

#[component]
pub fn TabRow(
    tabs: Vec<TabItem>,
    #[props(!optional)] active: Option<String>,
    onselect: EventHandler<String>,
    #[props(default)] vertical: bool,
) -> Element {
    let row_class = if vertical {
        "tab-row tab-row--vertical"
    } else {
        "tab-row"
    };

    rsx! {
        div { class: row_class, "role": "tablist",
            for tab in tabs.into_iter() {
                {
                    let is_active = active.as_deref() == Some(tab.id.as_str());
                    let id = tab.id.clone();
                    let tab_class = if is_active { "tab tab--active" } else { "tab" };
                    let selected = if is_active { "true" } else { "false" };
                    rsx! {
                        button {
                            key: "{tab.id}",
                            class: tab_class,
                            "role": "tab",
                            aria_selected: selected,
                            onclick: move |_| onselect.call(id.clone()),
                            if let Some(icon) = tab.icon {
                                span { class: "tab__icon", aria_hidden: "true", "{icon}" }
                            }
                            span { class: "tab__label", "{tab.label}" }
                        }
                    }
                }
            }
        }
    }
}
