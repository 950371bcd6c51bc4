//! Portfolio Filter Pills
//!
//! Horizontal row of filter buttons: "All" followed by each category.

use dioxus::prelude::*;
use folio_core::Filter;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Category names, in display order
    pub categories: Vec<String>,
    pub selected: Filter,
    pub on_select: EventHandler<Filter>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         categories: vec!["web".to_string(), "mobile".to_string()],
///         selected: Filter::All,
///         on_select: move |filter| apply(filter),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let filters = filter_options(&props.categories);

    rsx! {
        div { class: "portfolio-filters", role: "radiogroup",
            for filter in filters {
                {
                    let is_selected = filter == props.selected;
                    let label = filter_label(&filter);
                    let value = filter.clone();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if is_selected { "filter-btn active" } else { "filter-btn" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            "data-filter": "{filter}",
                            onclick: move |_| on_select.call(value.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Every selectable filter, "All" first
pub fn filter_options(categories: &[String]) -> Vec<Filter> {
    std::iter::once(Filter::All)
        .chain(categories.iter().map(|c| Filter::Category(c.clone())))
        .collect()
}

/// Button label: the filter name with its first letter capitalised
pub fn filter_label(filter: &Filter) -> String {
    let name = filter.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
