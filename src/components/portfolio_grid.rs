//! Portfolio Grid Component
//!
//! Filterable project cards. Filtering fades cards out before removing them
//! from the layout; the fade timing comes from the page's portfolio timeline.

use dioxus::prelude::*;
use folio_core::{Filter, PortfolioItem};
use folio_ui::FilterPills;

use crate::context::{report, use_alert, use_page};

#[component]
pub fn PortfolioSection() -> Element {
    let mut page = use_page();
    let alert = use_alert();

    let (items, categories, selected) = {
        let page = page.read();
        (
            page.portfolio.items().to_vec(),
            page.portfolio
                .categories()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>(),
            page.portfolio.active_filter().clone(),
        )
    };

    rsx! {
        section { id: "portfolio", class: "section portfolio",
            h2 { class: "section-title", "Recent Work" }
            FilterPills {
                categories,
                selected,
                on_select: move |filter: Filter| {
                    report(page.write().portfolio.apply(filter), alert);
                },
            }
            div { class: "portfolio-grid",
                for item in items {
                    PortfolioCard { key: "{item.slug}", item }
                }
            }
        }
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> Element {
    let mut page = use_page();
    let image_id = format!("{}-shot", item.slug);

    rsx! {
        div {
            class: "{item.visibility.class()}",
            "data-category": "{item.category}",
            LazyImg { id: image_id }
            div { class: "portfolio-info",
                h3 { "{item.title}" }
                span { class: "portfolio-category", "{item.category}" }
                a {
                    class: "portfolio-link",
                    href: "#",
                    onclick: move |e| {
                        if !page.write().follow_project_link("#") {
                            e.prevent_default();
                        }
                    },
                    "View Project"
                }
            }
        }
    }
}

/// Image whose `src` is only set once it has scrolled into view.
/// Ids without a registered image render a plain placeholder.
#[component]
pub fn LazyImg(id: String) -> Element {
    let page = use_page();
    let image = page.read().images.get(&id).cloned();

    match image {
        Some(image) => rsx! {
            img {
                class: if image.is_lazy() { "lazy" } else { "loaded" },
                "data-lazy-id": "{image.id}",
                "data-src": "{image.data_src}",
                src: image.src().unwrap_or(""),
                alt: "{image.alt}",
            }
        },
        None => rsx! {
            div { class: "portfolio-placeholder", i { class: "fas fa-image" } }
        },
    }
}
