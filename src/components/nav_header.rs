//! Navigation Header Component
//!
//! Fixed header with the site name and in-page links. On narrow screens
//! the links collapse behind a hamburger toggle; opening the menu locks body
//! scrolling and any link click, outside click or Escape closes it.

use dioxus::prelude::*;
use folio_core::is_link_active;
use folio_ui::IconButton;

use crate::browser;
use crate::context::use_page;

/// In-page navigation targets, top to bottom
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#portfolio", "Work"),
    ("#blog", "Blog"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavHeader() -> Element {
    let mut page = use_page();
    let (menu_open, active) = {
        let page = page.read();
        (
            page.nav.is_open(),
            page.active_section().map(str::to_string),
        )
    };

    let toggle_icon = if menu_open { "fas fa-times" } else { "fas fa-bars" };

    rsx! {
        header { class: "site-header",
            // Clicks inside the header are not "outside" the menu
            onclick: move |e| e.stop_propagation(),
            nav { class: "navbar",
                a { class: "logo", href: "#home", "Folio" }
                ul { class: if menu_open { "nav-links active" } else { "nav-links" },
                    for (href, label) in NAV_LINKS {
                        li {
                            a {
                                class: if is_link_active(href, active.as_deref()) { "nav-link active" } else { "nav-link" },
                                href: "{href}",
                                onclick: move |e| {
                                    e.prevent_default();
                                    let target = page.read().scroll_target(href);
                                    if let Some(y) = target {
                                        browser::scroll_to(y);
                                    }
                                    page.write().nav.link_clicked();
                                },
                                "{label}"
                            }
                        }
                    }
                }
                IconButton {
                    icon: toggle_icon.to_string(),
                    aria_label: "Toggle navigation".to_string(),
                    class: if menu_open { "hamburger active".to_string() } else { "hamburger".to_string() },
                    onclick: move |_| {
                        let open = page.write().nav.toggle();
                        tracing::debug!(open, "Menu toggled");
                    },
                }
            }
        }
    }
}
