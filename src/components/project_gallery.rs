use dioxus::prelude::*;
use folio_ui::IconButton;

use crate::context::{report, use_alert, use_page};

/// Featured project: a large view plus thumbnails that swap it
#[component]
pub fn ProjectGallery() -> Element {
    let mut page = use_page();
    let alert = use_alert();

    let (main, thumbnails, active) = {
        let page = page.read();
        (
            page.gallery.main_view().clone(),
            page.gallery.thumbnails().to_vec(),
            page.gallery.active(),
        )
    };

    rsx! {
        div { class: "project-gallery",
            div { class: "gallery-main",
                i { class: "{main.icon}" }
                if let Some(overlay) = main.overlay {
                    div { class: "gallery-overlay", "{overlay}" }
                }
            }
            div { class: "gallery-thumbnails",
                for (index, icon) in thumbnails.into_iter().enumerate() {
                    IconButton {
                        key: "{index}",
                        icon,
                        aria_label: format!("Show view {}", index + 1),
                        class: if active == Some(index) { "thumbnail active".to_string() } else { "thumbnail".to_string() },
                        onclick: move |_| {
                            report(page.write().gallery.select(index), alert);
                        },
                    }
                }
            }
        }
    }
}
