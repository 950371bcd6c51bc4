use dioxus::prelude::*;

use crate::context::use_page;

/// Full-screen spinner shown until the window finishes loading
#[component]
pub fn PageLoaderOverlay() -> Element {
    let page = use_page();
    let visible = page.read().loader.is_visible();

    rsx! {
        div { class: if visible { "page-loader" } else { "page-loader hidden" },
            div { class: "spinner" }
        }
    }
}
