//! Home page - the whole single-page portfolio.
//!
//! Sections top to bottom: hero, about, skills, portfolio, blog post with
//! comments, contact. Section ids double as the nav link fragments.

use dioxus::prelude::*;

use crate::browser;
use crate::components::{
    CommentSection, ContactSection, LazyImg, NavHeader, PageLoaderOverlay, PortfolioSection,
    ProjectGallery, SkillsSection,
};
use crate::context::use_page;

#[component]
pub fn Home() -> Element {
    let mut page = use_page();

    let scroll_to_contact = move |_| {
        if let Some(y) = page.read().scroll_target("#contact") {
            browser::scroll_to(y);
        }
    };

    rsx! {
        PageLoaderOverlay {}
        div {
            class: "site",
            onclick: move |_| page.write().nav.outside_click(),
            NavHeader {}

            main {
                section { id: "home", class: "section hero",
                    h1 { "Hi, I'm a designer who codes." }
                    p { class: "tagline", "I build fast, accessible websites and the tools behind them." }
                    button { class: "btn btn-primary", onclick: scroll_to_contact, "Get In Touch" }
                }

                section { id: "about", class: "section about",
                    h2 { class: "section-title", "About Me" }
                    div { class: "about-content",
                        LazyImg { id: "portrait".to_string() }
                        p {
                            "Front-end developer and designer. I care about typography, "
                            "performance and interfaces that explain themselves."
                        }
                    }
                }

                SkillsSection {}
                PortfolioSection {}

                section { id: "blog", class: "section blog",
                    h2 { class: "section-title", "From the Blog" }
                    article { class: "blog-post",
                        h3 { "Designing a Portfolio That Gets Read" }
                        p {
                            "A walk through the design process behind this site: grid, type scale, "
                            "colour and the small interactions that make it feel finished."
                        }
                        ProjectGallery {}
                    }
                    CommentSection {}
                }

                ContactSection {}
            }

            footer { class: "site-footer", p { "Built with Rust and Dioxus." } }
        }
    }
}
