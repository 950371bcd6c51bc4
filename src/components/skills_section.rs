use dioxus::prelude::*;
use folio_ui::SkillBarView;

use crate::context::use_page;

/// Skill bars, filled once they scroll into view
#[component]
pub fn SkillsSection() -> Element {
    let page = use_page();
    let bars = page.read().skills.bars().to_vec();

    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-list",
                for bar in bars {
                    SkillBarView { key: "{bar.name}", bar }
                }
            }
        }
    }
}
