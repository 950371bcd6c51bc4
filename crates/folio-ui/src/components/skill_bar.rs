//! Skill Bar
//!
//! A labelled progress bar that fills to its percentage once revealed.

use dioxus::prelude::*;
use folio_core::SkillBar;

#[derive(Clone, PartialEq, Props)]
pub struct SkillBarViewProps {
    pub bar: SkillBar,
}

#[component]
pub fn SkillBarView(props: SkillBarViewProps) -> Element {
    let bar = &props.bar;
    let width = bar.width();

    rsx! {
        div { class: "skill",
            div { class: "skill-info",
                span { class: "skill-name", "{bar.name}" }
                span { class: "skill-percent", "{bar.percent}%" }
            }
            div { class: "skill-bar",
                div {
                    class: "skill-progress",
                    "data-width": "{bar.percent}%",
                    style: "width: {width}%;",
                }
            }
        }
    }
}
