//! Reply Form Component
//!
//! The inline reply widget. It is rendered wherever the thread projection
//! places it and always reflects the page's single open widget; the body
//! field takes focus when the widget mounts.

use dioxus::prelude::*;
use folio_core::ReplyField;
use folio_ui::{Button, ButtonVariant, Input, TextArea};

use crate::context::{report, use_alert, use_page};

#[component]
pub fn ReplyForm() -> Element {
    let mut page = use_page();
    let alert = use_alert();

    let Some(widget) = page.read().thread.widget().cloned() else {
        return rsx! {};
    };
    let fields = widget.fields().clone();

    let mut edit = move |field: ReplyField, value: String| {
        report(page.write().thread.edit(field, value), alert);
    };

    rsx! {
        form {
            class: "reply-form",
            novalidate: true,
            onsubmit: move |e| {
                e.prevent_default();
                report(page.write().submit_reply(), alert);
            },
            h4 { "{widget.heading()}" }
            Input {
                value: fields.name.clone(),
                oninput: move |s| edit(ReplyField::Name, s),
                placeholder: "Your Name".to_string(),
            }
            Input {
                value: fields.email.clone(),
                oninput: move |s| edit(ReplyField::Email, s),
                placeholder: "Your Email".to_string(),
                input_type: "email".to_string(),
            }
            TextArea {
                value: fields.body.clone(),
                oninput: move |s| edit(ReplyField::Body, s),
                placeholder: "Your Reply".to_string(),
                rows: 3,
                autofocus: true,
            }
            div { class: "reply-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit".to_string(),
                    "Post Reply"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        page.write().cancel_reply();
                    },
                    "Cancel"
                }
            }
        }
    }
}
