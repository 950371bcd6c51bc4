//! Contact Section Component
//!
//! Name and email are required. While a message is sending the submit
//! button is disabled and reads "Sending..."; the page timeline completes
//! the send, raises the thank-you toast and clears the form.

use dioxus::prelude::*;
use folio_core::ContactField;
use folio_ui::{Button, ButtonVariant, Input, TextArea};

use crate::context::{report, use_alert, use_page};

#[component]
pub fn ContactSection() -> Element {
    let mut page = use_page();
    let alert = use_alert();

    let (name, email, subject, message, label, disabled) = {
        let page = page.read();
        let form = &page.contact;
        (
            form.get(ContactField::Name).to_string(),
            form.get(ContactField::Email).to_string(),
            form.get(ContactField::Subject).to_string(),
            form.get(ContactField::Message).to_string(),
            form.button_label(),
            form.is_submit_disabled(),
        )
    };

    let mut set = move |field: ContactField, value: String| {
        page.write().contact.set(field, value);
    };

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section-title", "Get In Touch" }
            form {
                class: "contact-form",
                novalidate: true,
                onsubmit: move |e| {
                    e.prevent_default();
                    report(page.write().submit_contact(), alert);
                },
                Input {
                    id: "contact-name".to_string(),
                    label: "Name".to_string(),
                    value: name,
                    oninput: move |s| set(ContactField::Name, s),
                }
                Input {
                    id: "contact-email".to_string(),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    value: email,
                    oninput: move |s| set(ContactField::Email, s),
                }
                Input {
                    id: "contact-subject".to_string(),
                    label: "Subject".to_string(),
                    value: subject,
                    oninput: move |s| set(ContactField::Subject, s),
                }
                TextArea {
                    id: "contact-message".to_string(),
                    label: "Message".to_string(),
                    value: message,
                    rows: 5,
                    oninput: move |s| set(ContactField::Message, s),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit".to_string(),
                    disabled,
                    "{label}"
                }
            }
        }
    }
}
