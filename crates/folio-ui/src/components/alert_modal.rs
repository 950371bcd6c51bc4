//! Alert Modal
//!
//! Blocking message with a single OK button. Used for form validation
//! failures; clicking the overlay outside the card also dismisses it.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

#[derive(Clone, PartialEq, Props)]
pub struct AlertModalProps {
    pub message: String,
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn AlertModal(props: AlertModalProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_dismiss.call(()),
            div {
                class: "modal-card",
                role: "alertdialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                p { class: "modal-message", "{props.message}" }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
