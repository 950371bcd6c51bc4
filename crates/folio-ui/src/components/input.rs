//! Input Field Components
//!
//! Labelled text inputs and textareas for the reply and contact forms.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_field_id("input"));

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "form-control",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Take keyboard focus once mounted
    #[props(default = false)]
    pub autofocus: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
///
/// With `autofocus` set the textarea focuses itself when it mounts, which is
/// how a freshly opened reply widget puts the caret in its body field.
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_field_id("textarea"));
    let autofocus = props.autofocus;

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "form-control",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onmounted: move |e: MountedEvent| async move {
                    if autofocus {
                        if let Err(err) = e.set_focus(true).await {
                            tracing::debug!(?err, "Could not focus textarea");
                        }
                    }
                },
            }
        }
    }
}

static FIELD_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique element id for label association
fn next_field_id(prefix: &str) -> String {
    format!("{}-{}", prefix, FIELD_COUNTER.fetch_add(1, Ordering::Relaxed))
}
