//! Toast Notifications
//!
//! Every toast is fixed to the same top-right anchor, so toasts raised close
//! together overlap rather than queue. A toast slides in from the right when
//! it becomes visible and slides back out when hidden.

use dioxus::prelude::*;
use folio_core::{Notification, NotificationPhase, Severity};

/// CSS classes for a toast in a given phase
pub fn toast_class(severity: Severity, phase: NotificationPhase) -> String {
    let mut class = format!("notification {}", severity.class());
    if phase == NotificationPhase::Visible {
        class.push_str(" show");
    }
    class
}

/// Horizontal offset: on screen only while visible
pub fn toast_transform(phase: NotificationPhase) -> &'static str {
    match phase {
        NotificationPhase::Visible => "translateX(0)",
        NotificationPhase::Created | NotificationPhase::Hidden => "translateX(400px)",
    }
}

/// Font Awesome icon for a severity
pub fn toast_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "fas fa-check-circle",
        Severity::Error => "fas fa-exclamation-circle",
        Severity::Info => "fas fa-info-circle",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastProps {
    pub notification: Notification,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let n = &props.notification;
    let class = toast_class(n.severity, n.phase);
    let style = format!(
        "background: {}; transform: {};",
        n.severity.color(),
        toast_transform(n.phase)
    );
    let icon = toast_icon(n.severity);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            role: if n.severity == Severity::Error { "alert" } else { "status" },
            div { class: "notification-content",
                i { class: "{icon}" }
                span { "{n.message}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastLayerProps {
    /// Attached notifications in creation order
    pub notifications: Vec<Notification>,
}

/// All attached toasts. Later toasts paint over earlier ones.
#[component]
pub fn ToastLayer(props: ToastLayerProps) -> Element {
    rsx! {
        for notification in props.notifications.iter().cloned() {
            Toast { key: "{notification.id}", notification }
        }
    }
}
