use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{Page, SiteConfig};
use folio_ui::{AlertModal, ToastLayer};
use gloo::timers::future::TimeoutFuture;

use crate::browser;
use crate::context::{use_alert, use_page};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Timer tick interval while anything is scheduled
const TICK_MS: u32 = 50;

/// Wall-clock time between two `Date.now()` readings. A clock stepping
/// backwards counts as no time passing.
fn elapsed_between(last_ms: f64, now_ms: f64) -> Duration {
    Duration::from_secs_f64(((now_ms - last_ms) / 1000.0).max(0.0))
}

/// Application routes.
///
/// - `/` - The single-page portfolio
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the page model, the timeline tick and the
/// browser bridge. Toasts and the validation alert render above the routes.
#[component]
pub fn App() -> Element {
    let page: Signal<Page> = use_signal(|| Page::demo(SiteConfig::default()));
    let alert: Signal<Option<String>> = use_signal(|| None);

    use_context_provider(|| page);
    use_context_provider(|| alert);

    // Drive every scheduled timeline (toasts, fades, contact send) by the
    // measured time since the last tick; throttled timers still land on time
    use_future(move || async move {
        let mut page = page;
        let mut last = js_sys::Date::now();
        loop {
            TimeoutFuture::new(TICK_MS).await;
            let now = js_sys::Date::now();
            let elapsed = elapsed_between(last, now);
            last = now;
            if page.peek().has_pending() {
                page.write().advance(elapsed);
            }
        }
    });

    use_future(move || browser::listen(page));

    // Keep the body scroll lock in step with the mobile menu
    let scroll_locked = use_memo(move || page.read().nav.body_scroll_locked());
    use_effect(move || browser::lock_body_scroll(scroll_locked()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        Overlays {}
    }
}

/// Toast layer and blocking alert
#[component]
fn Overlays() -> Element {
    let page = use_page();
    let mut alert = use_alert();
    let notifications = page.read().notifications.notifications().to_vec();

    rsx! {
        ToastLayer { notifications }
        if let Some(message) = alert() {
            AlertModal {
                message,
                on_dismiss: move |_| alert.set(None),
            }
        }
    }
}
