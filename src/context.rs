//! Page context for the portfolio site.
//!
//! The whole page model lives in one signal provided by `App`; components
//! read their slice of it and issue commands by writing to it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut page = use_page();
//! page.write().nav.toggle();
//! ```

use dioxus::prelude::*;
use folio_core::{FolioError, FolioResult, Page};

/// Hook to access the page model from context.
pub fn use_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}

/// Hook to the blocking alert message, shown while `Some`.
pub fn use_alert() -> Signal<Option<String>> {
    use_context::<Signal<Option<String>>>()
}

/// Surface a command result: validation failures become the blocking alert,
/// anything else is logged.
pub fn report<T>(result: FolioResult<T>, mut alert: Signal<Option<String>>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(FolioError::Validation(failure)) => {
            alert.set(Some(failure.to_string()));
            None
        }
        Err(err) => {
            tracing::error!(%err, "Page command failed");
            None
        }
    }
}
