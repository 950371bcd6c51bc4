//! Folio UI Components
//!
//! Dioxus components shared by the portfolio site. They render projections
//! of `folio-core` state and report user input through event handlers; none
//! of them own page state.
//!
//! ## Palette
//!
//! - **Success (#2ecc71)**, **Error (#e74c3c)**, **Info (#3498db)**: toast
//!   backgrounds, taken from [`folio_core::Severity::color`]
//! - **Accent (#3498db)**: links, active filters, skill bar fill

pub mod components;

pub use components::*;
