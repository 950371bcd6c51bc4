//! Reusable UI components for the portfolio site

mod alert_modal;
mod button;
mod filter_pills;
mod input;
mod skill_bar;
mod toast;

pub use alert_modal::*;
pub use button::*;
pub use filter_pills::*;
pub use input::*;
pub use skill_bar::*;
pub use toast::*;
