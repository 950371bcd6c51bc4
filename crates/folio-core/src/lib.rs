//! Folio Core Library
//!
//! Renderer-free state for the interactive parts of a personal portfolio
//! site: the comment reply widget, toast notifications and the small page
//! behaviours around them.
//!
//! ## Overview
//!
//! Everything here is plain `&mut self` state driven by commands. Nothing
//! touches a real document: the web app renders projections of this state,
//! and the CLI replays scripted sessions against it.
//!
//! ## Core Principles
//!
//! - **One reply widget**: the page's [`WidgetSlot`] holds at most one open
//!   widget; opening another removes the first before attaching the second
//! - **Virtual time**: delays are events on a [`Scheduler`] that only moves
//!   when advanced, so every timeline is testable without sleeping
//! - **Notifications are fire-and-forget**: no queue, no merging; each toast
//!   runs its own show, hide and remove timeline
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use folio_core::{Page, ReplyField, SiteConfig};
//!
//! let mut page = Page::demo(SiteConfig::default());
//! let alice = page.comment_by_author("Alice")?;
//!
//! page.open_reply(alice)?;
//! page.thread.edit(ReplyField::Name, "Bob")?;
//! page.thread.edit(ReplyField::Email, "bob@example.com")?;
//! page.thread.edit(ReplyField::Body, "Thanks!")?;
//! page.submit_reply()?;
//!
//! page.advance(Duration::from_millis(100));
//! let toast = page.notifications.visible().next().unwrap();
//! assert!(toast.message.contains("posted successfully"));
//! # Ok::<(), folio_core::FolioError>(())
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod lazy;
pub mod loader;
pub mod nav;
pub mod notification;
pub mod page;
pub mod portfolio;
pub mod scheduler;
pub mod script;
pub mod scroll;
pub mod skills;
pub mod thread;
pub mod types;
pub mod widget;

// Re-exports
pub use config::{
    ContactTimings, FadeTimings, NotificationTimings, ScrollConfig, SiteConfig, SkillConfig,
};
pub use contact::{ContactField, ContactForm, ContactState};
pub use error::{FolioError, FolioResult, ValidationFailure};
pub use gallery::{follow_project_link, Gallery, MainView};
pub use lazy::{LazyImage, LazyImages};
pub use loader::PageLoader;
pub use nav::NavMenu;
pub use notification::{Notification, NotificationCenter, NotificationPhase, Notifier, Severity};
pub use page::Page;
pub use portfolio::{Filter, ItemVisibility, Portfolio, PortfolioItem};
pub use scheduler::{Fired, Scheduler, TimerId};
pub use script::{parse_script, Action, Outcome};
pub use scroll::{is_link_active, ScrollSpy, Section};
pub use skills::{SkillBar, SkillBars};
pub use thread::{
    Comment, CommentThread, Reply, ThreadItem, NESTED_REPLY_MESSAGE, REPLY_POSTED_MESSAGE,
};
pub use types::*;
pub use widget::{ReplyField, ReplyFields, ReplyWidget, WidgetSlot};
