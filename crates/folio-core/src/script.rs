//! Scripted interactions for replaying user sessions against a [`Page`].
//!
//! A script is a JSON array of actions tagged by `action`:
//!
//! ```json
//! [
//!   { "action": "open_reply", "author": "Alice" },
//!   { "action": "edit_reply", "field": "name", "value": "Bob" },
//!   { "action": "submit_reply" },
//!   { "action": "advance", "ms": 200 }
//! ]
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::contact::ContactField;
use crate::error::FolioResult;
use crate::notification::Severity;
use crate::page::Page;
use crate::portfolio::Filter;
use crate::types::{CommentId, NotificationId, ReplyId};
use crate::widget::ReplyField;

fn default_viewport() -> f64 {
    900.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Click "Reply" on the first comment by `author`
    OpenReply { author: String },
    EditReply { field: ReplyField, value: String },
    SubmitReply,
    CancelReply,
    /// Click "Reply" on the latest reply by `author`
    NestedReply { author: String },
    Notify {
        message: String,
        #[serde(default)]
        severity: Severity,
    },
    Advance { ms: u64 },
    Filter { filter: Filter },
    ToggleMenu,
    /// Escape key
    CloseMenu,
    Scroll {
        y: f64,
        #[serde(default = "default_viewport")]
        viewport: f64,
    },
    ScrollTo { href: String },
    LoadImage { id: String },
    PageLoaded,
    EditContact { field: ContactField, value: String },
    SubmitContact,
    SelectThumbnail { index: usize },
    ProjectLink { href: String },
}

/// What an action did, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ReplyOpened {
        anchor: CommentId,
        replaced: Option<CommentId>,
    },
    ReplyEdited(ReplyField),
    ReplyPosted(ReplyId),
    ReplyCancelled { was_open: bool },
    NestedReplyRefused,
    Notified(NotificationId),
    Advanced { now: Duration },
    Filtered { filter: Filter },
    Menu { open: bool },
    Scrolled {
        active: Option<String>,
        revealed: usize,
    },
    ScrollTarget(Option<f64>),
    ImageLoaded { id: String, fresh: bool },
    PageLoaded { was_visible: bool },
    ContactEdited(ContactField),
    ContactSending,
    ThumbnailSelected(usize),
    ProjectLink { navigate: bool },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::ReplyOpened { anchor, replaced } => {
                write!(f, "reply widget opened on {}", anchor)?;
                if let Some(old) = replaced {
                    write!(f, " (closed widget on {})", old)?;
                }
                Ok(())
            }
            Outcome::ReplyEdited(field) => write!(f, "reply {} updated", field.label()),
            Outcome::ReplyPosted(id) => write!(f, "reply posted: {}", id),
            Outcome::ReplyCancelled { was_open: true } => write!(f, "reply widget cancelled"),
            Outcome::ReplyCancelled { was_open: false } => write!(f, "no reply widget to cancel"),
            Outcome::NestedReplyRefused => write!(f, "nested reply refused"),
            Outcome::Notified(id) => write!(f, "notification raised: {}", id),
            Outcome::Advanced { now } => write!(f, "clock at {}ms", now.as_millis()),
            Outcome::Filtered { filter } => write!(f, "portfolio filter: {}", filter),
            Outcome::Menu { open } => write!(f, "menu {}", if *open { "open" } else { "closed" }),
            Outcome::Scrolled { active, revealed } => write!(
                f,
                "active section: {} ({} skill bars revealed)",
                active.as_deref().unwrap_or("none"),
                revealed
            ),
            Outcome::ScrollTarget(Some(y)) => write!(f, "scroll to {}px", y),
            Outcome::ScrollTarget(None) => write!(f, "no scroll target"),
            Outcome::ImageLoaded { id, fresh: true } => write!(f, "image {} loaded", id),
            Outcome::ImageLoaded { id, fresh: false } => write!(f, "image {} already loaded", id),
            Outcome::PageLoaded { was_visible } => {
                if *was_visible {
                    write!(f, "loader hidden")
                } else {
                    write!(f, "loader already hidden")
                }
            }
            Outcome::ContactEdited(field) => write!(f, "contact {:?} updated", field),
            Outcome::ContactSending => write!(f, "contact message sending"),
            Outcome::ThumbnailSelected(index) => write!(f, "thumbnail {} selected", index),
            Outcome::ProjectLink { navigate: true } => write!(f, "project link followed"),
            Outcome::ProjectLink { navigate: false } => write!(f, "project link blocked"),
        }
    }
}

/// Parse a JSON script
pub fn parse_script(json: &str) -> FolioResult<Vec<Action>> {
    Ok(serde_json::from_str(json)?)
}

impl Page {
    /// Apply one scripted action.
    ///
    /// Errors leave the page unchanged; validation failures are returned as
    /// [`FolioError::Validation`](crate::FolioError::Validation) so the caller
    /// can surface them as alerts and carry on.
    pub fn perform(&mut self, action: &Action) -> FolioResult<Outcome> {
        let outcome = match action {
            Action::OpenReply { author } => {
                let anchor = self.comment_by_author(author)?;
                let replaced = self.open_reply(anchor)?.map(|w| w.anchor());
                Outcome::ReplyOpened { anchor, replaced }
            }
            Action::EditReply { field, value } => {
                self.thread.edit(*field, value.clone())?;
                Outcome::ReplyEdited(*field)
            }
            Action::SubmitReply => Outcome::ReplyPosted(self.submit_reply()?),
            Action::CancelReply => Outcome::ReplyCancelled {
                was_open: self.cancel_reply().is_some(),
            },
            Action::NestedReply { author } => {
                let id = self.reply_by_author(author)?;
                self.reply_to_reply(id)?;
                Outcome::NestedReplyRefused
            }
            Action::Notify { message, severity } => {
                Outcome::Notified(self.notify(message.clone(), *severity))
            }
            Action::Advance { ms } => {
                self.advance(Duration::from_millis(*ms));
                Outcome::Advanced {
                    now: self.notifications.now(),
                }
            }
            Action::Filter { filter } => {
                self.portfolio.apply(filter.clone())?;
                Outcome::Filtered {
                    filter: filter.clone(),
                }
            }
            Action::ToggleMenu => Outcome::Menu {
                open: self.nav.toggle(),
            },
            Action::CloseMenu => {
                self.nav.escape();
                Outcome::Menu { open: false }
            }
            Action::Scroll { y, viewport } => {
                let revealed = self.scroll(*y, *viewport);
                Outcome::Scrolled {
                    active: self.active_section().map(str::to_string),
                    revealed,
                }
            }
            Action::ScrollTo { href } => Outcome::ScrollTarget(self.scroll_target(href)),
            Action::LoadImage { id } => Outcome::ImageLoaded {
                id: id.clone(),
                fresh: self.images.on_intersect(id)?,
            },
            Action::PageLoaded => Outcome::PageLoaded {
                was_visible: self.loader.loaded(),
            },
            Action::EditContact { field, value } => {
                self.contact.set(*field, value.clone());
                Outcome::ContactEdited(*field)
            }
            Action::SubmitContact => {
                self.submit_contact()?;
                Outcome::ContactSending
            }
            Action::SelectThumbnail { index } => {
                self.gallery.select(*index)?;
                Outcome::ThumbnailSelected(*index)
            }
            Action::ProjectLink { href } => Outcome::ProjectLink {
                navigate: self.follow_project_link(href),
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[test]
    fn parse_tagged_actions() {
        let script = parse_script(
            r#"[
                { "action": "open_reply", "author": "Alice" },
                { "action": "edit_reply", "field": "body", "value": "hi" },
                { "action": "notify", "message": "plain" },
                { "action": "filter", "filter": "web" },
                { "action": "scroll", "y": 120 }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            script[0],
            Action::OpenReply {
                author: "Alice".into()
            }
        );
        assert_eq!(
            script[2],
            Action::Notify {
                message: "plain".into(),
                severity: Severity::Info
            }
        );
        assert_eq!(
            script[3],
            Action::Filter {
                filter: Filter::Category("web".into())
            }
        );
        assert_eq!(
            script[4],
            Action::Scroll {
                y: 120.0,
                viewport: 900.0
            }
        );
    }

    #[test]
    fn unknown_action_is_a_json_error() {
        let err = parse_script(r#"[{ "action": "explode" }]"#).unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn perform_reports_replaced_widget() {
        let mut page = Page::default();
        page.perform(&Action::OpenReply {
            author: "Alice".into(),
        })
        .unwrap();
        let outcome = page
            .perform(&Action::OpenReply {
                author: "Marcus".into(),
            })
            .unwrap();

        assert_eq!(
            outcome.to_string(),
            "reply widget opened on comment-1 (closed widget on comment-0)"
        );
    }

    #[test]
    fn perform_unknown_author_fails() {
        let mut page = Page::default();
        let err = page
            .perform(&Action::OpenReply {
                author: "Nobody".into(),
            })
            .unwrap_err();
        assert!(matches!(err, FolioError::UnknownAuthor(_)));
    }
}
