//! Comment thread with one-level replies.
//!
//! The thread owns its comments and the page's [`WidgetSlot`]. All user
//! actions arrive as commands:
//!
//! - [`CommentThread::open`] - attach a reply widget below a comment
//! - [`CommentThread::edit`] - type into the open widget
//! - [`CommentThread::submit`] - validate and turn the widget into a reply
//! - [`CommentThread::cancel`] - drop the widget without effect
//! - [`CommentThread::reply_to_reply`] - the degraded affordance on replies
//!
//! Rendering reads [`CommentThread::project`], which lists comments, their
//! replies and the widget in document order. The widget always sits after
//! its anchor's replies, so a posted reply lands immediately before the
//! spot the widget occupied.

use crate::error::{FolioError, FolioResult};
use crate::notification::{Notifier, Severity};
use crate::types::{CommentId, ReplyId, TimestampLabel};
use crate::widget::{ReplyField, ReplyWidget, WidgetSlot};

pub const REPLY_POSTED_MESSAGE: &str = "Your reply has been posted successfully!";
pub const NESTED_REPLY_MESSAGE: &str = "Nested replies are currently limited to one level.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub posted: TimestampLabel,
    pub replies: Vec<Reply>,
}

/// A reply produced by the widget. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: ReplyId,
    pub parent: CommentId,
    pub author: String,
    pub email: String,
    pub body: String,
    pub posted: TimestampLabel,
}

/// One renderable entry of the thread, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadItem<'a> {
    Comment(&'a Comment),
    Reply(&'a Reply),
    Widget(&'a ReplyWidget),
}

#[derive(Debug, Default)]
pub struct CommentThread {
    comments: Vec<Comment>,
    slot: WidgetSlot,
    next_comment: u64,
    next_reply: u64,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level comment (page content, not user input)
    pub fn add_comment(
        &mut self,
        author: impl Into<String>,
        body: impl Into<String>,
        posted: TimestampLabel,
    ) -> CommentId {
        let id = CommentId(self.next_comment);
        self.next_comment += 1;
        self.comments.push(Comment {
            id,
            author: author.into(),
            body: body.into(),
            posted,
            replies: Vec::new(),
        });
        id
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn reply(&self, id: ReplyId) -> Option<&Reply> {
        self.comments
            .iter()
            .flat_map(|c| c.replies.iter())
            .find(|r| r.id == id)
    }

    /// First comment written by `author`
    pub fn find_comment_by_author(&self, author: &str) -> Option<CommentId> {
        self.comments
            .iter()
            .find(|c| c.author == author)
            .map(|c| c.id)
    }

    /// Most recent reply written by `author`
    pub fn find_reply_by_author(&self, author: &str) -> Option<ReplyId> {
        self.comments
            .iter()
            .flat_map(|c| c.replies.iter())
            .filter(|r| r.author == author)
            .max_by_key(|r| r.id)
            .map(|r| r.id)
    }

    pub fn reply_count(&self) -> usize {
        self.comments.iter().map(|c| c.replies.len()).sum()
    }

    /// The open widget, if any
    pub fn widget(&self) -> Option<&ReplyWidget> {
        self.slot.current()
    }

    pub fn is_open(&self) -> bool {
        self.slot.is_open()
    }

    /// Open a reply widget below `anchor`.
    ///
    /// Any widget open elsewhere (or on the same comment) is removed first
    /// without producing a reply; it is returned so callers can log it.
    pub fn open(&mut self, anchor: CommentId) -> FolioResult<Option<ReplyWidget>> {
        let author = self
            .comment(anchor)
            .map(|c| c.author.clone())
            .ok_or(FolioError::UnknownComment(anchor))?;

        let previous = self.slot.acquire(ReplyWidget::new(anchor, author));
        match &previous {
            Some(old) => tracing::debug!(
                closed = %old.anchor(),
                opened = %anchor,
                "Replaced open reply widget"
            ),
            None => tracing::debug!(opened = %anchor, "Opened reply widget"),
        }
        Ok(previous)
    }

    /// Set one field of the open widget
    pub fn edit(&mut self, field: ReplyField, value: impl Into<String>) -> FolioResult<()> {
        let widget = self.slot.current_mut().ok_or(FolioError::NoOpenWidget)?;
        widget.edit(field, value);
        Ok(())
    }

    /// Submit the open widget.
    ///
    /// On a validation failure the widget stays open and remembers the
    /// failure; nothing is posted and no notification is raised. On success
    /// the reply is appended under the anchor, the widget is released and
    /// `notifier` receives a success message.
    pub fn submit(&mut self, notifier: &mut impl Notifier) -> FolioResult<ReplyId> {
        let widget = self.slot.current_mut().ok_or(FolioError::NoOpenWidget)?;
        if let Err(failure) = widget.check() {
            tracing::warn!(missing = ?failure.missing, "Reply rejected");
            return Err(failure.into());
        }

        let widget = self.slot.release().ok_or(FolioError::NoOpenWidget)?;
        let anchor = widget.anchor();
        let fields = widget.into_fields();

        let id = ReplyId(self.next_reply);
        let parent = self
            .comments
            .iter_mut()
            .find(|c| c.id == anchor)
            .ok_or(FolioError::UnknownComment(anchor))?;
        self.next_reply += 1;

        parent.replies.push(Reply {
            id,
            parent: anchor,
            author: fields.name,
            email: fields.email,
            body: fields.body,
            posted: TimestampLabel::JustNow,
        });

        tracing::info!(reply = %id, parent = %anchor, "Reply posted");
        notifier.notify(REPLY_POSTED_MESSAGE, Severity::Success);
        Ok(id)
    }

    /// Close the open widget without effect. Returns the discarded widget.
    pub fn cancel(&mut self) -> Option<ReplyWidget> {
        let widget = self.slot.release();
        if let Some(widget) = &widget {
            tracing::debug!(anchor = %widget.anchor(), "Reply widget cancelled");
        }
        widget
    }

    /// The reply link on a produced reply.
    ///
    /// Replies are leaves: this never opens a widget and always reports that
    /// nesting is limited to one level.
    pub fn reply_to_reply(&self, id: ReplyId, notifier: &mut impl Notifier) -> FolioResult<()> {
        if self.reply(id).is_none() {
            return Err(FolioError::UnknownReply(id));
        }
        notifier.notify(NESTED_REPLY_MESSAGE, Severity::Info);
        Ok(())
    }

    /// Renderable items in document order
    pub fn project(&self) -> Vec<ThreadItem<'_>> {
        let mut items = Vec::new();
        for comment in &self.comments {
            items.push(ThreadItem::Comment(comment));
            items.extend(comment.replies.iter().map(ThreadItem::Reply));
            if let Some(widget) = self.slot.current().filter(|w| w.anchor() == comment.id) {
                items.push(ThreadItem::Widget(widget));
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread() -> (CommentThread, CommentId, CommentId) {
        let mut thread = CommentThread::new();
        let alice = thread.add_comment("Alice", "Great post!", TimestampLabel::posted(2024, 3, 15));
        let marcus = thread.add_comment("Marcus", "Very helpful.", TimestampLabel::posted(2024, 3, 16));
        (thread, alice, marcus)
    }

    fn fill(thread: &mut CommentThread) {
        thread.edit(ReplyField::Name, "Bob").unwrap();
        thread.edit(ReplyField::Email, "bob@example.com").unwrap();
        thread.edit(ReplyField::Body, "Thanks!").unwrap();
    }

    #[test]
    fn open_unknown_comment_is_rejected() {
        let (mut thread, _, _) = thread();
        let err = thread.open(CommentId(99)).unwrap_err();
        assert!(matches!(err, FolioError::UnknownComment(CommentId(99))));
        assert!(!thread.is_open());
    }

    #[test]
    fn submit_posts_reply_before_widget_position() {
        let (mut thread, alice, _) = thread();
        let mut log = Vec::new();

        thread.open(alice).unwrap();
        fill(&mut thread);
        let id = thread.submit(&mut log).unwrap();

        let items = thread.project();
        assert!(matches!(items[0], ThreadItem::Comment(c) if c.id == alice));
        match items[1] {
            ThreadItem::Reply(reply) => {
                assert_eq!(reply.id, id);
                assert_eq!(reply.author, "Bob");
                assert_eq!(reply.body, "Thanks!");
                assert_eq!(reply.posted.to_string(), "Just now");
            }
            other => panic!("expected reply, got {:?}", other),
        }
        assert!(!thread.is_open());
        assert_eq!(log, vec![(REPLY_POSTED_MESSAGE.to_string(), Severity::Success)]);
    }

    #[test]
    fn replies_stack_top_to_bottom() {
        let (mut thread, alice, _) = thread();
        let mut log = Vec::new();

        for _ in 0..2 {
            thread.open(alice).unwrap();
            fill(&mut thread);
            thread.submit(&mut log).unwrap();
        }
        thread.open(alice).unwrap();

        let items = thread.project();
        assert_eq!(items.len(), 5);
        assert!(matches!(items[1], ThreadItem::Reply(r) if r.id == ReplyId(0)));
        assert!(matches!(items[2], ThreadItem::Reply(r) if r.id == ReplyId(1)));
        assert!(matches!(items[3], ThreadItem::Widget(_)));
    }

    #[test]
    fn submit_with_empty_field_keeps_widget_open() {
        let (mut thread, alice, _) = thread();
        let mut log = Vec::new();

        thread.open(alice).unwrap();
        thread.edit(ReplyField::Name, "Bob").unwrap();
        let err = thread.submit(&mut log).unwrap_err();

        match err {
            FolioError::Validation(failure) => assert_eq!(failure.missing, vec!["email", "comment"]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(thread.widget().unwrap().error().is_some());
        assert_eq!(thread.reply_count(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn cancel_produces_nothing() {
        let (mut thread, alice, _) = thread();
        thread.open(alice).unwrap();
        fill(&mut thread);

        assert!(thread.cancel().is_some());
        assert!(!thread.is_open());
        assert_eq!(thread.reply_count(), 0);
        assert!(thread.cancel().is_none());
    }

    #[test]
    fn commands_without_widget_are_rejected() {
        let (mut thread, _, _) = thread();
        let mut log = Vec::new();
        assert!(matches!(thread.edit(ReplyField::Name, "x"), Err(FolioError::NoOpenWidget)));
        assert!(matches!(thread.submit(&mut log), Err(FolioError::NoOpenWidget)));
    }

    #[test]
    fn reply_to_reply_only_notifies() {
        let (mut thread, alice, _) = thread();
        let mut log = Vec::new();
        thread.open(alice).unwrap();
        fill(&mut thread);
        let id = thread.submit(&mut log).unwrap();
        log.clear();

        thread.reply_to_reply(id, &mut log).unwrap();
        assert_eq!(log, vec![(NESTED_REPLY_MESSAGE.to_string(), Severity::Info)]);
        assert!(!thread.is_open());

        assert!(matches!(
            thread.reply_to_reply(ReplyId(42), &mut log),
            Err(FolioError::UnknownReply(ReplyId(42)))
        ));
    }

    #[test]
    fn find_by_author() {
        let (mut thread, alice, marcus) = thread();
        assert_eq!(thread.find_comment_by_author("Marcus"), Some(marcus));
        assert_eq!(thread.find_comment_by_author("Nobody"), None);

        let mut log = Vec::new();
        thread.open(alice).unwrap();
        fill(&mut thread);
        let id = thread.submit(&mut log).unwrap();
        assert_eq!(thread.find_reply_by_author("Bob"), Some(id));
    }
}
