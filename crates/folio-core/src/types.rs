//! Core identifier and label types for Folio

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a top-level comment in a [`CommentThread`](crate::CommentThread).
///
/// Ids are allocated sequentially by the thread that owns the comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comment-{}", self.0)
    }
}

/// Identifier of a reply produced by the reply widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReplyId(pub u64);

impl fmt::Display for ReplyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reply-{}", self.0)
    }
}

/// Identifier of a notification emitted by the
/// [`NotificationCenter`](crate::NotificationCenter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Timestamp label shown in a comment header.
///
/// Replies produced in the browser never carry a real date; they always read
/// "Just now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampLabel {
    JustNow,
    Posted(NaiveDate),
}

impl TimestampLabel {
    /// Label for a comment posted on the given calendar day.
    ///
    /// Falls back to [`TimestampLabel::JustNow`] for an impossible date.
    pub fn posted(year: i32, month: u32, day: u32) -> Self {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::Posted)
            .unwrap_or(Self::JustNow)
    }
}

impl fmt::Display for TimestampLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampLabel::JustNow => write!(f, "Just now"),
            TimestampLabel::Posted(date) => write!(f, "{}", date.format("%B %-d, %Y")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(CommentId(3).to_string(), "comment-3");
        assert_eq!(ReplyId(12).to_string(), "reply-12");
        assert_eq!(NotificationId(0).to_string(), "toast-0");
    }

    #[test]
    fn test_timestamp_labels() {
        assert_eq!(TimestampLabel::JustNow.to_string(), "Just now");
        assert_eq!(TimestampLabel::posted(2024, 3, 15).to_string(), "March 15, 2024");
        assert_eq!(TimestampLabel::posted(2024, 2, 30), TimestampLabel::JustNow);
    }
}
