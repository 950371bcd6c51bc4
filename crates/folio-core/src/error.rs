//! Error types for Folio

use thiserror::Error;

use crate::types::{CommentId, ReplyId};

/// A form was submitted with one or more required fields left empty.
///
/// `message` is the text shown in the blocking alert; `missing` names the
/// empty fields in form order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailure {
    pub message: &'static str,
    pub missing: Vec<&'static str>,
}

impl ValidationFailure {
    pub fn new(message: &'static str, missing: Vec<&'static str>) -> Self {
        Self { message, missing }
    }
}

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Required form fields were empty at submit time
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// A widget command was issued while no reply widget is open
    #[error("No reply widget is open")]
    NoOpenWidget,

    /// Comment was not found in the thread
    #[error("Comment not found: {0}")]
    UnknownComment(CommentId),

    /// Reply was not found in the thread
    #[error("Reply not found: {0}")]
    UnknownReply(ReplyId),

    /// No comment or reply was written by the given author
    #[error("No entry by author: {0}")]
    UnknownAuthor(String),

    /// Portfolio filter names a category no item carries
    #[error("Unknown portfolio category: {0}")]
    UnknownCategory(String),

    /// Lazy image id was never registered
    #[error("Image not found: {0}")]
    UnknownImage(String),

    /// Gallery thumbnail index out of range
    #[error("Thumbnail {index} out of range (gallery has {len})")]
    UnknownThumbnail { index: usize, len: usize },

    /// Contact form submitted while a previous submission is still sending
    #[error("Contact form is already sending")]
    ContactBusy,

    /// Configuration values are inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// JSON (config or script) could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_uses_alert_text() {
        let failure = ValidationFailure::new("Please fill in all fields", vec!["name"]);
        let err: FolioError = failure.into();
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_error_display() {
        let err = FolioError::UnknownComment(CommentId(7));
        assert_eq!(format!("{}", err), "Comment not found: comment-7");

        let err = FolioError::UnknownThumbnail { index: 4, len: 3 };
        assert_eq!(err.to_string(), "Thumbnail 4 out of range (gallery has 3)");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
