//! Inline reply widget and the single-slot register that holds it.
//!
//! A [`ReplyWidget`] is the open reply form attached to one comment. The
//! page owns exactly one [`WidgetSlot`]; putting a widget into the slot
//! always takes the previous occupant out first, so two widgets never
//! coexist.

use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::types::CommentId;

/// Alert text for an incomplete reply
pub const REPLY_VALIDATION_MESSAGE: &str = "Please fill in all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyField {
    Name,
    Email,
    Body,
}

impl ReplyField {
    pub const ALL: [ReplyField; 3] = [ReplyField::Name, ReplyField::Email, ReplyField::Body];

    pub fn label(&self) -> &'static str {
        match self {
            ReplyField::Name => "name",
            ReplyField::Email => "email",
            ReplyField::Body => "comment",
        }
    }
}

/// The three values typed into a reply form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyFields {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl ReplyFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }

    pub fn get(&self, field: ReplyField) -> &str {
        match field {
            ReplyField::Name => &self.name,
            ReplyField::Email => &self.email,
            ReplyField::Body => &self.body,
        }
    }

    pub fn set(&mut self, field: ReplyField, value: impl Into<String>) {
        let slot = match field {
            ReplyField::Name => &mut self.name,
            ReplyField::Email => &mut self.email,
            ReplyField::Body => &mut self.body,
        };
        *slot = value.into();
    }

    /// Presence check only: every field must be non-empty.
    ///
    /// Whitespace counts as content; no format checks are made on the email.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        let missing: Vec<&'static str> = ReplyField::ALL
            .iter()
            .filter(|field| self.get(**field).is_empty())
            .map(|field| field.label())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(REPLY_VALIDATION_MESSAGE, missing))
        }
    }
}

/// An open reply form attached below a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyWidget {
    anchor: CommentId,
    anchor_author: String,
    fields: ReplyFields,
    focus: ReplyField,
    error: Option<ValidationFailure>,
    generation: u64,
}

impl ReplyWidget {
    /// New empty widget; focus starts on the reply body
    pub fn new(anchor: CommentId, anchor_author: impl Into<String>) -> Self {
        Self {
            anchor,
            anchor_author: anchor_author.into(),
            fields: ReplyFields::default(),
            focus: ReplyField::Body,
            error: None,
            generation: 0,
        }
    }

    /// Which opening of the slot this widget came from; every open gets a
    /// new value, even on the same anchor
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn anchor(&self) -> CommentId {
        self.anchor
    }

    pub fn anchor_author(&self) -> &str {
        &self.anchor_author
    }

    pub fn heading(&self) -> String {
        format!("Reply to {}", self.anchor_author)
    }

    pub fn fields(&self) -> &ReplyFields {
        &self.fields
    }

    pub fn focus(&self) -> ReplyField {
        self.focus
    }

    /// The failure from the last rejected submit, if any
    pub fn error(&self) -> Option<&ValidationFailure> {
        self.error.as_ref()
    }

    pub(crate) fn edit(&mut self, field: ReplyField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.focus = field;
    }

    /// Validate and remember the outcome on the widget
    pub(crate) fn check(&mut self) -> Result<(), ValidationFailure> {
        let result = self.fields.validate();
        self.error = result.as_ref().err().cloned();
        result
    }

    pub(crate) fn into_fields(self) -> ReplyFields {
        self.fields
    }
}

/// Process-wide holder for the one open reply widget.
#[derive(Debug, Default)]
pub struct WidgetSlot {
    current: Option<ReplyWidget>,
    opened: u64,
}

impl WidgetSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `widget`, returning whichever widget was open before.
    ///
    /// The previous occupant is taken out before the new one goes in.
    pub fn acquire(&mut self, mut widget: ReplyWidget) -> Option<ReplyWidget> {
        let previous = self.current.take();
        self.opened += 1;
        widget.generation = self.opened;
        self.current = Some(widget);
        previous
    }

    /// Empty the slot
    pub fn release(&mut self) -> Option<ReplyWidget> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&ReplyWidget> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ReplyWidget> {
        self.current.as_mut()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_open_on(&self, anchor: CommentId) -> bool {
        self.current.as_ref().is_some_and(|w| w.anchor == anchor)
    }
}
