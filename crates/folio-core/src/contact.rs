//! Contact form with a simulated send.
//!
//! Nothing leaves the page: after a fixed delay the form reports success
//! through the notifier and resets itself.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ContactTimings;
use crate::error::{FolioError, FolioResult, ValidationFailure};
use crate::notification::{Notifier, Severity};
use crate::scheduler::Scheduler;

pub const CONTACT_VALIDATION_MESSAGE: &str = "Please fill in all required fields";

const SEND_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    Idle,
    Sending,
}

#[derive(Debug, Clone)]
struct Delivery {
    name: String,
    email: String,
}

#[derive(Debug)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    state: ContactState,
    timings: ContactTimings,
    scheduler: Scheduler<Delivery>,
}

impl ContactForm {
    pub fn new(timings: ContactTimings) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            state: ContactState::Idle,
            timings,
            scheduler: Scheduler::new(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn state(&self) -> ContactState {
        self.state
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            ContactState::Idle => SEND_LABEL,
            ContactState::Sending => SENDING_LABEL,
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.state == ContactState::Sending
    }

    /// Start sending. Only name and email are required.
    pub fn submit(&mut self) -> FolioResult<()> {
        if self.state == ContactState::Sending {
            return Err(FolioError::ContactBusy);
        }

        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if !missing.is_empty() {
            tracing::warn!(?missing, "Contact form rejected");
            return Err(ValidationFailure::new(CONTACT_VALIDATION_MESSAGE, missing).into());
        }

        self.state = ContactState::Sending;
        self.scheduler.schedule_after(
            self.timings.send_delay,
            Delivery {
                name: self.name.clone(),
                email: self.email.clone(),
            },
        );
        tracing::info!(email = %self.email, "Contact message sending");
        Ok(())
    }

    /// Advance the simulated send; on completion notify and reset.
    pub fn advance(&mut self, by: Duration, notifier: &mut impl Notifier) -> bool {
        let fired = self.scheduler.advance(by);
        for fired in &fired {
            let Delivery { name, email } = &fired.event;
            notifier.notify(
                &format!(
                    "Thank you {}! Your message has been sent. I'll get back to you soon at {}.",
                    name, email
                ),
                Severity::Success,
            );
            self.reset();
        }
        !fired.is_empty()
    }

    pub fn time_until_next(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.state = ContactState::Idle;
    }
}
