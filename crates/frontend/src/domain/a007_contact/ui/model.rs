use crate::shared::api::ApiError;
use contracts::domain::a007_contact_message::aggregate::ContactMessage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Contact form state: the controlled fields plus the submission phase.
///
/// `Editing -> Submitting -> Submitted` on success,
/// `Editing -> Submitting -> Editing` with the fields kept on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub phase: ContactPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    /// Enter `Submitting` and hand out the message to send.
    ///
    /// Returns `None` outside `Editing` (a submission is already in flight
    /// or was confirmed) or when a required field is empty.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.phase != ContactPhase::Editing || !self.fields.is_complete() {
            return None;
        }
        self.phase = ContactPhase::Submitting;
        Some(self.fields.clone())
    }

    /// Apply the outcome of the request started by [`begin_submit`](Self::begin_submit).
    /// Failures are only logged.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        if self.phase != ContactPhase::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.phase = ContactPhase::Submitted;
            }
            Err(e) => {
                log::error!("Failed to submit contact form: {}", e);
                self.phase = ContactPhase::Editing;
            }
        }
    }

    /// "Send another message": back to an empty editable form.
    pub fn send_another(&mut self) {
        self.fields = ContactMessage::default();
        self.phase = ContactPhase::Editing;
    }
}
