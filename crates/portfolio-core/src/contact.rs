//! Contact form validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title of the confirmation toast shown after a valid submission.
pub const SENT_TITLE: &str = "Message sent!";

/// Body of the confirmation toast.
pub const SENT_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";

/// Why a submission was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Raw form state, bound to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields and email shape; values are trimmed.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let subject = required("subject", &self.subject)?;
        let message = required("message", &self.message)?;

        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactMessage {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// `local@domain.tld`, no whitespace, one `@`.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "Tell me about your project...".to_string(),
        }
    }

    #[test]
    fn valid_form_passes_trimmed() {
        let mut form = filled();
        form.name = "  John Doe ".to_string();
        let msg = form.validate().unwrap();
        assert_eq!(msg.name, "John Doe");
        assert_eq!(msg.email, "john@example.com");
    }

    #[test]
    fn blank_field_reported_by_name() {
        let mut form = filled();
        form.subject = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("subject")));
        assert_eq!(
            ContactError::MissingField("subject").to_string(),
            "Please fill in the subject field"
        );
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@.de"));
        assert!(!looks_like_email("a@b."));

        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
