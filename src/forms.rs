use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::notification::{NotificationKind, NotificationRequest};

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_shape().is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Blur-time check of a single control.
pub fn validate_field(spec: FieldSpec, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if spec.required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: String,
}

/// Whole-form pass/fail; no per-field annotation.
pub fn newsletter_submit(raw_email: &str) -> Option<NewsletterSignup> {
    let email = raw_email.trim();
    is_valid_email(email).then(|| NewsletterSignup {
        email: email.to_string(),
    })
}

/// Feedback for a newsletter submit; `None` means the address was rejected.
pub fn newsletter_notification(signup: Option<&NewsletterSignup>) -> NotificationRequest {
    match signup {
        Some(_) => NotificationRequest::new(
            "Thank you for subscribing! You'll receive updates about our programs and impact.",
            NotificationKind::Success,
        ),
        None => NotificationRequest::new("Please enter a valid email address.", NotificationKind::Error),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn spec(self) -> FieldSpec {
        let kind = match self {
            ContactField::Email => FieldKind::Email,
            _ => FieldKind::Text,
        };
        FieldSpec {
            kind,
            required: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent(ContactSubmission),
    Rejected { errors: usize },
}

impl ContactOutcome {
    /// One notification per submit; field-level detail stays inline.
    pub fn notification(&self) -> NotificationRequest {
        match self {
            ContactOutcome::Sent(_) => NotificationRequest::new(
                "Thank you for your message! We'll get back to you within 24 hours.",
                NotificationKind::Success,
            ),
            ContactOutcome::Rejected { .. } => NotificationRequest::new(
                "Please correct the errors in the form.",
                NotificationKind::Error,
            ),
        }
    }
}

/// Contact form values plus the inline error shown under each control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: BTreeMap<ContactField, String>,
    errors: BTreeMap<ContactField, FieldError>,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Typing clears the field's error without re-validating.
    pub fn input(&mut self, field: ContactField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn blur(&mut self, field: ContactField) {
        match validate_field(field.spec(), self.value(field)) {
            Ok(()) => self.errors.remove(&field),
            Err(e) => self.errors.insert(field, e),
        };
    }

    /// Empty fields are marked required and the email is shape-checked even
    /// when empty, so a blank email ends up with the email message. A rejected
    /// form keeps its values and errors; a sent one is reset.
    pub fn submit(&mut self) -> ContactOutcome {
        self.errors.clear();
        for field in ContactField::ALL {
            if self.value(field).trim().is_empty() {
                self.errors.insert(field, FieldError::Required);
            }
        }
        if !is_valid_email(self.value(ContactField::Email).trim()) {
            self.errors.insert(ContactField::Email, FieldError::InvalidEmail);
        }
        if self.has_errors() {
            return ContactOutcome::Rejected {
                errors: self.errors.len(),
            };
        }

        let take = |field| self.value(field).trim().to_string();
        let submission = ContactSubmission {
            name: take(ContactField::Name),
            email: take(ContactField::Email),
            subject: take(ContactField::Subject),
            message: take(ContactField::Message),
        };
        *self = ContactForm::default();
        ContactOutcome::Sent(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL_FIELD: FieldSpec = FieldSpec {
        kind: FieldKind::Email,
        required: true,
    };

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.input(ContactField::Name, name);
        form.input(ContactField::Email, email);
        form.input(ContactField::Subject, subject);
        form.input(ContactField::Message, message);
        form
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn empty_email_is_a_required_error_not_a_shape_error() {
        assert_eq!(validate_field(EMAIL_FIELD, "a@b.co"), Ok(()));
        assert_eq!(validate_field(EMAIL_FIELD, "a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_field(EMAIL_FIELD, ""), Err(FieldError::Required));
        assert_eq!(validate_field(EMAIL_FIELD, "   "), Err(FieldError::Required));

        let optional = FieldSpec {
            kind: FieldKind::Email,
            required: false,
        };
        assert_eq!(validate_field(optional, ""), Ok(()));
    }

    #[test]
    fn newsletter_trims_and_checks_shape() {
        assert_eq!(
            newsletter_submit("  kid@school.org "),
            Some(NewsletterSignup {
                email: "kid@school.org".to_string()
            })
        );
        assert_eq!(newsletter_submit("kid@school"), None);
        assert_eq!(newsletter_submit(""), None);
    }

    #[test]
    fn blur_annotates_and_input_clears() {
        let mut form = ContactForm::default();
        form.input(ContactField::Email, "nope");
        form.blur(ContactField::Email);
        assert_eq!(form.error(ContactField::Email), Some(FieldError::InvalidEmail));

        form.input(ContactField::Email, "still nope");
        assert_eq!(form.error(ContactField::Email), None);

        form.blur(ContactField::Name);
        assert_eq!(form.error(ContactField::Name), Some(FieldError::Required));
    }

    #[test]
    fn rejected_contact_keeps_values_and_errors() {
        let mut form = filled("Jane", "bad", "Hi", "");
        assert_eq!(form.submit(), ContactOutcome::Rejected { errors: 2 });
        assert_eq!(form.error(ContactField::Email), Some(FieldError::InvalidEmail));
        assert_eq!(form.error(ContactField::Message), Some(FieldError::Required));
        assert_eq!(form.error(ContactField::Name), None);
        assert_eq!(form.value(ContactField::Name), "Jane");
        assert_eq!(form.value(ContactField::Email), "bad");
    }

    #[test]
    fn newsletter_feedback_matches_the_result() {
        let accepted = newsletter_submit("kid@school.org");
        let success = newsletter_notification(accepted.as_ref());
        assert_eq!(success.kind, NotificationKind::Success);
        assert!(success.message.starts_with("Thank you for subscribing!"));

        let rejected = newsletter_notification(newsletter_submit("kid@school").as_ref());
        assert_eq!(rejected.kind, NotificationKind::Error);
        assert_eq!(rejected.message, "Please enter a valid email address.");
    }

    #[test]
    fn contact_submit_yields_a_single_aggregate_notification() {
        let mut form = filled("Jane", "bad", "Hi", "");
        let rejected = form.submit().notification();
        assert_eq!(
            rejected,
            NotificationRequest::new("Please correct the errors in the form.", NotificationKind::Error)
        );

        form.input(ContactField::Email, "jane@example.com");
        form.input(ContactField::Message, "Hello");
        let sent = form.submit().notification();
        assert_eq!(sent.kind, NotificationKind::Success);
        assert_eq!(
            sent.message,
            "Thank you for your message! We'll get back to you within 24 hours."
        );
    }

    #[test]
    fn padded_email_is_trimmed_before_the_shape_check() {
        let mut form = filled("Jane", " jane@example.com ", "Hi", "Hello");
        match form.submit() {
            ContactOutcome::Sent(sent) => assert_eq!(sent.email, "jane@example.com"),
            other => panic!("expected success, got {other:?}"),
        }

        let mut blank_name = filled("  ", "jane@example.com", "Hi", "Hello");
        assert_eq!(blank_name.submit(), ContactOutcome::Rejected { errors: 1 });
        assert_eq!(blank_name.error(ContactField::Name), Some(FieldError::Required));
    }

    #[test]
    fn blank_email_gets_the_shape_message() {
        let mut form = filled("Jane", "", "Hi", "Hello");
        form.submit();
        assert_eq!(form.error(ContactField::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn sent_contact_resets_the_form() {
        let mut form = filled("Jane", "bad", "Hi", "");
        form.submit();
        form.input(ContactField::Email, "jane@example.com");
        form.input(ContactField::Message, "Can my class visit?");

        match form.submit() {
            ContactOutcome::Sent(sent) => {
                assert_eq!(sent.name, "Jane");
                assert_eq!(sent.email, "jane@example.com");
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(form, ContactForm::default());
        assert!(!form.has_errors());
    }
}
