//! Call-to-action buttons that acknowledge interest without submitting anything.

use serde_json::{json, Value};

use crate::notification::{NotificationKind, NotificationRequest};

/// Delay before the donation portal follow-up message.
pub const DONATION_FOLLOW_UP_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionKind {
    ProgramApplication { program: String },
    VolunteerSignup,
    Donation,
    PartnershipInquiry,
}

impl ActionKind {
    pub fn event_name(&self) -> &'static str {
        match self {
            ActionKind::ProgramApplication { .. } => "program_application",
            ActionKind::VolunteerSignup => "volunteer_signup",
            ActionKind::Donation => "donation_click",
            ActionKind::PartnershipInquiry => "partnership_inquiry",
        }
    }

    pub fn event_data(&self) -> Value {
        match self {
            ActionKind::ProgramApplication { program } => json!({ "program": program }),
            _ => json!({}),
        }
    }

    pub fn acknowledgement(&self) -> NotificationRequest {
        match self {
            ActionKind::ProgramApplication { program } => NotificationRequest::new(
                format!(
                    "Thank you for your interest in {}! Our admissions team will contact you with application details.",
                    program
                ),
                NotificationKind::Info,
            ),
            ActionKind::VolunteerSignup => NotificationRequest::new(
                "Thank you for your interest in volunteering! We'll contact you soon with opportunities that match your skills and availability.",
                NotificationKind::Success,
            ),
            ActionKind::Donation => NotificationRequest::new(
                "Thank you for your generosity! You'll be redirected to our secure donation portal.",
                NotificationKind::Info,
            ),
            ActionKind::PartnershipInquiry => NotificationRequest::new(
                "Thank you for your interest in partnering with us! Our partnerships team will reach out to discuss collaboration opportunities.",
                NotificationKind::Success,
            ),
        }
    }

    /// Second message some actions show after a delay.
    pub fn follow_up(&self) -> Option<(u32, NotificationRequest)> {
        match self {
            ActionKind::Donation => Some((
                DONATION_FOLLOW_UP_MS,
                NotificationRequest::new(
                    "Donation portal will be available soon. Please contact us directly for donation opportunities.",
                    NotificationKind::Info,
                ),
            )),
            _ => None,
        }
    }
}
