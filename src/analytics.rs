//! Structured event records. There is no transport yet: records go to the console log.

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::state::SectionId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event: String,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
    pub section: SectionId,
}

impl AnalyticsEvent {
    pub fn new(event: impl Into<String>, data: Value, section: SectionId) -> Self {
        Self {
            event: event.into(),
            data,
            timestamp: Utc::now(),
            section,
        }
    }
}

pub fn track(event: &str, data: Value, section: SectionId) -> AnalyticsEvent {
    let record = AnalyticsEvent::new(event, data, section);
    match serde_json::to_string(&record) {
        Ok(json) => info!("Analytics Event: {}", json),
        Err(e) => warn!("Failed to serialize analytics event {}: {}", event, e),
    }
    record
}
