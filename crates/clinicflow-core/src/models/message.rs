// ABOUTME: Chat message record for lead conversations and its sender variants
// ABOUTME: Accepts rows in camelCase or snake_case and parses their ISO-8601 timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

use super::ids::{ClinicId, LeadId, MessageId};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderKind {
    /// The prospective patient
    Lead,
    /// A human clinic operator
    Operator,
    /// The automated assistant
    Assistant,
}

impl SenderKind {
    /// Kind of responder this sender counts as, `None` for the lead itself
    #[must_use]
    pub const fn responder_kind(self) -> Option<ResponderKind> {
        match self {
            Self::Lead => None,
            Self::Operator => Some(ResponderKind::Human),
            Self::Assistant => Some(ResponderKind::Assistant),
        }
    }
}

impl fmt::Display for SenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lead => write!(f, "lead"),
            Self::Operator => write!(f, "operator"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Whether a reply to a lead came from a person or from automation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderKind {
    /// Reply written by a clinic operator
    Human,
    /// Reply written by the automated assistant
    Assistant,
}

/// One message of a lead conversation, as stored by the hosted database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message ID
    pub id: MessageId,
    /// Conversation thread this message belongs to
    #[serde(alias = "lead_id")]
    pub lead_id: LeadId,
    /// Owning clinic (tenant)
    #[serde(alias = "clinic_id")]
    pub clinic_id: ClinicId,
    /// Message body, absent for media-only messages
    #[serde(default)]
    pub content: Option<String>,
    /// Sender of the message
    #[serde(alias = "sent_by")]
    pub sent_by: SenderKind,
    /// Creation time as written by the database (ISO 8601), kept raw
    #[serde(alias = "created_at")]
    pub created_at: String,
}

impl ChatMessage {
    /// Parsed creation time, `None` when the stored value is not a timestamp
    #[must_use]
    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.created_at).ok()
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp as produced by the database or its REST layer
///
/// Offsets are preserved, never converted: the wall-clock reading is what
/// business-hours checks look at. Values without an offset are read as
/// already being in the clinic's frame and get a zero offset.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` when no supported layout matches
pub fn parse_timestamp(raw: &str) -> AppResult<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed);
    }
    // Postgres text output: "2025-03-04 09:15:00.123+00"
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(parsed);
    }

    let zero = FixedOffset::east_opt(0).ok_or_else(|| AppError::internal("zero offset"))?;
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| zero.from_utc_datetime(&naive))
        .ok_or_else(|| AppError::invalid_format(format!("Unrecognized timestamp: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parses_rfc3339_and_keeps_offset() {
        let parsed = parse_timestamp("2025-03-04T09:15:00-03:00").unwrap();
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_parses_postgres_text_output() {
        let parsed = parse_timestamp("2025-03-04 09:15:00.123+00").unwrap();
        assert_eq!(parsed.minute(), 15);
        assert_eq!(parsed.day(), 4);
    }

    #[test]
    fn test_parses_naive_timestamp_in_place() {
        let parsed = parse_timestamp("2025-03-04T22:40:00").unwrap();
        assert_eq!(parsed.hour(), 22);
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_deserializes_snake_case_rows() {
        let json = r#"{
            "id": "6f1c1a7e-0d7b-4c7e-9a59-3f4f0a1b2c3d",
            "lead_id": "1b0c1a7e-0d7b-4c7e-9a59-3f4f0a1b2c3d",
            "clinic_id": "2c0c1a7e-0d7b-4c7e-9a59-3f4f0a1b2c3d",
            "content": null,
            "sent_by": "assistant",
            "created_at": "2025-03-04T09:15:00Z"
        }"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.sent_by, SenderKind::Assistant);
        assert!(message.content.is_none());
        assert!(message.created_at_parsed().is_some());
    }

    #[test]
    fn test_rejects_unknown_sender() {
        let json = r#"{
            "id": "6f1c1a7e-0d7b-4c7e-9a59-3f4f0a1b2c3d",
            "leadId": "1b0c1a7e-0d7b-4c7e-9a59-3f4f0a1b2c3d",
            "clinicId": "2c0c1a7e-0d7b-4c7e-9a59-3f4f0a1b2c3d",
            "sentBy": "bot",
            "createdAt": "2025-03-04T09:15:00Z"
        }"#;
        assert!(serde_json::from_str::<ChatMessage>(json).is_err());
    }

    #[test]
    fn test_responder_kind_mapping() {
        assert_eq!(SenderKind::Lead.responder_kind(), None);
        assert_eq!(
            SenderKind::Operator.responder_kind(),
            Some(ResponderKind::Human)
        );
        assert_eq!(
            SenderKind::Assistant.responder_kind(),
            Some(ResponderKind::Assistant)
        );
    }
}
