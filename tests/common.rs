// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds chat rows for conversations and standard business-hours settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clinicflow_core::models::{
    BusinessHoursConfig, ChatMessage, ClinicId, ClockTime, LeadId, MessageId, SenderKind,
};

/// Builds the rows of one lead's conversation
pub struct Conversation {
    clinic_id: ClinicId,
    lead_id: LeadId,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(clinic_id: ClinicId) -> Self {
        Self {
            clinic_id,
            lead_id: LeadId::new(),
            messages: Vec::new(),
        }
    }

    pub fn lead(self, at: &str) -> Self {
        self.push(SenderKind::Lead, at)
    }

    pub fn operator(self, at: &str) -> Self {
        self.push(SenderKind::Operator, at)
    }

    pub fn assistant(self, at: &str) -> Self {
        self.push(SenderKind::Assistant, at)
    }

    pub fn push(mut self, sent_by: SenderKind, at: &str) -> Self {
        self.messages.push(ChatMessage {
            id: MessageId::new(),
            lead_id: self.lead_id,
            clinic_id: self.clinic_id,
            content: Some(format!("{sent_by} at {at}")),
            sent_by,
            created_at: at.to_owned(),
        });
        self
    }

    pub fn build(self) -> Vec<ChatMessage> {
        self.messages
    }
}

pub fn clock(raw: &str) -> ClockTime {
    raw.parse().unwrap()
}

/// 08:00-18:00 on weekdays, Saturday 09:00-13:00, Sunday closed
pub fn clinic_hours() -> BusinessHoursConfig {
    BusinessHoursConfig {
        weekday_start: clock("08:00"),
        weekday_end: clock("18:00"),
        saturday_enabled: true,
        saturday_start: Some(clock("09:00")),
        saturday_end: Some(clock("13:00")),
        sunday_enabled: false,
        sunday_start: None,
        sunday_end: None,
    }
}
