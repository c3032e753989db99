// ABOUTME: Core data models for Clinicflow CRM analytics
// ABOUTME: Re-exports chat message, identifier, and business-hours types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

//! # Data Models
//!
//! Rows arrive from the hosted database already scoped by the caller; these
//! types give them a strong shape before any analytics run.
//!
//! - `ChatMessage`: one message of a lead conversation
//! - `SenderKind` / `ResponderKind`: closed variants for who sent a message
//! - `ClinicId`, `LeadId`, `MessageId`: type-safe identifiers
//! - `BusinessHoursConfig` / `ClockTime`: the weekly opening schedule

mod business_hours;
mod ids;
mod message;

pub use business_hours::{BusinessHoursConfig, ClockTime, DayWindow};
pub use ids::{ClinicId, LeadId, MessageId};
pub use message::{parse_timestamp, ChatMessage, ResponderKind, SenderKind};
