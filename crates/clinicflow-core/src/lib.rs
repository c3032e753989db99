// ABOUTME: Core types and constants for the Clinicflow CRM analytics platform
// ABOUTME: Foundation crate with error handling, chat message models, and business-hours configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

#![deny(unsafe_code)]

//! # Clinicflow Core
//!
//! Foundation crate providing shared types and constants for the Clinicflow
//! CRM analytics platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Time units, outlier bounds and classification thresholds
//! - **models**: Chat messages, tenant/lead identifiers, and business hours

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ChatMessage`, `BusinessHoursConfig`, identifiers)
pub mod models;
