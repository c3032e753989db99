// ABOUTME: Configuration management module for Clinicflow analytics settings
// ABOUTME: Environment-only configuration for report windows, default filters, and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

//! Configuration module
//!
//! All settings come from environment variables; there is no config file.
//! Per-clinic business hours are data, not configuration, and travel with
//! each report request.

/// Environment-driven analytics configuration
pub mod environment;

pub use environment::{AnalyticsConfig, Environment};
