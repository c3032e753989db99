// ABOUTME: Main library entry point for Clinicflow CRM analytics
// ABOUTME: Exposes logging, configuration, and the response-time report service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

#![deny(unsafe_code)]

//! # Clinicflow
//!
//! Lead response-time analytics for a multi-tenant clinic CRM. Chat rows are
//! fetched by the surrounding application; this crate turns them into the
//! metrics shown on a clinic's dashboard: mean reply latency, a rating, a
//! per-responder breakdown and a latency histogram.
//!
//! ## Architecture
//!
//! - **`clinicflow-core`**: errors, constants, and data models
//! - **`clinicflow-analytics`**: the pure response-time engine
//! - **config**: environment-driven defaults
//! - **logging**: tracing subscriber setup
//! - **reports**: tenant-scoped, windowed report generation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use clinicflow::config::AnalyticsConfig;
//! use clinicflow::reports::ResponseTimeReportService;
//! use clinicflow_core::errors::AppResult;
//! use clinicflow_core::models::{ChatMessage, ClinicId};
//!
//! fn dashboard(clinic_id: ClinicId, rows: &[ChatMessage]) -> AppResult<String> {
//!     let service = ResponseTimeReportService::new(AnalyticsConfig::from_env()?);
//!     let request = service.default_request(clinic_id, None, chrono::Utc::now())?;
//!     let report = service.report(&request, rows)?;
//!     Ok(serde_json::to_string(&report)?)
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// JSON file loading for exported rows and settings
pub mod loaders;

/// Structured logging setup
pub mod logging;

/// Tenant-scoped response-time reports
pub mod reports;

pub use clinicflow_analytics::{ResponseTimeFilters, ResponseTimeResult};
pub use reports::{
    ReportWindow, ResponseTimeReport, ResponseTimeReportRequest, ResponseTimeReportService,
};
