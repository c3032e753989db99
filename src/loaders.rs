// ABOUTME: Loads exported chat rows and business-hours settings from JSON files
// ABOUTME: Boundary validation for file input consumed by the CLI and batch jobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

use clinicflow_core::errors::{AppError, AppResult, ErrorCode};
use clinicflow_core::models::{BusinessHoursConfig, ChatMessage};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("Cannot read {}: {e}", path.display()),
        )
        .with_source(e)
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Invalid JSON in {}: {e}", path.display()),
        )
        .with_source(e)
    })
}

/// Read a JSON array of chat message rows
///
/// # Errors
///
/// Returns `ErrorCode::StorageError` if the file cannot be read and
/// `ErrorCode::SerializationError` if any row does not match the message shape
pub fn load_messages(path: &Path) -> AppResult<Vec<ChatMessage>> {
    let messages: Vec<ChatMessage> = load_json(path)?;
    debug!(path = %path.display(), rows = messages.len(), "Loaded chat rows");
    Ok(messages)
}

/// Read and validate a clinic's business-hours settings
///
/// # Errors
///
/// Returns a read or parse error as for [`load_messages`], or the
/// validation error of [`BusinessHoursConfig::validate`]
pub fn load_business_hours(path: &Path) -> AppResult<BusinessHoursConfig> {
    let config: BusinessHoursConfig = load_json(path)?;
    config.validate()?;
    Ok(config)
}
