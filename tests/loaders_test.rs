// ABOUTME: Integration tests for JSON file loading
// ABOUTME: Validates chat-row and business-hours parsing plus error codes for bad files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Weekday;
use clinicflow::loaders::{load_business_hours, load_messages};
use clinicflow_core::errors::ErrorCode;
use clinicflow_core::models::SenderKind;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_messages_accepts_camel_and_snake_case_rows() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "rows.json",
        r#"[
            {
                "id": "0b8f5d0e-6f7a-4c2e-9d1b-1a2b3c4d5e6f",
                "leadId": "6c1f3b8a-2d4e-4f6a-8b0c-9d1e2f3a4b5c",
                "clinicId": "3e7a9c1b-5d2f-4a6e-8c0b-7f1d3e5a9b2c",
                "content": "Olá, gostaria de agendar",
                "sentBy": "lead",
                "createdAt": "2025-03-03T10:00:00-03:00"
            },
            {
                "id": "9a2b4c6d-8e0f-4a1b-9c3d-5e7f9a1b3c5d",
                "lead_id": "6c1f3b8a-2d4e-4f6a-8b0c-9d1e2f3a4b5c",
                "clinic_id": "3e7a9c1b-5d2f-4a6e-8c0b-7f1d3e5a9b2c",
                "content": null,
                "sent_by": "assistant",
                "created_at": "2025-03-03 10:02:00"
            }
        ]"#,
    );

    let messages = load_messages(&path).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sent_by, SenderKind::Lead);
    assert_eq!(messages[1].sent_by, SenderKind::Assistant);
    assert_eq!(messages[0].lead_id, messages[1].lead_id);
    assert!(messages[1].content.is_none());
    assert!(messages[1].created_at_parsed().is_some());
}

#[test]
fn test_load_messages_missing_file() {
    let dir = TempDir::new().unwrap();
    let error = load_messages(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_load_messages_rejects_unknown_sender() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "rows.json",
        r#"[{
            "id": "0b8f5d0e-6f7a-4c2e-9d1b-1a2b3c4d5e6f",
            "leadId": "6c1f3b8a-2d4e-4f6a-8b0c-9d1e2f3a4b5c",
            "clinicId": "3e7a9c1b-5d2f-4a6e-8c0b-7f1d3e5a9b2c",
            "sentBy": "bot",
            "createdAt": "2025-03-03T10:00:00Z"
        }]"#,
    );

    let error = load_messages(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.message.contains("rows.json"));
}

#[test]
fn test_load_business_hours_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "hours.json",
        r#"{
            "weekdayStart": "07:30",
            "weekdayEnd": "19:00:00",
            "saturdayEnabled": true,
            "saturdayStart": "08:00",
            "saturdayEnd": "12:00"
        }"#,
    );

    let config = load_business_hours(&path).unwrap();
    assert_eq!(config.weekday_start.to_string(), "07:30");
    assert_eq!(config.weekday_end.to_string(), "19:00");
    assert!(config.saturday_enabled);
    assert!(!config.sunday_enabled);
    assert!(config.sunday_start.is_none());
}

#[test]
fn test_load_business_hours_validates() {
    let dir = TempDir::new().unwrap();
    let overnight = write(
        &dir,
        "overnight.json",
        r#"{ "weekdayStart": "20:00", "weekdayEnd": "04:00" }"#,
    );
    let bad_clock = write(&dir, "bad.json", r#"{ "weekdayStart": "25:00" }"#);

    assert_eq!(
        load_business_hours(&overnight).unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    assert_eq!(
        load_business_hours(&bad_clock).unwrap_err().code,
        ErrorCode::SerializationError
    );
}

#[test]
fn test_load_business_hours_keeps_weekend_day_without_bounds_closed() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "hours.json",
        r#"{ "sundayEnabled": true, "sundayStart": "10:00", "sundayEnd": null }"#,
    );

    let config = load_business_hours(&path).unwrap();
    assert!(config.sunday_enabled);
    assert_eq!(config.window_for(Weekday::Sun), None);
}
