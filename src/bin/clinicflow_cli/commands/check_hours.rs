// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow
// ABOUTME: check-hours command for clinicflow-cli
// ABOUTME: Classifies one timestamp against a clinic's business-hours settings

use crate::helpers::display::print_json;
use chrono::Datelike;
use clinicflow::loaders::load_business_hours;
use clinicflow_analytics::is_within_business_hours;
use clinicflow_core::errors::AppResult;
use clinicflow_core::models::{parse_timestamp, ClockTime};
use serde_json::json;
use std::path::Path;

/// Print whether `at` falls inside the business hours stored at `path`
pub fn run(path: &Path, at: &str) -> AppResult<()> {
    let config = load_business_hours(path)?;
    let timestamp = parse_timestamp(at)?;
    let weekday = timestamp.weekday();
    let window = config.window_for(weekday);

    print_json(
        &json!({
            "at": timestamp.to_rfc3339(),
            "weekday": weekday.to_string(),
            "clockTime": ClockTime::of(&timestamp).to_string(),
            "open": window.map(|w| w.start.to_string()),
            "close": window.map(|w| w.end.to_string()),
            "withinBusinessHours": is_within_business_hours(&timestamp, &config),
        }),
        true,
    )
}
