// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow
// ABOUTME: Output formatting helpers for clinicflow-cli
// ABOUTME: Prints command results as compact or pretty JSON on stdout

use clinicflow_core::errors::AppResult;
use serde::Serialize;

/// Print `value` as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
