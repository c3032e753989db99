// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow
// ABOUTME: Re-exports command modules for clinicflow-cli
// ABOUTME: Provides the response-time report and business-hours check commands

pub mod check_hours;
pub mod response_time;
