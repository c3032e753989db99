// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow
// ABOUTME: response-time command for clinicflow-cli
// ABOUTME: Builds per-clinic response-time reports from exported chat rows

use crate::helpers::display::print_json;
use crate::ResponseTimeArgs;
use chrono::Utc;
use clinicflow::config::AnalyticsConfig;
use clinicflow::loaders::{load_business_hours, load_messages};
use clinicflow::reports::{ReportWindow, ResponseTimeReportRequest, ResponseTimeReportService};
use clinicflow_analytics::ResponseTimeFilters;
use clinicflow_core::errors::AppResult;
use clinicflow_core::models::parse_timestamp;
use std::collections::HashMap;
use tracing::info;

/// Run the report and print it
pub fn run(config: &AnalyticsConfig, args: &ResponseTimeArgs) -> AppResult<()> {
    let messages = load_messages(&args.messages)?;
    let business_hours = args
        .business_hours
        .as_deref()
        .map(load_business_hours)
        .transpose()?;

    let window = resolve_window(config, args)?;
    let filters = resolve_filters(config.default_filters, args);
    let service = ResponseTimeReportService::new(config.clone());

    if let Some(clinic_id) = args.clinic {
        let request = ResponseTimeReportRequest {
            clinic_id,
            window,
            business_hours,
            filters,
        };
        let report = service.report(&request, &messages)?;
        return print_json(&report, args.pretty);
    }

    let hours_by_clinic: HashMap<_, _> = match business_hours {
        Some(hours) => messages
            .iter()
            .map(|message| (message.clinic_id, hours.clone()))
            .collect(),
        None => HashMap::new(),
    };
    let reports = service.report_by_clinic(&messages, window, filters, &hours_by_clinic)?;
    info!(clinics = reports.len(), "Reports generated");
    print_json(&reports, args.pretty)
}

fn resolve_window(
    config: &AnalyticsConfig,
    args: &ResponseTimeArgs,
) -> AppResult<Option<ReportWindow>> {
    if args.all_time {
        return Ok(None);
    }
    if let (Some(since), Some(until)) = (&args.since, &args.until) {
        let start = parse_timestamp(since)?.with_timezone(&Utc);
        let end = parse_timestamp(until)?.with_timezone(&Utc);
        return ReportWindow::new(start, end).map(Some);
    }
    let days = args.days.unwrap_or(config.window_days);
    ReportWindow::last_days(Utc::now(), days).map(Some)
}

const fn resolve_filters(
    defaults: ResponseTimeFilters,
    args: &ResponseTimeArgs,
) -> ResponseTimeFilters {
    ResponseTimeFilters {
        include_human: defaults.include_human && !args.exclude_human,
        include_assistant: defaults.include_assistant && !args.exclude_assistant,
        business_hours_only: defaults.business_hours_only || args.business_hours_only,
    }
}
