// ABOUTME: Service layer turning a clinic's raw chat rows into a dashboard response-time report
// ABOUTME: Enforces tenant scoping and report windows, and fans multi-clinic batches out with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

//! # Response-Time Reports
//!
//! The analytics engine trusts its input. This layer does not: it keeps only
//! the requesting clinic's rows, applies the report window, and validates the
//! clinic's business hours before anything is aggregated.

use crate::config::AnalyticsConfig;
use chrono::{DateTime, Duration, Utc};
use clinicflow_analytics::{ResponseTimeAggregator, ResponseTimeFilters, ResponseTimeResult};
use clinicflow_core::constants::env_config::MAX_WINDOW_DAYS;
use clinicflow_core::errors::{AppError, AppResult};
use clinicflow_core::models::{BusinessHoursConfig, ChatMessage, ClinicId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// Half-open time range `[start, end)` selecting messages by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First instant included
    pub start: DateTime<Utc>,
    /// First instant excluded
    pub end: DateTime<Utc>,
}

impl ReportWindow {
    /// Build a window
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when `end` is not after `start`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::invalid_input(format!(
                "Report window must end after it starts ({start} .. {end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Trailing window of `days` days ending at `now`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when `days` is zero or longer than
    /// `MAX_WINDOW_DAYS`
    pub fn last_days(now: DateTime<Utc>, days: u32) -> AppResult<Self> {
        if days == 0 || days > MAX_WINDOW_DAYS {
            return Err(AppError::invalid_input(format!(
                "Report window must span 1 to {MAX_WINDOW_DAYS} days, got {days}"
            )));
        }
        let start = now
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| {
                AppError::invalid_input(format!("Report window of {days} days starts out of range"))
            })?;
        Ok(Self { start, end: now })
    }

    /// Whether an instant falls in the window
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// What a dashboard asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeReportRequest {
    /// Clinic whose metrics are requested
    pub clinic_id: ClinicId,
    /// Time range; `None` takes every row supplied
    #[serde(default)]
    pub window: Option<ReportWindow>,
    /// Clinic opening hours, needed for the business-hours figures
    #[serde(default)]
    pub business_hours: Option<BusinessHoursConfig>,
    /// Which replies count
    #[serde(default)]
    pub filters: ResponseTimeFilters,
}

/// Response-time metrics for one clinic, ready to serialize for a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeReport {
    /// Clinic the metrics belong to
    pub clinic_id: ClinicId,
    /// Time range the rows were taken from
    pub window: Option<ReportWindow>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Rows of this clinic that fell in the window
    pub messages_considered: usize,
    /// Rows of this clinic dropped for an unreadable timestamp
    pub messages_skipped: usize,
    /// The metrics themselves
    pub metrics: ResponseTimeResult,
}

/// Builds [`ResponseTimeReport`]s from rows fetched by the caller
#[derive(Debug, Clone, Default)]
pub struct ResponseTimeReportService {
    config: AnalyticsConfig,
}

impl ResponseTimeReportService {
    /// Create a service using `config` for request defaults
    #[must_use]
    pub const fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Request for `clinic_id` with the configured window and filters
    ///
    /// # Errors
    ///
    /// Returns the error of [`ReportWindow::last_days`] for an unusable window
    pub fn default_request(
        &self,
        clinic_id: ClinicId,
        business_hours: Option<BusinessHoursConfig>,
        now: DateTime<Utc>,
    ) -> AppResult<ResponseTimeReportRequest> {
        Ok(ResponseTimeReportRequest {
            clinic_id,
            window: Some(ReportWindow::last_days(now, self.config.window_days)?),
            business_hours,
            filters: self.config.default_filters,
        })
    }

    /// Compute the report for one clinic
    ///
    /// Rows belonging to other clinics are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` when the request's business hours
    /// contain an overnight window
    pub fn report(
        &self,
        request: &ResponseTimeReportRequest,
        messages: &[ChatMessage],
    ) -> AppResult<ResponseTimeReport> {
        let (own, foreign): (Vec<&ChatMessage>, Vec<&ChatMessage>) = messages
            .iter()
            .partition(|message| message.clinic_id == request.clinic_id);

        if !foreign.is_empty() {
            debug!(
                clinic_id = %request.clinic_id,
                foreign_rows = foreign.len(),
                "Ignoring chat rows owned by other clinics"
            );
        }
        self.report_scoped(request, &own)
    }

    /// Compute one report per clinic present in a multi-tenant batch
    ///
    /// Rows are partitioned by clinic once, then clinics are processed in
    /// parallel; the output is sorted by clinic id.
    ///
    /// # Errors
    ///
    /// Returns the first business-hours validation error encountered
    pub fn report_by_clinic(
        &self,
        messages: &[ChatMessage],
        window: Option<ReportWindow>,
        filters: ResponseTimeFilters,
        business_hours: &HashMap<ClinicId, BusinessHoursConfig>,
    ) -> AppResult<Vec<ResponseTimeReport>> {
        let mut by_clinic: BTreeMap<ClinicId, Vec<&ChatMessage>> = BTreeMap::new();
        for message in messages {
            by_clinic.entry(message.clinic_id).or_default().push(message);
        }
        let partitions: Vec<(ClinicId, Vec<&ChatMessage>)> = by_clinic.into_iter().collect();

        debug!(
            clinics = partitions.len(),
            rows = messages.len(),
            "Batch report"
        );

        partitions
            .par_iter()
            .map(|(clinic_id, rows)| {
                let request = ResponseTimeReportRequest {
                    clinic_id: *clinic_id,
                    window,
                    business_hours: business_hours.get(clinic_id).cloned(),
                    filters,
                };
                self.report_scoped(&request, rows)
            })
            .collect()
    }

    /// Report over rows already known to belong to `request.clinic_id`
    fn report_scoped(
        &self,
        request: &ResponseTimeReportRequest,
        rows: &[&ChatMessage],
    ) -> AppResult<ResponseTimeReport> {
        if let Some(hours) = &request.business_hours {
            hours.validate()?;
        }

        let mut skipped = 0_usize;
        let selected: Vec<&ChatMessage> = rows
            .iter()
            .copied()
            .filter(|message| {
                let Some(created_at) = message.created_at_parsed() else {
                    skipped += 1;
                    return false;
                };
                match request.window {
                    Some(window) => window.contains(created_at.with_timezone(&Utc)),
                    None => true,
                }
            })
            .collect();

        if skipped > 0 {
            warn!(
                clinic_id = %request.clinic_id,
                skipped,
                "Chat rows with unreadable timestamps left out of the report"
            );
        }

        let metrics = ResponseTimeAggregator::aggregate(
            selected.iter().copied(),
            request.business_hours.as_ref(),
            &request.filters,
        );

        info!(
            clinic_id = %request.clinic_id,
            environment = %self.config.environment,
            messages = selected.len(),
            sample_size = metrics.sample_size,
            mean_minutes = metrics.mean_minutes,
            classification = %metrics.classification,
            "Response-time report generated"
        );

        Ok(ResponseTimeReport {
            clinic_id: request.clinic_id,
            window: request.window,
            generated_at: Utc::now(),
            messages_considered: selected.len(),
            messages_skipped: skipped,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clinicflow_core::errors::ErrorCode;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_window_is_half_open() {
        let window = ReportWindow::new(utc(2025, 3, 1, 0), utc(2025, 3, 2, 0)).unwrap();
        assert!(window.contains(utc(2025, 3, 1, 0)));
        assert!(window.contains(utc(2025, 3, 1, 23)));
        assert!(!window.contains(utc(2025, 3, 2, 0)));
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        assert!(ReportWindow::new(utc(2025, 3, 2, 0), utc(2025, 3, 1, 0)).is_err());
        assert!(ReportWindow::new(utc(2025, 3, 1, 0), utc(2025, 3, 1, 0)).is_err());
    }

    #[test]
    fn test_last_days() {
        let now = utc(2025, 3, 31, 12);
        let window = ReportWindow::last_days(now, 30).unwrap();
        assert_eq!(window.start, utc(2025, 3, 1, 12));
        assert_eq!(window.end, now);
    }

    #[test]
    fn test_last_days_rejects_unusable_spans() {
        let now = utc(2025, 3, 31, 12);
        assert!(ReportWindow::last_days(now, 0).is_err());
        assert!(ReportWindow::last_days(now, MAX_WINDOW_DAYS).is_ok());

        let error = ReportWindow::last_days(now, 200_000_000).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_default_request_uses_config() {
        let service = ResponseTimeReportService::new(AnalyticsConfig {
            window_days: 7,
            default_filters: ResponseTimeFilters::human_only(),
            ..AnalyticsConfig::default()
        });
        let now = utc(2025, 3, 31, 12);
        let request = service.default_request(ClinicId::new(), None, now).unwrap();
        assert_eq!(request.window, Some(ReportWindow::last_days(now, 7).unwrap()));
        assert_eq!(request.filters, ResponseTimeFilters::human_only());
    }
}
