// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Time units, response-time thresholds, and environment defaults for Clinicflow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

//! Constants grouped by domain.

/// Time unit conversions
pub mod time_constants {
    /// Milliseconds in one minute
    pub const MILLIS_PER_MINUTE: i64 = 60_000;
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: i64 = 60;
    /// Minutes in one day
    pub const MINUTES_PER_DAY: i64 = 1_440;
    /// Minutes in one week
    pub const MINUTES_PER_WEEK: i64 = 10_080;
}

/// Response-time analytics thresholds
pub mod response_time {
    use super::time_constants::MINUTES_PER_WEEK;

    /// Latencies above this many minutes are discarded as outliers
    pub const OUTLIER_BOUND_MINUTES: i64 = MINUTES_PER_WEEK;

    /// Mean at or below this is classified as excellent
    pub const EXCELLENT_MAX_MINUTES: f64 = 60.0;
    /// Mean at or below this is classified as good
    pub const GOOD_MAX_MINUTES: f64 = 240.0;
    /// Mean at or below this is classified as fair, anything above is poor
    pub const FAIR_MAX_MINUTES: f64 = 1_440.0;

    /// Inclusive upper bound of the fastest histogram bucket
    pub const BUCKET_FAST_MAX_MINUTES: i64 = 30;
    /// Inclusive upper bound of the second bucket
    pub const BUCKET_HOUR_MAX_MINUTES: i64 = 60;
    /// Inclusive upper bound of the third bucket; slower replies fall in the last one
    pub const BUCKET_FOUR_HOURS_MAX_MINUTES: i64 = 240;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const CLINICFLOW: &str = "clinicflow";
}

/// Environment variable names and their defaults
pub mod env_config {
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Trailing report window in days
    pub const WINDOW_DAYS: &str = "RESPONSE_TIME_WINDOW_DAYS";
    /// Default for including human operator replies
    pub const INCLUDE_HUMAN: &str = "RESPONSE_TIME_INCLUDE_HUMAN";
    /// Default for including automated assistant replies
    pub const INCLUDE_ASSISTANT: &str = "RESPONSE_TIME_INCLUDE_ASSISTANT";
    /// Default for restricting to business hours
    pub const BUSINESS_HOURS_ONLY: &str = "RESPONSE_TIME_BUSINESS_HOURS_ONLY";

    /// Default trailing report window
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;

    /// Longest trailing report window, ten years
    pub const MAX_WINDOW_DAYS: u32 = 3650;
}
