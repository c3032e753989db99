// ABOUTME: Human-readable durations and quality ratings for mean response times
// ABOUTME: Floor-divided "2h 5min" style text and excellent/good/fair/poor thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

use clinicflow_core::constants::response_time::{
    EXCELLENT_MAX_MINUTES, FAIR_MAX_MINUTES, GOOD_MAX_MINUTES,
};
use clinicflow_core::constants::time_constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating of a mean response time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTimeClassification {
    /// Up to one hour
    Excellent,
    /// Up to four hours
    Good,
    /// Up to one day
    Fair,
    /// Slower than one day
    Poor,
    /// No reply survived the filters, so there is nothing to rate
    NoData,
}

impl fmt::Display for ResponseTimeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::NoData => "no_data",
        };
        f.write_str(label)
    }
}

/// Rate a mean response time; each bound belongs to the better rating
#[must_use]
pub fn classify_response_time(mean_minutes: f64) -> ResponseTimeClassification {
    if mean_minutes <= EXCELLENT_MAX_MINUTES {
        ResponseTimeClassification::Excellent
    } else if mean_minutes <= GOOD_MAX_MINUTES {
        ResponseTimeClassification::Good
    } else if mean_minutes <= FAIR_MAX_MINUTES {
        ResponseTimeClassification::Fair
    } else {
        ResponseTimeClassification::Poor
    }
}

/// Render minutes as `< 1min`, `59min`, `2h 5min`, `1d 3h`
///
/// Every unit is floor-divided; a zero trailing unit is omitted.
#[must_use]
pub fn format_response_time(minutes: f64) -> String {
    if minutes.is_nan() || minutes < 1.0 {
        return "< 1min".to_owned();
    }

    let whole = minutes.floor() as i64;
    if whole < MINUTES_PER_HOUR {
        return format!("{whole}min");
    }

    if whole < MINUTES_PER_DAY {
        let hours = whole / MINUTES_PER_HOUR;
        let rest = whole % MINUTES_PER_HOUR;
        return if rest == 0 {
            format!("{hours}h")
        } else {
            format!("{hours}h {rest}min")
        };
    }

    let days = whole / MINUTES_PER_DAY;
    let hours = (whole % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    if hours == 0 {
        format!("{days}d")
    } else {
        format!("{days}d {hours}h")
    }
}
