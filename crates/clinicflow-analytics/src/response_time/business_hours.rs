// ABOUTME: Decides whether a timestamp falls inside a clinic's weekly business hours
// ABOUTME: Reads the timestamp's own wall clock; no timezone conversion is performed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

use chrono::{DateTime, Datelike, TimeZone};
use clinicflow_core::models::{BusinessHoursConfig, ClockTime};

/// Business-hours checks against a [`BusinessHoursConfig`]
pub struct BusinessHoursClassifier;

impl BusinessHoursClassifier {
    /// Whether `timestamp` falls inside the configured opening hours
    ///
    /// The weekday and `HH:mm` are read from the timestamp as written, so the
    /// caller must pass it already expressed in the clinic's timezone. Window
    /// bounds are inclusive. Closed days, enabled weekend days with a missing
    /// bound, and windows that end before they start all answer `false`.
    #[must_use]
    pub fn is_within_business_hours<Tz: TimeZone>(
        timestamp: &DateTime<Tz>,
        config: &BusinessHoursConfig,
    ) -> bool {
        let time = ClockTime::of(timestamp);
        config
            .window_for(timestamp.weekday())
            .is_some_and(|window| window.contains(time))
    }
}

/// Shorthand for [`BusinessHoursClassifier::is_within_business_hours`]
#[must_use]
pub fn is_within_business_hours<Tz: TimeZone>(
    timestamp: &DateTime<Tz>,
    config: &BusinessHoursConfig,
) -> bool {
    BusinessHoursClassifier::is_within_business_hours(timestamp, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn at(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    fn clock(raw: &str) -> ClockTime {
        raw.parse().unwrap()
    }

    fn weekdays_9_to_18() -> BusinessHoursConfig {
        BusinessHoursConfig {
            weekday_start: clock("09:00"),
            weekday_end: clock("18:00"),
            ..BusinessHoursConfig::default()
        }
    }

    #[test]
    fn test_weekday_bounds_are_inclusive() {
        let config = weekdays_9_to_18();
        // 2025-03-05 is a Wednesday
        assert!(is_within_business_hours(&at("2025-03-05T09:00:00Z"), &config));
        assert!(is_within_business_hours(&at("2025-03-05T18:00:59Z"), &config));
        assert!(!is_within_business_hours(&at("2025-03-05T08:59:59Z"), &config));
        assert!(!is_within_business_hours(&at("2025-03-05T18:01:00Z"), &config));
    }

    #[test]
    fn test_weekend_closed_by_default() {
        let config = weekdays_9_to_18();
        assert!(!is_within_business_hours(&at("2025-03-08T10:00:00Z"), &config));
        assert!(!is_within_business_hours(&at("2025-03-09T10:00:00Z"), &config));
    }

    #[test]
    fn test_saturday_and_sunday_are_configured_independently() {
        let config = BusinessHoursConfig {
            saturday_enabled: true,
            saturday_start: Some(clock("08:00")),
            saturday_end: Some(clock("12:00")),
            sunday_enabled: false,
            sunday_start: Some(clock("08:00")),
            sunday_end: Some(clock("12:00")),
            ..weekdays_9_to_18()
        };
        assert!(is_within_business_hours(&at("2025-03-08T08:30:00Z"), &config));
        assert!(!is_within_business_hours(&at("2025-03-08T12:30:00Z"), &config));
        assert!(!is_within_business_hours(&at("2025-03-09T08:30:00Z"), &config));
    }

    #[test]
    fn test_uses_wall_clock_of_the_given_offset() {
        let config = weekdays_9_to_18();
        // 11:00 UTC is 08:00 in UTC-3: still closed in the clinic's frame
        assert!(!is_within_business_hours(&at("2025-03-05T08:00:00-03:00"), &config));
        assert!(is_within_business_hours(&at("2025-03-05T09:00:00-03:00"), &config));
    }

    #[test]
    fn test_overnight_window_never_matches() {
        let config = BusinessHoursConfig {
            weekday_start: clock("22:00"),
            weekday_end: clock("06:00"),
            ..BusinessHoursConfig::default()
        };
        assert!(!is_within_business_hours(&at("2025-03-05T23:00:00Z"), &config));
        assert!(!is_within_business_hours(&at("2025-03-05T03:00:00Z"), &config));
    }
}
