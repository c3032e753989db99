// ABOUTME: Weekly business-hours configuration for a clinic and the HH:mm clock type
// ABOUTME: Weekday window plus independently enabled Saturday and Sunday windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Wall-clock time of day at minute resolution (`HH:mm`)
///
/// Ordering is chronological, matching a lexicographic comparison of the
/// zero-padded `HH:mm` strings the configuration is stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build a clock time, `None` when out of range
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Clock time of any time-bearing value, seconds dropped
    #[must_use]
    pub fn of<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    /// Accepts `HH:mm`, and `HH:mm:ss` as SQL `time` columns render it
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(|time| Self::of(&time))
            .map_err(|e| {
                AppError::invalid_format(format!("Invalid clock time {s:?}, expected HH:mm"))
                    .with_source(e)
            })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Opening window for one day, both bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// Opening time
    pub start: ClockTime,
    /// Closing time
    pub end: ClockTime,
}

impl DayWindow {
    /// Whether `time` falls inside `[start, end]`
    ///
    /// Windows ending before they start never match anything.
    #[must_use]
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Whether the window wraps past midnight
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }
}

/// Weekly opening schedule of a clinic
///
/// Times are wall-clock readings in the clinic's own timezone. Timestamps
/// checked against this schedule must already be expressed in that frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHoursConfig {
    /// Monday-Friday opening time
    #[serde(alias = "weekday_start")]
    pub weekday_start: ClockTime,
    /// Monday-Friday closing time
    #[serde(alias = "weekday_end")]
    pub weekday_end: ClockTime,
    /// Whether the clinic opens on Saturdays
    #[serde(default, alias = "saturday_enabled")]
    pub saturday_enabled: bool,
    /// Saturday opening time
    #[serde(default, alias = "saturday_start")]
    pub saturday_start: Option<ClockTime>,
    /// Saturday closing time
    #[serde(default, alias = "saturday_end")]
    pub saturday_end: Option<ClockTime>,
    /// Whether the clinic opens on Sundays
    #[serde(default, alias = "sunday_enabled")]
    pub sunday_enabled: bool,
    /// Sunday opening time
    #[serde(default, alias = "sunday_start")]
    pub sunday_start: Option<ClockTime>,
    /// Sunday closing time
    #[serde(default, alias = "sunday_end")]
    pub sunday_end: Option<ClockTime>,
}

impl Default for BusinessHoursConfig {
    /// 08:00-18:00 on weekdays, closed on weekends
    fn default() -> Self {
        Self {
            weekday_start: ClockTime { hour: 8, minute: 0 },
            weekday_end: ClockTime {
                hour: 18,
                minute: 0,
            },
            saturday_enabled: false,
            saturday_start: None,
            saturday_end: None,
            sunday_enabled: false,
            sunday_start: None,
            sunday_end: None,
        }
    }
}

impl BusinessHoursConfig {
    /// Opening window for `weekday`, `None` when the clinic is closed
    ///
    /// An enabled weekend day with a missing bound counts as closed.
    #[must_use]
    pub fn window_for(&self, weekday: Weekday) -> Option<DayWindow> {
        let weekend = |enabled: bool, start: Option<ClockTime>, end: Option<ClockTime>| {
            if !enabled {
                return None;
            }
            Some(DayWindow {
                start: start?,
                end: end?,
            })
        };

        match weekday {
            Weekday::Sat => weekend(
                self.saturday_enabled,
                self.saturday_start,
                self.saturday_end,
            ),
            Weekday::Sun => weekend(self.sunday_enabled, self.sunday_start, self.sunday_end),
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                Some(DayWindow {
                    start: self.weekday_start,
                    end: self.weekday_end,
                })
            }
        }
    }

    /// Reject schedules the classifier cannot honour
    ///
    /// Overnight windows are not supported. An enabled weekend day missing a
    /// bound is accepted and stays closed, see [`Self::window_for`].
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` for an overnight window
    pub fn validate(&self) -> AppResult<()> {
        Self::check_window(
            "weekday",
            DayWindow {
                start: self.weekday_start,
                end: self.weekday_end,
            },
        )?;

        for (day, enabled, start, end) in [
            (
                "saturday",
                self.saturday_enabled,
                self.saturday_start,
                self.saturday_end,
            ),
            (
                "sunday",
                self.sunday_enabled,
                self.sunday_start,
                self.sunday_end,
            ),
        ] {
            if !enabled {
                continue;
            }
            let (Some(start), Some(end)) = (start, end) else {
                warn!(
                    day,
                    has_start = start.is_some(),
                    has_end = end.is_some(),
                    "Weekend day enabled without both bounds; treating it as closed"
                );
                continue;
            };
            Self::check_window(day, DayWindow { start, end })?;
        }
        Ok(())
    }

    fn check_window(day: &str, window: DayWindow) -> AppResult<()> {
        if window.is_overnight() {
            return Err(AppError::config(format!(
                "{day} window {}-{} ends before it starts; overnight hours are not supported",
                window.start, window.end
            )));
        }
        Ok(())
    }
}
