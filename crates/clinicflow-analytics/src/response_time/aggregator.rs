// ABOUTME: Aggregates lead response latencies into means, a histogram, and a rating
// ABOUTME: Applies responder and business-hours filters and drops out-of-range outliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

use super::business_hours::BusinessHoursClassifier;
use super::format::{classify_response_time, format_response_time, ResponseTimeClassification};
use super::sequence::{MessageSequenceExtractor, ResponsePair, SequenceExtraction};
use clinicflow_core::constants::response_time::{
    BUCKET_FAST_MAX_MINUTES, BUCKET_FOUR_HOURS_MAX_MINUTES, BUCKET_HOUR_MAX_MINUTES,
    OUTLIER_BOUND_MINUTES,
};
use clinicflow_core::models::{BusinessHoursConfig, ChatMessage, ResponderKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which replies a query counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseTimeFilters {
    /// Count replies from human operators
    pub include_human: bool,
    /// Count replies from the automated assistant
    pub include_assistant: bool,
    /// Count only replies sent inside business hours
    pub business_hours_only: bool,
}

impl Default for ResponseTimeFilters {
    fn default() -> Self {
        Self {
            include_human: true,
            include_assistant: true,
            business_hours_only: false,
        }
    }
}

impl ResponseTimeFilters {
    /// Human replies only, around the clock
    #[must_use]
    pub const fn human_only() -> Self {
        Self {
            include_human: true,
            include_assistant: false,
            business_hours_only: false,
        }
    }

    /// Assistant replies only, around the clock
    #[must_use]
    pub const fn assistant_only() -> Self {
        Self {
            include_human: false,
            include_assistant: true,
            business_hours_only: false,
        }
    }

    /// Every responder, business hours only
    #[must_use]
    pub const fn business_hours() -> Self {
        Self {
            include_human: true,
            include_assistant: true,
            business_hours_only: true,
        }
    }

    /// Whether a reply from `kind` passes the responder filters
    #[must_use]
    pub const fn admits(&self, kind: ResponderKind) -> bool {
        match kind {
            ResponderKind::Human => self.include_human,
            ResponderKind::Assistant => self.include_assistant,
        }
    }
}

/// Latency histogram bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyBucket {
    /// 30 minutes or less
    UpTo30Minutes,
    /// More than 30 minutes, up to one hour
    UpTo1Hour,
    /// More than one hour, up to four hours
    UpTo4Hours,
    /// More than four hours
    Over4Hours,
}

impl LatencyBucket {
    /// Bucket holding a latency of `minutes`; upper bounds are inclusive
    #[must_use]
    pub const fn for_minutes(minutes: i64) -> Self {
        if minutes <= BUCKET_FAST_MAX_MINUTES {
            Self::UpTo30Minutes
        } else if minutes <= BUCKET_HOUR_MAX_MINUTES {
            Self::UpTo1Hour
        } else if minutes <= BUCKET_FOUR_HOURS_MAX_MINUTES {
            Self::UpTo4Hours
        } else {
            Self::Over4Hours
        }
    }
}

/// Counts of replies per latency bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeDistribution {
    /// Replies within 30 minutes
    pub up_to_30_minutes: usize,
    /// Replies after 30 minutes, within one hour
    pub up_to_1_hour: usize,
    /// Replies after one hour, within four hours
    pub up_to_4_hours: usize,
    /// Replies after more than four hours
    pub over_4_hours: usize,
}

impl ResponseTimeDistribution {
    fn record(&mut self, minutes: i64) {
        let slot = match LatencyBucket::for_minutes(minutes) {
            LatencyBucket::UpTo30Minutes => &mut self.up_to_30_minutes,
            LatencyBucket::UpTo1Hour => &mut self.up_to_1_hour,
            LatencyBucket::UpTo4Hours => &mut self.up_to_4_hours,
            LatencyBucket::Over4Hours => &mut self.over_4_hours,
        };
        *slot += 1;
    }

    /// Sum over all buckets
    #[must_use]
    pub const fn total(&self) -> usize {
        self.up_to_30_minutes + self.up_to_1_hour + self.up_to_4_hours + self.over_4_hours
    }
}

/// Per-slice means plus the histogram of the main query
///
/// Each mean comes from its own filtered pass over the same candidate
/// pairs, so the slices need not be consistent with the overall mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeBreakdown {
    /// Mean over human replies, around the clock
    pub human_minutes: f64,
    /// Mean over assistant replies, around the clock
    pub assistant_minutes: f64,
    /// Mean over all replies sent inside business hours
    pub business_hours_minutes: f64,
    /// Histogram of the replies counted by the main query
    pub distribution: ResponseTimeDistribution,
}

/// Dashboard-ready response-time metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeResult {
    /// Mean latency in minutes, 0 when nothing was counted
    pub mean_minutes: f64,
    /// Mean rendered for display
    pub formatted_mean: String,
    /// Rating of the mean
    pub classification: ResponseTimeClassification,
    /// Slice means and histogram
    pub breakdown: ResponseTimeBreakdown,
    /// Replies that passed every filter and the outlier bound
    pub sample_size: usize,
}

/// Running totals of one filtered pass
#[derive(Debug, Default)]
struct PassSummary {
    total_minutes: i64,
    count: usize,
    outliers: usize,
    distribution: ResponseTimeDistribution,
}

impl PassSummary {
    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_minutes as f64 / self.count as f64
        }
    }
}

/// Computes [`ResponseTimeResult`] from chat rows
pub struct ResponseTimeAggregator;

impl ResponseTimeAggregator {
    /// Aggregate response latencies for one clinic's messages
    ///
    /// `business_hours` only matters when `filters.business_hours_only` is
    /// set; without a configuration that filter is a no-op. With both
    /// responder kinds excluded the result is empty, not an error.
    #[must_use]
    pub fn aggregate<'a>(
        messages: impl IntoIterator<Item = &'a ChatMessage>,
        business_hours: Option<&BusinessHoursConfig>,
        filters: &ResponseTimeFilters,
    ) -> ResponseTimeResult {
        let extraction = MessageSequenceExtractor::extract(messages);
        Self::aggregate_extraction(&extraction, business_hours, filters)
    }

    /// Aggregate pairs that were already extracted
    #[must_use]
    pub fn aggregate_extraction(
        extraction: &SequenceExtraction,
        business_hours: Option<&BusinessHoursConfig>,
        filters: &ResponseTimeFilters,
    ) -> ResponseTimeResult {
        let overall = Self::run_pass(extraction.pairs(), business_hours, filters);
        let human = Self::run_pass(
            extraction.pairs(),
            business_hours,
            &ResponseTimeFilters::human_only(),
        );
        let assistant = Self::run_pass(
            extraction.pairs(),
            business_hours,
            &ResponseTimeFilters::assistant_only(),
        );
        let in_hours = Self::run_pass(
            extraction.pairs(),
            business_hours,
            &ResponseTimeFilters::business_hours(),
        );

        debug!(
            candidate_pairs = extraction.pair_count(),
            skipped_messages = extraction.skipped_messages,
            sample_size = overall.count,
            outliers = overall.outliers,
            human_samples = human.count,
            assistant_samples = assistant.count,
            business_hours_samples = in_hours.count,
            "Aggregated response times"
        );

        let mean_minutes = overall.mean();
        let classification = if overall.count == 0 {
            ResponseTimeClassification::NoData
        } else {
            classify_response_time(mean_minutes)
        };

        ResponseTimeResult {
            mean_minutes,
            formatted_mean: format_response_time(mean_minutes),
            classification,
            breakdown: ResponseTimeBreakdown {
                human_minutes: human.mean(),
                assistant_minutes: assistant.mean(),
                business_hours_minutes: in_hours.mean(),
                distribution: overall.distribution,
            },
            sample_size: overall.count,
        }
    }

    fn run_pass<'a>(
        pairs: impl Iterator<Item = &'a ResponsePair>,
        business_hours: Option<&BusinessHoursConfig>,
        filters: &ResponseTimeFilters,
    ) -> PassSummary {
        let mut summary = PassSummary::default();
        if !filters.include_human && !filters.include_assistant {
            return summary;
        }

        let hours = business_hours.filter(|_| filters.business_hours_only);
        for pair in pairs {
            // The reply time decides, not when the lead wrote
            if let Some(config) = hours {
                if !BusinessHoursClassifier::is_within_business_hours(
                    &pair.response_timestamp,
                    config,
                ) {
                    continue;
                }
            }
            if !filters.admits(pair.responder_kind) {
                continue;
            }

            let minutes = pair.delta_minutes();
            if !(0..=OUTLIER_BOUND_MINUTES).contains(&minutes) {
                summary.outliers += 1;
                continue;
            }

            summary.total_minutes += minutes;
            summary.count += 1;
            summary.distribution.record(minutes);
        }
        summary
    }
}
