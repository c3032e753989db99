// ABOUTME: Response-time analytics pipeline from raw chat rows to dashboard result
// ABOUTME: Wires sequence extraction, business-hours checks, aggregation, and formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

//! # Response Time
//!
//! Raw messages flow through four stages:
//!
//! 1. [`MessageSequenceExtractor`] groups messages per lead and finds each
//!    lead message directly followed by an operator or assistant reply.
//! 2. [`BusinessHoursClassifier`] optionally keeps only replies sent while
//!    the clinic was open.
//! 3. [`ResponseTimeAggregator`] filters by responder kind, drops outliers,
//!    and computes means and the latency histogram.
//! 4. [`format_response_time`] and [`classify_response_time`] turn the mean
//!    into display text and a rating.

mod aggregator;
mod business_hours;
mod format;
mod sequence;

pub use aggregator::{
    LatencyBucket, ResponseTimeAggregator, ResponseTimeBreakdown, ResponseTimeDistribution,
    ResponseTimeFilters, ResponseTimeResult,
};
pub use business_hours::{is_within_business_hours, BusinessHoursClassifier};
pub use format::{classify_response_time, format_response_time, ResponseTimeClassification};
pub use sequence::{LeadSequence, MessageSequenceExtractor, ResponsePair, SequenceExtraction};
