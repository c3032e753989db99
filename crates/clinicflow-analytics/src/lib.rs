// ABOUTME: Clinic analytics engine computing lead response-time metrics
// ABOUTME: Pure, synchronous computations over chat rows already fetched by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

#![deny(unsafe_code)]

//! # Clinicflow Analytics
//!
//! Everything in this crate is a pure function of its inputs: no I/O, no
//! shared state, inputs are never mutated. Identical inputs in identical
//! order always produce identical output, so callers may run it from any
//! number of threads on disjoint data.

/// Response latency between lead messages and clinic replies
pub mod response_time;

pub use response_time::{
    classify_response_time, format_response_time, is_within_business_hours,
    BusinessHoursClassifier, LatencyBucket, LeadSequence, MessageSequenceExtractor, ResponsePair,
    ResponseTimeAggregator, ResponseTimeBreakdown, ResponseTimeClassification,
    ResponseTimeDistribution, ResponseTimeFilters, ResponseTimeResult, SequenceExtraction,
};
