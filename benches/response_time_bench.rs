// ABOUTME: Criterion benchmarks for the response-time analytics engine
// ABOUTME: Measures reply pairing, aggregation, and multi-clinic report generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

//! Criterion benchmarks for response-time analytics.
//!
//! Synthetic clinics with many leads, each exchanging a handful of messages
//! with operators and the assistant.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use clinicflow::reports::ResponseTimeReportService;
use clinicflow_analytics::{MessageSequenceExtractor, ResponseTimeAggregator, ResponseTimeFilters};
use clinicflow_core::models::{
    BusinessHoursConfig, ChatMessage, ClinicId, LeadId, MessageId, SenderKind,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;

/// Messages exchanged per lead
const MESSAGES_PER_LEAD: usize = 8;

#[allow(clippy::cast_possible_wrap)]
fn generate_messages(clinics: &[ClinicId], leads_per_clinic: usize) -> Vec<ChatMessage> {
    let base = Utc.with_ymd_and_hms(2025, 3, 3, 7, 0, 0).unwrap();
    let mut messages = Vec::with_capacity(clinics.len() * leads_per_clinic * MESSAGES_PER_LEAD);

    for clinic_id in clinics {
        for lead_index in 0..leads_per_clinic {
            let lead_id = LeadId::new();
            let mut at = base + Duration::hours((lead_index % 72) as i64);
            for step in 0..MESSAGES_PER_LEAD {
                let sent_by = match (lead_index + step) % 4 {
                    0 | 2 => SenderKind::Lead,
                    1 => SenderKind::Operator,
                    _ => SenderKind::Assistant,
                };
                at += Duration::minutes(((lead_index * 37 + step * 13) % 300) as i64 + 1);
                messages.push(ChatMessage {
                    id: MessageId::new(),
                    lead_id,
                    clinic_id: *clinic_id,
                    content: None,
                    sent_by,
                    created_at: at.to_rfc3339(),
                });
            }
        }
    }
    messages
}

fn bench_sequence_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_extraction");
    let clinic = [ClinicId::new()];

    for leads in [10, 100, 1000] {
        let messages = generate_messages(&clinic, leads);
        group.throughput(Throughput::Elements(messages.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract", leads),
            &messages,
            |b, messages| b.iter(|| MessageSequenceExtractor::extract(black_box(messages))),
        );
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let messages = generate_messages(&[ClinicId::new()], 1000);
    let hours = BusinessHoursConfig::default();
    group.throughput(Throughput::Elements(messages.len() as u64));

    group.bench_function("all_responders", |b| {
        b.iter(|| {
            ResponseTimeAggregator::aggregate(
                black_box(&messages),
                None,
                &ResponseTimeFilters::default(),
            )
        });
    });
    group.bench_function("business_hours_only", |b| {
        b.iter(|| {
            ResponseTimeAggregator::aggregate(
                black_box(&messages),
                Some(&hours),
                &ResponseTimeFilters::business_hours(),
            )
        });
    });

    group.finish();
}

fn bench_report_by_clinic(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_by_clinic");
    let service = ResponseTimeReportService::default();

    for clinic_count in [1, 8, 32] {
        let clinics: Vec<ClinicId> = (0..clinic_count).map(|_| ClinicId::new()).collect();
        let messages = generate_messages(&clinics, 200);
        let hours: HashMap<ClinicId, BusinessHoursConfig> = clinics
            .iter()
            .map(|clinic| (*clinic, BusinessHoursConfig::default()))
            .collect();

        group.throughput(Throughput::Elements(messages.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parallel", clinic_count),
            &messages,
            |b, messages| {
                b.iter(|| {
                    service.report_by_clinic(
                        black_box(messages),
                        None,
                        ResponseTimeFilters::default(),
                        &hours,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sequence_extraction,
    bench_aggregation,
    bench_report_by_clinic
);
criterion_main!(benches);
