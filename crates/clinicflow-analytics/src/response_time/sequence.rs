// ABOUTME: Groups chat messages per lead and extracts adjacent lead-to-reply pairs
// ABOUTME: Stable chronological ordering with input order breaking timestamp ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

use chrono::{DateTime, FixedOffset};
use clinicflow_core::constants::time_constants::MILLIS_PER_MINUTE;
use clinicflow_core::models::{ChatMessage, LeadId, MessageId, ResponderKind, SenderKind};
use std::collections::HashMap;
use tracing::debug;

/// A lead message and the clinic reply that immediately followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePair {
    /// Lead message that opened the wait
    pub lead_message_id: MessageId,
    /// Reply that closed it
    pub response_message_id: MessageId,
    /// When the lead wrote
    pub lead_timestamp: DateTime<FixedOffset>,
    /// When the clinic replied
    pub response_timestamp: DateTime<FixedOffset>,
    /// Who replied
    pub responder_kind: ResponderKind,
}

impl ResponsePair {
    /// Whole minutes between lead message and reply, rounded down
    ///
    /// Negative when the data is out of order.
    #[must_use]
    pub fn delta_minutes(&self) -> i64 {
        (self.response_timestamp - self.lead_timestamp)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_MINUTE)
    }
}

/// All candidate pairs of one lead's conversation, chronologically ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSequence {
    /// Conversation thread
    pub lead_id: LeadId,
    /// Messages of the thread that carried a usable timestamp
    pub message_count: usize,
    /// Adjacent lead-to-reply transitions
    pub pairs: Vec<ResponsePair>,
}

/// Output of one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceExtraction {
    /// One entry per lead, in order of first appearance in the input
    pub sequences: Vec<LeadSequence>,
    /// Messages dropped because their timestamp could not be parsed
    pub skipped_messages: usize,
}

impl SequenceExtraction {
    /// Every candidate pair across all leads
    pub fn pairs(&self) -> impl Iterator<Item = &ResponsePair> {
        self.sequences.iter().flat_map(|sequence| sequence.pairs.iter())
    }

    /// Number of candidate pairs across all leads
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.sequences.iter().map(|sequence| sequence.pairs.len()).sum()
    }
}

/// Finds lead-to-reply transitions in raw chat rows
pub struct MessageSequenceExtractor;

impl MessageSequenceExtractor {
    /// Extract candidate response pairs, grouped per lead
    ///
    /// Only directly adjacent transitions count: in `lead, lead, operator`
    /// the first lead message pairs with nothing. Messages whose timestamp
    /// does not parse are left out of their thread and counted in
    /// `skipped_messages`; that is tolerated dirty data, not an error.
    #[must_use]
    pub fn extract<'a>(messages: impl IntoIterator<Item = &'a ChatMessage>) -> SequenceExtraction {
        let mut index_by_lead: HashMap<LeadId, usize> = HashMap::new();
        let mut threads: Vec<(LeadId, Vec<(DateTime<FixedOffset>, &ChatMessage)>)> = Vec::new();
        let mut skipped_messages = 0;

        for message in messages {
            let Some(created_at) = message.created_at_parsed() else {
                debug!(
                    message_id = %message.id,
                    lead_id = %message.lead_id,
                    created_at = %message.created_at,
                    "Skipping chat message with unparseable timestamp"
                );
                skipped_messages += 1;
                continue;
            };

            let slot = *index_by_lead.entry(message.lead_id).or_insert_with(|| {
                threads.push((message.lead_id, Vec::new()));
                threads.len() - 1
            });
            threads[slot].1.push((created_at, message));
        }

        let sequences = threads
            .into_iter()
            .map(|(lead_id, mut thread)| {
                // Stable: identical timestamps keep their input order
                thread.sort_by(|a, b| a.0.cmp(&b.0));
                LeadSequence {
                    lead_id,
                    message_count: thread.len(),
                    pairs: Self::adjacent_pairs(&thread),
                }
            })
            .collect();

        SequenceExtraction {
            sequences,
            skipped_messages,
        }
    }

    fn adjacent_pairs(thread: &[(DateTime<FixedOffset>, &ChatMessage)]) -> Vec<ResponsePair> {
        thread
            .windows(2)
            .filter_map(|window| {
                let (lead_at, lead) = window[0];
                let (reply_at, reply) = window[1];
                if lead.sent_by != SenderKind::Lead {
                    return None;
                }
                let responder_kind = reply.sent_by.responder_kind()?;
                Some(ResponsePair {
                    lead_message_id: lead.id,
                    response_message_id: reply.id,
                    lead_timestamp: lead_at,
                    response_timestamp: reply_at,
                    responder_kind,
                })
            })
            .collect()
    }
}
