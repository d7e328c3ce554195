//! Wire types for a complete recommendation request and its response.
//!
//! Storage layers hand over proposed windows and availability records in the form
//! they were entered: wall-clock timestamps plus an IANA zone label. This module
//! validates them, resolves everything to UTC, builds the per-participant
//! availability index and wraps the engine result in the response envelope.

use std::collections::HashSet;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::candidates::ProposedWindow;
use crate::dst::DstPolicy;
use crate::error::{Result, SlotError};
use crate::matching::AvailabilityIndex;
use crate::recommend::{recommend, Recommendation, RecommendationResult};
use crate::timezone::{parse_instant, parse_timezone};
use crate::window::TimeWindow;

/// A time range as submitted: either RFC 3339 strings or local readings in `timezone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInput {
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
}

/// One availability record from one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub user_id: String,
    #[serde(flatten)]
    pub slot: SlotInput,
}

/// Everything needed to recommend a slot for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub event_id: String,
    pub duration_minutes: i64,
    pub proposed_slots: Vec<SlotInput>,
    pub participants: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilityRecord>,
}

/// Validated engine input, entirely in UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInput {
    pub proposed_windows: Vec<ProposedWindow>,
    pub duration_minutes: i64,
    pub participant_ids: Vec<String>,
    pub availability: AvailabilityIndex,
}

/// Response envelope returned to the organizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub event_id: String,
    pub duration_minutes: i64,
    pub total_participants: usize,
    pub best_recommendation: Option<Recommendation>,
    pub message: String,
}

impl RecommendationRequest {
    /// Parse a request from its JSON representation.
    ///
    /// # Errors
    /// Returns `SlotError::Json` if `json` is not a well-formed request.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the request and resolve every timestamp to UTC.
    ///
    /// Availability records for users outside the participant list are dropped
    /// without being parsed.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDuration` for a non-positive duration, and the
    /// window, timezone or datetime error of the first malformed slot otherwise.
    pub fn to_engine_input(&self, policy: DstPolicy) -> Result<EngineInput> {
        if self.duration_minutes <= 0 {
            return Err(SlotError::InvalidDuration(self.duration_minutes));
        }

        let proposed_windows = self
            .proposed_slots
            .iter()
            .map(|slot| {
                let (window, tz) = slot.resolve(policy)?;
                Ok(ProposedWindow {
                    window,
                    timezone: tz,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let participants: HashSet<&str> = self.participants.iter().map(String::as_str).collect();
        let mut availability = AvailabilityIndex::new();
        for record in &self.availability {
            if !participants.contains(record.user_id.as_str()) {
                continue;
            }
            let (window, _) = record.slot.resolve(policy)?;
            availability
                .entry(record.user_id.clone())
                .or_default()
                .push(window);
        }

        Ok(EngineInput {
            proposed_windows,
            duration_minutes: self.duration_minutes,
            participant_ids: self.participants.clone(),
            availability,
        })
    }

    /// Validate, normalize and run the engine.
    ///
    /// # Errors
    /// Propagates validation errors from [`Self::to_engine_input`].
    pub fn evaluate(&self, policy: DstPolicy) -> Result<RecommendationResponse> {
        let input = self.to_engine_input(policy)?;
        let result = input.recommend();
        Ok(RecommendationResponse::new(
            self.event_id.clone(),
            self.duration_minutes,
            result,
        ))
    }
}

impl SlotInput {
    /// Resolve to a UTC window plus the parsed zone.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimezone`, `SlotError::InvalidDateTime` or
    /// `SlotError::InvalidWindow`.
    pub fn resolve(&self, policy: DstPolicy) -> Result<(TimeWindow, Tz)> {
        let tz = parse_timezone(&self.timezone)?;
        let start = parse_instant(&self.start_time, tz, policy)?;
        let end = parse_instant(&self.end_time, tz, policy)?;
        Ok((TimeWindow::new(start, end)?, tz))
    }
}

impl EngineInput {
    pub fn recommend(&self) -> RecommendationResult {
        recommend(
            &self.proposed_windows,
            self.duration_minutes,
            &self.participant_ids,
            &self.availability,
        )
    }
}

impl RecommendationResponse {
    pub fn new(event_id: String, duration_minutes: i64, result: RecommendationResult) -> Self {
        Self {
            event_id,
            duration_minutes,
            total_participants: result.total_participants,
            best_recommendation: result.best_recommendation,
            message: result.message,
        }
    }
}
