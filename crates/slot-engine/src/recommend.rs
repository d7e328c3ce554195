//! Select the single best meeting slot across all proposed windows.
//!
//! Every proposed window is expanded into candidates, every candidate is scored
//! against every participant, and the full candidate set is ranked by
//! participant coverage (descending) then UTC start (ascending). The winner is
//! translated back into the zone of the proposed window it came from.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, trace};

use crate::candidates::{generate_candidates, ProposedWindow};
use crate::matching::{score_candidate, AvailabilityIndex, CandidateScore};
use crate::timezone::utc_to_zone;

pub const NO_PARTICIPANTS_MESSAGE: &str = "No participants found for this event";
pub const NO_CANDIDATES_MESSAGE: &str =
    "No available time slots found within the proposed time windows";
pub const NO_COMMON_AVAILABILITY_MESSAGE: &str = "No common availability found. Consider expanding the proposed time window or collecting more availability data.";

/// The winning slot as presented to the organizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedSlot {
    /// Start, expressed in the proposed window's zone.
    pub start_time: DateTime<FixedOffset>,
    /// End, expressed in the proposed window's zone.
    pub end_time: DateTime<FixedOffset>,
    /// IANA label of that zone.
    pub timezone: String,
}

/// The best candidate and who can attend it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub slot: RecommendedSlot,
    #[serde(rename = "available_participants")]
    pub available_count: usize,
    pub availability_rate: f64,
    #[serde(rename = "available_users")]
    pub available_participants: Vec<String>,
    #[serde(rename = "unavailable_users")]
    pub unavailable_participants: Vec<String>,
}

/// Engine output for one request. Always fully computed; "nothing found" is
/// reported through `best_recommendation = None` and `message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub best_recommendation: Option<Recommendation>,
    pub total_participants: usize,
    pub message: String,
}

/// A scored candidate together with the zone of the window that produced it.
struct Ranked {
    score: CandidateScore,
    timezone: Tz,
}

/// Recommend the best slot of `duration_minutes` across `proposed_windows`.
///
/// `availability` must already be in UTC. Duplicate participant IDs are counted
/// once. The function never fails: empty participant lists and windows too short
/// for the duration are reported through the result's message.
pub fn recommend(
    proposed_windows: &[ProposedWindow],
    duration_minutes: i64,
    participant_ids: &[String],
    availability: &AvailabilityIndex,
) -> RecommendationResult {
    let participants = distinct(participant_ids);
    let total_participants = participants.len();

    if participants.is_empty() {
        return RecommendationResult {
            best_recommendation: None,
            total_participants,
            message: NO_PARTICIPANTS_MESSAGE.to_string(),
        };
    }

    let mut ranked: Vec<Ranked> = Vec::new();
    for proposed in proposed_windows {
        let candidates = generate_candidates(&proposed.window, duration_minutes);
        debug!(
            window_start = %proposed.window.start(),
            window_end = %proposed.window.end(),
            candidates = candidates.len(),
            "generated candidates for proposed window"
        );

        ranked.extend(candidates.into_iter().map(|candidate| {
            let score = score_candidate(candidate, &participants, availability);
            trace!(
                start = %score.candidate.start(),
                available = score.available_count(),
                "scored candidate"
            );
            Ranked {
                score,
                timezone: proposed.timezone,
            }
        }));
    }

    if ranked.is_empty() {
        return RecommendationResult {
            best_recommendation: None,
            total_participants,
            message: NO_CANDIDATES_MESSAGE.to_string(),
        };
    }

    rank(&mut ranked);
    let best = ranked.swap_remove(0);
    let recommendation = present(best);
    debug!(
        start = %recommendation.slot.start_time,
        available = recommendation.available_count,
        total = total_participants,
        "selected best slot"
    );

    let message = summarize(&recommendation, total_participants);
    RecommendationResult {
        best_recommendation: Some(recommendation),
        total_participants,
        message,
    }
}

/// Order by available count (descending), then UTC start (ascending). The sort is
/// stable, so exact ties keep generation order.
fn rank(ranked: &mut [Ranked]) {
    ranked.sort_by(|a, b| {
        b.score
            .available_count()
            .cmp(&a.score.available_count())
            .then_with(|| a.score.candidate.start().cmp(&b.score.candidate.start()))
    });
}

fn present(ranked: Ranked) -> Recommendation {
    let Ranked { score, timezone } = ranked;
    let availability_rate = score.availability_rate();
    Recommendation {
        slot: RecommendedSlot {
            start_time: utc_to_zone(score.candidate.start(), timezone),
            end_time: utc_to_zone(score.candidate.end(), timezone),
            timezone: timezone.name().to_string(),
        },
        available_count: score.available.len(),
        availability_rate,
        available_participants: score.available,
        unavailable_participants: score.unavailable,
    }
}

/// Human-readable summary of the winning slot.
pub fn summarize(best: &Recommendation, total_participants: usize) -> String {
    if best.availability_rate == 1.0 {
        format!(
            "Perfect match! All {} participants are available for this time slot.",
            best.available_count
        )
    } else if best.available_count == 0 {
        NO_COMMON_AVAILABILITY_MESSAGE.to_string()
    } else {
        format!(
            "Best available slot with {} out of {} participants ({}% availability).",
            best.available_count,
            total_participants,
            (best.availability_rate * 100.0).round() as i64
        )
    }
}

fn distinct(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
