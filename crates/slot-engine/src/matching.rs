//! Match candidate slots against participant availability.
//!
//! A participant is available for a candidate only when one of their free windows
//! contains the candidate entirely. Partial overlap counts as unavailable.

use std::collections::HashMap;

use crate::window::TimeWindow;

/// Read-only lookup from participant ID to the windows they reported as free.
///
/// Participants missing from the map, or mapped to an empty list, are unavailable
/// for every candidate.
pub type AvailabilityIndex = HashMap<String, Vec<TimeWindow>>;

/// The outcome of checking one candidate against every participant.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub candidate: TimeWindow,
    /// Participants with a free window containing the candidate, in participant-list order.
    pub available: Vec<String>,
    /// Everyone else, in participant-list order.
    pub unavailable: Vec<String>,
}

impl CandidateScore {
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn total(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }

    /// Fraction of participants available, in `[0, 1]`. Zero when nobody was checked.
    pub fn availability_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.available.len() as f64 / total as f64,
        }
    }
}

/// True if any of `free` contains `candidate`.
pub fn is_available(free: &[TimeWindow], candidate: &TimeWindow) -> bool {
    free.iter().any(|window| window.contains(candidate))
}

/// Partition `participants` into available and unavailable for `candidate`.
///
/// `participants` is expected to hold distinct IDs; each ID lands in exactly one
/// side of the partition.
pub fn score_candidate(
    candidate: TimeWindow,
    participants: &[String],
    availability: &AvailabilityIndex,
) -> CandidateScore {
    let (available, unavailable): (Vec<String>, Vec<String>) = participants
        .iter()
        .cloned()
        .partition(|id| {
            availability
                .get(id)
                .is_some_and(|free| is_available(free, &candidate))
        });

    CandidateScore {
        candidate,
        available,
        unavailable,
    }
}
