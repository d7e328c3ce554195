//! DST transition policies for wall-clock inputs.
//!
//! Organizers and participants submit times as local wall-clock readings plus an
//! IANA zone. Twice a year some of those readings are ambiguous (fall back) or do
//! not exist at all (spring forward); the policy decides what they mean.

use serde::{Deserialize, Serialize};

/// Policy for resolving local times that fall on a DST transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DstPolicy {
    /// Reject local times that fall in the DST gap (e.g., 2:30 AM during spring forward)
    Skip,
    /// Move a gap time forward to the first valid local time after the gap
    ShiftForward,
    /// Read a gap time with the offset in force before the transition, so the
    /// elapsed time since the previous valid reading is preserved
    #[default]
    WallClock,
}
