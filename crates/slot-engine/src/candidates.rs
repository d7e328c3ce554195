//! Sliding-window candidate generation.
//!
//! Walks a cursor across a proposed window in fixed steps, emitting every
//! `duration`-long slot that fits entirely inside it.

use chrono::Duration;
use chrono_tz::Tz;

use crate::error::Result;
use crate::timezone::parse_timezone;
use crate::window::TimeWindow;

/// Distance between consecutive candidate starts. Fixed policy, not caller input.
pub const STEP_MINUTES: i64 = 15;

/// An organizer-proposed window plus the zone its times were entered in.
///
/// The zone only affects how the winning slot is presented; matching and ranking
/// use the UTC window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProposedWindow {
    pub window: TimeWindow,
    pub timezone: Tz,
}

impl ProposedWindow {
    /// # Errors
    /// Returns `SlotError::InvalidTimezone` for an unknown IANA label.
    pub fn new(window: TimeWindow, timezone: &str) -> Result<Self> {
        Ok(Self {
            window,
            timezone: parse_timezone(timezone)?,
        })
    }

    /// A proposed window presented in UTC.
    pub fn utc(window: TimeWindow) -> Self {
        Self {
            window,
            timezone: Tz::UTC,
        }
    }
}

/// Generate candidate slots of `duration_minutes` inside `window`, advancing
/// [`STEP_MINUTES`] at a time.
///
/// The last candidate may end exactly at `window.end()`; none ends after it. A
/// duration longer than the window, or a non-positive duration, yields nothing.
pub fn generate_candidates(window: &TimeWindow, duration_minutes: i64) -> Vec<TimeWindow> {
    generate_with_step(window, duration_minutes, STEP_MINUTES)
}

fn generate_with_step(window: &TimeWindow, duration_minutes: i64, step_minutes: i64) -> Vec<TimeWindow> {
    if duration_minutes <= 0 || step_minutes <= 0 || duration_minutes > window.duration_minutes() {
        return Vec::new();
    }
    let (Some(duration), Some(step)) = (
        Duration::try_minutes(duration_minutes),
        Duration::try_minutes(step_minutes),
    ) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    let mut cursor = window.start();

    while let Some(candidate_end) = cursor.checked_add_signed(duration) {
        if candidate_end > window.end() {
            break;
        }

        // cursor < window.end() and duration > 0, so this cannot fail.
        if let Ok(candidate) = TimeWindow::new(cursor, candidate_end) {
            candidates.push(candidate);
        }

        match cursor.checked_add_signed(step) {
            Some(next) if next < window.end() => cursor = next,
            _ => break,
        }
    }

    candidates
}
