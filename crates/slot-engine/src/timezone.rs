//! Timezone resolution between wall-clock readings and UTC instants.
//!
//! All comparison and ranking happens in UTC. This module is the only place that
//! knows about zones: it turns `(local reading, IANA label)` into a UTC instant on
//! the way in, and a UTC instant back into the organizer's zone on the way out.

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::dst::DstPolicy;
use crate::error::{Result, SlotError};

/// Longest DST gap in the tz database is two hours; anything beyond is not a gap.
const MAX_GAP_MINUTES: i64 = 180;

/// Parse an IANA timezone label (e.g., "America/New_York").
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` if the label is not a known IANA identifier.
pub fn parse_timezone(label: &str) -> Result<Tz> {
    label
        .parse()
        .map_err(|_| SlotError::InvalidTimezone(label.to_string()))
}

/// Resolve a local wall-clock reading in `tz` to a UTC instant.
///
/// Ambiguous readings (the repeated hour when clocks fall back) resolve to the
/// earlier instant under every policy. Readings inside a spring-forward gap are
/// handled according to `policy`.
///
/// # Errors
/// Returns `SlotError::InvalidDateTime` when `policy` is [`DstPolicy::Skip`] and the
/// reading does not exist in `tz`.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz, policy: DstPolicy) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => resolve_gap(local, tz, policy),
    }
}

fn resolve_gap(local: NaiveDateTime, tz: Tz, policy: DstPolicy) -> Result<DateTime<Utc>> {
    let nonexistent = || {
        SlotError::InvalidDateTime(format!("{} does not exist in {}", local, tz.name()))
    };

    match policy {
        DstPolicy::Skip => Err(nonexistent()),
        DstPolicy::ShiftForward => (1..=MAX_GAP_MINUTES)
            .find_map(|m| tz.from_local_datetime(&(local + Duration::minutes(m))).earliest())
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(nonexistent),
        DstPolicy::WallClock => {
            // Walk back to the last valid reading, then re-apply the distance with
            // that reading's offset.
            (1..=MAX_GAP_MINUTES)
                .find_map(|m| {
                    tz.from_local_datetime(&(local - Duration::minutes(m)))
                        .latest()
                        .map(|dt| dt.with_timezone(&Utc) + Duration::minutes(m))
                })
                .ok_or_else(nonexistent)
        }
    }
}

/// Express a UTC instant in `tz`, keeping the resolved offset.
///
/// The conversion is lossless: converting the result back to UTC yields `instant`.
pub fn utc_to_zone(instant: DateTime<Utc>, tz: Tz) -> DateTime<FixedOffset> {
    instant.with_timezone(&tz).fixed_offset()
}

/// Parse a timestamp that is either RFC 3339 (offset honored, `tz` ignored) or a
/// naive `YYYY-MM-DDTHH:MM:SS` reading interpreted as wall-clock time in `tz`.
///
/// # Errors
/// Returns `SlotError::InvalidDateTime` if the string matches neither form, or if
/// the wall-clock reading cannot be resolved under `policy`.
pub fn parse_instant(s: &str, tz: Tz, policy: DstPolicy) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let local = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| SlotError::InvalidDateTime(format!("'{}': {}", s, e)))?;
    local_to_utc(local, tz, policy)
}
