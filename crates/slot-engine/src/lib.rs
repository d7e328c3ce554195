//! # slot-engine
//!
//! Deterministic meeting slot recommendation.
//!
//! Given the time windows an organizer proposed for an event, the meeting
//! duration, the participant list and each participant's reported free time, the
//! engine picks the single slot the most participants can attend, preferring the
//! earliest on ties. All comparison happens in UTC; the winner is presented in the
//! zone of the proposed window it came from.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slot_engine::{recommend, AvailabilityIndex, ProposedWindow, TimeWindow};
//!
//! let at = |h| Utc.with_ymd_and_hms(2026, 3, 2, h, 0, 0).unwrap();
//! let window = TimeWindow::new(at(14), at(16)).unwrap();
//!
//! let mut availability = AvailabilityIndex::new();
//! availability.insert("u1".to_string(), vec![window]);
//! availability.insert("u2".to_string(), vec![window]);
//!
//! let result = recommend(
//!     &[ProposedWindow::utc(window)],
//!     60,
//!     &["u1".to_string(), "u2".to_string()],
//!     &availability,
//! );
//! let best = result.best_recommendation.unwrap();
//! assert_eq!(best.available_count, 2);
//! assert!(result.message.starts_with("Perfect match!"));
//! ```
//!
//! ## Modules
//!
//! - [`window`] — `TimeWindow` interval algebra (containment, overlap, duration)
//! - [`timezone`] — IANA zone parsing, wall-clock ↔ UTC conversion
//! - [`dst`] — DST transition policies for wall-clock inputs
//! - [`candidates`] — Sliding-window candidate generation over proposed windows
//! - [`matching`] — Per-candidate participant availability scoring
//! - [`recommend`](mod@recommend) — Ranking, best-slot selection and summary message
//! - [`request`] — JSON request/response types and input normalization
//! - [`error`] — Error types

pub mod candidates;
pub mod dst;
pub mod error;
pub mod matching;
pub mod recommend;
pub mod request;
pub mod timezone;
pub mod window;

pub use candidates::{generate_candidates, ProposedWindow, STEP_MINUTES};
pub use dst::DstPolicy;
pub use error::SlotError;
pub use matching::{score_candidate, AvailabilityIndex, CandidateScore};
pub use recommend::{recommend, Recommendation, RecommendationResult, RecommendedSlot};
pub use request::{RecommendationRequest, RecommendationResponse};
pub use window::TimeWindow;
