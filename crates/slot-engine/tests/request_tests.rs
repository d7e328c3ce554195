//! Tests for request parsing, validation and the response envelope.

use chrono::{TimeZone, Utc};
use slot_engine::recommend::NO_CANDIDATES_MESSAGE;
use slot_engine::{DstPolicy, RecommendationRequest, SlotError};

fn request_json(duration: i64) -> String {
    format!(
        r#"{{
            "event_id": "evt_123",
            "duration_minutes": {duration},
            "proposed_slots": [
                {{"start_time": "2026-03-02T09:00:00", "end_time": "2026-03-02T11:00:00", "timezone": "America/New_York"}}
            ],
            "participants": ["alice", "bob", "carol"],
            "availability": [
                {{"user_id": "alice", "start_time": "2026-03-02T14:00:00Z", "end_time": "2026-03-02T15:00:00Z", "timezone": "UTC"}},
                {{"user_id": "bob", "start_time": "2026-03-02T15:00:00", "end_time": "2026-03-02T16:00:00", "timezone": "Europe/London"}},
                {{"user_id": "carol", "start_time": "2026-03-02T15:00:00Z", "end_time": "2026-03-02T16:00:00Z", "timezone": "UTC"}},
                {{"user_id": "mallory", "start_time": "2026-03-02T14:00:00Z", "end_time": "2026-03-02T16:00:00Z", "timezone": "UTC"}}
            ]
        }}"#
    )
}

#[test]
fn evaluates_a_full_request() {
    let request = RecommendationRequest::from_json(&request_json(60)).unwrap();
    let response = request.evaluate(DstPolicy::default()).unwrap();

    assert_eq!(response.event_id, "evt_123");
    assert_eq!(response.duration_minutes, 60);
    assert_eq!(response.total_participants, 3);

    // 14:00-15:00 UTC: alice only. 15:00-16:00 UTC: bob (London = UTC in March) and carol.
    let best = response.best_recommendation.expect("should recommend a slot");
    assert_eq!(best.available_count, 2);
    assert_eq!(best.available_participants, vec!["bob", "carol"]);
    assert_eq!(best.slot.timezone, "America/New_York");
    assert_eq!(best.slot.start_time.to_rfc3339(), "2026-03-02T10:00:00-05:00");
    assert_eq!(
        response.message,
        "Best available slot with 2 out of 3 participants (67% availability)."
    );
}

#[test]
fn availability_of_non_participants_is_ignored() {
    let request = RecommendationRequest::from_json(&request_json(60)).unwrap();
    let input = request.to_engine_input(DstPolicy::default()).unwrap();

    assert!(!input.availability.contains_key("mallory"));
    assert_eq!(input.availability.len(), 3);
    assert_eq!(
        input.proposed_windows[0].window.start(),
        Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap()
    );
}

#[test]
fn records_for_one_user_are_grouped() {
    let json = r#"{
        "event_id": "evt_1",
        "duration_minutes": 30,
        "proposed_slots": [{"start_time": "2026-03-02T09:00:00Z", "end_time": "2026-03-02T12:00:00Z", "timezone": "UTC"}],
        "participants": ["alice"],
        "availability": [
            {"user_id": "alice", "start_time": "2026-03-02T09:00:00Z", "end_time": "2026-03-02T09:15:00Z", "timezone": "UTC"},
            {"user_id": "alice", "start_time": "2026-03-02T11:00:00Z", "end_time": "2026-03-02T12:00:00Z", "timezone": "UTC"}
        ]
    }"#;
    let request = RecommendationRequest::from_json(json).unwrap();
    let input = request.to_engine_input(DstPolicy::default()).unwrap();
    assert_eq!(input.availability["alice"].len(), 2);

    let best = input.recommend().best_recommendation.unwrap();
    assert_eq!(
        best.slot.start_time,
        Utc.with_ymd_and_hms(2026, 3, 2, 11, 0, 0).unwrap()
    );
}

#[test]
fn missing_availability_field_defaults_to_empty() {
    let json = r#"{
        "event_id": "evt_2",
        "duration_minutes": 60,
        "proposed_slots": [{"start_time": "2026-03-02T09:00:00Z", "end_time": "2026-03-02T10:00:00Z", "timezone": "UTC"}],
        "participants": ["alice"]
    }"#;
    let response = RecommendationRequest::from_json(json)
        .unwrap()
        .evaluate(DstPolicy::default())
        .unwrap();

    assert_eq!(response.best_recommendation.unwrap().available_count, 0);
    assert!(response.message.starts_with("No common availability found."));
}

#[test]
fn no_participants_response() {
    let json = r#"{
        "event_id": "evt_3",
        "duration_minutes": 60,
        "proposed_slots": [],
        "participants": []
    }"#;
    let response = RecommendationRequest::from_json(json)
        .unwrap()
        .evaluate(DstPolicy::default())
        .unwrap();

    assert!(response.best_recommendation.is_none());
    assert_eq!(response.total_participants, 0);
    assert_eq!(response.message, "No participants found for this event");

    let value = serde_json::to_value(&response).unwrap();
    assert!(value["best_recommendation"].is_null());
    assert_eq!(value["event_id"], "evt_3");
}

#[test]
fn non_positive_duration_is_rejected() {
    let request = RecommendationRequest::from_json(&request_json(0)).unwrap();
    let err = request.evaluate(DstPolicy::default()).unwrap_err();
    assert!(matches!(err, SlotError::InvalidDuration(0)));
}

#[test]
fn inverted_proposed_slot_is_rejected() {
    let json = r#"{
        "event_id": "evt_4",
        "duration_minutes": 60,
        "proposed_slots": [{"start_time": "2026-03-02T12:00:00Z", "end_time": "2026-03-02T09:00:00Z", "timezone": "UTC"}],
        "participants": ["alice"]
    }"#;
    let err = RecommendationRequest::from_json(json)
        .unwrap()
        .to_engine_input(DstPolicy::default())
        .unwrap_err();
    assert!(matches!(err, SlotError::InvalidWindow { .. }));
}

#[test]
fn unknown_timezone_is_rejected() {
    let json = r#"{
        "event_id": "evt_5",
        "duration_minutes": 60,
        "proposed_slots": [{"start_time": "2026-03-02T09:00:00", "end_time": "2026-03-02T12:00:00", "timezone": "Atlantis/Central"}],
        "participants": ["alice"]
    }"#;
    let err = RecommendationRequest::from_json(json)
        .unwrap()
        .to_engine_input(DstPolicy::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid timezone: Atlantis/Central");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = RecommendationRequest::from_json("{\"event_id\": 7").unwrap_err();
    assert!(matches!(err, SlotError::Json(_)));
}

#[test]
fn dst_policy_applies_to_wall_clock_inputs() {
    // 02:30 on 2026-03-08 does not exist in New York.
    let json = r#"{
        "event_id": "evt_6",
        "duration_minutes": 30,
        "proposed_slots": [{"start_time": "2026-03-08T02:30:00", "end_time": "2026-03-08T05:00:00", "timezone": "America/New_York"}],
        "participants": ["alice"]
    }"#;
    let request = RecommendationRequest::from_json(json).unwrap();

    assert!(matches!(
        request.to_engine_input(DstPolicy::Skip).unwrap_err(),
        SlotError::InvalidDateTime(_)
    ));

    let shifted = request.to_engine_input(DstPolicy::ShiftForward).unwrap();
    assert_eq!(
        shifted.proposed_windows[0].window.start(),
        Utc.with_ymd_and_hms(2026, 3, 8, 7, 0, 0).unwrap()
    );
}

#[test]
fn huge_duration_yields_no_candidates() {
    let request = RecommendationRequest::from_json(&request_json(1_000_000_000_000)).unwrap();
    let response = request.evaluate(DstPolicy::default()).unwrap();

    assert!(response.best_recommendation.is_none());
    assert_eq!(response.duration_minutes, 1_000_000_000_000);
    assert_eq!(response.message, NO_CANDIDATES_MESSAGE);
}

#[test]
fn malformed_record_from_non_participant_is_skipped() {
    let json = r#"{
        "event_id": "evt_7",
        "duration_minutes": 60,
        "proposed_slots": [{"start_time": "2026-03-02T09:00:00Z", "end_time": "2026-03-02T10:00:00Z", "timezone": "UTC"}],
        "participants": ["alice"],
        "availability": [
            {"user_id": "alice", "start_time": "2026-03-02T09:00:00Z", "end_time": "2026-03-02T10:00:00Z", "timezone": "UTC"},
            {"user_id": "mallory", "start_time": "whenever", "end_time": "2026-03-02T10:00:00Z", "timezone": "Nowhere/Special"}
        ]
    }"#;
    let response = RecommendationRequest::from_json(json)
        .unwrap()
        .evaluate(DstPolicy::default())
        .unwrap();

    assert_eq!(response.best_recommendation.unwrap().available_count, 1);
}

#[test]
fn malformed_record_from_participant_is_rejected() {
    let json = r#"{
        "event_id": "evt_8",
        "duration_minutes": 60,
        "proposed_slots": [{"start_time": "2026-03-02T09:00:00Z", "end_time": "2026-03-02T10:00:00Z", "timezone": "UTC"}],
        "participants": ["alice"],
        "availability": [
            {"user_id": "alice", "start_time": "whenever", "end_time": "2026-03-02T10:00:00Z", "timezone": "UTC"}
        ]
    }"#;
    let err = RecommendationRequest::from_json(json)
        .unwrap()
        .to_engine_input(DstPolicy::default())
        .unwrap_err();
    assert!(matches!(err, SlotError::InvalidDateTime(_)));
}
