//! Property tests for the `Response` envelope laws.
//!
//! These verify that:
//! 1. Construction sets the flag and message exactly as given
//! 2. Attaching a payload never disturbs the flag or message
//! 3. Chained attachment is last-write-wins
//! 4. The strict `into_result` view surfaces failures with their message

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use remit::{Error, Response};
use rstest::rstest;

proptest! {
    #[test]
    fn failure_carries_flag_and_message(message in ".*") {
        let response = Response::fail(message.clone());
        prop_assert!(!response.success);
        prop_assert_eq!(response.message, Some(message));
    }

    #[test]
    fn with_results_preserves_flag_and_message(message in ".*", payload in any::<Vec<u32>>()) {
        let enriched = Response::fail(message.clone()).with_results(payload.clone());
        prop_assert!(!enriched.success);
        prop_assert_eq!(enriched.message, Some(message));
        prop_assert_eq!(enriched.results, payload);
    }

    #[test]
    fn attaching_twice_is_last_write_wins(p1 in any::<Vec<u8>>(), p2 in any::<Vec<u8>>()) {
        let chained = Response::ok().with_results(p1).with_results(p2.clone());
        let fresh = Response::ok().with_results(p2);
        prop_assert_eq!(chained, fresh);
    }

    #[test]
    fn payload_type_substitution_keeps_flag_and_message(message in ".*") {
        let response = Response::fail(message.clone())
            .with_results(vec![1u8, 2, 3])
            .with_results("replaced".to_string())
            .with_no_results::<Vec<u64>>();
        prop_assert!(!response.success);
        prop_assert_eq!(response.message, Some(message));
        prop_assert_eq!(response.results, Vec::<u64>::new());
    }
}

#[test]
fn success_has_no_message() {
    let response = Response::ok();
    assert!(response.success);
    assert_eq!(response.message, None);
}

#[test]
fn with_no_results_uses_type_default() {
    let response = Response::ok().with_no_results::<Vec<String>>();
    assert!(response.results.is_empty());
}

#[test]
fn failed_envelope_payload_stays_readable() {
    // The record shape does not forbid reading the payload of a failure;
    // callers opt into enforcement via into_result.
    let response = Response::fail("Could not update Order.").with_no_results::<Vec<String>>();
    assert!(!response.success);
    assert_eq!(response.results, Vec::<String>::new());
}

#[test]
fn serializes_camel_case_and_omits_absent_message() {
    let response = Response::ok().with_results(vec![1, 2]);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "results": [1, 2]}));

    let json = serde_json::to_value(Response::fail("late cancel")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"success": false, "message": "late cancel", "results": null})
    );
}

#[rstest]
#[case(Response::fail("Could not update Order."), "Could not update Order.")]
#[case(Response::fail(""), "")]
fn into_result_surfaces_failure_message(#[case] response: Response, #[case] expected: &str) {
    match response.into_result() {
        Err(Error::Failure { message }) => assert_eq!(message, expected),
        other => panic!("expected Failure, got {other:?}"),
    }
}
