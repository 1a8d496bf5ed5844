#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `Burrito` serializes as a plain sequence of its fillings; `Outcome` uses
//! the default externally tagged enum representation.

use burrito::Burrito;
use burrito::burrito;
use burrito::control::Outcome;
use rstest::rstest;

// =============================================================================
// Burrito Integration Tests
// =============================================================================

#[rstest]
fn test_burrito_serializes_as_sequence() {
    let fillings = burrito![1, 2, 3];
    let json = serde_json::to_string(&fillings).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_burrito_json_roundtrip() {
    let fillings: Burrito<String> = ["rice", "beans", "salsa"]
        .into_iter()
        .map(String::from)
        .collect();
    let json = serde_json::to_string(&fillings).unwrap();
    let restored: Burrito<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(fillings, restored);
}

#[rstest]
fn test_empty_burrito_json_roundtrip() {
    let empty: Burrito<i32> = burrito![];
    let json = serde_json::to_string(&empty).unwrap();
    assert_eq!(json, "[]");
    let restored: Burrito<i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_nested_burrito_json_roundtrip() {
    let nested = burrito![burrito![1, 2], burrito![], burrito![3]];
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1,2],[],[3]]");
    let restored: Burrito<Burrito<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.flatten(), burrito![1, 2, 3]);
}

#[rstest]
fn test_burrito_rejects_non_sequence() {
    let result: Result<Burrito<i32>, _> = serde_json::from_str("{\"fillings\":[1]}");
    assert!(result.is_err());
}

// =============================================================================
// Outcome Integration Tests
// =============================================================================

#[rstest]
#[case(Outcome::Success(42), "{\"Success\":42}")]
#[case(Outcome::Empty, "\"Empty\"")]
#[case(Outcome::Failure("too spicy".to_string()), "{\"Failure\":\"too spicy\"}")]
fn test_outcome_json_roundtrip(#[case] outcome: Outcome<i32, String>, #[case] expected: &str) {
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, expected);
    let restored: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, restored);
}
