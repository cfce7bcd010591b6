//! Integration tests for result delivery through the handler

use adder::{Adder, AdderError, CalcResult, OverflowPolicy, add};

fn deliver(a: i32, b: i32) -> Option<CalcResult> {
    let mut captured = None;
    add(a, b, |result| captured = Some(result));
    captured
}

#[test]
fn test_add_delivers_result() {
    let result = deliver(2, 3).expect("handler was not called");
    assert_eq!(result.message(), "Result: 5");
}

#[test]
fn test_add_concrete_scenarios() {
    let cases = [(0, 0, "Result: 0"), (-1, 1, "Result: 0"), (-5, -7, "Result: -12")];
    for (a, b, expected) in cases {
        assert_eq!(deliver(a, b).unwrap().message(), expected);
    }
}

#[test]
fn test_handler_called_exactly_once() {
    let mut calls = 0;
    add(10, 20, |_| calls += 1);
    assert_eq!(calls, 1);
}

#[test]
fn test_repeated_calls_are_equal() {
    let first = deliver(123, -23);
    let second = deliver(123, -23);
    assert_eq!(first, second);
}

#[test]
fn test_result_is_owned_by_caller() {
    let message = deliver(3, 5).map(CalcResult::into_message);
    assert_eq!(message.as_deref(), Some("Result: 8"));
}

#[test]
fn test_configured_adder_matches_free_function() {
    let adder = Adder::default();
    let mut captured = None;
    adder.add(2, 3, |result| captured = Some(result)).unwrap();
    assert_eq!(captured, deliver(2, 3));
}

#[test]
fn test_checked_overflow_propagates() {
    let adder = Adder::new(OverflowPolicy::Checked);
    let mut called = false;
    let result = adder.add(i32::MIN, -1, |_| called = true);

    assert!(!called);
    match result.unwrap_err() {
        AdderError::Overflow { a, b } => {
            assert_eq!(a, i32::MIN);
            assert_eq!(b, -1);
        }
        other => panic!("Expected Overflow error, got {other:?}"),
    }
}
