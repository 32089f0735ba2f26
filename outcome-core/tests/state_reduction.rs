//! Exercises the outcome type the way a presentation layer consumes it:
//! a fetch operation produces an outcome, and the caller reduces it to one
//! of a small closed set of view states.

use std::io;

use outcome_core::{Fault, Outcome};
use thiserror::Error;

/// Payload returned by the fake repository.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    value: i32,
}

/// Closed failure taxonomy for the fetch operation. `Unexpected` is the
/// catch-all wrapping an underlying failure that has no named case.
#[derive(Debug, Error)]
enum FetchFault {
    #[error("record not found")]
    NotFound,
    #[error("invalid record id")]
    InvalidId,
    #[error("server responded with status {code}")]
    Server { code: u16 },
    #[error("unexpected failure: {cause}")]
    Unexpected {
        #[from]
        cause: io::Error,
    },
}

impl Fault for FetchFault {}

/// View states the reduction produces.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewState {
    Loaded(Record),
    LoadFailed(String),
}

/// Stand-in for a data source; the id selects which outcome comes back.
struct FakeRepository;

impl FakeRepository {
    fn fetch(&self, id: i32) -> Outcome<Record, FetchFault> {
        if id < 0 {
            return Outcome::Failure(FetchFault::InvalidId);
        }
        match id {
            0 => Outcome::Failure(FetchFault::NotFound),
            500 => Outcome::Failure(FetchFault::Server { code: 503 }),
            999 => Outcome::Failure(
                io::Error::new(io::ErrorKind::ConnectionReset, "connection reset").into(),
            ),
            _ => Outcome::Success(Record { value: id * 2 }),
        }
    }
}

fn message_for(fault: &FetchFault) -> String {
    match fault {
        FetchFault::NotFound => "The record does not exist.".to_string(),
        FetchFault::InvalidId => "That id is not valid.".to_string(),
        FetchFault::Server { code } => format!("The server failed with status {code}."),
        FetchFault::Unexpected { cause } => format!("Something went wrong: {cause}."),
    }
}

/// Chaining-style reduction, the way a view model feeds a state holder.
fn reduce_chaining(outcome: Outcome<Record, FetchFault>) -> ViewState {
    let mut state = ViewState::LoadFailed("never reduced".to_string());
    let _ = outcome
        .on_success(|record| state = ViewState::Loaded(record.clone()))
        .on_failure(|fault| state = ViewState::LoadFailed(message_for(fault)));
    state
}

/// Match-style reduction; the payload comes out through the variant, not
/// through a field access after a boolean check.
fn reduce_matching(outcome: Outcome<Record, FetchFault>) -> ViewState {
    match outcome {
        Outcome::Success(record) => ViewState::Loaded(record),
        Outcome::Failure(fault) => ViewState::LoadFailed(message_for(&fault)),
    }
}

#[test]
fn test_fetch_success_reduces_to_loaded() {
    let state = reduce_chaining(FakeRepository.fetch(21));
    assert_eq!(state, ViewState::Loaded(Record { value: 42 }));
}

#[test]
fn test_not_found_reduces_to_message() {
    let state = reduce_chaining(FakeRepository.fetch(0));
    assert_eq!(
        state,
        ViewState::LoadFailed("The record does not exist.".to_string())
    );
}

#[test]
fn test_invalid_id_reduces_to_message() {
    let state = reduce_chaining(FakeRepository.fetch(-3));
    assert_eq!(state, ViewState::LoadFailed("That id is not valid.".to_string()));
}

#[test]
fn test_server_fault_message_carries_code() {
    let state = reduce_chaining(FakeRepository.fetch(500));
    assert_eq!(
        state,
        ViewState::LoadFailed("The server failed with status 503.".to_string())
    );
}

#[test]
fn test_unexpected_fault_message_carries_cause() {
    let state = reduce_chaining(FakeRepository.fetch(999));
    assert_eq!(
        state,
        ViewState::LoadFailed("Something went wrong: connection reset.".to_string())
    );
}

#[test]
fn test_both_reduction_styles_agree() {
    for id in [-3, 0, 7, 21, 500, 999] {
        assert_eq!(
            reduce_chaining(FakeRepository.fetch(id)),
            reduce_matching(FakeRepository.fetch(id)),
            "reductions diverged for id {id}"
        );
    }
}

#[test]
fn test_predicate_branching_with_borrowed_payload() {
    let outcome = FakeRepository.fetch(21);
    if outcome.is_success() {
        assert_eq!(outcome.as_ref().success().map(|r| r.value), Some(42));
    } else {
        panic!("fetch of a positive id must succeed");
    }
}
