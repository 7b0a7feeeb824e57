// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    Combine, CombineWith, ErrorMatcher, RailResult, Recorder, ResultExt, TraverseItExt,
};
use parking_lot::Mutex;
use railway_errors::{Error, ValidationError};
use std::cell::Cell;

#[test]
fn bind_short_circuits_without_invoking_the_continuation() {
    let calls = Cell::new(0u32);
    let failed: RailResult<i32> = Err(Error::not_found("record"));

    let result = failed.clone().and_then(|n| {
        calls.set(calls.get() + 1);
        Ok(n + 1)
    });

    assert_eq!(result, failed);
    assert_eq!(calls.get(), 0);
}

#[test]
fn bind_left_identity_and_map_identity() {
    let success: RailResult<i32> = Ok(42);
    assert_eq!(success.clone().and_then(Ok), success);
    assert_eq!(success.clone().map(|n| n), success);
}

#[test]
fn ensure_rejects_a_value_that_fails_the_predicate() {
    let result: RailResult<i32> = Ok(5).ensure(|n| *n > 10, Error::validation("too small"));
    assert_eq!(result, Err(Error::validation("too small")));
}

#[test]
fn ensure_accepts_a_value_that_passes_the_predicate() {
    let result: RailResult<i32> = Ok(15).ensure(|n| *n > 10, Error::validation("too small"));
    assert_eq!(result, Ok(15));
}

#[test]
fn ensure_never_evaluates_the_predicate_on_a_failure() {
    let calls = Cell::new(0u32);
    let failed: RailResult<i32> = Err(Error::conflict("original"));

    let result = failed.clone().ensure(
        |_| {
            calls.set(calls.get() + 1);
            true
        },
        Error::validation("unused"),
    );

    assert_eq!(result, failed);
    assert_eq!(calls.get(), 0);
}

#[test]
fn compensate_runs_only_on_failure() {
    let calls = Cell::new(0u32);
    let recover = || {
        calls.set(calls.get() + 1);
        Ok(7)
    };

    let recovered: RailResult<i32> = Err(Error::not_found("record")).compensate(recover);
    assert_eq!(recovered, Ok(7));
    assert_eq!(calls.get(), 1);

    let untouched: RailResult<i32> = Ok(1).compensate(recover);
    assert_eq!(untouched, Ok(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn compensate_when_passes_a_non_matching_failure_through() {
    let original: RailResult<i32> = Err(Error::forbidden("no access"));

    let result = original
        .clone()
        .compensate_when(Error::is_validation, || Ok(0));

    assert_eq!(result, original);
}

#[test]
fn compensate_when_recovers_a_matching_failure() {
    let result: RailResult<i32> =
        Err(Error::validation("bad input")).compensate_when(Error::is_validation, || Ok(0));
    assert_eq!(result, Ok(0));
}

#[test]
fn tap_observes_success_and_returns_it_unchanged() {
    let seen = Cell::new(0);
    let result: RailResult<i32> = Ok(3).tap(|n| seen.set(*n));
    assert_eq!(result, Ok(3));
    assert_eq!(seen.get(), 3);
}

#[test]
fn tap_failure_observes_failure_and_returns_it_unchanged() {
    let seen = Cell::new(false);
    let failed: RailResult<i32> = Err(Error::not_found("record"));
    let result = failed.clone().tap_failure(|_| seen.set(true));
    assert_eq!(result, failed);
    assert!(seen.get());
}

#[derive(Default)]
struct CapturingRecorder {
    entries: Mutex<Vec<(&'static str, Option<String>)>>,
}

impl Recorder for CapturingRecorder {
    fn record(&self, operation: &'static str, error: Option<&Error>) {
        self.entries
            .lock()
            .push((operation, error.map(Error::to_string)));
    }
}

#[test]
fn record_reports_both_outcomes_without_altering_them() {
    let recorder = CapturingRecorder::default();

    let ok: RailResult<i32> = Ok(1).record(&recorder, "load");
    let err: RailResult<i32> = Err(Error::not_found("record")).record(&recorder, "load");

    assert_eq!(ok, Ok(1));
    assert_eq!(err, Err(Error::not_found("record")));
    let entries = recorder.entries.lock();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], ("load", None));
    assert_eq!(
        entries[1],
        ("load", Some("Not found: record".to_string()))
    );
}

#[test]
fn combine_returns_the_values_in_order_when_all_succeed() {
    let combined = (
        Ok(1),
        Ok("two".to_string()),
        Ok(3.5f64),
    )
        .combine();
    assert_eq!(combined, Ok((1, "two".to_string(), 3.5f64)));
}

#[test]
fn combine_collects_every_failure_in_input_order() {
    let first = Error::not_found("a");
    let third = Error::conflict("c");
    let combined: RailResult<(i32, i32, i32)> =
        (Err(first.clone()), Ok(2), Err(third.clone())).combine();

    match combined {
        Err(Error::Aggregate(aggregate)) => {
            assert_eq!(aggregate.errors(), &[first, third]);
        }
        other => panic!("Expected an aggregate failure, got: {:?}", other),
    }
}

#[test]
fn combine_merges_two_not_found_errors_into_an_aggregate() {
    let combined: RailResult<(i32, i32)> = (
        Err(Error::not_found("a")),
        Err(Error::not_found("b")),
    )
        .combine();

    match combined {
        Err(Error::Aggregate(aggregate)) => {
            assert_eq!(
                aggregate.errors(),
                &[Error::not_found("a"), Error::not_found("b")]
            );
        }
        other => panic!("Expected an aggregate failure, got: {:?}", other),
    }
}

#[test]
fn combine_merges_validation_failures_into_one_report() {
    let left = Error::Validation(ValidationError::new("code").with_field("name", "required"));
    let right = Error::Validation(ValidationError::new("other").with_field("age", "out of range"));
    let combined: RailResult<(i32, i32)> = (Err(left), Err(right)).combine();

    match combined {
        Err(Error::Validation(merged)) => {
            assert_eq!(merged.code(), "code");
            assert_eq!(merged.fields().len(), 2);
        }
        other => panic!("Expected a validation failure, got: {:?}", other),
    }
}

#[test]
fn combine_with_grows_the_tuple_and_keeps_the_fold() {
    let grown = (Ok(1), Ok(2)).combine().combine_with(Ok(3));
    assert_eq!(grown, Ok((1, 2, 3)));

    let first = Error::not_found("a");
    let last = Error::conflict("c");
    let failed: RailResult<(i32, i32)> = (Err(first.clone()), Ok(2)).combine();
    let next: RailResult<i32> = Err(last.clone());
    match failed.combine_with(next) {
        Err(Error::Aggregate(aggregate)) => {
            assert_eq!(aggregate.errors(), &[first, last]);
        }
        other => panic!("Expected an aggregate failure, got: {:?}", other),
    }
}

#[test]
fn traverse_returns_the_outputs_in_input_order() {
    let result = vec![1, 2, 3].into_iter().traverse(|n| Ok(n * 10));
    assert_eq!(result, Ok(vec![10, 20, 30]));
}

#[test]
fn traverse_stops_at_the_first_failure() {
    let calls = Cell::new(0u32);
    let items = vec![1, 2, 3, 4];

    let result: RailResult<Vec<i32>> = items.into_iter().traverse(|n| {
        calls.set(calls.get() + 1);
        if n == 3 {
            Err(Error::validation("third item is bad"))
        } else {
            Ok(n)
        }
    });

    assert_eq!(result, Err(Error::validation("third item is bad")));
    assert_eq!(calls.get(), 3);
}

#[test]
fn matcher_dispatches_to_the_handler_for_the_kind() {
    let outcome = ErrorMatcher::new()
        .on_not_found(|message| format!("missing: {}", message))
        .on_validation(|validation| format!("invalid: {}", validation.code()))
        .apply(&Error::not_found("user"));
    assert_eq!(outcome, "missing: user");
}

#[test]
fn matcher_falls_back_to_the_catch_all() {
    let outcome = ErrorMatcher::new()
        .on_not_found(|_| "handled")
        .otherwise(|error| {
            assert_eq!(error.kind(), "conflict");
            "fallback"
        })
        .apply(&Error::conflict("duplicate"));
    assert_eq!(outcome, "fallback");
}

#[test]
#[should_panic(expected = "No handler registered")]
fn matcher_without_a_catch_all_panics_on_an_unhandled_kind() {
    ErrorMatcher::<&str>::new()
        .on_not_found(|_| "handled")
        .apply(&Error::conflict("duplicate"));
}
