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

use crate::retry::{retry, retry_cancellable, retry_cancellable_if, retry_if, RetryPolicy};
use railway_errors::Error;
use railway_result::RailResult;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::new()
        .with_max_retries(max_retries)
        .with_initial_delay(Duration::from_millis(1))
}

#[tokio::test]
async fn a_success_returns_immediately() {
    let calls = AtomicU32::new(0);
    let result = retry(fast_policy(3), || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(42) }
    })
    .await;

    assert_eq!(result, Ok(42));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn an_operation_that_always_fails_runs_one_plus_max_retries_times() {
    let calls = AtomicU32::new(0);
    let result: RailResult<i32> = retry(fast_policy(2), || {
        let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move { Err(Error::service_unavailable(format!("attempt {}", attempt))) }
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(result, Err(Error::service_unavailable("attempt 3")));
}

#[tokio::test]
async fn an_operation_recovers_after_transient_failures() {
    let calls = AtomicU32::new(0);
    let result = retry(fast_policy(3), || {
        let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if attempt < 3 {
                Err(Error::service_unavailable("still warming up"))
            } else {
                Ok(attempt)
            }
        }
    })
    .await;

    assert_eq!(result, Ok(3));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn a_rejected_error_stops_retrying_immediately() {
    let calls = AtomicU32::new(0);
    let result: RailResult<i32> = retry_if(
        fast_policy(5),
        |error| !matches!(error, Error::Forbidden(_)),
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::forbidden("no access")) }
        },
    )
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result, Err(Error::forbidden("no access")));
}

#[tokio::test]
async fn cancellation_returns_the_most_recent_failure() {
    let calls = AtomicU32::new(0);
    let token = CancellationToken::new();
    token.cancel();

    let result: RailResult<i32> = retry_cancellable(fast_policy(5), token, || {
        let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move { Err(Error::service_unavailable(format!("attempt {}", attempt))) }
    })
    .await;

    // The first attempt always runs; the cancellation is observed at the
    // backoff suspension point.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result, Err(Error::service_unavailable("attempt 1")));
}

#[tokio::test]
async fn zero_retries_means_a_single_attempt() {
    let calls = AtomicU32::new(0);
    let result: RailResult<i32> = retry(fast_policy(0), || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err(Error::unexpected("boom")) }
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result, Err(Error::unexpected("boom")));
}

#[tokio::test]
async fn cancelling_mid_backoff_stops_further_attempts() {
    let calls = AtomicU32::new(0);
    let token = CancellationToken::new();
    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        cancel.cancel();
    });

    let policy = RetryPolicy::new()
        .with_max_retries(5)
        .with_initial_delay(Duration::from_secs(60));

    let result: RailResult<i32> = retry_cancellable_if(
        policy,
        token,
        |error| !matches!(error, Error::Forbidden(_)),
        || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(Error::service_unavailable(format!("attempt {}", attempt))) }
        },
    )
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result, Err(Error::service_unavailable("attempt 1")));
}

#[test]
fn policy_defaults_match_the_documented_values() {
    let policy = RetryPolicy::new();
    assert_eq!(policy.max_retries(), 3);
    assert_eq!(policy.initial_delay(), Duration::from_millis(100));
    assert_eq!(policy.backoff_multiplier(), 2.0);
    assert_eq!(policy.max_delay(), Duration::from_secs(30));
}

#[test]
fn backoff_multiplier_never_shrinks_the_delay() {
    let policy = RetryPolicy::new().with_backoff_multiplier(0.5);
    assert_eq!(policy.backoff_multiplier(), 1.0);

    let policy = RetryPolicy::new().with_backoff_multiplier(f64::NAN);
    assert_eq!(policy.backoff_multiplier(), 1.0);
}

#[test]
fn backoff_growth_saturates_at_the_delay_cap() {
    let policy = RetryPolicy::new();
    let mut delay = policy.initial_delay();
    for _ in 0..200 {
        delay = policy.next_delay(delay);
        assert!(delay <= policy.max_delay());
    }
    assert_eq!(delay, policy.max_delay());
}
