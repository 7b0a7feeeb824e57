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

//! Retry with multiplicative backoff over the railway.
//!
//! Only the wrapped operation can fail; the backoff delay is never an error
//! condition. Cancellation is cooperative and means "stop retrying", not
//! "fail the operation": a cancellation observed during the backoff sleep
//! (or before the next attempt starts) returns the most recent failure
//! unchanged rather than a synthesized cancellation error. The first
//! attempt always runs, as there is no earlier outcome to return.
//!
//! The three ways of giving up (attempt budget exhausted, error rejected by
//! the retry predicate, cancellation) are distinguished in the diagnostics
//! but all surface to the caller as the ordinary last failure.

mod policy;

#[cfg(test)]
mod tests;

pub use policy::{
    RetryPolicy, DEFAULT_BACKOFF_MULTIPLIER, DEFAULT_INITIAL_DELAY, DEFAULT_MAX_DELAY,
    DEFAULT_MAX_RETRIES,
};

use railway_errors::Error;
use railway_result::RailResult;
use std::future::Future;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Runs the operation, retrying failures according to the policy.
pub async fn retry<T, F, Fut>(policy: RetryPolicy, op: F) -> RailResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RailResult<T>>,
{
    run(policy, CancellationToken::new(), always, op).await
}

/// As [`retry`], but a failure for which `should_retry` returns false stops
/// retrying immediately and is returned as-is.
pub async fn retry_if<T, F, Fut, P>(policy: RetryPolicy, should_retry: P, op: F) -> RailResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RailResult<T>>,
    P: Fn(&Error) -> bool,
{
    run(policy, CancellationToken::new(), should_retry, op).await
}

/// As [`retry`], observing the token before each retry attempt and during
/// the backoff sleep.
pub async fn retry_cancellable<T, F, Fut>(
    policy: RetryPolicy,
    token: CancellationToken,
    op: F,
) -> RailResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RailResult<T>>,
{
    run(policy, token, always, op).await
}

/// Combines [`retry_if`] and [`retry_cancellable`].
pub async fn retry_cancellable_if<T, F, Fut, P>(
    policy: RetryPolicy,
    token: CancellationToken,
    should_retry: P,
    op: F,
) -> RailResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RailResult<T>>,
    P: Fn(&Error) -> bool,
{
    run(policy, token, should_retry, op).await
}

fn always(_: &Error) -> bool {
    true
}

async fn run<T, F, Fut, P>(
    policy: RetryPolicy,
    token: CancellationToken,
    should_retry: P,
    mut op: F,
) -> RailResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RailResult<T>>,
    P: Fn(&Error) -> bool,
{
    let mut delay = policy.clamp(policy.initial_delay());
    let mut retries: u32 = 0;
    loop {
        let error = match op().await {
            Ok(value) => {
                trace!(attempt = retries + 1, "Attempt succeeded.");
                return Ok(value);
            }
            Err(error) => error,
        };
        if retries >= policy.max_retries() {
            debug!(attempts = retries + 1, error = %error, "Retry budget exhausted.");
            return Err(error);
        }
        if !should_retry(&error) {
            debug!(attempts = retries + 1, error = %error, "Retry stopped by policy.");
            return Err(error);
        }
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(attempts = retries + 1, "Retry cancelled during backoff.");
                return Err(error);
            }
            _ = sleep(delay) => {}
        }
        delay = policy.next_delay(delay);
        retries += 1;
    }
}
