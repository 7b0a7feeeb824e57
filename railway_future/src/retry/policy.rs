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

use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

/// Policy for retrying a failed operation with multiplicative backoff.
///
/// A policy is plain per-call configuration: it carries no state and is
/// recreated freely. The delay before the first retry is `initial_delay`;
/// after each retry the delay is multiplied by `backoff_multiplier` and
/// truncated to `max_delay`. The fields are kept behind the builders and
/// getters so the multiplier invariant cannot be bypassed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    max_retries: u32,
    /// Delay before the first retry.
    initial_delay: Duration,
    /// Multiplier applied to the delay after each retry. At least 1.0.
    backoff_multiplier: f64,
    /// Upper bound on any single inter-attempt delay.
    max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new()
    }
}

impl RetryPolicy {
    /// Creates a policy with the default settings: 3 retries, 100ms initial
    /// delay, 2.0 multiplier, 30s delay cap.
    pub fn new() -> RetryPolicy {
        RetryPolicy {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: DEFAULT_INITIAL_DELAY,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> RetryPolicy {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, initial_delay: Duration) -> RetryPolicy {
        self.initial_delay = initial_delay;
        self
    }

    /// Multipliers below 1.0 (and NaN) are clamped to 1.0; the delay never
    /// shrinks between attempts.
    pub fn with_backoff_multiplier(mut self, backoff_multiplier: f64) -> RetryPolicy {
        self.backoff_multiplier = backoff_multiplier.max(1.0);
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> RetryPolicy {
        self.max_delay = max_delay;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn backoff_multiplier(&self) -> f64 {
        self.backoff_multiplier
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    pub(crate) fn clamp(&self, delay: Duration) -> Duration {
        delay.min(self.max_delay)
    }

    /// The delay to use after `current`, truncated to `max_delay`. The
    /// growth saturates at the cap; it can never overflow.
    pub(crate) fn next_delay(&self, current: Duration) -> Duration {
        let grown = Duration::try_from_secs_f64(current.as_secs_f64() * self.backoff_multiplier)
            .unwrap_or(self.max_delay);
        grown.min(self.max_delay)
    }
}
