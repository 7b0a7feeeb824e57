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

use railway_errors::Error;
use tracing::{debug, trace};

/// An observability hook invoked around combinator outcomes.
///
/// Recorders are injected capabilities, never process-wide state. An
/// implementation must be fast and must not panic; it receives borrows only
/// and so cannot alter the outcome it observes.
pub trait Recorder {
    /// Called once per recorded operation; `error` is `None` for a success.
    fn record(&self, operation: &'static str, error: Option<&Error>);
}

/// A [`Recorder`] that emits structured `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingRecorder;

impl Recorder for TracingRecorder {
    fn record(&self, operation: &'static str, error: Option<&Error>) {
        match error {
            None => trace!(operation, "Operation succeeded."),
            Some(error) => {
                debug!(operation, kind = error.kind(), error = %error, "Operation failed.")
            }
        }
    }
}

/// A [`Recorder`] that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRecorder;

impl Recorder for NoopRecorder {
    fn record(&self, _operation: &'static str, _error: Option<&Error>) {}
}
