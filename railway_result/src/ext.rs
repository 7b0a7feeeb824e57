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

use crate::recorder::Recorder;
use crate::RailResult;
use railway_errors::Error;

/// Short-circuit combinators beyond those provided by [`Result`] itself.
///
/// Every method consumes the result and produces a new one; a failure flows
/// through `ensure` and `tap` untouched and a success flows through
/// `compensate` and `tap_failure` untouched.
pub trait ResultExt<T>: Sized {
    /// Turns a success into the supplied failure when the predicate rejects
    /// the value. The predicate is never evaluated for a result that has
    /// already failed.
    fn ensure<P>(self, predicate: P, error: Error) -> RailResult<T>
    where
        P: FnOnce(&T) -> bool;

    /// Attempts to recover from a failure. The recovery function is only
    /// invoked on a failure; its result replaces the original outcome.
    fn compensate<F>(self, recover: F) -> RailResult<T>
    where
        F: FnOnce() -> RailResult<T>;

    /// Attempts to recover from a failure matching the predicate. A failure
    /// the predicate rejects passes through unchanged.
    fn compensate_when<P, F>(self, predicate: P, recover: F) -> RailResult<T>
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce() -> RailResult<T>;

    /// Runs a side effect against the value of a success and returns the
    /// original result unchanged.
    fn tap<F>(self, f: F) -> RailResult<T>
    where
        F: FnOnce(&T);

    /// Runs a side effect against the error of a failure and returns the
    /// original result unchanged.
    fn tap_failure<F>(self, f: F) -> RailResult<T>
    where
        F: FnOnce(&Error);

    /// Reports the outcome to an observability hook and returns the original
    /// result unchanged. The hook only ever sees borrows and cannot alter
    /// the outcome.
    fn record<R>(self, recorder: &R, operation: &'static str) -> RailResult<T>
    where
        R: Recorder + ?Sized;
}

impl<T> ResultExt<T> for RailResult<T> {
    fn ensure<P>(self, predicate: P, error: Error) -> RailResult<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(error)
                }
            }
            failure => failure,
        }
    }

    fn compensate<F>(self, recover: F) -> RailResult<T>
    where
        F: FnOnce() -> RailResult<T>,
    {
        self.compensate_when(|_| true, recover)
    }

    fn compensate_when<P, F>(self, predicate: P, recover: F) -> RailResult<T>
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce() -> RailResult<T>,
    {
        match self {
            Err(error) if predicate(&error) => recover(),
            other => other,
        }
    }

    fn tap<F>(self, f: F) -> RailResult<T>
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    fn tap_failure<F>(self, f: F) -> RailResult<T>
    where
        F: FnOnce(&Error),
    {
        if let Err(error) = &self {
            f(error);
        }
        self
    }

    fn record<R>(self, recorder: &R, operation: &'static str) -> RailResult<T>
    where
        R: Recorder + ?Sized,
    {
        recorder.record(operation, self.as_ref().err());
        self
    }
}
