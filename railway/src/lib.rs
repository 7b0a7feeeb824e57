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

//! Facade over the railway crates. Enable the `future` feature for the
//! asynchronous combinators and retry support.

#[cfg(feature = "errors")]
pub use railway_errors as errors;

#[cfg(feature = "result")]
pub use railway_result as result;

#[cfg(feature = "future")]
pub use railway_future as future;

/// The common surface in one import.
pub mod prelude {
    #[cfg(feature = "errors")]
    pub use railway_errors::{AggregateError, Error, FieldError, Semigroup, ValidationError};

    #[cfg(feature = "result")]
    pub use railway_result::{
        Combine, CombineWith, ErrorMatcher, NoopRecorder, RailResult, Recorder, ResultExt,
        TracingRecorder, TraverseItExt,
    };

    #[cfg(feature = "future")]
    pub use railway_future::{retry, retry_cancellable, RailFutureExt, RetryPolicy};
}
