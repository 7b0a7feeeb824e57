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

//! # Railway Result Combinators
//!
//! Combinators for composing success-or-failure computations over
//! [`RailResult`] without exception-style control flow. Composition runs on
//! two tracks:
//!
//! * **Short-circuit**: the standard [`Result`] combinators (`and_then` for
//!   bind, `map`, `map_err`, `map_or_else` for a total match) together with
//!   the [`ResultExt`] extensions (`ensure`, `compensate`, `tap`). The first
//!   failure propagates unchanged and later steps are never evaluated.
//!   [`TraverseItExt::traverse`] is bind applied across a sequence and
//!   belongs to this track.
//! * **Accumulate**: [`Combine`] evaluates nothing lazily — it receives
//!   already-produced results and reports *every* failure among them in one
//!   pass, folding the errors left-to-right with the combination algorithm
//!   from [`railway_errors`].
//!
//! Accessing the value of a failed result (or the error of a successful one)
//! is a programming-contract violation and panics via the standard
//! `unwrap`/`unwrap_err`; it is deliberately not recoverable through the
//! railway.

mod combine;
mod ext;
mod matcher;
mod recorder;
mod traverse;

#[cfg(test)]
mod tests;

pub use combine::{Combine, CombineWith};
pub use ext::ResultExt;
pub use matcher::ErrorMatcher;
pub use recorder::{NoopRecorder, Recorder, TracingRecorder};
pub use traverse::TraverseItExt;

use railway_errors::Error;

/// A computation outcome on the railway: a success carrying a value or a
/// failure carrying an [`Error`].
pub type RailResult<T> = Result<T, Error>;
