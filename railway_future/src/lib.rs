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

//! # Railway Combinators over Futures
//!
//! Lifts the railway combinator set over asynchronous computations. There is
//! a single async composition path: every adapter here operates on a
//! `Future<Output = RailResult<T>>` and the continuation only runs after the
//! prior computation settles.
//!
//! Bind, map, error mapping and taps over futures are already provided by
//! [`futures::TryFutureExt`] (`and_then`, `map_ok`, `map_err`, `inspect_ok`,
//! `inspect_err`) and are not duplicated here. This crate adds what that
//! trait lacks:
//!
//! * [`RailFutureExt`] — `ensure`, `compensate`, `compensate_when` and
//!   `record` adapter futures.
//! * [`sequence::traverse`] — short-circuiting traversal of a sequence with
//!   an async transform, strictly one computation in flight at a time.
//! * [`sequence::combine2`] and friends — concurrent evaluation of several
//!   independent computations with every failure collected into one error.
//! * the [`mod@retry`] module — retry with multiplicative backoff and
//!   cooperative cancellation over any `RailResult`-returning operation.

pub mod combinators;
pub mod retry;
pub mod sequence;

pub use combinators::{Compensate, Ensure, RailFutureExt, Record};
pub use retry::{
    retry, retry_cancellable, retry_cancellable_if, retry_if, RetryPolicy,
};
