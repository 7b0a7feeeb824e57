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

//! # Railway Error Model
//!
//! This crate provides the closed [`Error`] type used throughout the railway
//! combinators and the algorithm for combining independent errors into a
//! single structured value.
//!
//! An expected failure is always carried as a value; nothing in this crate
//! panics for a domain failure. When several independent computations fail,
//! their errors are merged with [`Error::combine`] (or generically through
//! [`Semigroup`]): two [`Error::Validation`] errors merge into one validation
//! report preserving every field, while unrelated failure kinds are collected
//! into a flat [`Error::Aggregate`] so that each cause remains visible.

mod aggregate;
mod semigroup;
mod validation;


pub use aggregate::AggregateError;
pub use semigroup::Semigroup;
pub use validation::{FieldError, ValidationError};

use thiserror::Error as ThisError;

/// The closed set of failure kinds understood by the railway combinators.
///
/// The leaf variants each carry a human-readable message. [`Error::Validation`]
/// additionally carries a structured, ordered list of per-field messages and
/// [`Error::Aggregate`] wraps an ordered sequence of unrelated sibling errors.
///
/// An [`Error::Aggregate`] never directly contains another aggregate; every
/// constructor and merge operation flattens one level.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Domain rule violated: {0}")]
    Domain(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("Unexpected: {0}")]
    Unexpected(String),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl Error {
    pub fn not_found(message: impl Into<String>) -> Error {
        Error::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Error {
        Error::Conflict(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Error {
        Error::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Error {
        Error::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Error {
        Error::Forbidden(message.into())
    }

    pub fn domain(message: impl Into<String>) -> Error {
        Error::Domain(message.into())
    }

    pub fn rate_limit(message: impl Into<String>) -> Error {
        Error::RateLimit(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Error {
        Error::ServiceUnavailable(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Error {
        Error::Unexpected(message.into())
    }

    /// A validation failure with a single message and no field context. The
    /// message is stored under the empty field name so that it merges with
    /// field-carrying validation errors like any other.
    pub fn validation(message: impl Into<String>) -> Error {
        Error::Validation(ValidationError::of("", message))
    }

    /// A short, stable name for the variant, suitable for structured log
    /// fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::NotFound(_) => "not_found",
            Error::Conflict(_) => "conflict",
            Error::BadRequest(_) => "bad_request",
            Error::Unauthorized(_) => "unauthorized",
            Error::Forbidden(_) => "forbidden",
            Error::Domain(_) => "domain",
            Error::RateLimit(_) => "rate_limit",
            Error::ServiceUnavailable(_) => "service_unavailable",
            Error::Unexpected(_) => "unexpected",
            Error::Aggregate(_) => "aggregate",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Error::Aggregate(_))
    }

    /// Combines an accumulated error with the next error encountered.
    ///
    /// An absent left-hand side is the identity: the right-hand error is
    /// returned unchanged. Two validation errors merge into one validation
    /// report (the left code wins and the field lists are concatenated in
    /// left-then-right order). Any other pairing produces a flat
    /// [`Error::Aggregate`]; a side that is already an aggregate contributes
    /// its contents rather than nesting. A validation error on either side of
    /// a heterogeneous merge participates as a single entry and is not split
    /// into per-field errors.
    pub fn combine(left: Option<Error>, right: Error) -> Error {
        match left {
            None => right,
            Some(left) => merge(left, right),
        }
    }
}

fn merge(left: Error, right: Error) -> Error {
    match (left, right) {
        (Error::Validation(l), Error::Validation(r)) => Error::Validation(l.merge(r)),
        (left, right) => {
            let mut errors = Vec::new();
            unpack_into(&mut errors, left);
            unpack_into(&mut errors, right);
            Error::Aggregate(AggregateError::from_flat(errors))
        }
    }
}

fn unpack_into(errors: &mut Vec<Error>, error: Error) {
    match error {
        Error::Aggregate(aggregate) => errors.extend(aggregate.into_errors()),
        other => errors.push(other),
    }
}
