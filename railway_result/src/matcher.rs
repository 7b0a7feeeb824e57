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

use railway_errors::{AggregateError, Error, ValidationError};

type MessageHandler<'a, R> = Box<dyn FnOnce(&str) -> R + 'a>;

/// Per-kind dispatch over an [`Error`], for callers that handle different
/// failure kinds differently at the end of a pipeline.
///
/// Handlers for the message-carrying kinds receive the message; the
/// validation and aggregate handlers receive the structured payload. The
/// [`ErrorMatcher::otherwise`] catch-all receives any error with no
/// dedicated handler. Applying a matcher to an error with neither a
/// dedicated handler nor a catch-all is a programming-contract violation
/// and panics; it is not a recoverable failure.
///
/// Where every kind is handled exhaustively, a plain `match` over [`Error`]
/// remains the idiomatic choice; this builder exists for partial handler
/// sets with a default.
pub struct ErrorMatcher<'a, R> {
    on_validation: Option<Box<dyn FnOnce(&ValidationError) -> R + 'a>>,
    on_not_found: Option<MessageHandler<'a, R>>,
    on_conflict: Option<MessageHandler<'a, R>>,
    on_bad_request: Option<MessageHandler<'a, R>>,
    on_unauthorized: Option<MessageHandler<'a, R>>,
    on_forbidden: Option<MessageHandler<'a, R>>,
    on_domain: Option<MessageHandler<'a, R>>,
    on_rate_limit: Option<MessageHandler<'a, R>>,
    on_service_unavailable: Option<MessageHandler<'a, R>>,
    on_unexpected: Option<MessageHandler<'a, R>>,
    on_aggregate: Option<Box<dyn FnOnce(&AggregateError) -> R + 'a>>,
    otherwise: Option<Box<dyn FnOnce(&Error) -> R + 'a>>,
}

impl<'a, R> Default for ErrorMatcher<'a, R> {
    fn default() -> Self {
        ErrorMatcher::new()
    }
}

impl<'a, R> ErrorMatcher<'a, R> {
    pub fn new() -> ErrorMatcher<'a, R> {
        ErrorMatcher {
            on_validation: None,
            on_not_found: None,
            on_conflict: None,
            on_bad_request: None,
            on_unauthorized: None,
            on_forbidden: None,
            on_domain: None,
            on_rate_limit: None,
            on_service_unavailable: None,
            on_unexpected: None,
            on_aggregate: None,
            otherwise: None,
        }
    }

    pub fn on_validation<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&ValidationError) -> R + 'a,
    {
        self.on_validation = Some(Box::new(f));
        self
    }

    pub fn on_not_found<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_not_found = Some(Box::new(f));
        self
    }

    pub fn on_conflict<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_conflict = Some(Box::new(f));
        self
    }

    pub fn on_bad_request<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_bad_request = Some(Box::new(f));
        self
    }

    pub fn on_unauthorized<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_unauthorized = Some(Box::new(f));
        self
    }

    pub fn on_forbidden<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_forbidden = Some(Box::new(f));
        self
    }

    pub fn on_domain<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_domain = Some(Box::new(f));
        self
    }

    pub fn on_rate_limit<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_rate_limit = Some(Box::new(f));
        self
    }

    pub fn on_service_unavailable<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_service_unavailable = Some(Box::new(f));
        self
    }

    pub fn on_unexpected<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> R + 'a,
    {
        self.on_unexpected = Some(Box::new(f));
        self
    }

    pub fn on_aggregate<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&AggregateError) -> R + 'a,
    {
        self.on_aggregate = Some(Box::new(f));
        self
    }

    pub fn otherwise<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&Error) -> R + 'a,
    {
        self.otherwise = Some(Box::new(f));
        self
    }

    /// Dispatches on the concrete kind of the error.
    ///
    /// # Panics
    ///
    /// Panics if the error's kind has no handler and no catch-all was
    /// supplied.
    pub fn apply(self, error: &Error) -> R {
        let ErrorMatcher {
            on_validation,
            on_not_found,
            on_conflict,
            on_bad_request,
            on_unauthorized,
            on_forbidden,
            on_domain,
            on_rate_limit,
            on_service_unavailable,
            on_unexpected,
            on_aggregate,
            otherwise,
        } = self;

        let handled = match error {
            Error::Validation(validation) => on_validation.map(|f| f(validation)),
            Error::NotFound(message) => on_not_found.map(|f| f(message)),
            Error::Conflict(message) => on_conflict.map(|f| f(message)),
            Error::BadRequest(message) => on_bad_request.map(|f| f(message)),
            Error::Unauthorized(message) => on_unauthorized.map(|f| f(message)),
            Error::Forbidden(message) => on_forbidden.map(|f| f(message)),
            Error::Domain(message) => on_domain.map(|f| f(message)),
            Error::RateLimit(message) => on_rate_limit.map(|f| f(message)),
            Error::ServiceUnavailable(message) => on_service_unavailable.map(|f| f(message)),
            Error::Unexpected(message) => on_unexpected.map(|f| f(message)),
            Error::Aggregate(aggregate) => on_aggregate.map(|f| f(aggregate)),
        };

        match (handled, otherwise) {
            (Some(result), _) => result,
            (None, Some(f)) => f(error),
            (None, None) => panic!(
                "No handler registered for error kind '{}' and no catch-all supplied.",
                error.kind()
            ),
        }
    }
}
