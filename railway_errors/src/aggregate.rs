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

use crate::Error;
use std::fmt::{Display, Formatter};

/// An ordered collection of unrelated sibling errors.
///
/// Invariant: the sequence never directly contains another
/// [`Error::Aggregate`]; constructors flatten one level so that every entry
/// is a distinct cause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateError {
    errors: Vec<Error>,
}

impl AggregateError {
    /// Creates an aggregate from a sequence of errors, unpacking any entry
    /// that is itself an aggregate.
    pub fn new(errors: Vec<Error>) -> AggregateError {
        let mut flat = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Error::Aggregate(aggregate) => flat.extend(aggregate.errors),
                other => flat.push(other),
            }
        }
        AggregateError { errors: flat }
    }

    /// Creates an aggregate from a sequence that is already flat. Callers
    /// must not pass nested aggregates.
    pub(crate) fn from_flat(errors: Vec<Error>) -> AggregateError {
        AggregateError { errors }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Multiple errors occurred")?;
        let mut sep = ": ";
        for error in &self.errors {
            write!(f, "{}{}", sep, error)?;
            sep = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}
