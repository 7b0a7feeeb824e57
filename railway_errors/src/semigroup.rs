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

/// Trait for types with an associative binary operator. Implementors are
/// responsible for ensuring that the operation is associative.
pub trait Semigroup: Sized {
    fn op(mut left: Self, right: Self) -> Self {
        left.op_in_place(right);
        left
    }

    fn op_in_place(&mut self, right: Self);
}

impl<T> Semigroup for Vec<T> {
    fn op_in_place(&mut self, right: Self) {
        self.extend(right);
    }
}

/// The error combination algorithm as an associative operator, allowing
/// error folds to be written generically. Combining with an absent left-hand
/// side is expressed through [`Error::combine`] rather than a zero element;
/// there is no empty error.
impl Semigroup for Error {
    fn op(left: Self, right: Self) -> Self {
        Error::combine(Some(left), right)
    }

    fn op_in_place(&mut self, right: Self) {
        let left = std::mem::replace(self, Error::Unexpected(String::new()));
        *self = Semigroup::op(left, right);
    }
}
