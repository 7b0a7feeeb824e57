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

use crate::RailResult;

/// Adds short-circuiting traversal to all iterators.
pub trait TraverseItExt: Iterator + Sized {
    /// Applies a fallible transform to each item in order, stopping at the
    /// first failure. On full success the outputs are returned in input
    /// order; on failure the transform is never invoked for the remaining
    /// items and the first error is returned unchanged.
    ///
    /// This is bind applied across a sequence, not an accumulating
    /// combination: a failure past the first is never observed.
    fn traverse<U, F>(self, mut f: F) -> RailResult<Vec<U>>
    where
        F: FnMut(Self::Item) -> RailResult<U>,
    {
        let mut output = Vec::with_capacity(self.size_hint().0);
        for item in self {
            output.push(f(item)?);
        }
        Ok(output)
    }
}

impl<I: Iterator> TraverseItExt for I {}
