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

//! Combinators over several asynchronous computations.
//!
//! [`traverse`] belongs to the short-circuit track: items are processed
//! strictly in order, one computation in flight at a time, so the failure
//! that stops the traversal is always the earliest in *input* order.
//!
//! The `combineN` functions belong to the accumulate track: all inputs are
//! driven concurrently and every failure is collected. The error fold is
//! fixed by input position, so the combined result is deterministic
//! regardless of completion order.


use futures::join;
use railway_result::{Combine, RailResult};
use std::future::Future;

/// Applies an asynchronous fallible transform to each item in order,
/// stopping at the first failure. The transform is never invoked for items
/// after the failing one.
pub async fn traverse<I, F, Fut, U>(items: I, mut f: F) -> RailResult<Vec<U>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = RailResult<U>>,
{
    let iter = items.into_iter();
    let mut output = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        output.push(f(item).await?);
    }
    Ok(output)
}

macro_rules! combine_futures {
    ($name:ident, $($t:ident : $f:ident),+) => {
        pub async fn $name<$($t),+>(
            $($f: impl Future<Output = RailResult<$t>>),+
        ) -> RailResult<($($t,)+)> {
            let ($($f,)+) = join!($($f),+);
            ($($f,)+).combine()
        }
    };
}

combine_futures!(combine2, T1: f1, T2: f2);
combine_futures!(combine3, T1: f1, T2: f2, T3: f3);
combine_futures!(combine4, T1: f1, T2: f2, T3: f3, T4: f4);
combine_futures!(combine5, T1: f1, T2: f2, T3: f3, T4: f4, T5: f5);
combine_futures!(combine6, T1: f1, T2: f2, T3: f3, T4: f4, T5: f5, T6: f6);
combine_futures!(combine7, T1: f1, T2: f2, T3: f3, T4: f4, T5: f5, T6: f6, T7: f7);
combine_futures!(combine8, T1: f1, T2: f2, T3: f3, T4: f4, T5: f5, T6: f6, T7: f7, T8: f8);
combine_futures!(
    combine9, T1: f1, T2: f2, T3: f3, T4: f4, T5: f5, T6: f6, T7: f7, T8: f8, T9: f9
);
