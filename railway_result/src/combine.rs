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
use railway_errors::{Error, Semigroup};

/// Error-accumulating combination of a tuple of results.
///
/// In contrast to bind, which propagates only the first failure, `combine`
/// inspects every element: if all succeed the values are returned as a tuple
/// in order, otherwise every error encountered is folded left-to-right with
/// [`Error::combine`] into a single failure. Implemented for tuples of
/// [`RailResult`]s of up to nine elements.
pub trait Combine {
    type Output;

    fn combine(self) -> RailResult<Self::Output>;
}

/// Extends an already-combined tuple with one further result, preserving the
/// all-errors-collected semantics. Implemented for [`RailResult`]s of tuples
/// of up to eight elements.
pub trait CombineWith<U> {
    type Output;

    fn combine_with(self, next: RailResult<U>) -> RailResult<Self::Output>;
}

fn fold_in<T>(result: RailResult<T>, acc: &mut Option<Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            let folded = Error::combine(acc.take(), error);
            *acc = Some(folded);
            None
        }
    }
}

macro_rules! combine_tuple {
    ($($t:ident : $v:ident),+) => {
        impl<$($t),+> Combine for ($(RailResult<$t>,)+) {
            type Output = ($($t,)+);

            fn combine(self) -> RailResult<Self::Output> {
                let ($($v,)+) = self;
                let mut acc: Option<Error> = None;
                $(let $v = fold_in($v, &mut acc);)+
                match acc {
                    Some(error) => Err(error),
                    None => match ($($v,)+) {
                        ($(Some($v),)+) => Ok(($($v,)+)),
                        _ => unreachable!(),
                    },
                }
            }
        }
    };
}

combine_tuple!(T1: r1, T2: r2);
combine_tuple!(T1: r1, T2: r2, T3: r3);
combine_tuple!(T1: r1, T2: r2, T3: r3, T4: r4);
combine_tuple!(T1: r1, T2: r2, T3: r3, T4: r4, T5: r5);
combine_tuple!(T1: r1, T2: r2, T3: r3, T4: r4, T5: r5, T6: r6);
combine_tuple!(T1: r1, T2: r2, T3: r3, T4: r4, T5: r5, T6: r6, T7: r7);
combine_tuple!(T1: r1, T2: r2, T3: r3, T4: r4, T5: r5, T6: r6, T7: r7, T8: r8);
combine_tuple!(T1: r1, T2: r2, T3: r3, T4: r4, T5: r5, T6: r6, T7: r7, T8: r8, T9: r9);

macro_rules! combine_with_tuple {
    ($($t:ident : $v:ident),+) => {
        impl<$($t,)+ U> CombineWith<U> for RailResult<($($t,)+)> {
            type Output = ($($t,)+ U);

            fn combine_with(self, next: RailResult<U>) -> RailResult<Self::Output> {
                match (self, next) {
                    (Ok(($($v,)+)), Ok(u)) => Ok(($($v,)+ u)),
                    (Err(error), Ok(_)) => Err(error),
                    (Ok(_), Err(error)) => Err(error),
                    (Err(left), Err(right)) => Err(Semigroup::op(left, right)),
                }
            }
        }
    };
}

combine_with_tuple!(T1: v1, T2: v2);
combine_with_tuple!(T1: v1, T2: v2, T3: v3);
combine_with_tuple!(T1: v1, T2: v2, T3: v3, T4: v4);
combine_with_tuple!(T1: v1, T2: v2, T3: v3, T4: v4, T5: v5);
combine_with_tuple!(T1: v1, T2: v2, T3: v3, T4: v4, T5: v5, T6: v6);
combine_with_tuple!(T1: v1, T2: v2, T3: v3, T4: v4, T5: v5, T6: v6, T7: v7);
combine_with_tuple!(T1: v1, T2: v2, T3: v3, T4: v4, T5: v5, T6: v6, T7: v7, T8: v8);
