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


use futures::ready;
use pin_project::pin_project;
use railway_errors::Error;
use railway_result::{RailResult, Recorder};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Railway combinators for futures that resolve to a [`RailResult`].
///
/// These are the operations [`futures::TryFutureExt`] does not provide; the
/// short-circuit behaviour matches the synchronous counterparts in
/// `railway_result` exactly.
pub trait RailFutureExt<T>: Future<Output = RailResult<T>> + Sized {
    /// Turns a success into the supplied failure when the predicate rejects
    /// the value. A failure passes through and the predicate is never
    /// evaluated for it.
    fn ensure<P>(self, predicate: P, error: Error) -> Ensure<Self, P>
    where
        P: FnOnce(&T) -> bool,
    {
        Ensure {
            future: self,
            check: Some((predicate, error)),
        }
    }

    /// Attempts recovery with an asynchronous fallback; the fallback is only
    /// started if this future resolves to a failure.
    fn compensate<F, Fut>(self, recover: F) -> Compensate<Self, fn(&Error) -> bool, F, Fut>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RailResult<T>>,
    {
        Compensate {
            primary: self,
            recover: Some((always, recover)),
            secondary: None,
        }
    }

    /// As [`RailFutureExt::compensate`], gated on a predicate over the
    /// error; a non-matching failure passes through untouched.
    fn compensate_when<P, F, Fut>(self, predicate: P, recover: F) -> Compensate<Self, P, F, Fut>
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce() -> Fut,
        Fut: Future<Output = RailResult<T>>,
    {
        Compensate {
            primary: self,
            recover: Some((predicate, recover)),
            secondary: None,
        }
    }

    /// Reports the settled outcome to an observability hook and passes it
    /// through unchanged.
    fn record<'a, R>(self, recorder: &'a R, operation: &'static str) -> Record<'a, Self, R>
    where
        R: Recorder,
    {
        Record {
            future: self,
            recorder,
            operation,
        }
    }
}

impl<F, T> RailFutureExt<T> for F where F: Future<Output = RailResult<T>> + Sized {}

fn always(_: &Error) -> bool {
    true
}

/// The future returned by [`RailFutureExt::ensure`].
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Ensure<Fut, P> {
    #[pin]
    future: Fut,
    check: Option<(P, Error)>,
}

impl<Fut, P, T> Future for Ensure<Fut, P>
where
    Fut: Future<Output = RailResult<T>>,
    P: FnOnce(&T) -> bool,
{
    type Output = RailResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let output = match ready!(this.future.poll(cx)) {
            Ok(value) => {
                let (predicate, error) = this
                    .check
                    .take()
                    .expect("Ensure polled after completion.");
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(error)
                }
            }
            failure => failure,
        };
        Poll::Ready(output)
    }
}

/// The future returned by [`RailFutureExt::compensate`] and
/// [`RailFutureExt::compensate_when`]. Runs the primary future to
/// completion and, on a failure matching the predicate, switches to the
/// recovery future.
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Compensate<Fut1, P, F, Fut2> {
    #[pin]
    primary: Fut1,
    recover: Option<(P, F)>,
    secondary: Option<Pin<Box<Fut2>>>,
}

impl<Fut1, P, F, Fut2, T> Future for Compensate<Fut1, P, F, Fut2>
where
    Fut1: Future<Output = RailResult<T>>,
    P: FnOnce(&Error) -> bool,
    F: FnOnce() -> Fut2,
    Fut2: Future<Output = RailResult<T>>,
{
    type Output = RailResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if let Some(secondary) = this.secondary {
            return secondary.as_mut().poll(cx);
        }
        match ready!(this.primary.poll(cx)) {
            Ok(value) => Poll::Ready(Ok(value)),
            Err(error) => {
                let (predicate, recover) = this
                    .recover
                    .take()
                    .expect("Compensate polled after completion.");
                if predicate(&error) {
                    let mut secondary = Box::pin(recover());
                    let poll = secondary.as_mut().poll(cx);
                    *this.secondary = Some(secondary);
                    poll
                } else {
                    Poll::Ready(Err(error))
                }
            }
        }
    }
}

/// The future returned by [`RailFutureExt::record`].
#[pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Record<'a, Fut, R> {
    #[pin]
    future: Fut,
    recorder: &'a R,
    operation: &'static str,
}

impl<'a, Fut, R, T> Future for Record<'a, Fut, R>
where
    Fut: Future<Output = RailResult<T>>,
    R: Recorder,
{
    type Output = RailResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let result = ready!(this.future.poll(cx));
        this.recorder.record(*this.operation, result.as_ref().err());
        Poll::Ready(result)
    }
}
