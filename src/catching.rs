//! The panic-catching adapter.
//!
//! A single try/catch boundary between code that unwinds and code that
//! returns [`Outcome`]s. The adapter holds no state and makes no policy
//! decisions: a normal return passes through untouched (even if it is
//! already a failure), and a caught unwind is re-expressed as
//! [`failure`] of whatever was panicked with.

use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use std::any::Any;
use std::boxed::Box;
use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

use crate::outcome::{failure, Outcome};

/// The value recovered from a caught unwind: whatever was handed to
/// `panic!` or `panic_any`, boxed and type-erased.
///
/// Error types absorb it through `From<PanicPayload>`. Using `PanicPayload`
/// itself as the error type works directly, via the identity `From`.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// A type-erased fallible operation, as handed to [`try_caught_erased`].
pub type Thunk<T, E> = Box<dyn FnOnce() -> Outcome<T, E>>;

/// Error carried when [`try_caught_erased`] is handed something that cannot
/// be called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a function")]
pub struct NotCallable;

/// Invokes `f`, converting an unwind into a [`failure`].
///
/// If `f` returns normally its outcome passes through unchanged; if it
/// panics, the payload is caught exactly once and comes back in-band. The
/// adapter itself never unwinds.
///
/// Receiver and argument binding are explicit: close over whatever state the
/// operation needs, or reach for the [`caught`](crate::caught) attribute to
/// wrap a whole `fn` without touching its signature.
///
/// ```
/// use calmly::{success, try_caught, Outcome, PanicPayload};
///
/// fn divide(a: u32, b: u32) -> Outcome<u32, PanicPayload> {
///     try_caught(move || success(a / b))
/// }
///
/// assert_eq!(divide(10, 2).unwrap(), 5);
/// assert!(divide(10, 0).is_failure());
/// ```
pub fn try_caught<T, E, F>(f: F) -> Outcome<T, E>
where
    F: FnOnce() -> Outcome<T, E>,
    E: From<PanicPayload>,
{
    // the adapter is the recovery boundary; state behind the closure cannot
    // be observed in a broken state through it afterwards
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => failure(E::from(payload)),
    }
}

/// The deferred form of [`try_caught`].
///
/// Wraps a future that produces an [`Outcome`] so that a panic raised at any
/// point of its execution, before the first suspension or between awaits,
/// resolves the wrapper to a [`failure`] instead of unwinding out of the
/// executor. The wrapper itself never unwinds from `poll`.
pub fn try_caught_future<T, E, Fut>(fut: Fut) -> CaughtFuture<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
    E: From<PanicPayload>,
{
    CaughtFuture { fut }
}

/// Future returned by [`try_caught_future`].
#[must_use = "futures do nothing unless polled"]
pub struct CaughtFuture<Fut> {
    fut: Fut,
}

impl<T, E, Fut> Future for CaughtFuture<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
    E: From<PanicPayload>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // safety: fut is structurally pinned and never moved out of self
        let fut = unsafe { self.map_unchecked_mut(|this| &mut this.fut) };
        match catch_unwind(AssertUnwindSafe(|| fut.poll(cx))) {
            Ok(Poll::Ready(outcome)) => Poll::Ready(outcome),
            Ok(Poll::Pending) => Poll::Pending,
            Err(payload) => Poll::Ready(failure(E::from(payload))),
        }
    }
}

/// The dynamic form of the adapter, for targets that are only known to be
/// callable at runtime.
///
/// `target` is expected to hold a [`Thunk<T, E>`]. If it holds anything
/// else, the mismatch is reported in-band as a [`failure`] carrying
/// [`NotCallable`] (boxed as a [`PanicPayload`]); no panic escapes the
/// adapter either way.
pub fn try_caught_erased<T, E>(target: Box<dyn Any>) -> Outcome<T, E>
where
    T: 'static,
    E: From<PanicPayload> + 'static,
{
    match target.downcast::<Thunk<T, E>>() {
        Ok(thunk) => try_caught(*thunk),
        Err(_) => failure(E::from(Box::new(NotCallable) as PanicPayload)),
    }
}
