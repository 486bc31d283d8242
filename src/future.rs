//! Deferred forms of the variant operations.
//!
//! These are hand-rolled futures rather than `async` blocks so that the
//! container itself stays executor-agnostic: nothing in here spawns work or
//! suspends except where a caller-supplied future suspends.

use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(feature = "std")]
use core::any::Any;
#[cfg(feature = "std")]
use std::panic::panic_any;

#[cfg(feature = "std")]
use crate::outcome::Outcome;

/// Future returned by [`Outcome::unwrap_async`].
///
/// Resolves to the success payload. A failure payload is never raised from
/// the constructing call; it is raised from the first poll, so it arrives
/// through the deferred channel like a rejection would.
#[cfg(feature = "std")]
#[must_use = "futures do nothing unless polled"]
pub struct UnwrapAsync<T, E> {
    outcome: Option<Outcome<T, E>>,
}

#[cfg(feature = "std")]
impl<T, E> UnwrapAsync<T, E> {
    pub(crate) fn new(outcome: Outcome<T, E>) -> Self {
        UnwrapAsync {
            outcome: Some(outcome),
        }
    }
}

// no self-references in here, so pinning is not structural
#[cfg(feature = "std")]
impl<T, E> Unpin for UnwrapAsync<T, E> {}

#[cfg(feature = "std")]
impl<T, E> Future for UnwrapAsync<T, E>
where
    E: Any + Send,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<T> {
        match self.get_mut().outcome.take() {
            Some(Outcome::Success(value)) => Poll::Ready(value),
            Some(Outcome::Failure(error)) => panic_any(error),
            None => panic!("UnwrapAsync polled after completion"),
        }
    }
}

/// Future returned by [`Outcome::on_error_async`].
///
/// Already resolved on the success path; on the failure path it defers to
/// the future the recover function produced.
#[must_use = "futures do nothing unless polled"]
pub struct OnErrorAsync<Fut, T> {
    state: State<Fut, T>,
}

enum State<Fut, T> {
    Ready(Option<T>),
    Recovering(Fut),
}

impl<Fut, T> OnErrorAsync<Fut, T> {
    pub(crate) fn ready(value: T) -> Self {
        OnErrorAsync {
            state: State::Ready(Some(value)),
        }
    }

    pub(crate) fn recovering(fut: Fut) -> Self {
        OnErrorAsync {
            state: State::Recovering(fut),
        }
    }
}

impl<Fut, T> Future for OnErrorAsync<Fut, T>
where
    Fut: Future<Output = T>,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        // safety: state is never moved out of self; the recover future is
        // re-pinned in place below
        let state = unsafe { &mut self.get_unchecked_mut().state };
        match state {
            State::Ready(value) => Poll::Ready(
                value
                    .take()
                    .expect("OnErrorAsync polled after completion"),
            ),
            State::Recovering(fut) => {
                // safety: projection of the pin obtained above
                let fut = unsafe { Pin::new_unchecked(fut) };
                fut.poll(cx)
            }
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use core::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use futures::executor::block_on;

    use crate::outcome::{failure, success};

    #[derive(Debug, PartialEq, Eq)]
    struct Boom(u32);

    #[test]
    fn unwrap_async_resolves_to_the_payload() {
        assert_eq!(block_on(success::<_, Boom>("foo").unwrap_async()), "foo");
    }

    #[test]
    fn unwrap_async_raises_on_poll_not_on_call() {
        // constructing the future must not unwind
        let fut = failure::<&str, _>(Boom(3)).unwrap_async();
        let raised = catch_unwind(AssertUnwindSafe(|| block_on(fut)))
            .expect_err("polling a failure must unwind");
        assert_eq!(*raised.downcast::<Boom>().unwrap(), Boom(3));
    }

    #[test]
    fn on_error_async_success_path_is_already_resolved() {
        let hits = Cell::new(0u32);
        let fut = success::<u32, Boom>(5).on_error_async(|_| {
            hits.set(hits.get() + 1);
            async { 0 }
        });
        assert_eq!(hits.get(), 0);
        assert_eq!(block_on(fut), 5);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn on_error_async_recovers_through_the_future() {
        let hits = Cell::new(0u32);
        let fut = failure::<u32, _>(Boom(4)).on_error_async(|Boom(n)| {
            hits.set(hits.get() + 1);
            async move { n + 1 }
        });
        // the recover function has already run, synchronously; only its
        // future is still pending
        assert_eq!(hits.get(), 1);
        assert_eq!(block_on(fut), 5);
        assert_eq!(hits.get(), 1);
    }
}
