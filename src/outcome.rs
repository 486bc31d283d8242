//! The two-variant outcome container.

use core::future::Future;

#[cfg(feature = "std")]
use core::any::Any;
#[cfg(feature = "std")]
use std::panic::panic_any;

use crate::future::OnErrorAsync;
#[cfg(feature = "std")]
use crate::future::UnwrapAsync;

/// A finished computation: either a success payload or a failure payload,
/// never both.
///
/// The two payload types are independent. The failure channel carries any
/// value at all, including a payload recovered from a caught panic, and the
/// container never inspects it.
///
/// An `Outcome` is immutable once constructed. Nothing here unwinds except
/// [`unwrap`](Outcome::unwrap), which is the explicit opt-back-in to
/// panic-style propagation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation produced an error value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns true iff this is a [`Success`](Outcome::Success).
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns true iff this is a [`Failure`](Outcome::Failure). Always the
    /// exact complement of [`is_success`](Outcome::is_success).
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success payload, or re-raises the failure payload as a
    /// panic.
    ///
    /// The raised value is the payload itself, not a wrapper around it:
    /// `std::panic::catch_unwind` plus a downcast to `E` gets the original
    /// value back. Callers that want no unwinding must branch on
    /// [`is_failure`](Outcome::is_failure) or use
    /// [`on_error`](Outcome::on_error) instead.
    #[cfg(feature = "std")]
    pub fn unwrap(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic_any(error),
        }
    }

    /// The deferred form of [`unwrap`](Outcome::unwrap).
    ///
    /// Never raises synchronously. The returned future resolves to the
    /// success payload, or delivers the failure payload by raising it from
    /// its first poll.
    #[cfg(feature = "std")]
    pub fn unwrap_async(self) -> UnwrapAsync<T, E> {
        UnwrapAsync::new(self)
    }

    /// Returns the success payload, or the result of `recover` applied to
    /// the failure payload.
    ///
    /// This is the in-band recovery path: it never raises, and it fully
    /// consumes the failure. `recover` is invoked exactly once on the
    /// failure path and never on the success path.
    pub fn on_error(self, recover: impl FnOnce(E) -> T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => recover(error),
        }
    }

    /// The deferred form of [`on_error`](Outcome::on_error).
    ///
    /// On the success path the payload comes back as an already-resolved
    /// future and `recover` is never invoked. On the failure path `recover`
    /// runs synchronously, from this call, at most once; the returned future
    /// then defers to the one it produced.
    pub fn on_error_async<R, Fut>(self, recover: R) -> OnErrorAsync<Fut, T>
    where
        R: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Outcome::Success(value) => OnErrorAsync::ready(value),
            Outcome::Failure(error) => OnErrorAsync::recovering(recover(error)),
        }
    }

    /// Converts into the host sum type, for exhaustive matching and `?`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

/// Constructs a [`Success`](Outcome::Success). Any value is legal, including
/// `()`.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Constructs a [`Failure`](Outcome::Failure). Any value is legal, including
/// `()`.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use core::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::string::{String, ToString};

    use super::{failure, success, Outcome};

    #[derive(Debug, PartialEq, Eq)]
    struct Boom(u32);

    #[test]
    fn success_is_success() {
        let out = success::<_, Boom>("foo");
        assert!(out.is_success());
        assert!(!out.is_failure());
    }

    #[test]
    fn failure_is_failure() {
        let out = failure::<&str, _>(Boom(1));
        assert!(out.is_failure());
        assert!(!out.is_success());
    }

    #[test]
    fn unit_payloads_are_legal() {
        assert!(success::<(), ()>(()).is_success());
        assert!(failure::<(), ()>(()).is_failure());
    }

    #[test]
    fn predicates_are_idempotent() {
        let out = failure::<&str, _>(Boom(2));
        assert!(out.is_failure());
        assert!(out.is_failure());
        assert!(!out.is_success());
        assert!(!out.is_success());
    }

    #[test]
    fn unwrap_success() {
        assert_eq!(success::<_, Boom>("foo").unwrap(), "foo");
    }

    #[test]
    #[should_panic]
    fn unwrap_failure_panics() {
        failure::<&str, _>(Boom(3)).unwrap();
    }

    #[test]
    fn unwrap_failure_raises_the_exact_payload() {
        let raised = catch_unwind(AssertUnwindSafe(|| failure::<&str, _>(Boom(7)).unwrap()))
            .expect_err("failure must unwind");
        assert_eq!(*raised.downcast::<Boom>().unwrap(), Boom(7));
    }

    #[test]
    fn on_error_skips_recover_on_success() {
        let hits = Cell::new(0u32);
        let value = success::<_, Boom>(5).on_error(|_| {
            hits.set(hits.get() + 1);
            0
        });
        assert_eq!(value, 5);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn on_error_invokes_recover_exactly_once() {
        let hits = Cell::new(0u32);
        let value = failure::<u32, _>(Boom(4)).on_error(|Boom(n)| {
            hits.set(hits.get() + 1);
            n + 1
        });
        assert_eq!(value, 5);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn result_round_trip() {
        let out: Outcome<u32, String> = Ok(3).into();
        assert_eq!(out, success(3));
        assert_eq!(out.into_result(), Ok(3));

        let out: Outcome<u32, String> = Err("nope".to_string()).into();
        assert_eq!(out.into_result(), Err("nope".to_string()));
    }
}
