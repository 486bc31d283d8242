//! The calmest panic-catching library in Rust.
//!
//! An [`Outcome`] is a computation that has already finished, either with a
//! value or with an error value. Unlike a panic, the error travels in-band:
//! nothing unwinds until a caller explicitly asks for it with
//! [`unwrap`](Outcome::unwrap), and a caller that would rather not unwind at
//! all can recover with [`on_error`](Outcome::on_error) instead.
//!
//! The other half of the crate is the adapter in [`catching`], which turns
//! code that panics into code that returns an `Outcome`. Apply
//! [`try_caught`] (or the [`caught`] attribute) at the boundary and every
//! unwind from below comes back as an ordinary [`failure`].
//!
//! ```
//! use calmly::{failure, success, Outcome};
//!
//! fn parse_percent(s: &str) -> Outcome<u8, String> {
//!     match s.parse::<u8>() {
//!         Ok(n) if n <= 100 => success(n),
//!         Ok(n) => failure(format!("{n} is over 100")),
//!         Err(e) => failure(e.to_string()),
//!     }
//! }
//!
//! assert_eq!(parse_percent("42").unwrap(), 42);
//! assert_eq!(parse_percent("wat").on_error(|_| 0), 0);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod catching;
pub mod future;
pub mod outcome;

pub use future::OnErrorAsync;
#[cfg(feature = "std")]
pub use future::UnwrapAsync;
pub use outcome::{failure, success, Outcome};

#[cfg(feature = "std")]
pub use catching::{
    try_caught, try_caught_erased, try_caught_future, CaughtFuture, NotCallable, PanicPayload,
    Thunk,
};

#[cfg(feature = "std")]
pub use calmly_macros::caught;
