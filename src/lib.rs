//! # thrower
//!
//! Deferred fallible computations as a monad.
//!
//! A [`Thrower<T, E>`] is a value representing a not-yet-run operation that,
//! when evaluated, either produces a value of type `T` or fails with an error
//! of kind `E`. Pipelines are built with the combinators in [`throwers`]
//! (`unit`, `map`, `bind`, `sequence`) without executing anything; only the
//! terminal [`Thrower::evaluate`] call runs the captured effects, and the
//! first failure anywhere in a chain aborts the remainder.
//!
//! ## Overview
//!
//! - **[`thrower`]**: the `Thrower<T, E>` type, an opaque thunk that defers
//!   a fallible operation until `evaluate()` is called.
//! - **[`throwers`]**: the monad combinators `unit`, `fail`, `map`, `bind`
//!   and `sequence`, all fail-fast.
//! - **[`arrow`]**: `PartialArrow`, an adapter turning "turn an `A` into a
//!   `B`, or fail with an `E`" into a Kleisli arrow `A -> Thrower<B, E>`.
//! - **[`handler`]**: `ExceptionHandler`, one example terminal policy that
//!   substitutes a sentinel value for a failure instead of propagating it.
//! - **[`function`]**: marker capabilities for total (infallible) functions.
//!
//! ## Example
//!
//! ```rust
//! use thrower::prelude::*;
//!
//! let pipeline = throwers::bind(
//!     throwers::unit::<_, std::num::ParseIntError>("21".to_string()),
//!     |text| Thrower::new(move || text.parse::<i32>().map(|n| n * 2)),
//! );
//!
//! // Nothing has run yet; evaluation is the only place work happens.
//! assert_eq!(pipeline.evaluate(), Ok(42));
//! ```
//!
//! ## Evaluation contract
//!
//! Evaluation is synchronous and never memoized: each `evaluate()` call
//! re-runs the captured thunk, including any side effect it performs. This
//! is deliberate: wrapped effects such as stream reads or connection opens
//! are not idempotent, and re-running is the intended semantic for live I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod arrow;
pub mod function;
pub mod handler;
pub mod thrower;
pub mod throwers;

pub use crate::thrower::Thrower;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and the combinator module.
///
/// # Usage
///
/// ```rust
/// use thrower::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arrow::{PartialArrow, kleisli};
    pub use crate::function::{Function, UnaryFunction};
    pub use crate::handler::ExceptionHandler;
    pub use crate::thrower::Thrower;
    pub use crate::throwers;
}
