//! Marker capabilities for total functions.
//!
//! These traits tag callables that cannot fail, distinguishing them from the
//! fallible thunk inside a [`Thrower`](crate::thrower::Thrower): [`Function`]
//! for a total function of no arguments, [`UnaryFunction`] for a total
//! function of one argument. Both are zero-method markers blanket-implemented
//! for the matching `Fn` closures, so any ordinary closure qualifies; the
//! combinators use them as bounds so their signatures say "total" explicitly.

/// A total function of no arguments.
///
/// Implemented automatically for every `Fn() -> T`. Used by
/// [`Thrower::total`](crate::thrower::Thrower::total) to lift an infallible
/// computation into the monad.
///
/// # Examples
///
/// ```rust
/// use thrower::function::Function;
///
/// fn describe<T, F: Function<T>>(function: F) -> T {
///     function()
/// }
///
/// assert_eq!(describe(|| 42), 42);
/// ```
pub trait Function<T>: Fn() -> T {}

impl<T, F> Function<T> for F where F: Fn() -> T {}

/// A total function of one argument.
///
/// Implemented automatically for every `Fn(A) -> T`. This is the shape that
/// [`throwers::map`](crate::throwers::map) promotes into the monad, and the
/// shape of the Kleisli arrows passed to
/// [`throwers::bind`](crate::throwers::bind).
///
/// # Examples
///
/// ```rust
/// use thrower::function::UnaryFunction;
///
/// fn apply<A, T, F: UnaryFunction<A, T>>(function: F, argument: A) -> T {
///     function(argument)
/// }
///
/// assert_eq!(apply(|text: &str| text.len(), "hello"), 5);
/// ```
pub trait UnaryFunction<A, T>: Fn(A) -> T {}

impl<A, T, F> UnaryFunction<A, T> for F where F: Fn(A) -> T {}
