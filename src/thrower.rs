//! The deferred fallible computation type.
//!
//! A [`Thrower<T, E>`] wraps a not-yet-run operation that, when evaluated,
//! either produces a `T` or fails with an error of kind `E`. Construction
//! captures the thunk and executes nothing; evaluation runs the thunk and is
//! the only place side effects happen.
//!
//! # Design Philosophy
//!
//! `Thrower` "describes" a fallible effect but does not "execute" it.
//! Pipelines are assembled with the combinators in
//! [`throwers`](crate::throwers) and handed to a terminal consumer, which is
//! the one place that calls [`Thrower::evaluate`]. The error kind `E` is
//! fixed when the computation is constructed, so mixing error kinds inside a
//! single composition is a type error, caught at composition time rather
//! than during evaluation.
//!
//! # Examples
//!
//! ```rust
//! use thrower::Thrower;
//!
//! let parse = Thrower::new(|| "42".parse::<i32>());
//! assert_eq!(parse.evaluate(), Ok(42));
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use thrower::Thrower;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let observer = Rc::clone(&runs);
//!
//! let thrower: Thrower<i32, String> = Thrower::new(move || {
//!     observer.set(observer.get() + 1);
//!     Ok(42)
//! });
//!
//! // Construction ran nothing.
//! assert_eq!(runs.get(), 0);
//!
//! // Each evaluation is a fresh execution of the thunk.
//! assert_eq!(thrower.evaluate(), Ok(42));
//! assert_eq!(thrower.evaluate(), Ok(42));
//! assert_eq!(runs.get(), 2);
//! ```

use crate::function::{Function, UnaryFunction};

/// A deferred computation that yields a `T` or fails with an error of kind
/// `E` when evaluated.
///
/// Internally an opaque boxed thunk. Holds no value until evaluated, and
/// never memoizes: every [`evaluate`](Thrower::evaluate) call re-runs the
/// thunk, including any side effect it performs. Wrapped effects such as
/// stream reads are not idempotent, so caching a first result would change
/// their meaning.
///
/// # Type Parameters
///
/// - `T`: the success type produced by evaluation.
/// - `E`: the single error kind this computation may fail with, fixed at
///   construction time.
///
/// # Monad Laws
///
/// Together with [`throwers::unit`](crate::throwers::unit) and
/// [`throwers::bind`](crate::throwers::bind), `Thrower` satisfies the monad
/// laws, observed by evaluating both sides:
///
/// 1. **Left Identity**: `bind(unit(a), f)` evaluates as `f(a)`.
/// 2. **Right Identity**: `bind(m, unit)` evaluates as `m`.
/// 3. **Associativity**: `bind(bind(m, f), g)` evaluates as
///    `bind(m, |a| bind(f(a), g))`.
pub struct Thrower<T, E> {
    /// The captured, not-yet-executed operation.
    thunk: Box<dyn Fn() -> Result<T, E>>,
}

impl<T: 'static, E: 'static> Thrower<T, E> {
    /// Creates a new deferred computation from a fallible thunk.
    ///
    /// The thunk is not executed until [`evaluate`](Thrower::evaluate) is
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thrower::Thrower;
    ///
    /// let thrower = Thrower::new(|| "21".parse::<i32>().map(|n| n * 2));
    /// assert_eq!(thrower.evaluate(), Ok(42));
    /// ```
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> Result<T, E> + 'static,
    {
        Self {
            thunk: Box::new(thunk),
        }
    }

    /// Lifts a total, no-argument function into the monad.
    ///
    /// The resulting computation cannot fail; its error kind is whatever the
    /// surrounding composition requires.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thrower::Thrower;
    ///
    /// let thrower: Thrower<i32, String> = Thrower::total(|| 21 * 2);
    /// assert_eq!(thrower.evaluate(), Ok(42));
    /// ```
    pub fn total<F>(function: F) -> Self
    where
        F: Function<T> + 'static,
    {
        Self::new(move || Ok(function()))
    }

    /// Runs the captured thunk and returns its outcome.
    ///
    /// May be called any number of times; each call independently re-runs
    /// the thunk (no memoization). There is no timeout or cancellation; how
    /// long this takes, and whether re-running is safe, is entirely the
    /// wrapped operation's concern.
    ///
    /// # Errors
    ///
    /// Returns the thunk's error of kind `E`, verbatim, if it fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thrower::Thrower;
    ///
    /// let thrower = Thrower::new(|| "not a number".parse::<i32>());
    /// assert!(thrower.evaluate().is_err());
    /// ```
    pub fn evaluate(&self) -> Result<T, E> {
        (self.thunk)()
    }

    /// Transforms the success value with a total function.
    ///
    /// Instance-method spelling of [`throwers::map`](crate::throwers::map):
    /// evaluating the result evaluates `self` first; a failure propagates
    /// unchanged and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thrower::Thrower;
    ///
    /// let thrower = Thrower::new(|| "21".parse::<i32>()).fmap(|n| n * 2);
    /// assert_eq!(thrower.evaluate(), Ok(42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Thrower<B, E>
    where
        F: UnaryFunction<T, B> + 'static,
        B: 'static,
    {
        Thrower::new(move || self.evaluate().map(|value| function(value)))
    }

    /// Chains this computation into a Kleisli arrow.
    ///
    /// Instance-method spelling of
    /// [`throwers::bind`](crate::throwers::bind). Fail-fast: if `self`
    /// fails, `function` is never invoked and the error propagates verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thrower::Thrower;
    ///
    /// let thrower = Thrower::new(|| "21".parse::<i32>())
    ///     .flat_map(|n| Thrower::new(move || Ok(n * 2)));
    /// assert_eq!(thrower.evaluate(), Ok(42));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Thrower<B, E>
    where
        F: UnaryFunction<T, Thrower<B, E>> + 'static,
        B: 'static,
    {
        Thrower::new(move || {
            let value = self.evaluate()?;
            function(value).evaluate()
        })
    }
}
