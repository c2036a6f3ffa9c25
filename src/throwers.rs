//! Monad combinators over [`Thrower`] values.
//!
//! Free functions implementing the monad over deferred fallible
//! computations: [`unit`] injects a value, [`map`] promotes a total function,
//! [`bind`] sequences Kleisli arrows, and [`sequence`] collects an ordered
//! batch. All combination is pure assembly: no combinator in this module
//! executes a thunk, and the composed value runs everything in one go when
//! its [`evaluate`](Thrower::evaluate) is finally called.
//!
//! Every combinator is fail-fast: the first failure encountered during
//! evaluation aborts the remaining composition and is returned verbatim,
//! never wrapped or aggregated. Recovery, logging and retry are strictly the
//! terminal consumer's business (see
//! [`ExceptionHandler`](crate::handler::ExceptionHandler) for one policy).
//!
//! # Laws
//!
//! Evaluating both sides must give identical outcomes:
//!
//! ```text
//! bind(unit(a), f)    == f(a)                      // left identity
//! bind(m, unit)       == m                         // right identity
//! bind(bind(m, f), g) == bind(m, |a| bind(f(a), g)) // associativity
//! map(f)(m)           == bind(m, |a| unit(f(a)))
//! ```

use std::rc::Rc;

use crate::function::UnaryFunction;
use crate::thrower::Thrower;

/// Creates a computation that always succeeds with `value`.
///
/// The identity element of the monad. Evaluating the result performs no side
/// effect and yields a fresh clone of `value` on every call.
///
/// # Examples
///
/// ```rust
/// use thrower::throwers;
///
/// let thrower = throwers::unit::<_, String>(42);
/// assert_eq!(thrower.evaluate(), Ok(42));
/// assert_eq!(thrower.evaluate(), Ok(42));
/// ```
pub fn unit<A, E>(value: A) -> Thrower<A, E>
where
    A: Clone + 'static,
    E: 'static,
{
    Thrower::new(move || Ok(value.clone()))
}

/// Creates a computation that always fails with `error`.
///
/// The dual of [`unit`] on the error channel: evaluating the result performs
/// no side effect and yields a fresh clone of `error` on every call.
///
/// # Examples
///
/// ```rust
/// use thrower::throwers;
///
/// let thrower = throwers::fail::<i32, _>("unavailable".to_string());
/// assert_eq!(thrower.evaluate(), Err("unavailable".to_string()));
/// ```
pub fn fail<A, E>(error: E) -> Thrower<A, E>
where
    A: 'static,
    E: Clone + 'static,
{
    Thrower::new(move || Err(error.clone()))
}

/// Promotes a total function so that it operates on deferred fallible
/// computations.
///
/// Returns the promoted function. The computation it produces, when
/// evaluated, evaluates its input first; a failure propagates unchanged and
/// `function` is never invoked, otherwise `function` is applied to the
/// success value.
///
/// # Examples
///
/// ```rust
/// use thrower::Thrower;
/// use thrower::throwers;
///
/// let length = throwers::map(|text: String| text.len());
///
/// let read = Thrower::new(|| "hello".parse::<String>());
/// assert_eq!(length(read).evaluate(), Ok(5));
/// ```
pub fn map<A, T, E, F>(function: F) -> impl Fn(Thrower<A, E>) -> Thrower<T, E>
where
    F: UnaryFunction<A, T> + 'static,
    A: 'static,
    T: 'static,
    E: 'static,
{
    let function = Rc::new(function);
    move |thrower| {
        let function = Rc::clone(&function);
        Thrower::new(move || thrower.evaluate().map(|value| (*function)(value)))
    }
}

/// Sequentially composes a computation with a Kleisli arrow.
///
/// Evaluating the result evaluates `thrower`; on failure it short-circuits
/// and propagates the error without invoking `function`, on success it
/// invokes `function` with the value to obtain the next computation and
/// evaluates that. The first failure anywhere in a chain aborts the
/// remainder.
///
/// # Examples
///
/// ```rust
/// use thrower::Thrower;
/// use thrower::throwers;
///
/// let chained = throwers::bind(throwers::unit::<_, String>(5), |n| {
///     if n > 0 {
///         throwers::unit(n * 2)
///     } else {
///         throwers::fail("not positive".to_string())
///     }
/// });
/// assert_eq!(chained.evaluate(), Ok(10));
/// ```
///
/// Computations combined in a single composition must share one error kind;
/// the error channel is fixed at composition time, never discovered during
/// evaluation. An arrow whose error kind differs from its input's does not
/// compile:
///
/// ```rust,compile_fail
/// use thrower::Thrower;
/// use thrower::throwers;
///
/// let parsed: Thrower<i32, std::num::ParseIntError> =
///     Thrower::new(|| "41".parse::<i32>());
///
/// let widen = |n: i32| -> Thrower<i32, std::io::Error> { throwers::unit(n + 1) };
///
/// let _ = throwers::bind(parsed, widen);
/// ```
pub fn bind<A, B, E, F>(thrower: Thrower<A, E>, function: F) -> Thrower<B, E>
where
    F: UnaryFunction<A, Thrower<B, E>> + 'static,
    A: 'static,
    B: 'static,
    E: 'static,
{
    Thrower::new(move || {
        let value = thrower.evaluate()?;
        function(value).evaluate()
    })
}

/// Collects an ordered batch of computations into a single computation
/// producing the ordered results.
///
/// Evaluating the result evaluates each element left-to-right, preserving
/// input order. On the first failing element it aborts immediately and
/// propagates that element's error; elements after the failure are never
/// evaluated, so their side effects never happen. An empty input evaluates
/// to an empty `Vec` without evaluating anything.
///
/// # Examples
///
/// ```rust
/// use thrower::throwers;
///
/// let batch = throwers::sequence(vec![
///     throwers::unit::<_, String>(1),
///     throwers::unit(2),
///     throwers::unit(3),
/// ]);
/// assert_eq!(batch.evaluate(), Ok(vec![1, 2, 3]));
/// ```
pub fn sequence<A, E>(throwers: Vec<Thrower<A, E>>) -> Thrower<Vec<A>, E>
where
    A: 'static,
    E: 'static,
{
    Thrower::new(move || {
        let mut values = Vec::with_capacity(throwers.len());
        for thrower in &throwers {
            values.push(thrower.evaluate()?);
        }
        Ok(values)
    })
}
