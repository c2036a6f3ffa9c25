//! A terminal evaluator with a sentinel recovery policy.
//!
//! The core never recovers from a failure on its own; whoever calls
//! [`Thrower::evaluate`] at the edge of the program decides what a failure
//! means. [`ExceptionHandler`] is one such terminal policy: substitute a
//! documented sentinel value instead of propagating. Rethrowing,
//! log-and-default or retry are equally legitimate policies a consumer can
//! write against the same `evaluate()` contract.

use crate::thrower::Thrower;

/// Evaluates computations, converting failures into a fixed sentinel value.
///
/// # Examples
///
/// ```rust
/// use thrower::handler::ExceptionHandler;
/// use thrower::throwers;
///
/// let handler = ExceptionHandler::new(i64::MIN);
///
/// assert_eq!(handler.evaluate(&throwers::unit::<_, String>(7)), 7);
/// assert_eq!(
///     handler.evaluate(&throwers::fail("connection lost".to_string())),
///     i64::MIN,
/// );
/// ```
pub struct ExceptionHandler<T> {
    /// The substitute returned in place of a propagated failure.
    sentinel: T,
}

impl<T> ExceptionHandler<T>
where
    T: Clone + 'static,
{
    /// Creates a handler that substitutes `sentinel` for any failure.
    pub const fn new(sentinel: T) -> Self {
        Self { sentinel }
    }

    /// Evaluates `thrower`, returning its value on success and the sentinel
    /// on failure.
    ///
    /// This is the terminal step of a pipeline: it is the only place here
    /// that actually executes the composed thunks.
    pub fn evaluate<E: 'static>(&self, thrower: &Thrower<T, E>) -> T {
        thrower.evaluate().unwrap_or_else(|_| self.sentinel.clone())
    }
}
