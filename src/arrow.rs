//! The partial-operation adapter.
//!
//! A [`PartialArrow`] is an operation whose result is undefined for some
//! inputs: given an `A` it produces a `B`, or fails with an `E`. The adapter
//! abstracts the deferred-computation boilerplate away, so an implementer
//! writes only the conversion logic; [`kleisli`] then exposes the arrow as a
//! total function `A -> Thrower<B, E>`, ready to be passed to
//! [`throwers::bind`](crate::throwers::bind).

use std::rc::Rc;

use static_assertions::assert_obj_safe;

use crate::thrower::Thrower;

/// A partial operation: turn an `A` into a `B`, or fail with an `E`.
///
/// One required operation. Implement it on a concrete type for named
/// conversion steps, or rely on the blanket impl and use a plain
/// `Fn(&A) -> Result<B, E>` closure. The argument is borrowed rather than
/// consumed because the computation produced by [`kleisli`] may be evaluated
/// any number of times, each evaluation lending the captured argument to the
/// conversion again.
///
/// # Examples
///
/// ```rust
/// use thrower::arrow::PartialArrow;
///
/// struct Parser;
///
/// impl PartialArrow<String, i32, std::num::ParseIntError> for Parser {
///     fn try_convert(&self, text: &String) -> Result<i32, std::num::ParseIntError> {
///         text.parse()
///     }
/// }
///
/// assert_eq!(Parser.try_convert(&"42".to_string()), Ok(42));
/// ```
pub trait PartialArrow<A, B, E> {
    /// Turns `argument` into a `B`, or fails with an `E`.
    ///
    /// # Errors
    ///
    /// Returns `E` when the operation is undefined for `argument`.
    fn try_convert(&self, argument: &A) -> Result<B, E>;
}

assert_obj_safe!(PartialArrow<u8, u8, std::io::Error>);

impl<A, B, E, F> PartialArrow<A, B, E> for F
where
    F: Fn(&A) -> Result<B, E>,
{
    fn try_convert(&self, argument: &A) -> Result<B, E> {
        self(argument)
    }
}

/// Exposes a partial operation as a Kleisli arrow for the monad.
///
/// The returned total function accepts an `A` and produces a deferred
/// computation of `B`. Calling it executes nothing: `try_convert` is invoked
/// only when the produced computation is evaluated, exactly once per
/// [`evaluate`](Thrower::evaluate) call, and its outcome is propagated
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use thrower::arrow::kleisli;
/// use thrower::throwers;
///
/// let parse = kleisli(Rc::new(|text: &String| text.parse::<i32>()));
///
/// let pipeline = throwers::bind(throwers::unit("42".to_string()), parse);
/// assert_eq!(pipeline.evaluate(), Ok(42));
/// ```
pub fn kleisli<A, B, E, P>(partial: Rc<P>) -> impl Fn(A) -> Thrower<B, E>
where
    P: PartialArrow<A, B, E> + ?Sized + 'static,
    A: 'static,
    B: 'static,
    E: 'static,
{
    move |argument| {
        let partial = Rc::clone(&partial);
        Thrower::new(move || partial.try_convert(&argument))
    }
}
