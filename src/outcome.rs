//! ```ignore
//! Outcome<S, F>
//!
//! is_success()                 -> bool
//! is_failure()                 -> bool
//! is_success_and(|S| bool)     -> bool
//! is_failure_and(|F| bool)     -> bool
//!
//! unwrap_success()             -> S ?panic
//! unwrap_success_ref()         -> &S ?panic
//! unwrap_success_mut()         -> &mut S ?panic
//! unwrap_failure()             -> F ?panic
//! unwrap_failure_ref()         -> &F ?panic
//! unwrap_failure_mut()         -> &mut F ?panic
//! unsafe unwrap_success_unchecked() -> S ?ub
//! unsafe unwrap_failure_unchecked() -> F ?ub
//!
//! unwrap_success_or(S)         -> S
//! unwrap_success_or_else(|F| S) -> S
//! where S: Default
//! unwrap_success_or_default()  -> S
//! unwrap_failure_or(F)         -> F
//! unwrap_failure_or_else(|S| F) -> F
//! where F: Default
//! unwrap_failure_or_default()  -> F
//!
//! as_ref()                     -> Outcome<&S, &F>
//! as_mut()                     -> Outcome<&mut S, &mut F>
//! where S is a reference: copied(), cloned()
//! where F is a reference: copied_failure(), cloned_failure()
//!
//! success_or_none()            -> Option<S>
//! failure_or_none()            -> Option<F>
//!
//! map           (|S| U)        -> Outcome<U, F>
//! map_or        (U, |S| U)     -> U
//! map_or_else   (|F| U, |S| U) -> U
//! map_failure   (|F| G)        -> Outcome<S, G>
//!
//! inspect        (|&S|)        -> Outcome<S, F>
//! inspect_failure(|&F|)        -> Outcome<S, F>
//!
//! and     (Outcome<U, F>)      -> Outcome<U, F>
//! and_then(|S| Outcome<U, G>)  -> Outcome<U, G>
//! or      (Outcome<S, G>)      -> Outcome<S, G>
//! or_else (|F| Outcome<U, G>)  -> Outcome<U, G>
//!
//! where S = Option<T>: transpose() -> Option<Outcome<T, F>>
//! where S = Outcome<T, F>: flatten() -> Outcome<T, F>
//!
//! into_result()                -> Result<S, F>
//! ```
use core::fmt;
use core::hint;

use crate::wrap::{Failure, Success};

#[derive(Clone, Copy)]
enum Repr<S, F> {
    Success(S),
    Failure(F),
}

/// The outcome of a fallible operation: exactly one of a success
/// payload `S` or a failure payload `F`.
///
/// An `Outcome` is only ever built from a [`succeed`](crate::succeed)
/// or [`fail`](crate::fail) tag, so the discriminant and the live
/// payload always agree. Consuming combinators take `self` by value;
/// a consumed value cannot be touched again.
#[must_use = "this `Outcome` may carry a failure payload that should be handled"]
pub struct Outcome<S, F> {
    repr: Repr<S, F>,
}

impl<S, F> Outcome<S, F> {
    const fn success(value: S) -> Self {
        Outcome {
            repr: Repr::Success(value),
        }
    }

    const fn failure(failure: F) -> Self {
        Outcome {
            repr: Repr::Failure(failure),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self.repr, Repr::Failure(_))
    }

    pub fn is_success_and(self, predicate: impl FnOnce(S) -> bool) -> bool {
        match self.repr {
            Repr::Success(value) => predicate(value),
            Repr::Failure(_) => false,
        }
    }

    pub fn is_failure_and(self, predicate: impl FnOnce(F) -> bool) -> bool {
        match self.repr {
            Repr::Success(_) => false,
            Repr::Failure(failure) => predicate(failure),
        }
    }

    /// # Panics
    /// Panics if the outcome is a failure, with the failure payload in
    /// the message.
    #[track_caller]
    pub fn unwrap_success(self) -> S
    where
        F: fmt::Debug,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(ref failure) => unwrap_failed("called `unwrap_success` on a failure `Outcome`", failure),
        }
    }

    /// # Panics
    /// Panics if the outcome is a failure.
    #[track_caller]
    pub fn unwrap_success_ref(&self) -> &S
    where
        F: fmt::Debug,
    {
        match self.repr {
            Repr::Success(ref value) => value,
            Repr::Failure(ref failure) => unwrap_failed("called `unwrap_success_ref` on a failure `Outcome`", failure),
        }
    }

    /// # Panics
    /// Panics if the outcome is a failure.
    #[track_caller]
    pub fn unwrap_success_mut(&mut self) -> &mut S
    where
        F: fmt::Debug,
    {
        match self.repr {
            Repr::Success(ref mut value) => value,
            Repr::Failure(ref failure) => unwrap_failed("called `unwrap_success_mut` on a failure `Outcome`", failure),
        }
    }

    /// # Panics
    /// Panics if the outcome is a success, with the success payload in
    /// the message.
    #[track_caller]
    pub fn unwrap_failure(self) -> F
    where
        S: fmt::Debug,
    {
        match self.repr {
            Repr::Success(ref value) => unwrap_failed("called `unwrap_failure` on a success `Outcome`", value),
            Repr::Failure(failure) => failure,
        }
    }

    /// # Panics
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn unwrap_failure_ref(&self) -> &F
    where
        S: fmt::Debug,
    {
        match self.repr {
            Repr::Success(ref value) => unwrap_failed("called `unwrap_failure_ref` on a success `Outcome`", value),
            Repr::Failure(ref failure) => failure,
        }
    }

    /// # Panics
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn unwrap_failure_mut(&mut self) -> &mut F
    where
        S: fmt::Debug,
    {
        match self.repr {
            Repr::Success(ref value) => unwrap_failed("called `unwrap_failure_mut` on a success `Outcome`", value),
            Repr::Failure(ref mut failure) => failure,
        }
    }

    /// # Safety
    /// The outcome must be a success.
    pub unsafe fn unwrap_success_unchecked(self) -> S {
        match self.repr {
            Repr::Success(value) => value,
            // SAFETY: the safety contract must be upheld by the caller.
            Repr::Failure(_) => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// # Safety
    /// The outcome must be a failure.
    pub unsafe fn unwrap_failure_unchecked(self) -> F {
        match self.repr {
            // SAFETY: the safety contract must be upheld by the caller.
            Repr::Success(_) => unsafe { hint::unreachable_unchecked() },
            Repr::Failure(failure) => failure,
        }
    }

    pub fn unwrap_success_or(self, default: S) -> S {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(_) => default,
        }
    }

    pub fn unwrap_success_or_else(self, default: impl FnOnce(F) -> S) -> S {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(failure) => default(failure),
        }
    }

    pub fn unwrap_success_or_default(self) -> S
    where
        S: Default,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(_) => S::default(),
        }
    }

    pub fn unwrap_failure_or(self, default: F) -> F {
        match self.repr {
            Repr::Success(_) => default,
            Repr::Failure(failure) => failure,
        }
    }

    pub fn unwrap_failure_or_else(self, default: impl FnOnce(S) -> F) -> F {
        match self.repr {
            Repr::Success(value) => default(value),
            Repr::Failure(failure) => failure,
        }
    }

    pub fn unwrap_failure_or_default(self) -> F
    where
        F: Default,
    {
        match self.repr {
            Repr::Success(_) => F::default(),
            Repr::Failure(failure) => failure,
        }
    }

    /// Read-only view over the same storage. The view lives as long as
    /// the borrow of `self`, never longer.
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self.repr {
            Repr::Success(ref value) => Outcome::success(value),
            Repr::Failure(ref failure) => Outcome::failure(failure),
        }
    }

    /// Mutating view over the same storage; changes made through it
    /// are visible in `self`.
    pub const fn as_mut(&mut self) -> Outcome<&mut S, &mut F> {
        match self.repr {
            Repr::Success(ref mut value) => Outcome::success(value),
            Repr::Failure(ref mut failure) => Outcome::failure(failure),
        }
    }

    pub fn success_or_none(self) -> Option<S> {
        match self.repr {
            Repr::Success(value) => Some(value),
            Repr::Failure(_) => None,
        }
    }

    pub fn failure_or_none(self) -> Option<F> {
        match self.repr {
            Repr::Success(_) => None,
            Repr::Failure(failure) => Some(failure),
        }
    }

    pub fn map<U>(self, op: impl FnOnce(S) -> U) -> Outcome<U, F> {
        match self.repr {
            Repr::Success(value) => Outcome::success(op(value)),
            Repr::Failure(failure) => Outcome::failure(failure),
        }
    }

    pub fn map_or<U>(self, default: U, op: impl FnOnce(S) -> U) -> U {
        match self.repr {
            Repr::Success(value) => op(value),
            Repr::Failure(_) => default,
        }
    }

    pub fn map_or_else<U>(self, default: impl FnOnce(F) -> U, op: impl FnOnce(S) -> U) -> U {
        match self.repr {
            Repr::Success(value) => op(value),
            Repr::Failure(failure) => default(failure),
        }
    }

    pub fn map_failure<G>(self, op: impl FnOnce(F) -> G) -> Outcome<S, G> {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(failure) => Outcome::failure(op(failure)),
        }
    }

    pub fn inspect(self, op: impl FnOnce(&S)) -> Self {
        match self.repr {
            Repr::Success(ref value) => op(value),
            Repr::Failure(_) => {}
        }
        self
    }

    pub fn inspect_failure(self, op: impl FnOnce(&F)) -> Self {
        match self.repr {
            Repr::Success(_) => {}
            Repr::Failure(ref failure) => op(failure),
        }
        self
    }

    /// Eager sequencing: `other` is already built when this runs. Use
    /// [`and_then`](Outcome::and_then) when the follow-up should only
    /// run on success.
    pub fn and<U>(self, other: Outcome<U, F>) -> Outcome<U, F> {
        match self.repr {
            Repr::Success(_) => other,
            Repr::Failure(failure) => Outcome::failure(failure),
        }
    }

    pub fn and_then<U, G>(self, op: impl FnOnce(S) -> Outcome<U, G>) -> Outcome<U, G>
    where
        G: From<F>,
    {
        match self.repr {
            Repr::Success(value) => op(value),
            Repr::Failure(failure) => Outcome::failure(G::from(failure)),
        }
    }

    pub fn or<G>(self, other: Outcome<S, G>) -> Outcome<S, G> {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(_) => other,
        }
    }

    pub fn or_else<U, G>(self, op: impl FnOnce(F) -> Outcome<U, G>) -> Outcome<U, G>
    where
        U: From<S>,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(U::from(value)),
            Repr::Failure(failure) => op(failure),
        }
    }

    pub fn into_result(self) -> Result<S, F> {
        match self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Failure(failure) => Err(failure),
        }
    }
}

impl<S, F> Outcome<&S, F> {
    pub fn copied(self) -> Outcome<S, F>
    where
        S: Copy,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(*value),
            Repr::Failure(failure) => Outcome::failure(failure),
        }
    }

    pub fn cloned(self) -> Outcome<S, F>
    where
        S: Clone,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value.clone()),
            Repr::Failure(failure) => Outcome::failure(failure),
        }
    }
}

impl<S, F> Outcome<&mut S, F> {
    pub fn copied(self) -> Outcome<S, F>
    where
        S: Copy,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(*value),
            Repr::Failure(failure) => Outcome::failure(failure),
        }
    }

    pub fn cloned(self) -> Outcome<S, F>
    where
        S: Clone,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value.clone()),
            Repr::Failure(failure) => Outcome::failure(failure),
        }
    }
}

impl<S, F> Outcome<S, &F> {
    pub fn copied_failure(self) -> Outcome<S, F>
    where
        F: Copy,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(failure) => Outcome::failure(*failure),
        }
    }

    pub fn cloned_failure(self) -> Outcome<S, F>
    where
        F: Clone,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(failure) => Outcome::failure(failure.clone()),
        }
    }
}

impl<S, F> Outcome<S, &mut F> {
    pub fn copied_failure(self) -> Outcome<S, F>
    where
        F: Copy,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(failure) => Outcome::failure(*failure),
        }
    }

    pub fn cloned_failure(self) -> Outcome<S, F>
    where
        F: Clone,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(failure) => Outcome::failure(failure.clone()),
        }
    }
}

impl<S, F> Outcome<Option<S>, F> {
    /// Swaps the container nesting: a success holding `Some` becomes
    /// `Some` of a success, a success holding `None` disappears into
    /// `None`, and a failure stays a failure inside `Some`.
    pub fn transpose(self) -> Option<Outcome<S, F>> {
        match self.repr {
            Repr::Success(Some(value)) => Some(Outcome::success(value)),
            Repr::Success(None) => None,
            Repr::Failure(failure) => Some(Outcome::failure(failure)),
        }
    }
}

impl<S, F> Outcome<Outcome<S, F>, F> {
    /// Removes one level of nesting. The inner outcome passes out as
    /// is; an outer failure becomes the failure directly.
    pub fn flatten(self) -> Outcome<S, F> {
        match self.repr {
            Repr::Success(inner) => inner,
            Repr::Failure(failure) => Outcome::failure(failure),
        }
    }
}

impl<S, F, T> From<Success<T>> for Outcome<S, F>
where
    S: From<T>,
{
    fn from(tag: Success<T>) -> Self {
        Outcome::success(S::from(tag.into_inner()))
    }
}

impl<S, F, E> From<Failure<E>> for Outcome<S, F>
where
    F: From<E>,
{
    fn from(tag: Failure<E>) -> Self {
        Outcome::failure(F::from(tag.into_inner()))
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(failure) => Outcome::failure(failure),
        }
    }
}

impl<S, F> Clone for Outcome<S, F>
where
    S: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        match self.repr {
            Repr::Success(ref value) => Outcome::success(value.clone()),
            Repr::Failure(ref failure) => Outcome::failure(failure.clone()),
        }
    }
}

impl<S, F> Copy for Outcome<S, F>
where
    S: Copy,
    F: Copy,
{
}

impl<S, F> fmt::Debug for Outcome<S, F>
where
    S: fmt::Debug,
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Success(ref value) => f.debug_tuple("Success").field(value).finish(),
            Repr::Failure(ref failure) => f.debug_tuple("Failure").field(failure).finish(),
        }
    }
}

impl<S, F, S2, F2> PartialEq<Outcome<S2, F2>> for Outcome<S, F>
where
    S: PartialEq<S2>,
    F: PartialEq<F2>,
{
    #[inline]
    fn eq(&self, other: &Outcome<S2, F2>) -> bool {
        // Spelling out the cases explicitly optimizes better than
        // `_ => false`
        match (&self.repr, &other.repr) {
            (Repr::Success(l), Repr::Success(r)) => *l == *r,
            (Repr::Success(_), Repr::Failure(_)) => false,
            (Repr::Failure(_), Repr::Success(_)) => false,
            (Repr::Failure(l), Repr::Failure(r)) => *l == *r,
        }
    }
}

impl<S, F> Eq for Outcome<S, F>
where
    S: Eq,
    F: Eq,
{
}

impl<S, F, T> PartialEq<Success<T>> for Outcome<S, F>
where
    S: PartialEq<T>,
{
    #[inline]
    fn eq(&self, other: &Success<T>) -> bool {
        match self.repr {
            Repr::Success(ref value) => value == other.get(),
            Repr::Failure(_) => false,
        }
    }
}

impl<S, F, E> PartialEq<Failure<E>> for Outcome<S, F>
where
    F: PartialEq<E>,
{
    #[inline]
    fn eq(&self, other: &Failure<E>) -> bool {
        match self.repr {
            Repr::Success(_) => false,
            Repr::Failure(ref failure) => failure == other.get(),
        }
    }
}

impl<S, F, T> PartialEq<Outcome<S, F>> for Success<T>
where
    T: PartialEq<S>,
{
    #[inline]
    fn eq(&self, other: &Outcome<S, F>) -> bool {
        match other.repr {
            Repr::Success(ref value) => self.get() == value,
            Repr::Failure(_) => false,
        }
    }
}

impl<S, F, E> PartialEq<Outcome<S, F>> for Failure<E>
where
    E: PartialEq<F>,
{
    #[inline]
    fn eq(&self, other: &Outcome<S, F>) -> bool {
        match other.repr {
            Repr::Success(_) => false,
            Repr::Failure(ref failure) => self.get() == failure,
        }
    }
}

#[cold]
#[track_caller]
fn unwrap_failed<P: fmt::Debug>(message: &str, payload: &P) -> ! {
    panic!("{}: {:?}", message, payload)
}
