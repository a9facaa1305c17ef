//! Constructor tags. A bare payload is ambiguous when the success and
//! failure types coincide; wrapping it in [`Success`] or [`Failure`]
//! records the intent, and the [`Outcome`](crate::Outcome) conversion
//! reads the tag, never the payload type.

/// A payload tagged as success-intent.
///
/// Produced by [`succeed`]; converted into an `Outcome` with
/// [`From`]/[`Into`], which also converts the payload itself when the
/// target success type differs (`&str` into `String`, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success<T>(T);

/// A payload tagged as failure-intent. The counterpart of [`Success`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure<E>(E);

/// Tags `value` as the success payload of an `Outcome` to be built.
///
/// The no-payload form is `succeed(())`.
pub const fn succeed<T>(value: T) -> Success<T> {
    Success(value)
}

/// Tags `value` as the failure payload of an `Outcome` to be built.
pub const fn fail<E>(value: E) -> Failure<E> {
    Failure(value)
}

impl<T> Success<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    pub const fn get(&self) -> &T {
        &self.0
    }
}

impl<E> Failure<E> {
    pub fn into_inner(self) -> E {
        self.0
    }

    pub const fn get(&self) -> &E {
        &self.0
    }
}
