//! Early-return sugar built entirely on the public
//! [`Outcome`](crate::Outcome) API.

/// Unwraps a success payload or returns the failure from the
/// enclosing function.
///
/// On failure the payload is re-tagged with [`fail`](crate::fail) and
/// converted into the enclosing function's failure type through
/// [`From`], so a narrower failure payload propagates into a wider one
/// without ceremony.
///
/// ```
/// use outcome::{Outcome, fail, succeed};
///
/// fn halve(value: i32) -> Outcome<i32, String> {
///     if value % 2 == 0 {
///         succeed(value / 2).into()
///     } else {
///         fail(format!("{value} is odd")).into()
///     }
/// }
///
/// fn quarter(value: i32) -> Outcome<i32, String> {
///     let halved = outcome::attempt!(halve(value));
///     halve(halved)
/// }
///
/// assert_eq!(quarter(32), succeed(8));
/// assert_eq!(quarter(2), fail("1 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! attempt {
    ($outcome:expr) => {
        match $crate::Outcome::into_result($outcome) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(failure) => {
                return ::core::convert::From::from($crate::fail(failure));
            }
        }
    };
}
