//! A two-variant container for the outcome of a fallible operation:
//! either a success payload or a failure payload, never both. Values
//! are built through the [`succeed`] and [`fail`] tags and composed
//! with a chainable combinator API instead of exceptions or
//! out-parameters.
#![no_std]

mod macros;
mod outcome;
mod wrap;

pub use outcome::Outcome;
pub use wrap::{Failure, Success, fail, succeed};
