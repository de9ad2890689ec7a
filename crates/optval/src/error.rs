use std::result;

use thiserror::Error;

/// Failure raised by checked access on an empty container.
///
/// Unchecked access never produces this error; its precondition is a caller
/// contract (see [`crate::OptionalValue::value_unchecked`]).
#[derive(Clone, Debug, Eq, PartialEq, Copy, Error)]
pub enum AccessError {
    #[error("called `value` on an empty OptionalValue")]
    Empty,
}

pub type AccessResult<T> = result::Result<T, AccessError>;
