//! Value-semantic optional container with explicit slot storage.
//!
//! The crate provides [`OptionalValue`], a stack-allocated holder for zero
//! or one `T` backed by an occupancy flag and a raw storage slot, together
//! with the [`NoValue`] tag and the [`AccessError`] returned by checked
//! access. Concurrent use of one container must be serialized by the
//! caller; the type performs no synchronization of its own.

pub mod error;
pub mod optional;

pub use error::{AccessError, AccessResult};
pub use optional::{NoValue, OptionalValue};
