#![allow(
    clippy::missing_errors_doc // only `commit` is fallible and its error is documented on `Error`
)]

pub mod entry;
pub mod error;
pub mod op;
pub mod registers;
pub mod snapshot;
pub mod stack;

/// Test harness module for writing unit and integration tests.
///
/// This module is only available when running tests or when the
/// `test-harness` feature is enabled.
#[cfg(any(test, feature = "test-harness"))]
pub mod test_harness;

pub use entry::EntryBuffer;
pub use error::{Error, Result};
pub use op::{BinaryOp, NilaryOp, Operation, UnaryOp};
pub use registers::Registers;
pub use snapshot::Snapshot;
pub use stack::RegisterStack;
