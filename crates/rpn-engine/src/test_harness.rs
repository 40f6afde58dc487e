//! Test harness for rpn-engine unit and integration tests
//!
//! # Example
//!
//! ```rust
//! use rpn_engine::test_harness::*;
//! use rpn_engine::BinaryOp;
//!
//! let mut stack = stack_with([1.0, 2.0, 3.0, 4.0]);
//! enter_number(&mut stack, "10").expect("commit failed");
//! stack.apply_binary(BinaryOp::Multiply);
//! assert_registers(&stack, [10.0, 2.0, 3.0, 3.0]);
//! ```

#![allow(
    clippy::must_use_candidate,
    clippy::manual_assert,
    clippy::missing_panics_doc
)]

use crate::{RegisterStack, Registers, Result};

/// Build a stack whose registers hold `[x, y, z, t]` and whose entry is empty.
pub fn stack_with(xyzt: [f64; 4]) -> RegisterStack {
    RegisterStack::with_registers(Registers::from_xyzt(xyzt))
}

/// Type `text` and commit it.
pub fn enter_number(stack: &mut RegisterStack, text: &str) -> Result<()> {
    stack.type_number(text);
    stack.commit()
}

/// Force raw text into the entry buffer, bypassing the editing checks.
pub fn force_entry(stack: &mut RegisterStack, text: &str) {
    stack.entry_mut().set_raw(text);
}

/// Assert registers equal `[x, y, z, t]`, treating NaN as equal to NaN.
pub fn assert_registers(stack: &RegisterStack, expected: [f64; 4]) {
    let actual = stack.registers().to_xyzt();
    let same = actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| a == e || (a.is_nan() && e.is_nan()));
    if !same {
        panic!("register mismatch (x, y, z, t): expected {expected:?}, got {actual:?}");
    }
}
