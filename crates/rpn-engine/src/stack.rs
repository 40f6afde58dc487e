//! The calculator engine: four registers plus the pending entry.
//!
//! A `RegisterStack` is owned by one calculator session. It performs no
//! internal synchronization; callers sharing one across threads must wrap
//! the whole value in a lock.

use std::fmt;

use crate::entry::SEPARATOR;
use crate::op::{BinaryOp, NilaryOp, UnaryOp};
use crate::{EntryBuffer, Registers, Result, Snapshot};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterStack {
    registers: Registers,
    entry: EntryBuffer,
}

impl RegisterStack {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registers: Registers::new(),
            entry: EntryBuffer::new(),
        }
    }

    #[must_use]
    pub const fn with_registers(registers: Registers) -> Self {
        Self {
            registers,
            entry: EntryBuffer::new(),
        }
    }

    #[must_use]
    pub const fn registers(&self) -> &Registers {
        &self.registers
    }

    #[must_use]
    pub const fn entry(&self) -> &EntryBuffer {
        &self.entry
    }

    #[must_use]
    pub fn entry_mut(&mut self) -> &mut EntryBuffer {
        &mut self.entry
    }

    // ── Entry editing ──

    pub fn append_digit(&mut self, digit: &str) {
        self.entry.append_digit(digit);
    }

    pub fn append_separator(&mut self) {
        self.entry.append_separator();
    }

    pub fn toggle_sign(&mut self) {
        self.entry.toggle_sign();
    }

    /// Type `text` into the entry key by key, without committing.
    ///
    /// Digits and the separator are appended in order; a leading `-` is
    /// applied with a sign toggle after the digits, the way a calculator
    /// user would. Other characters are ignored like any malformed digit.
    pub fn type_number(&mut self, text: &str) {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        for c in body.chars() {
            if c == SEPARATOR {
                self.append_separator();
            } else {
                self.append_digit(c.encode_utf8(&mut [0; 4]));
            }
        }
        if negative {
            self.toggle_sign();
        }
    }

    /// Push the pending entry into X and clear it.
    ///
    /// An empty entry is a no-op. If the entry text is not a number the
    /// error is returned and neither the entry nor the registers change.
    pub fn commit(&mut self) -> Result<()> {
        let Some(value) = self.entry.parse()? else {
            return Ok(());
        };
        self.registers.roll_push(value);
        self.entry.clear();
        tracing::debug!(value, "entry committed");
        Ok(())
    }

    // ── Stack mechanics ──

    pub fn roll_push(&mut self, value: f64) {
        self.registers.roll_push(value);
    }

    pub fn roll_up(&mut self) {
        self.registers.roll_up();
    }

    pub fn drop_replace_x(&mut self, value: f64) {
        self.registers.drop_replace_x(value);
    }

    #[allow(clippy::should_implement_trait)]
    pub fn drop(&mut self) {
        self.registers.drop();
    }

    /// Overwrite X directly, bypassing the entry buffer.
    pub fn set_x(&mut self, value: f64) {
        self.registers.set_x(value);
    }

    // ── Operations ──

    /// Replace Y and X with `Y <op> X` and roll down.
    pub fn apply_binary(&mut self, op: BinaryOp) {
        let Registers { x, y, .. } = self.registers;
        match op.apply(y, x) {
            Some(value) => {
                tracing::debug!(%op, y, x, value, "binary operation");
                self.registers.drop_replace_x(value);
            }
            None => tracing::debug!(?op, "ignoring unknown binary operation"),
        }
    }

    pub fn apply_unary(&mut self, op: UnaryOp) {
        let x = self.registers.x;
        match op.apply(x) {
            Some(value) => {
                tracing::debug!(%op, x, value, "unary operation");
                self.registers.set_x(value);
            }
            None if op == UnaryOp::Unknown => {
                tracing::debug!("ignoring unknown unary operation");
            }
            None => tracing::debug!(%op, "unary operation not implemented"),
        }
    }

    pub fn apply_nilary(&mut self, op: NilaryOp) {
        match op.constant() {
            Some(value) => {
                tracing::debug!(%op, value, "constant pushed");
                self.registers.roll_push(value);
            }
            None => tracing::debug!(?op, "ignoring unknown nilary operation"),
        }
    }

    /// Label-based form of [`RegisterStack::apply_binary`]. Unmapped labels
    /// do nothing.
    pub fn apply_binary_label(&mut self, label: &str) {
        self.apply_binary(BinaryOp::from_label(label));
    }

    pub fn apply_unary_label(&mut self, label: &str) {
        self.apply_unary(UnaryOp::from_label(label));
    }

    pub fn apply_nilary_label(&mut self, label: &str) {
        self.apply_nilary(NilaryOp::from_label(label));
    }

    // ── Variables ──

    /// Store X under `name`. Variable storage is not implemented yet, so
    /// this has no effect.
    #[allow(clippy::unused_self)]
    pub fn set_var(&mut self, name: &str) {
        tracing::debug!(name, "variable storage not implemented");
    }

    /// Recall the variable `name`. Always `None` until variable storage
    /// exists; the registers are left untouched.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn get_var(&self, name: &str) -> Option<f64> {
        tracing::debug!(name, "variable storage not implemented");
        None
    }

    // ── Rendering ──

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let Registers { x, y, z, t } = self.registers;
        Snapshot {
            t,
            z,
            y,
            x,
            entry: self.entry.as_str().to_string(),
        }
    }
}

impl fmt::Display for RegisterStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Registers { x, y, z, t } = self.registers;
        write!(f, "{t}\n{z}\n{y}\n{x}\n{}", self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_1234() -> RegisterStack {
        RegisterStack::with_registers(Registers::from_xyzt([1.0, 2.0, 3.0, 4.0]))
    }

    #[test]
    fn test_commit_pushes_entry() {
        let mut stack = stack_1234();
        stack.append_digit("4");
        stack.append_separator();
        stack.append_digit("2");
        stack.commit().unwrap();
        assert_eq!(stack.registers().to_xyzt(), [4.2, 1.0, 2.0, 3.0]);
        assert!(stack.entry().is_empty());
    }

    #[test]
    fn test_type_number_keys() {
        let mut stack = RegisterStack::new();
        stack.type_number("-12.5");
        assert_eq!(stack.entry().as_str(), "-12.5");

        let mut stack = RegisterStack::new();
        stack.type_number("3.1.4x");
        assert_eq!(stack.entry().as_str(), "3.14");
        assert_eq!(stack.registers(), &Registers::new());
    }

    #[test]
    fn test_commit_empty_is_noop() {
        let mut stack = stack_1234();
        stack.commit().unwrap();
        assert_eq!(stack, stack_1234());
    }

    #[test]
    fn test_commit_malformed_propagates() {
        let mut stack = stack_1234();
        stack.toggle_sign();
        assert!(stack.commit().is_err());
        assert_eq!(stack.entry().as_str(), "-");
        assert_eq!(stack.registers(), stack_1234().registers());
    }

    #[test]
    fn test_apply_binary_rolls_down() {
        let mut stack = stack_1234();
        stack.apply_binary(BinaryOp::Subtract);
        assert_eq!(stack.registers().to_xyzt(), [1.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn test_apply_binary_unknown_is_noop() {
        let mut stack = stack_1234();
        stack.apply_binary_label("%");
        assert_eq!(stack, stack_1234());
    }

    #[test]
    fn test_apply_unary_inert_is_noop() {
        let mut stack = stack_1234();
        stack.apply_unary(UnaryOp::Cos);
        stack.apply_unary_label("nope");
        assert_eq!(stack, stack_1234());
    }

    #[test]
    fn test_apply_nilary_pushes_constant() {
        let mut stack = stack_1234();
        stack.apply_nilary_label("e");
        assert_eq!(
            stack.registers().to_xyzt(),
            [std::f64::consts::E, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_operations_ignore_pending_entry() {
        let mut stack = stack_1234();
        stack.append_digit("7");
        stack.apply_binary(BinaryOp::Add);
        assert_eq!(stack.registers().x, 3.0);
        assert_eq!(stack.entry().as_str(), "7");
    }

    #[test]
    fn test_variables_are_inert() {
        let mut stack = stack_1234();
        stack.set_var("a");
        assert_eq!(stack.get_var("a"), None);
        assert_eq!(stack, stack_1234());
    }

    #[test]
    fn test_display_order() {
        let mut stack = stack_1234();
        stack.append_digit("5");
        stack.append_separator();
        assert_eq!(stack.to_string(), "4\n3\n2\n1\n5.");
        assert_eq!(RegisterStack::new().to_string(), "0\n0\n0\n0\n");
    }
}
