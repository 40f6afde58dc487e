//! The four calculator registers and the primitives that move values between them.
//!
//! X is the top of the stack (most recent value), T the bottom (oldest).
//! No slot is ever empty: every register starts at `0.0`.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Registers {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
}

impl Registers {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            t: 0.0,
        }
    }

    /// Build registers from values given top first: `[x, y, z, t]`.
    #[must_use]
    pub const fn from_xyzt([x, y, z, t]: [f64; 4]) -> Self {
        Self { x, y, z, t }
    }

    #[must_use]
    pub const fn to_xyzt(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.t]
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    /// Shift up and place `value` in X. The old T is discarded.
    pub fn roll_push(&mut self, value: f64) {
        self.t = self.z;
        self.z = self.y;
        self.y = self.x;
        self.x = value;
        tracing::trace!(registers = ?self, "roll push");
    }

    /// Rotate up: the old T wraps around into X. Nothing is lost.
    pub fn roll_up(&mut self) {
        let t = self.t;
        self.t = self.z;
        self.z = self.y;
        self.y = self.x;
        self.x = t;
        tracing::trace!(registers = ?self, "roll up");
    }

    /// Roll down after X and Y were consumed, placing `value` in X.
    ///
    /// T keeps its value and is also copied into Z, as on classic
    /// four-register calculators.
    pub fn drop_replace_x(&mut self, value: f64) {
        self.x = value;
        self.y = self.z;
        self.z = self.t;
        tracing::trace!(registers = ?self, "drop replace x");
    }

    /// Roll down discarding X. T is duplicated into Z.
    #[allow(clippy::should_implement_trait)]
    pub fn drop(&mut self) {
        self.x = self.y;
        self.y = self.z;
        self.z = self.t;
        tracing::trace!(registers = ?self, "drop");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registers {
        Registers::from_xyzt([1.0, 2.0, 3.0, 4.0])
    }

    #[test]
    fn test_default_is_zeroed() {
        assert_eq!(Registers::default(), Registers::new());
        assert_eq!(Registers::new().to_xyzt(), [0.0; 4]);
    }

    #[test]
    fn test_roll_push_discards_t() {
        let mut regs = sample();
        regs.roll_push(9.0);
        assert_eq!(regs.to_xyzt(), [9.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_roll_up_rotates() {
        let mut regs = sample();
        regs.roll_up();
        assert_eq!(regs.to_xyzt(), [4.0, 1.0, 2.0, 3.0]);

        // Four rotations restore the original order.
        for _ in 0..3 {
            regs.roll_up();
        }
        assert_eq!(regs, sample());
    }

    #[test]
    fn test_drop_replace_x_duplicates_t() {
        let mut regs = sample();
        regs.drop_replace_x(9.0);
        assert_eq!(regs.to_xyzt(), [9.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn test_drop_duplicates_t() {
        let mut regs = sample();
        regs.drop();
        assert_eq!(regs.to_xyzt(), [2.0, 3.0, 4.0, 4.0]);
        regs.drop();
        assert_eq!(regs.to_xyzt(), [3.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_set_x_leaves_rest() {
        let mut regs = sample();
        regs.set_x(-7.5);
        assert_eq!(regs.to_xyzt(), [-7.5, 2.0, 3.0, 4.0]);
    }
}
