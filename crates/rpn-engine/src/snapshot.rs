use std::fmt;

/// Owned copy of what a display shows: the registers, T first, and the
/// pending entry text.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub t: f64,
    pub z: f64,
    pub y: f64,
    pub x: f64,
    pub entry: String,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}\n{}",
            self.t, self.z, self.y, self.x, self.entry
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{RegisterStack, Registers};

    #[test]
    fn test_snapshot_matches_stack_rendering() {
        let mut stack = RegisterStack::with_registers(Registers::from_xyzt([
            0.5,
            f64::INFINITY,
            f64::NAN,
            -3.0,
        ]));
        stack.append_digit("1");
        let snapshot = stack.snapshot();
        assert_eq!(snapshot.to_string(), stack.to_string());
        assert_eq!(snapshot.to_string(), "-3\nNaN\ninf\n0.5\n1");
    }
}
