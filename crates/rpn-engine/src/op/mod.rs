//! Operation tags applied to the register stack.
//!
//! External callers name operations by their button label (`+`, `π`, `sin`).
//! Labels are mapped to these closed enums once at the boundary; every enum
//! carries an `Unknown` variant so unmapped labels stay a harmless no-op.

mod display;
mod label;

/// Operations that consume Y and X and leave one result in X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    Unknown,
}

/// Operations that replace X in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Square,
    SquareRoot,
    Log10,
    Ln,
    Exp10,
    Exp,
    Sin,
    // Recognized labels that do not compute anything yet.
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Unknown,
}

/// Operations that push a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NilaryOp {
    Pi,
    E,
    Unknown,
}

/// Any operation, as resolved from a label at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Nilary(NilaryOp),
}

impl BinaryOp {
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Root,
    ];

    /// Compute `y <op> x`. Y is the left operand.
    ///
    /// Domain errors are not checked: division by zero and friends yield
    /// IEEE infinities or NaN. Returns `None` for [`BinaryOp::Unknown`].
    #[must_use]
    pub fn apply(self, y: f64, x: f64) -> Option<f64> {
        let value = match self {
            Self::Add => y + x,
            Self::Subtract => y - x,
            Self::Multiply => y * x,
            Self::Divide => y / x,
            Self::Power => y.powf(x),
            Self::Root => y.powf(x.recip()),
            Self::Unknown => return None,
        };
        Some(value)
    }
}

impl UnaryOp {
    pub const ALL: [Self; 12] = [
        Self::Square,
        Self::SquareRoot,
        Self::Log10,
        Self::Ln,
        Self::Exp10,
        Self::Exp,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
    ];

    /// Whether applying this operation changes X.
    ///
    /// False for the recognized-but-inert trigonometric variants and for
    /// [`UnaryOp::Unknown`].
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(
            self,
            Self::Square
                | Self::SquareRoot
                | Self::Log10
                | Self::Ln
                | Self::Exp10
                | Self::Exp
                | Self::Sin
        )
    }

    #[must_use]
    pub fn apply(self, x: f64) -> Option<f64> {
        let value = match self {
            Self::Square => x * x,
            Self::SquareRoot => x.sqrt(),
            Self::Log10 => x.log10(),
            Self::Ln => x.ln(),
            Self::Exp10 => 10f64.powf(x),
            Self::Exp => x.exp(),
            Self::Sin => x.sin(),
            Self::Cos | Self::Tan | Self::Asin | Self::Acos | Self::Atan | Self::Unknown => {
                return None;
            }
        };
        Some(value)
    }
}

impl NilaryOp {
    pub const ALL: [Self; 2] = [Self::Pi, Self::E];

    #[must_use]
    pub const fn constant(self) -> Option<f64> {
        match self {
            Self::Pi => Some(std::f64::consts::PI),
            Self::E => Some(std::f64::consts::E),
            Self::Unknown => None,
        }
    }
}

impl Operation {
    /// Resolve a label, trying binary, then unary, then nilary tables.
    ///
    /// Returns `None` when no table knows the label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match BinaryOp::from_label(label) {
            BinaryOp::Unknown => {}
            op => return Some(Self::Binary(op)),
        }
        match UnaryOp::from_label(label) {
            UnaryOp::Unknown => {}
            op => return Some(Self::Unary(op)),
        }
        match NilaryOp::from_label(label) {
            NilaryOp::Unknown => None,
            op => Some(Self::Nilary(op)),
        }
    }
}
