use super::{BinaryOp, NilaryOp, UnaryOp};

impl BinaryOp {
    /// Map a button label or name to an operation. Unmapped labels give
    /// [`BinaryOp::Unknown`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "+" | "add" => Self::Add,
            "-" | "−" | "sub" | "subtract" => Self::Subtract,
            "*" | "×" | "mul" | "multiply" => Self::Multiply,
            "/" | "÷" | "div" | "divide" => Self::Divide,
            "^" | "yˣ" | "pow" | "power" => Self::Power,
            "ˣ√y" | "root" => Self::Root,
            _ => Self::Unknown,
        }
    }
}

impl UnaryOp {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "x²" | "sq" | "square" => Self::Square,
            "√" | "sqrt" => Self::SquareRoot,
            "log" => Self::Log10,
            "ln" => Self::Ln,
            "10ˣ" | "10^x" => Self::Exp10,
            "eˣ" | "e^x" | "exp" => Self::Exp,
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "sin⁻¹" | "asin" => Self::Asin,
            "cos⁻¹" | "acos" => Self::Acos,
            "tan⁻¹" | "atan" => Self::Atan,
            _ => Self::Unknown,
        }
    }
}

impl NilaryOp {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "π" | "pi" => Self::Pi,
            "e" => Self::E,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every canonical label printed by `Display` must map back to its tag.
    #[test]
    fn test_canonical_labels_resolve() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_label(&op.to_string()), op);
        }
        for op in UnaryOp::ALL {
            assert_eq!(UnaryOp::from_label(&op.to_string()), op);
        }
        for op in NilaryOp::ALL {
            assert_eq!(NilaryOp::from_label(&op.to_string()), op);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(BinaryOp::from_label("÷"), BinaryOp::Divide);
        assert_eq!(BinaryOp::from_label("divide"), BinaryOp::Divide);
        assert_eq!(BinaryOp::from_label("root"), BinaryOp::Root);
        assert_eq!(UnaryOp::from_label("sqrt"), UnaryOp::SquareRoot);
        assert_eq!(NilaryOp::from_label("pi"), NilaryOp::Pi);
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(BinaryOp::from_label("%"), BinaryOp::Unknown);
        assert_eq!(BinaryOp::from_label("sin"), BinaryOp::Unknown);
        assert_eq!(UnaryOp::from_label("+"), UnaryOp::Unknown);
        assert_eq!(UnaryOp::from_label("SIN"), UnaryOp::Unknown);
        assert_eq!(NilaryOp::from_label(""), NilaryOp::Unknown);
    }
}
