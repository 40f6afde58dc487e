use std::fmt;

use super::{BinaryOp, NilaryOp, Operation, UnaryOp};

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Power => "yˣ",
            BinaryOp::Root => "ˣ√y",
            BinaryOp::Unknown => "?",
        };
        f.write_str(label)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnaryOp::Square => "x²",
            UnaryOp::SquareRoot => "√",
            UnaryOp::Log10 => "log",
            UnaryOp::Ln => "ln",
            UnaryOp::Exp10 => "10ˣ",
            UnaryOp::Exp => "eˣ",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Asin => "sin⁻¹",
            UnaryOp::Acos => "cos⁻¹",
            UnaryOp::Atan => "tan⁻¹",
            UnaryOp::Unknown => "?",
        };
        f.write_str(label)
    }
}

impl fmt::Display for NilaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NilaryOp::Pi => "π",
            NilaryOp::E => "e",
            NilaryOp::Unknown => "?",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Binary(op) => op.fmt(f),
            Operation::Unary(op) => op.fmt(f),
            Operation::Nilary(op) => op.fmt(f),
        }
    }
}
