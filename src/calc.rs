// Calculator: the four binary operations offered by the calculator menu.

use std::fmt;

/// Binary operation selectable from the calculator menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Result of applying an operation. Dividing by zero produces a sentinel
/// instead of a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    DivisionByZero,
}

impl Operation {
    /// Name shown in the menu and in the result line.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    pub fn all() -> [Operation; 4] {
        [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ]
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> Outcome {
        match self {
            Operation::Add => Outcome::Value(lhs + rhs),
            Operation::Subtract => Outcome::Value(lhs - rhs),
            Operation::Multiply => Outcome::Value(lhs * rhs),
            // -0.0 == 0.0, so both signed zeros hit the sentinel
            Operation::Divide if rhs == 0.0 => Outcome::DivisionByZero,
            Operation::Divide => Outcome::Value(lhs / rhs),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{}", v),
            Outcome::DivisionByZero => f.write_str("Error: Division by zero"),
        }
    }
}

/// Format the line printed after a calculation, e.g.
/// `Result: 2 Add 3 = 5`.
pub fn result_line(op: Operation, lhs: f64, rhs: f64) -> String {
    format!("Result: {} {} {} = {}", lhs, op.name(), rhs, op.apply(lhs, rhs))
}
