//! Supported operations and the validated request type.

use std::fmt;

/// A named computation selected with `-o`/`--operation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Multiply,
    Divide,
    Mean,
    Median,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Multiply,
        Operation::Divide,
        Operation::Mean,
        Operation::Median,
    ];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Mean => "mean",
            Self::Median => "median",
        }
    }

    /// Keyword that opens the result line.
    pub fn result_label(self) -> &'static str {
        match self {
            Self::Multiply => "Результат умножения",
            Self::Divide => "Результат деления",
            Self::Mean => "Среднее арифметическое",
            Self::Median => "Медиана",
        }
    }

    /// Short description used in help text.
    pub fn description(self) -> &'static str {
        match self {
            Self::Multiply => "умножение",
            Self::Divide => "деление первого операнда на все остальные",
            Self::Mean => "среднее арифметическое",
            Self::Median => "медиана",
        }
    }

    /// Operator placed between operands when the expression is echoed.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Multiply => Some("×"),
            Self::Divide => Some("÷"),
            Self::Mean | Self::Median => None,
        }
    }

    /// Exact, case-sensitive lookup by command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A request that passed validation for some tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub operation: Operation,
    pub operands: Vec<f64>,
}
