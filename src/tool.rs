//! Fixed profiles for the two calculator programs.
//!
//! A [`Tool`] captures everything that differs between the binaries: the
//! operations they accept, the operand range, how help is requested and
//! which exit code help or an empty command line produce.

use std::ops::RangeInclusive;

use crate::io::ExitCode;
use crate::operation::Operation;

/// Where help tokens are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpScope {
    /// Only when the help token is the first argument.
    FirstToken,
    /// At any position while scanning.
    Anywhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Binary name used in usage lines.
    pub program: &'static str,
    /// First line of the help text.
    pub title: &'static str,
    pub operations: &'static [Operation],
    pub min_operands: usize,
    pub max_operands: usize,
    pub help_tokens: &'static [&'static str],
    pub help_scope: HelpScope,
    pub help_exit: ExitCode,
    /// Exit code when the program is run without arguments.
    pub empty_exit: ExitCode,
    /// Echo the operand expression before the result.
    pub echo_expression: bool,
    pub decimals: usize,
    /// Follow input diagnostics with a pointer to `--help`.
    pub help_hint: bool,
    /// Example invocations shown in the help text.
    pub examples: &'static [&'static str],
}

impl Tool {
    pub const MULTIPLICATIVE: Tool = Tool {
        program: "calculator",
        title: "Мультипликативный калькулятор (вариант 19)",
        operations: &[Operation::Multiply, Operation::Divide],
        min_operands: 5,
        max_operands: 7,
        help_tokens: &["-h", "--help"],
        help_scope: HelpScope::FirstToken,
        help_exit: ExitCode::GeneralError,
        empty_exit: ExitCode::GeneralError,
        echo_expression: true,
        decimals: 6,
        help_hint: false,
        examples: &[
            "calculator -o multiply 2 3 4 5 6",
            "calculator -o divide 100 2 5 2 2",
        ],
    };

    pub const STATISTICS: Tool = Tool {
        program: "statistics",
        title: "Калькулятор описательной статистики",
        operations: &[Operation::Mean, Operation::Median],
        min_operands: 8,
        max_operands: 10,
        help_tokens: &["-h", "--help", "/?"],
        help_scope: HelpScope::Anywhere,
        help_exit: ExitCode::Success,
        empty_exit: ExitCode::Success,
        echo_expression: false,
        decimals: 4,
        help_hint: true,
        examples: &[
            "statistics -o mean 1 2 3 4 5 6 7 8",
            "statistics --operation median 5 1 4 2 8 7 3 6 9",
        ],
    };

    pub fn supports(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }

    pub fn operand_range(&self) -> RangeInclusive<usize> {
        self.min_operands..=self.max_operands
    }

    pub fn is_help_token(&self, token: &str) -> bool {
        self.help_tokens.contains(&token)
    }
}
