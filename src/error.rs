//! Error types for parsing, validating and evaluating a calculation.

use thiserror::Error;

/// Where in the pipeline an error was raised.
///
/// Evaluation failures are reported with a different prefix than
/// parse and validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Input,
    Evaluation,
}

/// Every way a single invocation can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("не указана операция")]
    MissingOperation,

    #[error("после -o должно следовать название операции")]
    MissingOperationValue,

    #[error("неизвестная операция: {0}")]
    UnknownOperation(String),

    #[error("неверный формат операнда: {0}")]
    InvalidOperandFormat(String),

    #[error("неверное количество операндов: {count}")]
    InvalidOperandCount { count: usize, min: usize, max: usize },

    #[error("Деление на ноль невозможно")]
    DivisionByZero,

    #[error("Для деления требуется хотя бы 2 операнда")]
    InsufficientOperands,
}

impl CalcError {
    pub fn stage(&self) -> ErrorStage {
        match self {
            Self::DivisionByZero | Self::InsufficientOperands => ErrorStage::Evaluation,
            _ => ErrorStage::Input,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_offending_values() {
        assert_eq!(
            CalcError::InvalidOperandFormat("abc".to_string()).to_string(),
            "неверный формат операнда: abc"
        );
        assert_eq!(
            CalcError::UnknownOperation("add".to_string()).to_string(),
            "неизвестная операция: add"
        );
        let count = CalcError::InvalidOperandCount {
            count: 3,
            min: 5,
            max: 7,
        };
        assert_eq!(count.to_string(), "неверное количество операндов: 3");
    }

    #[test]
    fn test_only_arithmetic_failures_are_evaluation_stage() {
        assert_eq!(CalcError::DivisionByZero.stage(), ErrorStage::Evaluation);
        assert_eq!(
            CalcError::InsufficientOperands.stage(),
            ErrorStage::Evaluation
        );
        assert_eq!(CalcError::MissingOperation.stage(), ErrorStage::Input);
        assert_eq!(CalcError::MissingOperationValue.stage(), ErrorStage::Input);
    }
}
