//! Pure numeric functions behind the four operations.

use crate::debug_event;
use crate::error::{CalcError, CalcResult};
use crate::operation::{Operation, Request};

/// Outcome of evaluating a validated request.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub value: f64,
}

/// Left-to-right product, starting from `1.0`.
pub fn product(operands: &[f64]) -> f64 {
    operands.iter().product()
}

/// Divide the first operand by each of the remaining ones in order.
pub fn chained_division(operands: &[f64]) -> CalcResult<f64> {
    let (first, rest) = match operands {
        [first, rest @ ..] if !rest.is_empty() => (*first, rest),
        _ => return Err(CalcError::InsufficientOperands),
    };

    rest.iter().try_fold(first, |acc, &divisor| {
        if divisor == 0.0 {
            Err(CalcError::DivisionByZero)
        } else {
            Ok(acc / divisor)
        }
    })
}

/// Arithmetic mean with plain `f64` accumulation.
///
/// Callers guarantee a non-empty slice; an empty one yields NaN.
pub fn mean(operands: &[f64]) -> f64 {
    operands.iter().sum::<f64>() / operands.len() as f64
}

/// Median of a sorted copy; averages the middle pair for even lengths.
///
/// Callers guarantee a non-empty slice; an empty one yields NaN.
pub fn median(operands: &[f64]) -> f64 {
    if operands.is_empty() {
        return f64::NAN;
    }

    let mut sorted = operands.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Evaluate a validated request.
pub fn evaluate(request: &Request) -> CalcResult<Evaluation> {
    let operands = &request.operands;
    let value = match request.operation {
        Operation::Multiply => product(operands),
        Operation::Divide => chained_division(operands)?,
        Operation::Mean => mean(operands),
        Operation::Median => median(operands),
    };

    debug_event!(
        "evaluator",
        "computed",
        "{} over {} operands = {value}",
        request.operation,
        operands.len()
    );

    Ok(Evaluation {
        operation: request.operation,
        operands: operands.clone(),
        value,
    })
}
