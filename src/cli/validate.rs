//! Turns a scanned command line into an executable [`Request`].

use crate::cli::parser::RawRequest;
use crate::debug_event;
use crate::error::{CalcError, CalcResult};
use crate::operation::{Operation, Request};
use crate::tool::Tool;

/// Validate a raw request against a tool profile.
///
/// Checks run in a fixed order and the first failure is returned:
/// operation present, operation supported by the tool, operand count in range.
pub fn validate(tool: &Tool, raw: RawRequest) -> CalcResult<Request> {
    let name = match raw.operation.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(CalcError::MissingOperation),
    };

    let operation = Operation::from_name(name)
        .filter(|op| tool.supports(*op))
        .ok_or_else(|| CalcError::UnknownOperation(name.to_string()))?;

    let count = raw.operands.len();
    if !tool.operand_range().contains(&count) {
        return Err(CalcError::InvalidOperandCount {
            count,
            min: tool.min_operands,
            max: tool.max_operands,
        });
    }

    debug_event!("validate", "accepted", "{operation} with {count} operands");

    Ok(Request {
        operation,
        operands: raw.operands,
    })
}
