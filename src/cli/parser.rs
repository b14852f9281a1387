//! Command-line token scanner.
//!
//! Tokens are consumed left to right. `-o`/`--operation` takes the next token
//! verbatim, help tokens short-circuit according to the tool's [`HelpScope`],
//! and everything else must be a floating-point literal. The first failure
//! stops the scan.

use crate::debug_event;
use crate::error::{CalcError, CalcResult};
use crate::tool::{HelpScope, Tool};

const OPERATION_FLAGS: [&str; 2] = ["-o", "--operation"];

/// Operation name and operands as written, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRequest {
    pub operation: Option<String>,
    pub operands: Vec<f64>,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// No arguments at all.
    Empty,
    /// A help token was recognised.
    Help,
    Calculate(RawRequest),
}

/// Scan the arguments that follow the program name.
pub fn parse_args<S: AsRef<str>>(tool: &Tool, args: &[S]) -> CalcResult<Invocation> {
    let Some(first) = args.first() else {
        return Ok(Invocation::Empty);
    };
    if tool.is_help_token(first.as_ref()) {
        return Ok(Invocation::Help);
    }

    let mut request = RawRequest::default();
    let mut tokens = args.iter().map(|arg| arg.as_ref());

    while let Some(token) = tokens.next() {
        if OPERATION_FLAGS.contains(&token) {
            let name = tokens.next().ok_or(CalcError::MissingOperationValue)?;
            request.operation = Some(name.to_string());
            continue;
        }

        if tool.help_scope == HelpScope::Anywhere && tool.is_help_token(token) {
            return Ok(Invocation::Help);
        }

        request.operands.push(parse_operand(token)?);
    }

    debug_event!(
        "parser",
        "scanned",
        "operation={:?} operands={}",
        request.operation,
        request.operands.len()
    );

    Ok(Invocation::Calculate(request))
}

/// Parse a single operand literal.
///
/// Literals outside the `f64` range are rejected instead of saturating to
/// infinity or collapsing to zero.
pub fn parse_operand(token: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidOperandFormat(token.to_string());
    let literal = token.trim();
    let value = literal.parse::<f64>().map_err(|_| invalid())?;

    if value.is_infinite() && !is_infinity_literal(literal) {
        return Err(invalid());
    }
    if value == 0.0 && has_nonzero_mantissa(literal) {
        return Err(invalid());
    }
    Ok(value)
}

fn is_infinity_literal(literal: &str) -> bool {
    let unsigned = literal.trim_start_matches(['+', '-']).to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

fn has_nonzero_mantissa(literal: &str) -> bool {
    literal
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.chars().any(|c| matches!(c, '1'..='9')))
}
