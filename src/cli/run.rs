//! Drives one invocation: parse, validate, evaluate, print.

use std::io;

use crate::cli::parser::{self, Invocation};
use crate::cli::validate::validate;
use crate::debug_event;
use crate::display::{diagnostic_lines, help_text, result_line};
use crate::error::CalcResult;
use crate::evaluator::{Evaluation, evaluate};
use crate::io::{ExitCode, OutputManager};
use crate::tool::Tool;

/// What a successful pass through the pipeline produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Help was shown; carries the exit code the tool uses for it.
    Help(ExitCode),
    Computed(Evaluation),
}

/// Run the pipeline without touching any stream.
pub fn calculate<S: AsRef<str>>(tool: &Tool, args: &[S]) -> CalcResult<Outcome> {
    match parser::parse_args(tool, args)? {
        Invocation::Empty => Ok(Outcome::Help(tool.empty_exit)),
        Invocation::Help => Ok(Outcome::Help(tool.help_exit)),
        Invocation::Calculate(raw) => {
            let request = validate(tool, raw)?;
            Ok(Outcome::Computed(evaluate(&request)?))
        }
    }
}

/// Run one invocation of `tool` and report to `output`.
///
/// Returns the exit code for the process.
pub fn run<S: AsRef<str>>(tool: &Tool, args: &[S], output: &mut OutputManager) -> ExitCode {
    debug_event!("run", "start", "{} with {} arguments", tool.program, args.len());

    let code = match execute(tool, args, output) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("[run] failed to write output: {e}");
            ExitCode::GeneralError
        }
    };

    debug_event!("run", "finished", "success={}", code.is_success());
    code
}

fn execute<S: AsRef<str>>(
    tool: &Tool,
    args: &[S],
    output: &mut OutputManager,
) -> io::Result<ExitCode> {
    match calculate(tool, args) {
        Ok(Outcome::Help(code)) => {
            output.print(&help_text(tool))?;
            Ok(code)
        }
        Ok(Outcome::Computed(evaluation)) => {
            output.println(&result_line(tool, &evaluation))?;
            Ok(ExitCode::Success)
        }
        Err(error) => {
            debug_event!("run", "failed", "{error:?}");
            for line in diagnostic_lines(tool, &error) {
                output.eprintln(&line)?;
            }
            Ok(ExitCode::GeneralError)
        }
    }
}
