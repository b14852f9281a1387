//! Operand calculators.
//!
//! Library behind the `calculator` (multiply/divide over 5-7 operands) and
//! `statistics` (mean/median over 8-10 operands) binaries. Each invocation is
//! a linear pipeline: parse tokens, validate the request, evaluate, print.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod evaluator;
pub mod io;
pub mod logging;
pub mod operation;
pub mod tool;

pub use config::{LoggingConfig, Settings};
pub use error::{CalcError, CalcResult, ErrorStage};
pub use evaluator::{Evaluation, evaluate};
pub use io::ExitCode;
pub use operation::{Operation, Request};
pub use tool::Tool;
