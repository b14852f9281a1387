//! Command-line front end shared by both calculators.
//!
//! Token scanning, request validation and the run loop that ties them to
//! evaluation and output.

pub mod parser;
pub mod run;
pub mod validate;

pub use parser::{Invocation, RawRequest, parse_args};
pub use run::{Outcome, calculate, run};
pub use validate::validate;
