//! Input/Output handling for the calculators.
//!
//! This module provides:
//! - Exit codes shared by both binaries
//! - Writer plumbing so a run can target real or in-memory streams

pub mod exit_code;
pub mod output;

pub use exit_code::ExitCode;
pub use output::OutputManager;
