//! Output manager that owns the result and diagnostic streams.

use std::io::{self, Write};

/// Routes result lines to stdout and diagnostics to stderr.
///
/// Both streams are injectable so a whole run can be captured in tests.
pub struct OutputManager {
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    pub fn new(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self { stdout, stderr }
    }

    /// Manager bound to the process streams.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Write text to stdout as-is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }

    pub fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout, "{line}")?;
        self.stdout.flush()
    }

    pub fn eprintln(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stderr, "{line}")?;
        self.stderr.flush()
    }
}
