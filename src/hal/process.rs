//! External process execution.
use std::fmt::{self, Display, Formatter};

use crate::error::Error;

/// A fully formed command line: a program and its argument vector.
///
/// Arguments are handed to the program as-is, no shell is involved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        self.args.iter().try_for_each(|arg| write!(f, " {}", arg))
    }
}

/// Exit status of a finished process, reduced to the range a
/// process can itself exit with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    pub fn success(&self) -> bool { self.0 == 0 }
    pub fn code(&self) -> i32 { self.0 }
}

impl Display for ExitStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Runs external programs to completion.
pub trait Execute {
    /// Blocks until the program exits. Only a failure to start the
    /// program is an error; a non-zero exit is reported in the status.
    fn execute(&mut self, invocation: &Invocation) -> Result<ExitStatus, Error>;
}
