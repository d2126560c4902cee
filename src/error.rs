//! Error type for the provisioning sequencer as a whole.
use std::{
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};

/// Boxed cause coming from a serial driver.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Step of the reset handshake that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SerialStep {
    Open,
    AssertRts,
}

impl Display for SerialStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SerialStep::Open => write!(f, "open"),
            SerialStep::AssertRts => write!(f, "assert RTS on"),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// The serial device path does not exist (device unplugged or not enumerated yet).
    DeviceMissing(PathBuf),
    SerialFailed { path: PathBuf, step: SerialStep, cause: Cause },
    /// The flash tool could not be started at all.
    ToolLaunchFailed { program: String, cause: io::Error },
}

impl Error {
    /// Process exit status that reports this error.
    pub fn exit_code(&self) -> i32 { 1 }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            DeviceMissing(path) => write!(f, "{:?} does not exist!", path),
            SerialFailed { path, step, cause } => {
                write!(f, "Failed to {} serial port {}: {}", step, path.display(), cause)
            }
            ToolLaunchFailed { program, cause } => {
                write!(f, "Failed to launch {}: {}", program, cause)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DeviceMissing(_) => None,
            Error::SerialFailed { cause, .. } => Some(cause.as_ref()),
            Error::ToolLaunchFailed { cause, .. } => Some(cause),
        }
    }
}
