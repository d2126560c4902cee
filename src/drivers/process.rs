use std::process::Command;

use log::debug;

use crate::{
    error::Error,
    hal::process::{Execute, ExitStatus, Invocation},
};

/// Runs programs as children of this process, inheriting its
/// standard streams so the tool's progress output reaches the user.
#[derive(Default)]
pub struct HostProcess;

impl Execute for HostProcess {
    fn execute(&mut self, invocation: &Invocation) -> Result<ExitStatus, Error> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|cause| Error::ToolLaunchFailed {
                program: invocation.program.clone(),
                cause,
            })?;
        debug!("{} finished with {}", invocation.program, status);
        Ok(exit_status(status))
    }
}

/// Exit codes keep their low byte; death by signal maps to
/// `128 + signal` as a shell would report it.
fn exit_status(status: std::process::ExitStatus) -> ExitStatus {
    if let Some(code) = status.code() {
        return ExitStatus(code & 0xff);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitStatus(128 + (signal & 0x7f));
        }
    }

    ExitStatus(1)
}
