use std::collections::VecDeque;

use super::{Event, Journal};
use crate::{
    error::Error,
    hal::process::{Execute, ExitStatus, Invocation},
};

/// Returns pre-scripted exit statuses in order, recording every invocation.
pub struct ScriptedTool {
    journal: Journal,
    statuses: VecDeque<ExitStatus>,
    launchable: bool,
}

impl ScriptedTool {
    pub fn new(journal: &Journal, statuses: &[i32]) -> Self {
        Self {
            journal: journal.clone(),
            statuses: statuses.iter().cloned().map(ExitStatus).collect(),
            launchable: true,
        }
    }

    /// A tool that cannot be started, as if missing from `PATH`.
    pub fn missing(journal: &Journal) -> Self {
        Self { launchable: false, ..Self::new(journal, &[]) }
    }
}

impl Execute for ScriptedTool {
    fn execute(&mut self, invocation: &Invocation) -> Result<ExitStatus, Error> {
        if !self.launchable {
            return Err(Error::ToolLaunchFailed {
                program: invocation.program.clone(),
                cause: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        self.journal.record(Event::Executed(invocation.clone()));
        Ok(self.statuses.pop_front().expect("Tool executed more times than scripted"))
    }
}
