//! Provisioning sequence.
//!
//! ```text
//! bootloader-flash → [settle] → resolve-path → reset-trigger → [settle] → application-flash
//! ```
//!
//! A failed bootloader flash or a missing device ends the sequence
//! early. Once reached, the application flash always decides the
//! final status.
use std::path::PathBuf;

use dio_provision_config::Configuration;
use log::{info, warn};

use super::{device_path, flash_tool::FlashTool, reset};
use crate::{
    error::Error,
    hal::{
        fs::Links,
        process::{Execute, ExitStatus, Invocation},
        serial::Open,
        time::{Delay, U32Ext},
    },
};

/// Files and device a board is provisioned from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Serial device, possibly a link to the actual tty.
    pub device: PathBuf,
    pub firmware: PathBuf,
    pub bootloader: PathBuf,
}

impl Request {
    /// Request made of the configured default inputs.
    pub fn from_configuration(configuration: &Configuration) -> Self {
        let inputs = &configuration.inputs;
        Self {
            device: PathBuf::from(&inputs.device),
            firmware: PathBuf::from(&inputs.firmware),
            bootloader: PathBuf::from(&inputs.bootloader),
        }
    }
}

pub struct Sequencer<'a, X: Execute, S: Open, L: Links, D: Delay> {
    configuration: &'a Configuration,
    tool: X,
    serial: S,
    links: L,
    delay: D,
}

impl<'a, X: Execute, S: Open, L: Links, D: Delay> Sequencer<'a, X, S, L, D> {
    pub fn new(configuration: &'a Configuration, tool: X, serial: S, links: L, delay: D) -> Self {
        Self { configuration, tool, serial, links, delay }
    }

    /// Provisions one board.
    ///
    /// Returns the exit status of the last flash tool run: the bootloader
    /// run if it failed, otherwise the application run. A missing device,
    /// a serial failure or a tool that cannot be launched is an error.
    pub fn run(&mut self, request: &Request) -> Result<ExitStatus, Error> {
        let configuration = self.configuration;
        let flash_tool = FlashTool::new(configuration);

        info!("Programming bootloader:");
        let status = self.execute(&flash_tool.bootloader(&request.bootloader))?;
        if !status.success() {
            warn!("Bootloader programming failed, application will not be flashed");
            return Ok(status);
        }

        self.delay.delay(configuration.timing.post_bootloader_ms.ms());

        let device = device_path::resolve(&self.links, &request.device)
            .path(&request.device)
            .ok_or_else(|| Error::DeviceMissing(request.device.clone()))?;

        reset::trigger(&mut self.serial, &device, configuration.serial.reset_baud.bps())?;
        self.delay.delay(configuration.timing.post_reset_ms.ms());

        info!("Programming application:");
        self.execute(&flash_tool.application(&device, &request.firmware))
    }

    fn execute(&mut self, invocation: &Invocation) -> Result<ExitStatus, Error> {
        info!("$ {}", invocation);
        let status = self.tool.execute(invocation)?;
        info!("Exit code={}", status);
        Ok(status)
    }
}
