//! Command lines for the external flash tool (avrdude).
//!
//! The tool is run twice per board. The first run goes through the
//! in-system programmer and writes the bootloader and fuses; the
//! second goes through the bootloader itself over the serial port
//! and writes the application.
use std::path::Path;

use dio_provision_config::Configuration;

use crate::hal::process::Invocation;

pub struct FlashTool<'a> {
    configuration: &'a Configuration,
}

impl<'a> FlashTool<'a> {
    pub fn new(configuration: &'a Configuration) -> Self { Self { configuration } }

    /// Writes `image` to program memory through the device programmer and
    /// sets the extended, high and low fuses.
    pub fn bootloader(&self, image: &Path) -> Invocation {
        let target = &self.configuration.target;
        let fuses = &target.fuses;
        self.base()
            .arg(format!("-c{}", target.programmer))
            .arg(format!("-p{}", target.part))
            .arg("-u")
            .arg(format!("-Uflash:w:{}:i", image.display()))
            .arg(format!("-Uefuse:w:{:#04x}:m", fuses.extended))
            .arg(format!("-Uhfuse:w:{:#04x}:m", fuses.high))
            .arg(format!("-Ulfuse:w:{:#04x}:m", fuses.low))
    }

    /// Writes `image` to program memory through the serial bootloader
    /// listening on `device`, without a chip erase.
    pub fn application(&self, device: &Path, image: &Path) -> Invocation {
        let target = &self.configuration.target;
        self.base()
            .arg(format!("-p{}", target.part))
            .arg(format!("-c{}", target.serial_protocol))
            .arg(format!("-P{}", device.display()))
            .arg(format!("-b{}", self.configuration.serial.upload_baud))
            .arg("-D")
            .arg(format!("-Uflash:w:{}:i", image.display()))
    }

    /// The tool, its privilege wrapper and its configuration file.
    fn base(&self) -> Invocation {
        let tool = &self.configuration.tool;
        let invocation = match tool.privilege.wrapper() {
            Some(wrapper) => Invocation::new(wrapper).arg(tool.program.as_str()),
            None => Invocation::new(tool.program.as_str()),
        };
        invocation.arg(format!("-C{}", tool.config_file))
    }
}
