use serde::{Deserialize, Serialize};

pub const DEFAULT_PROGRAM: &str = "avrdude";
pub const DEFAULT_CONFIG_FILE: &str = "/usr/share/brainboxes/bb-arduino/avrdude.bb400.conf";

/// External flashing tool and the way it is launched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashTool {
    pub program: String,
    /// Passed to the tool as `-C<config_file>`.
    pub config_file: String,
    pub privilege: Privilege,
}

impl Default for FlashTool {
    fn default() -> Self {
        Self {
            program: String::from(DEFAULT_PROGRAM),
            config_file: String::from(DEFAULT_CONFIG_FILE),
            privilege: Privilege::default(),
        }
    }
}

/// How the flash tool gains access to the programmer and serial device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Privilege {
    /// Run through `sudo`.
    Sudo,
    /// Run directly, for hosts where the invoking user owns the devices.
    Unprivileged,
}

impl Default for Privilege {
    fn default() -> Self { Privilege::Sudo }
}

impl Privilege {
    /// Program that wraps the tool, if any.
    pub fn wrapper(&self) -> Option<&'static str> {
        match self {
            Privilege::Sudo => Some("sudo"),
            Privilege::Unprivileged => None,
        }
    }
}
