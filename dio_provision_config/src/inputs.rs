use serde::{Deserialize, Serialize};

pub const DEFAULT_DEVICE: &str = "/dev/serial/by-id/usb-Arduino_LLC_Arduino_Micro-if00";
pub const DEFAULT_FIRMWARE: &str = "bb400r2_dio.ino.hex";
pub const DEFAULT_BOOTLOADER: &str = "caterina_2341_0037_noblink.hex";

/// Fallbacks for the positional command line arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    pub device: String,
    pub firmware: String,
    pub bootloader: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            device: String::from(DEFAULT_DEVICE),
            firmware: String::from(DEFAULT_FIRMWARE),
            bootloader: String::from(DEFAULT_BOOTLOADER),
        }
    }
}
