use serde::{Deserialize, Serialize};

/// Microcontroller being provisioned and the programmers that reach it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    /// Part id (`-p`).
    pub part: String,
    /// Programmer id used for the bootloader stage (`-c`).
    pub programmer: String,
    /// Programmer id of the serial bootloader protocol (`-c`).
    pub serial_protocol: String,
    pub fuses: Fuses,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            part: String::from("atmega32u4"),
            programmer: String::from("bb400dio"),
            serial_protocol: String::from("avr109"),
            fuses: Fuses::default(),
        }
    }
}

/// Fuse bytes written alongside the bootloader.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fuses {
    pub extended: u8,
    pub high: u8,
    pub low: u8,
}

impl Default for Fuses {
    fn default() -> Self { Self { extended: 0xcb, high: 0xd8, low: 0xff } }
}

/// Serial line settings for the reset handshake and the upload.
///
/// Opening the port at `reset_baud` with RTS asserted and closing it again is
/// the signal the Caterina bootloader watches for; no data is exchanged at
/// that rate. The line is always 8N1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfiguration {
    pub reset_baud: u32,
    pub upload_baud: u32,
}

impl Default for SerialConfiguration {
    fn default() -> Self { Self { reset_baud: 1200, upload_baud: 57_600 } }
}
