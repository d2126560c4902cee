use serde::{Deserialize, Serialize};

/// Settle delays around the reset handshake, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// After the bootloader is written, before the serial port is touched.
    pub post_bootloader_ms: u32,
    /// After the reset handshake, before the application upload.
    pub post_reset_ms: u32,
}

impl Default for Timing {
    fn default() -> Self { Self { post_bootloader_ms: 1000, post_reset_ms: 1000 } }
}
