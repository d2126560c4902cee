//! Serial device interfaces, reduced to what the reset
//! handshake needs: open at a given rate, drive RTS, close.
use std::path::Path;

use crate::hal::time::Bps;

/// Opens serial devices by path, always as 8N1 without flow control.
pub trait Open {
    type Port: ControlLines;
    type Error: std::error::Error + Send + Sync + 'static;

    fn open(&mut self, path: &Path, baud_rate: Bps) -> Result<Self::Port, Self::Error>;
}

/// Modem control lines of an open port.
pub trait ControlLines {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Drives the request-to-send line. `true` asserts it.
    fn set_rts(&mut self, level: bool) -> Result<(), Self::Error>;

    /// Releases the device. On USB CDC targets this is what
    /// the bootloader observes, so it must not be deferred.
    fn close(self);
}
