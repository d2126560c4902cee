//! Serial reset handshake.
//!
//! Opening the board's CDC port at 1200 baud with RTS asserted and
//! closing it again makes the running firmware jump into its bootloader,
//! which then waits on the same port for the upload. No data is sent.
use std::path::Path;

use log::info;

use crate::{
    error::{Error, SerialStep},
    hal::{
        serial::{ControlLines, Open},
        time::Bps,
    },
    utilities::guard::Guard,
};

/// Opens `path` at `baud_rate`, asserts RTS and closes the port again.
///
/// The port is closed before this returns, whether or not asserting RTS
/// succeeded.
pub fn trigger<O: Open>(serial: &mut O, path: &Path, baud_rate: Bps) -> Result<(), Error> {
    info!("Resetting device on {}", path.display());
    let port = serial.open(path, baud_rate).map_err(|cause| Error::SerialFailed {
        path: path.to_owned(),
        step: SerialStep::Open,
        cause: Box::new(cause),
    })?;

    let mut session = Guard::new(port, <O::Port as ControlLines>::close);
    let asserted = session.set_rts(true).map_err(|cause| Error::SerialFailed {
        path: path.to_owned(),
        step: SerialStep::AssertRts,
        cause: Box::new(cause),
    });
    drop(session);
    asserted
}
