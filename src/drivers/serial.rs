use std::path::Path;

use serial::{SerialPort, SystemPort};

use crate::hal::{self, time::Bps};

/// Opens serial devices through the operating system's tty layer.
#[derive(Default)]
pub struct SystemSerial;

pub struct ResetPort(SystemPort);

impl hal::serial::Open for SystemSerial {
    type Port = ResetPort;
    type Error = serial::Error;

    fn open(&mut self, path: &Path, baud_rate: Bps) -> Result<Self::Port, Self::Error> {
        use serial::*;

        let mut port = serial::open(path)?;
        port.reconfigure(&|s| {
            s.set_baud_rate(BaudRate::from_speed(baud_rate.0 as usize))?;
            s.set_char_size(Bits8);
            s.set_parity(ParityNone);
            s.set_stop_bits(Stop1);
            s.set_flow_control(FlowNone);
            Ok(())
        })?;

        Ok(ResetPort(port))
    }
}

impl hal::serial::ControlLines for ResetPort {
    type Error = serial::Error;

    fn set_rts(&mut self, level: bool) -> Result<(), Self::Error> { self.0.set_rts(level) }

    fn close(self) { drop(self.0) }
}
