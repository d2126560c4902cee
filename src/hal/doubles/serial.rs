use std::path::{Path, PathBuf};

use super::{error::FakeError, Event, Journal};
use crate::hal::{
    serial::{ControlLines, Open},
    time::Bps,
};

#[derive(Clone, Debug, Default)]
pub struct FakeSerial {
    journal: Journal,
    fail_open: bool,
    fail_rts: bool,
}

impl FakeSerial {
    pub fn new(journal: &Journal) -> Self { Self { journal: journal.clone(), ..Default::default() } }

    pub fn failing_open(self) -> Self { Self { fail_open: true, ..self } }

    pub fn failing_rts(self) -> Self { Self { fail_rts: true, ..self } }
}

pub struct FakePort {
    journal: Journal,
    path: PathBuf,
    fail_rts: bool,
}

impl Open for FakeSerial {
    type Port = FakePort;
    type Error = FakeError;

    fn open(&mut self, path: &Path, baud_rate: Bps) -> Result<Self::Port, Self::Error> {
        if self.fail_open {
            return Err(FakeError);
        }
        self.journal.record(Event::Opened { path: path.to_owned(), baud_rate });
        Ok(FakePort { journal: self.journal.clone(), path: path.to_owned(), fail_rts: self.fail_rts })
    }
}

impl ControlLines for FakePort {
    type Error = FakeError;

    fn set_rts(&mut self, level: bool) -> Result<(), Self::Error> {
        if self.fail_rts {
            return Err(FakeError);
        }
        self.journal.record(Event::Rts(level));
        Ok(())
    }

    fn close(self) { self.journal.record(Event::Closed(self.path.clone())); }
}
