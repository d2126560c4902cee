use super::{Event, Journal};
use crate::hal::time::{Delay, Milliseconds};

pub struct FakeDelay {
    journal: Journal,
}

impl FakeDelay {
    pub fn new(journal: &Journal) -> Self { Self { journal: journal.clone() } }
}

impl Delay for FakeDelay {
    fn delay<T: Into<Milliseconds>>(&mut self, period: T) {
        self.journal.record(Event::Delayed(period.into()));
    }
}
