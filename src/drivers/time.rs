use std::{thread, time::Duration};

use crate::hal::time::{Delay, Milliseconds};

/// Delays by parking the calling thread.
#[derive(Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay<T: Into<Milliseconds>>(&mut self, period: T) {
        thread::sleep(Duration::from(period.into()));
    }
}
