//! Test doubles for the hal interfaces. All of them report to a
//! shared [`Journal`] so tests can assert on the relative order of
//! process runs, serial activity and delays.
use std::{cell::RefCell, path::PathBuf, rc::Rc};

use crate::hal::{process::Invocation, time::{Bps, Milliseconds}};

pub mod error;
pub mod fs;
pub mod process;
pub mod serial;
pub mod time;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Executed(Invocation),
    Opened { path: PathBuf, baud_rate: Bps },
    Rts(bool),
    Closed(PathBuf),
    Delayed(Milliseconds),
}

#[derive(Clone, Debug, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn record(&self, event: Event) { self.0.borrow_mut().push(event); }
    pub fn events(&self) -> Vec<Event> { self.0.borrow().clone() }

    pub fn executed(&self) -> Vec<Invocation> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Executed(invocation) => Some(invocation.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn opened_any_port(&self) -> bool {
        self.0.borrow().iter().any(|e| matches!(e, Event::Opened { .. }))
    }
}
