//! Host Abstraction Layer, containing interfaces for the
//! collaborators the sequencer drives: the external flash
//! tool, the serial device, the filesystem and the clock.

pub mod fs;
pub mod process;
pub mod serial;
pub mod time;

#[cfg(test)]
#[doc(hidden)]
pub mod doubles;
