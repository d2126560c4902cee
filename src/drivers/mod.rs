//! Host implementations of the hal interfaces: processes through
//! `std::process`, serial devices through the `serial` crate, and
//! the local filesystem and clock.

pub mod fs;
pub mod process;
pub mod serial;
pub mod time;
