//! # Digital I/O Board Provisioning Library
//!
//! This crate contains the functionality of the provisioning
//! sequencer in library form: flashing the bootloader and fuses
//! through an in-system programmer, resetting the board into its
//! serial bootloader and flashing the application through it.

pub mod utilities {
    pub mod guard;
}

pub mod devices;
pub mod drivers;
pub mod error;
pub mod hal;
