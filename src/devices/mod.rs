//! Modules with the provisioning logic, laid on top of the
//! abstract interfaces in `hal`. Devices are generic; the host
//! implementations they run against live in `drivers`.

pub mod device_path;
pub mod flash_tool;
pub mod reset;
pub mod sequencer;
