//! Serial device path resolution.
//!
//! Boards are normally addressed through a persistent udev link such
//! as `/dev/serial/by-id/usb-Arduino_LLC_Arduino_Micro-if00`, which
//! points at a `ttyACM*` node relative to its own directory. Only one
//! level of indirection is followed.
use std::{
    io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::hal::fs::Links;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The candidate is a link; holds the absolute path it points to.
    Linked(PathBuf),
    /// The candidate exists and is used as given.
    Direct,
    /// Nothing exists at the candidate path.
    Missing,
}

impl Resolution {
    /// Path to open, or `None` when the device is missing.
    pub fn path(self, candidate: &Path) -> Option<PathBuf> {
        match self {
            Resolution::Linked(path) => Some(path),
            Resolution::Direct => Some(candidate.to_owned()),
            Resolution::Missing => None,
        }
    }
}

pub fn resolve<L: Links>(links: &L, candidate: &Path) -> Resolution {
    match links.read_link(candidate) {
        Ok(target) => {
            let directory = candidate.parent().unwrap_or_else(|| Path::new(""));
            let joined = directory.join(target);
            let absolute = if joined.is_absolute() {
                joined
            } else {
                match links.current_dir() {
                    Ok(current) => current.join(joined),
                    Err(e) => {
                        debug!("Could not determine current directory ({}), keeping {:?}", e, joined);
                        joined
                    }
                }
            };
            debug!("{:?} links to {:?}", candidate, absolute);
            Resolution::Linked(absolute)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Resolution::Missing,
        Err(e) => {
            debug!("{:?} is not a link ({})", candidate, e);
            Resolution::Direct
        }
    }
}
