//! Filesystem queries needed to resolve device paths.
use std::{
    io,
    path::{Path, PathBuf},
};

pub trait Links {
    /// Reads the target of a symbolic link. Fails with
    /// `io::ErrorKind::NotFound` when nothing exists at `path`,
    /// and with another kind when `path` exists but is not a link.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Directory that relative paths are interpreted against.
    fn current_dir(&self) -> io::Result<PathBuf>;
}
