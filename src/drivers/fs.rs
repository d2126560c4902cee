use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::hal::fs::Links;

#[derive(Default)]
pub struct HostFilesystem;

impl Links for HostFilesystem {
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> { fs::read_link(path) }

    fn current_dir(&self) -> io::Result<PathBuf> { env::current_dir() }
}
