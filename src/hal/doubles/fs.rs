use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use crate::hal::fs::Links;

/// In-memory filesystem: a set of plain files plus a link table.
pub struct FakeLinks {
    pub files: Vec<PathBuf>,
    pub links: HashMap<PathBuf, PathBuf>,
    pub current_dir: PathBuf,
}

impl Default for FakeLinks {
    fn default() -> Self {
        Self { files: Vec::new(), links: HashMap::new(), current_dir: PathBuf::from("/home/provision") }
    }
}

impl FakeLinks {
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.files.push(path.into());
        self
    }

    pub fn with_link<P: Into<PathBuf>, Q: Into<PathBuf>>(mut self, path: P, target: Q) -> Self {
        self.links.insert(path.into(), target.into());
        self
    }
}

impl Links for FakeLinks {
    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        if let Some(target) = self.links.get(path) {
            Ok(target.clone())
        } else if self.files.iter().any(|f| f == path) {
            Err(io::Error::from(io::ErrorKind::InvalidInput))
        } else {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn current_dir(&self) -> io::Result<PathBuf> { Ok(self.current_dir.clone()) }
}
