//! The filesystem operations the materializer is allowed to perform.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

pub trait Filesystem {
    /// Whether any filesystem object (file, directory or link) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates a single directory. The parent must already exist.
    fn mkdir(&self, path: &Path) -> Result<()>;

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;

    fn copy_file(&self, source: &Path, dest: &Path) -> Result<()>;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        fs::create_dir(path).map_err(Error::IoError)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        fs::write(path, content).map_err(Error::IoError)
    }

    fn copy_file(&self, source: &Path, dest: &Path) -> Result<()> {
        fs::copy(source, dest).map(|_| ()).map_err(Error::IoError)
    }
}
