use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Error, Result};

/// Classification of a directory entry, resolved once when the item is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Directory,
    /// Sockets, fifos, dangling symlinks. Never archived.
    Other,
}

/// Snapshot of one directory entry taken at enumeration time.
///
/// Nothing is re-validated after construction: if the entry is removed or
/// replaced later, reads through the item fail with the usual I/O errors.
#[derive(Debug, Clone)]
pub struct Item {
    file_name: OsString,
    /// Lossy rendering of `file_name`, for display and extension lookup.
    name: String,
    directory: PathBuf,
    path: PathBuf,
    kind: ItemKind,
}

impl Item {
    /// Builds an item for `name` inside `directory`, stat-ing it once.
    pub fn new(file_name: impl Into<OsString>, directory: impl Into<PathBuf>) -> Item {
        let file_name = file_name.into();
        let name = file_name.to_string_lossy().into_owned();
        let directory = directory.into();
        let path = directory.join(&file_name);
        let kind = match fs::metadata(&path) {
            Ok(md) if md.is_file() => ItemKind::File,
            Ok(md) if md.is_dir() => ItemKind::Directory,
            _ => ItemKind::Other,
        };
        Item {
            file_name,
            name,
            directory,
            path,
            kind,
        }
    }

    /// Entry name exactly as the platform returned it.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == ItemKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == ItemKind::Directory
    }

    /// Text after the last `.` of the name, or the whole name when there is
    /// no dot. `archive.tar.gz` yields `gz`, `README` yields `README`.
    /// Always `None` for anything that is not a file.
    pub fn extension(&self) -> Option<&str> {
        if !self.is_file() {
            return None;
        }
        self.name.rsplit('.').next()
    }

    /// Reads the whole file into memory. Directories yield `None`.
    pub fn read_contents(&self) -> Result<Option<Vec<u8>>> {
        if !self.is_file() {
            return Ok(None);
        }
        fs::read(&self.path)
            .map(Some)
            .map_err(|e| Error::at(e, &self.path))
    }
}
