use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(PathBuf),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("cannot derive an archive name from '{0}'")]
    ArchiveName(PathBuf),
    #[error("io error at {path}: {source}")]
    IoAt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("copy task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("other error: {0}")]
    Other(String),
}

impl Error {
    /// Classifies an I/O error raised while touching `path`.
    pub fn at(err: io::Error, path: impl AsRef<Path>) -> Error {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path),
            io::ErrorKind::AlreadyExists => Error::AlreadyExists(path),
            _ => Error::IoAt { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_io_error_kinds() {
        let path = Path::new("some/dir");

        let err = Error::at(io::Error::from(io::ErrorKind::NotFound), path);
        assert!(matches!(err, Error::NotFound(p) if p == path));

        let err = Error::at(io::Error::from(io::ErrorKind::PermissionDenied), path);
        assert!(matches!(err, Error::PermissionDenied(_)));

        let err = Error::at(io::Error::from(io::ErrorKind::AlreadyExists), path);
        assert!(matches!(err, Error::AlreadyExists(_)));

        let err = Error::at(io::Error::from(io::ErrorKind::InvalidData), path);
        assert!(matches!(err, Error::IoAt { .. }));
    }
}
