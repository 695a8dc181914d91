//! Error types for `tripane-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. None of these errors is
//! fatal on its own: the [`Browser`](crate::browser::Browser) reports them
//! as [`Event::OperationFailed`](crate::event::Event::OperationFailed) and
//! stays usable.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A file operation was asked to act on a folder.
    #[error("is a folder: {0}")]
    IsAFolder(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// A paste would overwrite an existing entry.
    #[error("already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An external viewer could not be launched.
    #[error("launch failed: {0}")]
    Launch(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    ///
    /// Other kinds keep their [`std::io::ErrorKind`] and gain the path in
    /// their message.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            kind => Self::Io(std::io::Error::new(
                kind,
                format!("{}: {err}", path.display()),
            )),
        }
    }
}

/// Convenience alias used throughout `tripane-core`.
pub type CoreResult<T> = Result<T, CoreError>;
