//! The filesystem boundary consumed by the browser core.
//!
//! [`FileSystemGateway`] is the only way the core touches disks or
//! launches processes. [`LocalFs`] is the real implementation; tests
//! substitute an in-memory one.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;
use crate::fs::{ops, preview};

/// Capabilities the browser needs from the outside world.
///
/// Every call is synchronous. Implementations return entries from
/// [`list`](Self::list) already in display order.
pub trait FileSystemGateway {
    /// Lists the immediate entries of the directory at `path`.
    fn list(&self, path: &Path) -> CoreResult<Vec<FileEntry>>;

    /// Reads at most `max_bytes` bytes from the start of the file at `path`.
    fn read_text(&self, path: &Path, max_bytes: u64) -> CoreResult<Vec<u8>>;

    /// Deletes the file at `path`.
    fn delete(&self, path: &Path) -> CoreResult<()>;

    /// Copies `src` into `dest_dir`, returning the new path.
    fn copy(&self, src: &Path, dest_dir: &Path) -> CoreResult<PathBuf>;

    /// Moves `src` into `dest_dir`, returning the new path.
    fn move_to(&self, src: &Path, dest_dir: &Path) -> CoreResult<PathBuf>;

    /// Opens `path` with the system's default handler without waiting on it.
    fn open_externally(&self, path: &Path) -> CoreResult<()>;
}

/// Gateway backed by the local filesystem and the desktop opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystemGateway for LocalFs {
    fn list(&self, path: &Path) -> CoreResult<Vec<FileEntry>> {
        ops::read_directory(path)
    }

    fn read_text(&self, path: &Path, max_bytes: u64) -> CoreResult<Vec<u8>> {
        preview::read_head(path, max_bytes)
    }

    fn delete(&self, path: &Path) -> CoreResult<()> {
        ops::delete_file(path)
    }

    fn copy(&self, src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
        ops::copy_into(src, dest_dir)
    }

    fn move_to(&self, src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
        ops::move_into(src, dest_dir)
    }

    fn open_externally(&self, path: &Path) -> CoreResult<()> {
        if std::fs::symlink_metadata(path).is_err() {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }
        open::that_detached(path)
            .map_err(|e| CoreError::Launch(format!("{}: {e}", path.display())))
    }
}
