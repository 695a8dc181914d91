//! Filesystem primitives backing [`LocalFs`](crate::fs::gateway::LocalFs).
//!
//! Copy and move take a *destination directory*: the source keeps its
//! name and lands inside `dest_dir`, the way `cp src dir/` and
//! `mv src dir/` behave.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Maximum recursion depth for folder copies, guarding against symlink loops.
const MAX_COPY_DEPTH: usize = 64;

/// Reads the immediate contents of a directory.
///
/// Entries come back sorted by [`sort_entries`] so pane output is
/// reproducible regardless of the order the OS returns them in.
/// Unreadable individual entries are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    let meta = std::fs::metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    if !meta.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(e, path))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let Ok(dir_entry) = dir_entry else { continue };
        // metadata() follows symlinks so a link to a folder lists as a folder
        let entry_path = dir_entry.path();
        let metadata = match std::fs::metadata(&entry_path) {
            Ok(m) => m,
            Err(_) => match dir_entry.metadata() {
                Ok(m) => m,
                Err(_) => continue,
            },
        };
        entries.push(FileEntry::new(entry_path, &metadata));
    }

    Ok(sort_entries(entries))
}

/// Sorts entries by name: case-insensitive first, exact bytes as tie-break.
///
/// Folders and files are interleaved.
pub fn sort_entries(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
    });
    entries
}

/// Copies `src` (file or folder) into `dest_dir`, keeping its name.
///
/// Returns the path of the new copy.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `src` does not exist.
/// - [`CoreError::NotADirectory`] if `dest_dir` is not a directory.
/// - [`CoreError::AlreadyExists`] if `dest_dir` already holds an entry with that name.
/// - [`CoreError::InvalidName`] if a folder would be copied into itself.
/// - [`CoreError::Io`] for any I/O failure during the copy.
pub fn copy_into(src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
    let target = transfer_target(src, dest_dir)?;
    copy_or_clean_up(src, &target)?;
    Ok(target)
}

/// Moves `src` (file or folder) into `dest_dir`, keeping its name.
///
/// Attempts a `rename` first. Only a cross-device rename falls back to
/// copy + delete; any other rename error is returned as is.
///
/// # Errors
///
/// Same as [`copy_into`].
pub fn move_into(src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
    let target = transfer_target(src, dest_dir)?;

    match std::fs::rename(src, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            tracing::debug!(src = %src.display(), "rename crosses devices, copying");
            copy_or_clean_up(src, &target)?;
            remove_path(src)?;
        }
        Err(e) => return Err(CoreError::from_io(e, src)),
    }

    Ok(target)
}

/// Deletes a single file (or symlink).
///
/// Folders are refused with [`CoreError::IsAFolder`]; there is no
/// recursive delete in this browser.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::IsAFolder`] if `path` is a folder.
/// - [`CoreError::PermissionDenied`] / [`CoreError::Io`] on removal failure.
pub fn delete_file(path: &Path) -> CoreResult<()> {
    // symlink_metadata: a link to a folder is still just a link
    let meta = std::fs::symlink_metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    if meta.is_dir() {
        return Err(CoreError::IsAFolder(path.to_path_buf()));
    }
    std::fs::remove_file(path).map_err(|e| CoreError::from_io(e, path))
}

/// Resolves and validates the destination path for a copy or move.
fn transfer_target(src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
    let src_meta = std::fs::symlink_metadata(src).map_err(|e| CoreError::from_io(e, src))?;

    let dest_meta = std::fs::metadata(dest_dir).map_err(|e| CoreError::from_io(e, dest_dir))?;
    if !dest_meta.is_dir() {
        return Err(CoreError::NotADirectory(dest_dir.to_path_buf()));
    }

    let name = src
        .file_name()
        .ok_or_else(|| CoreError::InvalidName(src.display().to_string()))?;
    let target = dest_dir.join(name);

    if src_meta.is_dir() && dest_dir.starts_with(src) {
        return Err(CoreError::InvalidName(format!(
            "cannot paste {} into itself",
            src.display()
        )));
    }
    if std::fs::symlink_metadata(&target).is_ok() {
        return Err(CoreError::AlreadyExists(target));
    }

    Ok(target)
}

/// Copies `src` to `target`, removing whatever was created if the copy fails.
fn copy_or_clean_up(src: &Path, target: &Path) -> CoreResult<()> {
    let result = copy_path(src, target);
    if result.is_err() && std::fs::symlink_metadata(target).is_ok() {
        if let Err(e) = remove_path(target) {
            tracing::warn!(
                target = %target.display(),
                error = %e,
                "could not remove partial copy"
            );
        }
    }
    result
}

fn copy_path(src: &Path, dest: &Path) -> CoreResult<()> {
    let meta = std::fs::symlink_metadata(src).map_err(|e| CoreError::from_io(e, src))?;

    if meta.is_dir() {
        copy_dir_recursive(src, dest, 0)
    } else if meta.is_symlink() {
        copy_symlink(src, dest)
    } else {
        std::fs::copy(src, dest).map_err(|e| CoreError::from_io(e, src))?;
        Ok(())
    }
}

fn copy_dir_recursive(src: &Path, dest: &Path, depth: usize) -> CoreResult<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("maximum recursion depth ({MAX_COPY_DEPTH}) exceeded during copy"),
        )));
    }

    std::fs::create_dir_all(dest).map_err(|e| CoreError::from_io(e, dest))?;

    for entry in std::fs::read_dir(src).map_err(|e| CoreError::from_io(e, src))? {
        let entry = entry.map_err(|e| CoreError::from_io(e, src))?;
        let entry_path = entry.path();
        let target = dest.join(entry.file_name());

        // file_type() does not follow symlinks
        let ft = entry
            .file_type()
            .map_err(|e| CoreError::from_io(e, &entry_path))?;
        if ft.is_symlink() {
            copy_symlink(&entry_path, &target)?;
        } else if ft.is_dir() {
            copy_dir_recursive(&entry_path, &target, depth + 1)?;
        } else {
            std::fs::copy(&entry_path, &target).map_err(|e| CoreError::from_io(e, &entry_path))?;
        }
    }

    Ok(())
}

fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    #[cfg(unix)]
    {
        let link_target = std::fs::read_link(src).map_err(|e| CoreError::from_io(e, src))?;
        std::os::unix::fs::symlink(&link_target, dest).map_err(|e| CoreError::from_io(e, dest))?;
    }
    #[cfg(not(unix))]
    {
        std::fs::copy(src, dest).map_err(|e| CoreError::from_io(e, src))?;
    }
    Ok(())
}

/// Removes a file or a whole folder. Only used by the move fallback.
fn remove_path(path: &Path) -> CoreResult<()> {
    let meta = std::fs::symlink_metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    if meta.is_dir() {
        std::fs::remove_dir_all(path).map_err(|e| CoreError::from_io(e, path))?;
    } else {
        std::fs::remove_file(path).map_err(|e| CoreError::from_io(e, path))?;
    }
    Ok(())
}

/// Returns `true` if `name` is usable as a single path component.
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}
