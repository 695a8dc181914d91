//! File entry representation.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// Whether an entry is a plain file or a folder.
///
/// Entry kind is always an explicit tag taken from filesystem metadata,
/// never inferred from how a name is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Folder,
}

/// A single file or folder inside a listed directory.
///
/// `FileEntry` is immutable. Entries are produced fresh from every
/// directory listing and never cached across navigation. Folder sizes
/// are reported as `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    size: u64,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// The name is NFC-normalised so decomposed names (macOS) display correctly.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let kind = if metadata.is_dir() {
            EntryKind::Folder
        } else {
            EntryKind::File
        };

        Self {
            path,
            name,
            kind,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
        }
    }

    /// Creates an entry without touching the filesystem.
    ///
    /// Used by gateways that don't read `std::fs::Metadata`.
    pub fn from_parts(path: PathBuf, kind: EntryKind, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        Self {
            path,
            name,
            kind,
            size: if kind == EntryKind::Folder { 0 } else { size },
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the entry name (last component of the path, no separators).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Returns the file size in bytes. Always `0` for folders.
    pub fn size(&self) -> u64 {
        self.size
    }
}
