//! The current Location, its listing, and the Selection within it.
//!
//! [`NavigationState`] is immutable: every transition returns a new value.
//! Transitions that can fail (entering a child) return `Err` and leave the
//! caller holding the previous state, which is how rollback works.
//! Re-listing never fails; a listing error empties the affected pane and
//! is kept as an inline error message.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;
use crate::fs::gateway::FileSystemGateway;
use crate::fs::ops::is_valid_filename;

/// Navigation state for the three-pane browser.
///
/// Invariant: `selected` is `None` iff `entries` is empty, and otherwise
/// indexes into `entries`.
#[derive(Debug, Clone)]
pub struct NavigationState {
    location: PathBuf,
    entries: Vec<FileEntry>,
    parent_entries: Vec<FileEntry>,
    selected: Option<usize>,
    error: Option<String>,
    parent_error: Option<String>,
}

impl NavigationState {
    /// Lists `location` and its parent and selects the first entry.
    ///
    /// # Errors
    ///
    /// Fails if `location` itself cannot be listed. The parent listing is
    /// best effort.
    pub fn open<G: FileSystemGateway>(gateway: &G, location: &Path) -> CoreResult<Self> {
        let entries = gateway.list(location)?;
        let (parent_entries, parent_error) = list_parent(gateway, location);
        let selected = if entries.is_empty() { None } else { Some(0) };
        tracing::debug!(location = %location.display(), count = entries.len(), "opened location");
        Ok(Self {
            location: location.to_path_buf(),
            entries,
            parent_entries,
            selected,
            error: None,
            parent_error,
        })
    }

    /// Enters the child folder `name` of the current Location.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidName`] if `name` is empty or contains a separator.
    /// - [`CoreError::NotADirectory`] if `name` is not a listed Folder.
    /// - Any listing error for the new Location; `self` is then unchanged.
    pub fn enter_child<G: FileSystemGateway>(&self, gateway: &G, name: &str) -> CoreResult<Self> {
        if !is_valid_filename(name) {
            return Err(CoreError::InvalidName(name.to_string()));
        }
        let child = self.location.join(name);
        let is_folder = self
            .entries
            .iter()
            .any(|e| e.name() == name && e.is_folder());
        if !is_folder {
            return Err(CoreError::NotADirectory(child));
        }
        Self::open(gateway, &child)
    }

    /// Moves to the parent of the current Location and re-selects the
    /// folder we came from. At the root this only re-lists.
    pub fn go_to_parent<G: FileSystemGateway>(&self, gateway: &G) -> Self {
        let Some(parent) = self.location.parent() else {
            return self.relist(gateway);
        };
        let came_from = self
            .location
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Self::listed(gateway, parent.to_path_buf(), came_from.as_deref())
    }

    /// Re-reads both listings, keeping the selected name if it still exists.
    ///
    /// Falls back to the first entry, or to no Selection when the listing
    /// is empty or failed.
    pub fn relist<G: FileSystemGateway>(&self, gateway: &G) -> Self {
        let keep = self.selection().map(|e| e.name().to_string());
        Self::listed(gateway, self.location.clone(), keep.as_deref())
    }

    /// Re-reads both listings and selects `name` if it is present.
    pub fn relist_selecting<G: FileSystemGateway>(&self, gateway: &G, name: &str) -> Self {
        Self::listed(gateway, self.location.clone(), Some(name))
    }

    /// Returns a new state with the Selection moved to `index`, clamped to bounds.
    pub fn with_selection(self, index: usize) -> Self {
        let selected = match self.entries.len() {
            0 => None,
            len => Some(index.min(len - 1)),
        };
        Self { selected, ..self }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// The parent of the Location, or `None` at the filesystem root.
    pub fn parent_location(&self) -> Option<&Path> {
        self.location.parent()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn parent_entries(&self) -> &[FileEntry] {
        &self.parent_entries
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected entry, or `None` when the Selection is empty.
    pub fn selection(&self) -> Option<&FileEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Index of the current Location within the parent listing.
    pub fn parent_selected_index(&self) -> Option<usize> {
        let name = self.location.file_name()?.to_string_lossy();
        self.parent_entries.iter().position(|e| e.name() == name)
    }

    /// Error from the last listing of the Location, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Error from the last listing of the parent, if it failed.
    pub fn parent_error(&self) -> Option<&str> {
        self.parent_error.as_deref()
    }

    fn listed<G: FileSystemGateway>(gateway: &G, location: PathBuf, prefer: Option<&str>) -> Self {
        let (entries, error) = match gateway.list(&location) {
            Ok(entries) => (entries, None),
            Err(e) => {
                tracing::warn!(location = %location.display(), error = %e, "listing failed");
                (Vec::new(), Some(e.to_string()))
            }
        };
        let (parent_entries, parent_error) = list_parent(gateway, &location);
        let selected = prefer
            .and_then(|name| entries.iter().position(|e| e.name() == name))
            .or(if entries.is_empty() { None } else { Some(0) });
        Self {
            location,
            entries,
            parent_entries,
            selected,
            error,
            parent_error,
        }
    }
}

fn list_parent<G: FileSystemGateway>(
    gateway: &G,
    location: &Path,
) -> (Vec<FileEntry>, Option<String>) {
    let Some(parent) = location.parent() else {
        return (Vec::new(), None);
    };
    match gateway.list(parent) {
        Ok(entries) => (entries, None),
        Err(e) => {
            tracing::warn!(parent = %parent.display(), error = %e, "parent listing failed");
            (Vec::new(), Some(e.to_string()))
        }
    }
}
