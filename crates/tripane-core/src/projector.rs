//! Projects navigation state into the contents of the three panes.
//!
//! The parent and current panes are pure functions of
//! [`NavigationState`]. The preview pane additionally reads through the
//! gateway, bounded by [`PreviewConfig`].

use crate::config::settings::PreviewConfig;
use crate::fs::entry::FileEntry;
use crate::fs::gateway::FileSystemGateway;
use crate::fs::preview::{decode_text, is_previewable};
use crate::nav::state::NavigationState;

/// Line appended by renderers when a preview was cut short.
pub const TRUNCATION_MARKER: &str = "… truncated";

/// One row of a listing pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneItem {
    pub label: String,
    pub is_folder: bool,
}

impl From<&FileEntry> for PaneItem {
    fn from(entry: &FileEntry) -> Self {
        Self {
            label: entry.name().to_string(),
            is_folder: entry.is_folder(),
        }
    }
}

/// Everything a renderer needs to draw a listing pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    pub items: Vec<PaneItem>,
    pub selected: Option<usize>,
    pub error: Option<String>,
}

/// Content of the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    /// Nothing to show.
    Empty,
    /// Entries of the selected folder, at most `max_entries` of them.
    Listing { items: Vec<PaneItem>, truncated: bool },
    /// Leading text of the selected file, at most `max_bytes` long.
    Text { text: String, truncated: bool },
    /// The selected file looks binary.
    Binary,
    /// Reading failed. Shown as an empty pane with this message.
    Unavailable { reason: String },
}

impl PreviewContent {
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            Self::Listing {
                truncated: true,
                ..
            } | Self::Text {
                truncated: true,
                ..
            }
        )
    }
}

/// Listing of the parent folder, highlighting the current Location.
pub fn project_parent(nav: &NavigationState) -> PaneView {
    PaneView {
        items: nav.parent_entries().iter().map(PaneItem::from).collect(),
        selected: nav.parent_selected_index(),
        error: nav.parent_error().map(str::to_string),
    }
}

/// Listing of the current Location with the Selection highlighted.
pub fn project_current(nav: &NavigationState) -> PaneView {
    PaneView {
        items: nav.entries().iter().map(PaneItem::from).collect(),
        selected: nav.selected_index(),
        error: nav.error().map(str::to_string),
    }
}

/// Computes the preview for the current Selection.
///
/// Folders preview as a listing and allow-listed files as text. Anything
/// else, or an empty Selection, previews as [`PreviewContent::Empty`].
/// Read failures become [`PreviewContent::Unavailable`].
pub fn project_preview<G: FileSystemGateway>(
    nav: &NavigationState,
    gateway: &G,
    config: &PreviewConfig,
) -> PreviewContent {
    if !config.enabled {
        return PreviewContent::Empty;
    }
    let Some(entry) = nav.selection() else {
        return PreviewContent::Empty;
    };

    if entry.is_folder() {
        return match gateway.list(entry.path()) {
            Ok(entries) => {
                let truncated = entries.len() > config.max_entries;
                let items = entries
                    .iter()
                    .take(config.max_entries)
                    .map(PaneItem::from)
                    .collect();
                PreviewContent::Listing { items, truncated }
            }
            Err(e) => unavailable(entry, e),
        };
    }

    if !is_previewable(entry.path(), &config.extensions) {
        return PreviewContent::Empty;
    }

    // One byte past the limit tells us whether the file was cut short.
    match gateway.read_text(entry.path(), config.max_bytes.saturating_add(1)) {
        Ok(bytes) => {
            let limit = usize::try_from(config.max_bytes).unwrap_or(usize::MAX);
            match decode_text(&bytes, limit) {
                Some(preview) => PreviewContent::Text {
                    text: preview.text,
                    truncated: preview.is_truncated,
                },
                None => PreviewContent::Binary,
            }
        }
        Err(e) => unavailable(entry, e),
    }
}

fn unavailable(entry: &FileEntry, err: crate::error::CoreError) -> PreviewContent {
    tracing::warn!(path = %entry.path().display(), error = %err, "preview failed");
    PreviewContent::Unavailable {
        reason: err.to_string(),
    }
}
