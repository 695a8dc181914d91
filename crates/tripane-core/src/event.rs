//! Event system for communication between UI and Core.
//!
//! The UI translates user input into [`Command`]s, which the
//! [`Browser`](crate::browser::Browser) processes and answers with at most
//! one [`Event`] per command. This decoupling allows any frontend to drive
//! the same core logic.

use std::path::PathBuf;

use crate::nav::clipboard::TransferKind;

/// An input symbol the UI sends to the core.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move to the parent of the current Location.
    Back,
    /// Enter the selected folder, or open the selected file externally.
    Open,
    /// The highlighted entry in the current pane changed to this index.
    Select(usize),
    /// Ask to delete the selected file.
    Delete,
    /// Answer "yes" to the delete confirmation.
    ConfirmYes,
    /// Answer "no" to the delete confirmation.
    ConfirmNo,
    /// Stage the selection for copying.
    Copy,
    /// Stage the selection for moving.
    Cut,
    /// Apply the staged transfer to the current Location.
    Paste,
    /// Re-read the current Location.
    Refresh,
    /// Terminate the browser.
    Quit,
}

/// A notification the core sends back to the UI.
///
/// Events flow **Core → UI**. The UI uses these to update its status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A transfer was staged.
    Staged { kind: TransferKind, source: PathBuf },
    /// A staged transfer was applied.
    Pasted { kind: TransferKind, target: PathBuf },
    /// The delete confirmation is waiting for an answer.
    ConfirmDelete(PathBuf),
    /// A file was deleted.
    Deleted(PathBuf),
    /// The delete confirmation was declined.
    DeleteCancelled,
    /// A file was handed to the external viewer.
    Opened(PathBuf),
    /// Paste was requested with nothing staged.
    NothingToPaste,
    /// An operation failed. The browser is still usable.
    OperationFailed {
        /// Human-readable description of the operation.
        operation: String,
        /// The error message.
        error: String,
    },
}

impl Event {
    /// One-line description for the status bar.
    pub fn message(&self) -> String {
        match self {
            Self::Staged { kind, source } => format!("{}: {}", kind.label(), file_label(source)),
            Self::Pasted { kind, target } => match kind {
                TransferKind::Copy => format!("copied to {}", target.display()),
                TransferKind::Move => format!("moved to {}", target.display()),
            },
            Self::ConfirmDelete(path) => format!("delete {}? (y/n)", file_label(path)),
            Self::Deleted(path) => format!("deleted {}", file_label(path)),
            Self::DeleteCancelled => "delete cancelled".to_string(),
            Self::Opened(path) => format!("opened {}", file_label(path)),
            Self::NothingToPaste => "nothing to paste".to_string(),
            Self::OperationFailed { operation, error } => format!("{operation} failed: {error}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::OperationFailed { .. })
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
