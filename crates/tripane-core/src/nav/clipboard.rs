//! Single-slot transfer buffer for copy/cut and paste.

use std::path::{Path, PathBuf};

/// Whether a staged transfer copies or moves its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Copy,
    Move,
}

impl TransferKind {
    /// Short label shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "cut",
        }
    }
}

/// A pending copy or move awaiting a paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub kind: TransferKind,
    pub source: PathBuf,
}

/// Holds at most one pending [`Transfer`].
///
/// Staging always replaces whatever was pending. Sources are not checked
/// for existence until paste time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardState {
    pending: Option<Transfer>,
}

impl ClipboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_copy(self, source: &Path) -> Self {
        self.stage(TransferKind::Copy, source)
    }

    pub fn stage_cut(self, source: &Path) -> Self {
        self.stage(TransferKind::Move, source)
    }

    /// Takes the pending transfer out, leaving the buffer empty.
    pub fn consume(self) -> (Self, Option<Transfer>) {
        (Self { pending: None }, self.pending)
    }

    /// Puts a consumed transfer back, e.g. after a failed paste.
    pub fn restore(self, transfer: Transfer) -> Self {
        Self {
            pending: Some(transfer),
        }
    }

    pub fn pending(&self) -> Option<&Transfer> {
        self.pending.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    fn stage(self, kind: TransferKind, source: &Path) -> Self {
        Self {
            pending: Some(Transfer {
                kind,
                source: source.to_path_buf(),
            }),
        }
    }
}
