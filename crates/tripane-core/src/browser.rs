//! The command dispatcher.
//!
//! [`Browser`] turns one [`Command`] at a time into a state transition. It
//! owns the [`NavigationState`], the [`ClipboardState`], the delete
//! confirmation [`Mode`], and the current preview. Every gateway failure
//! is reported as [`Event::OperationFailed`] and leaves the browser usable.
//!
//! | Command | Browsing | ConfirmingDelete |
//! |---|---|---|
//! | `Back` | go to parent | ignored |
//! | `Open` | enter folder / open file externally | ignored |
//! | `Select(i)` | move selection | ignored |
//! | `Delete` | file: ask for confirmation; folder: no-op | ignored |
//! | `Copy` / `Cut` | stage selection | ignored |
//! | `Paste` | apply staged transfer here | ignored |
//! | `Refresh` | re-list | ignored |
//! | `ConfirmYes` | ignored | delete, re-list |
//! | `ConfirmNo` | ignored | back to browsing |
//! | `Quit` | quit | quit |

use std::path::{Path, PathBuf};

use crate::config::settings::{Config, PreviewConfig};
use crate::error::CoreResult;
use crate::event::{Command, Event};
use crate::fs::gateway::FileSystemGateway;
use crate::nav::clipboard::{ClipboardState, TransferKind};
use crate::nav::state::NavigationState;
use crate::projector::{project_preview, PreviewContent};

/// Dispatcher mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    /// Waiting for a yes/no answer about deleting `target`.
    ConfirmingDelete { target: PathBuf },
}

/// What happens to the transfer buffer after a successful paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PastePolicy {
    #[default]
    ClearOnSuccess,
    KeepAfterPaste,
}

/// The navigation-and-clipboard state machine.
///
/// Immutable: [`handle`](Self::handle) consumes the browser and returns
/// the next one.
#[derive(Debug)]
pub struct Browser<G: FileSystemGateway> {
    gateway: G,
    nav: NavigationState,
    clipboard: ClipboardState,
    mode: Mode,
    preview: PreviewContent,
    preview_config: PreviewConfig,
    paste_policy: PastePolicy,
    last_event: Option<Event>,
    should_quit: bool,
}

impl<G: FileSystemGateway> Browser<G> {
    /// Opens a browser at `start`.
    ///
    /// # Errors
    ///
    /// Fails when `start` cannot be listed; there is nothing to show then.
    pub fn open(gateway: G, start: &Path, config: &Config) -> CoreResult<Self> {
        let nav = NavigationState::open(&gateway, start)?;
        let paste_policy = if config.clipboard.keep_after_paste {
            PastePolicy::KeepAfterPaste
        } else {
            PastePolicy::ClearOnSuccess
        };
        let preview = project_preview(&nav, &gateway, &config.preview);
        Ok(Self {
            gateway,
            nav,
            clipboard: ClipboardState::new(),
            mode: Mode::Browsing,
            preview,
            preview_config: config.preview.clone(),
            paste_policy,
            last_event: None,
            should_quit: false,
        })
    }

    /// Processes one command to completion.
    pub fn handle(self, command: Command) -> Self {
        let browser = Self {
            last_event: None,
            ..self
        };
        if command == Command::Quit {
            tracing::debug!("quit requested");
            return Self {
                should_quit: true,
                ..browser
            };
        }
        match browser.mode.clone() {
            Mode::Browsing => browser.handle_browsing(command),
            Mode::ConfirmingDelete { target } => browser.handle_confirming(command, target),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn clipboard(&self) -> &ClipboardState {
        &self.clipboard
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn preview(&self) -> &PreviewContent {
        &self.preview
    }

    /// The outcome of the last handled command, if it produced one.
    pub fn last_event(&self) -> Option<&Event> {
        self.last_event.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn handle_browsing(self, command: Command) -> Self {
        match command {
            Command::Back => {
                let nav = self.nav.go_to_parent(&self.gateway);
                tracing::debug!(location = %nav.location().display(), "back");
                self.with_nav(nav)
            }
            Command::Open => self.open_selection(),
            Command::Select(index) => {
                if self.nav.selected_index() == Some(index) {
                    return self;
                }
                let nav = self.nav.clone().with_selection(index);
                self.with_nav(nav)
            }
            Command::Delete => self.request_delete(),
            Command::Copy => self.stage(TransferKind::Copy),
            Command::Cut => self.stage(TransferKind::Move),
            Command::Paste => self.paste(),
            Command::Refresh => {
                let nav = self.nav.relist(&self.gateway);
                self.with_nav(nav)
            }
            Command::ConfirmYes | Command::ConfirmNo | Command::Quit => self,
        }
    }

    fn handle_confirming(self, command: Command, target: PathBuf) -> Self {
        match command {
            Command::ConfirmYes => {
                let result = self.gateway.delete(&target);
                let browser = Self {
                    mode: Mode::Browsing,
                    ..self
                };
                match result {
                    Ok(()) => {
                        tracing::info!(path = %target.display(), "deleted");
                        let nav = browser.nav.relist(&browser.gateway);
                        browser.with_nav(nav).with_event(Event::Deleted(target))
                    }
                    Err(e) => {
                        tracing::warn!(path = %target.display(), error = %e, "delete failed");
                        let nav = browser.nav.relist(&browser.gateway);
                        browser.with_nav(nav).failed("delete", e)
                    }
                }
            }
            Command::ConfirmNo => {
                tracing::debug!(path = %target.display(), "delete cancelled");
                Self {
                    mode: Mode::Browsing,
                    ..self
                }
                .with_event(Event::DeleteCancelled)
            }
            _ => self,
        }
    }

    fn open_selection(self) -> Self {
        let Some((path, name, is_folder)) = self
            .nav
            .selection()
            .map(|e| (e.path().to_path_buf(), e.name().to_string(), e.is_folder()))
        else {
            return self;
        };
        if is_folder {
            return match self.nav.enter_child(&self.gateway, &name) {
                Ok(nav) => {
                    tracing::debug!(location = %nav.location().display(), "entered folder");
                    self.with_nav(nav)
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "enter failed");
                    self.failed("open", e)
                }
            };
        }
        match self.gateway.open_externally(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "opened externally");
                self.with_event(Event::Opened(path))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "open failed");
                self.failed("open", e)
            }
        }
    }

    fn request_delete(self) -> Self {
        let Some(target) = self
            .nav
            .selection()
            .filter(|e| !e.is_folder())
            .map(|e| e.path().to_path_buf())
        else {
            return self;
        };
        tracing::debug!(path = %target.display(), "confirming delete");
        Self {
            mode: Mode::ConfirmingDelete {
                target: target.clone(),
            },
            ..self
        }
        .with_event(Event::ConfirmDelete(target))
    }

    fn stage(self, kind: TransferKind) -> Self {
        let Some(source) = self.nav.selection().map(|e| e.path().to_path_buf()) else {
            return self;
        };
        tracing::debug!(path = %source.display(), kind = kind.label(), "staged");
        let clipboard = match kind {
            TransferKind::Copy => self.clipboard.stage_copy(&source),
            TransferKind::Move => self.clipboard.stage_cut(&source),
        };
        Self { clipboard, ..self }.with_event(Event::Staged { kind, source })
    }

    fn paste(self) -> Self {
        let (clipboard, taken) = self.clipboard.consume();
        let Some(transfer) = taken else {
            return Self { clipboard, ..self }.with_event(Event::NothingToPaste);
        };
        let dest = self.nav.location().to_path_buf();
        let result = match transfer.kind {
            TransferKind::Copy => self.gateway.copy(&transfer.source, &dest),
            TransferKind::Move => self.gateway.move_to(&transfer.source, &dest),
        };
        match result {
            Ok(target) => {
                tracing::info!(
                    source = %transfer.source.display(),
                    target = %target.display(),
                    kind = transfer.kind.label(),
                    "pasted"
                );
                let clipboard = match self.paste_policy {
                    PastePolicy::ClearOnSuccess => clipboard,
                    PastePolicy::KeepAfterPaste => clipboard.restore(transfer.clone()),
                };
                let nav = match target.file_name() {
                    Some(name) => self
                        .nav
                        .relist_selecting(&self.gateway, &name.to_string_lossy()),
                    None => self.nav.relist(&self.gateway),
                };
                let event = Event::Pasted {
                    kind: transfer.kind,
                    target,
                };
                Self { clipboard, ..self }.with_nav(nav).with_event(event)
            }
            Err(e) => {
                tracing::warn!(source = %transfer.source.display(), error = %e, "paste failed");
                let nav = self.nav.relist(&self.gateway);
                Self {
                    clipboard: clipboard.restore(transfer),
                    ..self
                }
                .with_nav(nav)
                .failed("paste", e)
            }
        }
    }

    /// Replaces the navigation state and recomputes the preview.
    fn with_nav(self, nav: NavigationState) -> Self {
        let preview = project_preview(&nav, &self.gateway, &self.preview_config);
        Self {
            nav,
            preview,
            ..self
        }
    }

    fn with_event(self, event: Event) -> Self {
        Self {
            last_event: Some(event),
            ..self
        }
    }

    fn failed(self, operation: &str, err: crate::error::CoreError) -> Self {
        self.with_event(Event::OperationFailed {
            operation: operation.to_string(),
            error: err.to_string(),
        })
    }
}
