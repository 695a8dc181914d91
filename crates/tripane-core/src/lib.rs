//! UI-agnostic three-pane browser logic.
//!
//! `tripane-core` owns the navigation-and-clipboard state machine and
//! everything it needs: directory listings behind a gateway trait, the
//! single-slot transfer buffer, pane projection, and TOML configuration.
//! The terminal frontend (`tripane-tui`) only draws what this crate
//! projects and feeds it [`Command`]s.
//!
//! # Modules
//!
//! - [`fs`]: [`FileEntry`], the [`FileSystemGateway`] trait, [`LocalFs`], bounded previews.
//! - [`nav`]: [`NavigationState`] (Location and Selection) and [`ClipboardState`].
//! - [`projector`]: pane contents derived from navigation state.
//! - [`browser`]: [`Browser`], the command dispatcher with its delete confirmation.
//! - [`action`]: bindable user actions and their metadata.
//! - [`config`]: user-facing configuration (settings, keymap, theme).
//! - [`event`]: [`Command`] and [`Event`] types for UI ↔ Core communication.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod browser;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod projector;

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use browser::{Browser, Mode, PastePolicy};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use config::ConfigSet;
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::entry::{EntryKind, FileEntry};
pub use fs::gateway::{FileSystemGateway, LocalFs};
pub use nav::clipboard::{ClipboardState, Transfer, TransferKind};
pub use nav::state::NavigationState;
pub use projector::{PaneItem, PaneView, PreviewContent, TRUNCATION_MARKER};
