use std::path::{Path, PathBuf};

use anyhow::Context;
use tripane_core::action::ActionRegistry;
use tripane_core::browser::{Browser, Mode};
use tripane_core::config::keymap::Keymap;
use tripane_core::config::theme::Theme;
use tripane_core::config::ConfigSet;
use tripane_core::event::Command;
use tripane_core::fs::gateway::LocalFs;

use crate::input::InputAction;

/// The current interaction mode of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Waiting for y/n before deleting the path.
    Confirm(PathBuf),
    Help,
}

/// A status line message with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Top-level application state.
///
/// Wraps the core [`Browser`] with what only the terminal needs: key
/// bindings, colors, the help overlay and the status line.
#[derive(Debug)]
pub struct App {
    browser: Browser<LocalFs>,
    keymap: Keymap,
    theme: Theme,
    registry: ActionRegistry,
    narrow_width: u16,
    show_help: bool,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(start: &Path, configs: &ConfigSet) -> anyhow::Result<Self> {
        let browser = Browser::open(LocalFs, start, &configs.config)
            .with_context(|| format!("cannot open {}", start.display()))?;
        Ok(Self {
            browser,
            keymap: configs.keymap.clone(),
            theme: configs.theme.clone(),
            registry: ActionRegistry::new(),
            narrow_width: configs.config.ui.narrow_width,
            show_help: false,
            status: None,
        })
    }

    pub fn mode(&self) -> AppMode {
        match self.browser.mode() {
            Mode::ConfirmingDelete { target } => AppMode::Confirm(target.clone()),
            Mode::Browsing if self.show_help => AppMode::Help,
            Mode::Browsing => AppMode::Normal,
        }
    }

    /// Applies one input action and returns the next state.
    pub fn apply(self, action: InputAction) -> Self {
        match action {
            InputAction::None => self,
            InputAction::ToggleHelp => Self {
                show_help: !self.show_help,
                ..self
            },
            InputAction::Cursor(movement) => {
                let nav = self.browser.navigation();
                match movement.apply(nav.selected_index(), nav.entries().len()) {
                    Some(index) => self.dispatch(Command::Select(index)),
                    None => self,
                }
            }
            InputAction::Command(command) => self.dispatch(command),
        }
    }

    fn dispatch(self, command: Command) -> Self {
        let browser = self.browser.handle(command);
        let status = match browser.last_event() {
            Some(event) => {
                if event.is_error() {
                    tracing::warn!(message = %event.message(), "command failed");
                }
                Some(StatusMessage {
                    text: event.message(),
                    is_error: event.is_error(),
                })
            }
            None if matches!(command, Command::Select(_)) => self.status,
            None => None,
        };
        Self {
            browser,
            status,
            ..self
        }
    }

    pub fn browser(&self) -> &Browser<LocalFs> {
        &self.browser
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn narrow_width(&self) -> u16 {
        self.narrow_width
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.browser.should_quit()
    }
}
