use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tripane_core::action::Action;
use tripane_core::config::keymap::Keymap;
use tripane_core::event::Command;

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Move the highlight in the current pane.
    Cursor(CursorMove),
    /// Show or hide the help overlay.
    ToggleHelp,
    /// No action.
    None,
}

/// Cursor movement within the current pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Top,
    Bottom,
}

impl CursorMove {
    /// Target index for a pane of `len` entries, or `None` when empty.
    ///
    /// Up and Down stop at the edges.
    pub fn apply(self, current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = current.unwrap_or(0);
        Some(match self {
            Self::Up => current.saturating_sub(1),
            Self::Down => (current + 1).min(len - 1),
            Self::Top => 0,
            Self::Bottom => len - 1,
        })
    }
}

/// Maps a key event to an action based on the current mode and keymap.
pub fn handle_key(key: KeyEvent, mode: &AppMode, keymap: &Keymap) -> InputAction {
    match mode {
        AppMode::Normal => handle_normal_key(key, keymap),
        AppMode::Confirm(_) => handle_confirm_key(key),
        AppMode::Help => handle_help_key(key),
    }
}

/// Converts an `Action` enum variant to the corresponding `InputAction`.
fn action_to_input_action(action: Action) -> InputAction {
    match action {
        Action::CursorUp => InputAction::Cursor(CursorMove::Up),
        Action::CursorDown => InputAction::Cursor(CursorMove::Down),
        Action::CursorTop => InputAction::Cursor(CursorMove::Top),
        Action::CursorBottom => InputAction::Cursor(CursorMove::Bottom),
        Action::Help => InputAction::ToggleHelp,
        other => other
            .command()
            .map(InputAction::Command)
            .unwrap_or(InputAction::None),
    }
}

fn handle_normal_key(key: KeyEvent, keymap: &Keymap) -> InputAction {
    // Hardcoded keys: arrows, Enter, Ctrl+C (not remappable)
    match key.code {
        KeyCode::Down => InputAction::Cursor(CursorMove::Down),
        KeyCode::Up => InputAction::Cursor(CursorMove::Up),
        KeyCode::Left => InputAction::Command(Command::Back),
        KeyCode::Right | KeyCode::Enter => InputAction::Command(Command::Open),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Command(Command::Quit)
        }
        KeyCode::Char(c) => keymap
            .action_for_key(&c.to_string())
            .map(action_to_input_action)
            .unwrap_or(InputAction::None),
        _ => InputAction::None,
    }
}

fn handle_confirm_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::Command(Command::ConfirmYes),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            InputAction::Command(Command::ConfirmNo)
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Command(Command::Quit)
        }
        _ => InputAction::None,
    }
}

fn handle_help_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => InputAction::ToggleHelp,
        _ => InputAction::None,
    }
}
