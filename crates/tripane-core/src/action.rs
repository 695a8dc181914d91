//! Unified action system for tripane.
//!
//! Every user-triggerable action is represented by the [`Action`] enum.
//! [`ActionRegistry`] provides the metadata (id, name, description,
//! category) used by `keymap.toml` and the help overlay.

use crate::event::Command;

/// Every user-triggerable action in tripane.
///
/// Variants carry no parameters. Context is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    GoParent,
    Open,
    Refresh,
    // File Operations
    Copy,
    Cut,
    Paste,
    Delete,
    // System
    Help,
    Quit,
}

impl Action {
    /// The core command this action sends, if it is not handled by the UI alone.
    ///
    /// Cursor movement and help are resolved by the frontend.
    pub fn command(self) -> Option<Command> {
        match self {
            Self::GoParent => Some(Command::Back),
            Self::Open => Some(Command::Open),
            Self::Refresh => Some(Command::Refresh),
            Self::Copy => Some(Command::Copy),
            Self::Cut => Some(Command::Cut),
            Self::Paste => Some(Command::Paste),
            Self::Delete => Some(Command::Delete),
            Self::Quit => Some(Command::Quit),
            Self::CursorUp | Self::CursorDown | Self::CursorTop | Self::CursorBottom | Self::Help => {
                None
            }
        }
    }
}

/// Broad category for grouping actions in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    FileOps,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::FileOps => "File",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"cursor_up"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Cursor Up"`).
    pub name: &'static str,
    /// Short description (e.g. `"Move cursor up one entry"`).
    pub description: &'static str,
    pub category: ActionCategory,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        let descriptors = vec![
            // Navigation
            ActionDescriptor {
                action: Action::CursorUp,
                id: "cursor_up",
                name: "Cursor Up",
                description: "Move cursor up one entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorDown,
                id: "cursor_down",
                name: "Cursor Down",
                description: "Move cursor down one entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorTop,
                id: "go_first",
                name: "Go to First",
                description: "Jump to the first entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorBottom,
                id: "go_last",
                name: "Go to Last",
                description: "Jump to the last entry",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::GoParent,
                id: "go_parent",
                name: "Go Parent",
                description: "Navigate to parent directory",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::Open,
                id: "open",
                name: "Open",
                description: "Enter folder or open file externally",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::Refresh,
                id: "refresh",
                name: "Refresh",
                description: "Re-read current directory",
                category: ActionCategory::Navigation,
            },
            // File Operations
            ActionDescriptor {
                action: Action::Copy,
                id: "copy",
                name: "Copy",
                description: "Stage selected entry for copying",
                category: ActionCategory::FileOps,
            },
            ActionDescriptor {
                action: Action::Cut,
                id: "cut",
                name: "Cut",
                description: "Stage selected entry for moving",
                category: ActionCategory::FileOps,
            },
            ActionDescriptor {
                action: Action::Paste,
                id: "paste",
                name: "Paste",
                description: "Paste staged entry here",
                category: ActionCategory::FileOps,
            },
            ActionDescriptor {
                action: Action::Delete,
                id: "delete",
                name: "Delete",
                description: "Delete selected file",
                category: ActionCategory::FileOps,
            },
            // System
            ActionDescriptor {
                action: Action::Help,
                id: "help",
                name: "Help",
                description: "Show key bindings",
                category: ActionCategory::System,
            },
            ActionDescriptor {
                action: Action::Quit,
                id: "quit",
                name: "Quit",
                description: "Exit tripane",
                category: ActionCategory::System,
            },
        ];
        Self { descriptors }
    }

    /// Returns every descriptor in display order.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Looks up the descriptor for `action`.
    pub fn get(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }

    /// Resolves a `keymap.toml` identifier to an [`Action`].
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
