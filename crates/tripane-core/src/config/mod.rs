//! Configuration management for tripane.
//!
//! User preferences ([`settings::Config`]), key bindings ([`keymap::Keymap`])
//! and colors ([`theme::Theme`]) are stored as TOML files and loaded at
//! startup. [`ConfigSet::load`] finds the config directory and falls back
//! to defaults for anything missing or malformed.

pub mod keymap;
pub mod settings;
pub mod theme;

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

use self::keymap::Keymap;
use self::settings::Config;
use self::theme::Theme;

/// Everything loaded from the config directory.
#[derive(Debug, Clone, Default)]
pub struct ConfigSet {
    pub config: Config,
    pub keymap: Keymap,
    pub theme: Theme,
}

impl ConfigSet {
    /// Loads `config.toml`, `keymap.toml` and `theme.toml` from `dir`.
    ///
    /// Missing files use defaults silently; unreadable or malformed ones
    /// are logged and use defaults.
    pub fn load(dir: &Path) -> Self {
        Self {
            config: load_or_default(&dir.join("config.toml"), Config::load),
            keymap: load_or_default(&dir.join("keymap.toml"), Keymap::load),
            theme: load_or_default(&dir.join("theme.toml"), Theme::load),
        }
    }
}

fn load_or_default<T: Default>(path: &Path, load: impl Fn(&Path) -> CoreResult<T>) -> T {
    match load(path) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            value
        }
        Err(CoreError::NotFound(_)) => T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using defaults");
            T::default()
        }
    }
}

/// Returns the first existing config directory.
///
/// Checked in order: `./config`, `$XDG_CONFIG_HOME/tripane`,
/// `~/.config/tripane`.
pub fn config_dir() -> Option<PathBuf> {
    let local = PathBuf::from("config");
    let xdg = std::env::var_os("XDG_CONFIG_HOME").map(|d| PathBuf::from(d).join("tripane"));
    let home = std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config").join("tripane"));
    std::iter::once(local)
        .chain(xdg)
        .chain(home)
        .find(|dir| dir.is_dir())
}
