//! Application configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in `config/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
///
/// All fields have sensible defaults so tripane works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// General browsing preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Folder shown at startup. `None` means the home directory.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
}

/// Preview pane configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Upper bound on bytes read from a previewed file.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Upper bound on entries shown when previewing a folder.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Extensions (without the dot) whose files are previewed as text.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_bytes: default_max_bytes(),
            max_entries: default_max_entries(),
            extensions: default_extensions(),
        }
    }
}

/// Transfer buffer behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Keep the staged transfer after a successful paste so it can be
    /// pasted again. A failed paste always keeps it.
    #[serde(default)]
    pub keep_after_paste: bool,
}

/// UI layout preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Below this terminal width the parent pane is hidden.
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            narrow_width: default_narrow_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_bytes() -> u64 {
    64 * 1024
}

fn default_max_entries() -> usize {
    500
}

fn default_narrow_width() -> u16 {
    100
}

fn default_extensions() -> Vec<String> {
    [
        "txt", "md", "markdown", "rst", "log", "csv", "tsv", "json", "toml", "yaml", "yml", "xml",
        "html", "css", "ini", "cfg", "conf", "sh", "bash", "zsh", "fish", "py", "rb", "go", "rs",
        "c", "h", "cpp", "hpp", "java", "kt", "js", "ts", "tsx", "jsx", "lua", "sql", "swift",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
