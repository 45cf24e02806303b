use crate::model::history::{HistoryMode, DEFAULT_HISTORY_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub editor: EditorConfig,

    /// User keybindings, applied on top of [`Config::default_keybindings`]
    #[serde(default)]
    pub keybindings: Vec<Keybinding>,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            editor: EditorConfig::default(),
            keybindings: Vec::new(),
        }
    }
}

/// Editor behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Entries kept on each of the undo and redo stacks
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    #[serde(default)]
    pub history_mode: HistoryMode,

    /// Typing `{`, `(` or `[` also inserts the closing bracket
    #[serde(default = "default_true")]
    pub auto_close_brackets: bool,

    #[serde(default = "default_true")]
    pub line_numbers: bool,

    /// Spaces inserted for Tab
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

fn default_tab_size() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: default_history_depth(),
            history_mode: HistoryMode::default(),
            auto_close_brackets: true,
            line_numbers: true,
            tab_size: default_tab_size(),
        }
    }
}

/// Keybinding definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinding {
    /// Key name (e.g., "s", "Enter", "F1")
    pub key: String,

    /// Modifiers (e.g., ["ctrl"], ["ctrl", "shift"])
    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Action name (e.g., "save", "undo")
    pub action: String,
}

impl Keybinding {
    fn plain(key: &str, action: &str) -> Self {
        Self {
            key: key.to_string(),
            modifiers: Vec::new(),
            action: action.to_string(),
        }
    }

    fn ctrl(key: &str, action: &str) -> Self {
        Self {
            key: key.to_string(),
            modifiers: vec!["ctrl".to_string()],
            action: action.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Location of the user config file: `<config dir>/scribe/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scribe").join("config.json"))
    }

    /// Load the user config file, falling back to defaults when it is
    /// missing or invalid.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Built-in bindings: editing keys plus one shortcut per editor command
    pub fn default_keybindings() -> Vec<Keybinding> {
        vec![
            Keybinding::plain("Enter", "insert_newline"),
            Keybinding::plain("Tab", "insert_tab"),
            Keybinding::plain("Backspace", "delete_backward"),
            Keybinding::plain("Delete", "delete_forward"),
            Keybinding::plain("Left", "move_left"),
            Keybinding::plain("Right", "move_right"),
            Keybinding::plain("Up", "move_up"),
            Keybinding::plain("Down", "move_down"),
            Keybinding::plain("Home", "move_line_start"),
            Keybinding::plain("End", "move_line_end"),
            Keybinding::ctrl("Home", "move_document_start"),
            Keybinding::ctrl("End", "move_document_end"),
            Keybinding::ctrl("s", "save"),
            Keybinding {
                key: "s".to_string(),
                modifiers: vec!["ctrl".to_string(), "alt".to_string()],
                action: "save_as".to_string(),
            },
            Keybinding::ctrl("n", "new_file"),
            Keybinding::ctrl("o", "open_file"),
            Keybinding::ctrl("z", "undo"),
            Keybinding::ctrl("y", "redo"),
            Keybinding::ctrl("f", "find"),
            Keybinding::ctrl("g", "find_next"),
            Keybinding::ctrl("h", "replace"),
            Keybinding::ctrl("p", "show_path"),
            Keybinding::ctrl("q", "quit"),
        ]
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.history_depth == 0 {
            return Err(ConfigError::ValidationError(
                "history_depth must be greater than 0".to_string(),
            ));
        }

        if self.editor.tab_size == 0 {
            return Err(ConfigError::ValidationError(
                "tab_size must be greater than 0".to_string(),
            ));
        }

        for binding in &self.keybindings {
            if binding.key.is_empty() {
                return Err(ConfigError::ValidationError(
                    "keybinding key cannot be empty".to_string(),
                ));
            }
            if binding.action.is_empty() {
                return Err(ConfigError::ValidationError(
                    "keybinding action cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
