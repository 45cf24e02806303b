use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable color representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color
    Named(String),
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "White" => Color::White,
                "Default" | "Reset" => Color::Reset,
                _ => Color::White,
            },
        }
    }
}

/// Theme file as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    editor_bg: ColorDef,
    editor_fg: ColorDef,
    line_number_fg: ColorDef,
    line_number_bg: ColorDef,
    status_bar_fg: ColorDef,
    status_bar_bg: ColorDef,
    prompt_fg: ColorDef,
    prompt_bg: ColorDef,
    search_match_fg: ColorDef,
    search_match_bg: ColorDef,
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        Self {
            name: file.name,
            editor_bg: file.editor_bg.into(),
            editor_fg: file.editor_fg.into(),
            line_number_fg: file.line_number_fg.into(),
            line_number_bg: file.line_number_bg.into(),
            status_bar_fg: file.status_bar_fg.into(),
            status_bar_bg: file.status_bar_bg.into(),
            prompt_fg: file.prompt_fg.into(),
            prompt_bg: file.prompt_bg.into(),
            search_match_fg: file.search_match_fg.into(),
            search_match_bg: file.search_match_bg.into(),
        }
    }
}

/// Colors used to draw the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    pub editor_bg: Color,
    pub editor_fg: Color,
    pub line_number_fg: Color,
    pub line_number_bg: Color,

    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
    pub prompt_fg: Color,
    pub prompt_bg: Color,

    /// Highlight for the last search hit
    pub search_match_fg: Color,
    pub search_match_bg: Color,
}

impl Theme {
    /// Load a theme from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read theme file: {}", e))?;
        let theme_file: ThemeFile = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse theme file: {}", e))?;
        Ok(theme_file.into())
    }

    fn load_user_theme(name: &str) -> Option<Self> {
        let path = dirs::config_dir()?
            .join("scribe")
            .join("themes")
            .join(format!("{name}.json"));
        if !path.exists() {
            return None;
        }
        match Self::from_file(&path) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("{}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            editor_bg: Color::Rgb(30, 30, 30),
            editor_fg: Color::Rgb(212, 212, 212),
            line_number_fg: Color::Rgb(100, 100, 100),
            line_number_bg: Color::Rgb(30, 30, 30),
            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(45, 45, 48),
            prompt_fg: Color::White,
            prompt_bg: Color::Rgb(20, 20, 20),
            search_match_fg: Color::Rgb(255, 255, 255),
            search_match_bg: Color::Rgb(100, 100, 20),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            editor_bg: Color::Rgb(255, 255, 255),
            editor_fg: Color::Rgb(0, 0, 0),
            line_number_fg: Color::Rgb(140, 140, 140),
            line_number_bg: Color::Rgb(255, 255, 255),
            status_bar_fg: Color::Black,
            status_bar_bg: Color::Rgb(220, 220, 220),
            prompt_fg: Color::Black,
            prompt_bg: Color::Rgb(235, 235, 235),
            search_match_fg: Color::Rgb(0, 0, 0),
            search_match_bg: Color::Rgb(255, 255, 150),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            editor_bg: Color::Black,
            editor_fg: Color::White,
            line_number_fg: Color::Yellow,
            line_number_bg: Color::Black,
            status_bar_fg: Color::Black,
            status_bar_bg: Color::Yellow,
            prompt_fg: Color::White,
            prompt_bg: Color::Black,
            search_match_fg: Color::Black,
            search_match_bg: Color::Yellow,
        }
    }

    /// Get a theme by name, defaults to dark if not found.
    /// A user theme in `<config dir>/scribe/themes/<name>.json` wins over
    /// the built-in one.
    pub fn from_name(name: &str) -> Self {
        let normalized_name = name.to_lowercase().replace('_', "-");

        if let Some(theme) = Self::load_user_theme(&normalized_name) {
            return theme;
        }

        match normalized_name.as_str() {
            "light" => Self::light(),
            "high-contrast" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
