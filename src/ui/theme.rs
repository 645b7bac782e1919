use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "classic";

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme {0:?} not found (bundled themes: {1})")]
    NotFound(String, String),
    #[error("theme {name:?} at {source_name} is invalid: {source}")]
    Parse {
        name: String,
        source_name: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Colors for the board squares and the surrounding UI. The two square colors
/// stand in for the board textures; a theme that fails to load is fatal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub light_square: String,
    pub dark_square: String,
    pub label: String,
    pub text_pending: String,
    pub text_cursor_bg: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Theme {
    /// Looks in the user themes dir first, then the bundled themes.
    pub fn load(name: &str) -> Result<Self, ThemeError> {
        let filename = format!("{name}.toml");

        if let Some(path) = user_theme_dir().map(|dir| dir.join(&filename)) {
            if let Ok(content) = fs::read_to_string(&path) {
                return Self::parse(name, &path.display().to_string(), &content);
            }
        }

        if let Some(file) = ThemeAssets::get(&filename) {
            let content = String::from_utf8_lossy(file.data.as_ref());
            return Self::parse(name, &format!("bundled {filename}"), &content);
        }

        Err(ThemeError::NotFound(
            name.to_string(),
            Self::available_themes().join(", "),
        ))
    }

    fn parse(name: &str, source_name: &str, content: &str) -> Result<Self, ThemeError> {
        toml::from_str::<Theme>(content).map_err(|source| ThemeError::Parse {
            name: name.to_string(),
            source_name: source_name.to_string(),
            source,
        })
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

fn user_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("squaredr").join("themes"))
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            light_square: "#f0d9b5".to_string(),
            dark_square: "#b58863".to_string(),
            label: "#a6adc8".to_string(),
            text_pending: "#585b70".to_string(),
            text_cursor_bg: "#f5e0dc".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            border_focused: "#89b4fa".to_string(),
            error: "#f38ba8".to_string(),
            warning: "#f9e2af".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn light_square(&self) -> Color { Self::parse_color(&self.light_square) }
    pub fn dark_square(&self) -> Color { Self::parse_color(&self.dark_square) }
    pub fn label(&self) -> Color { Self::parse_color(&self.label) }
    pub fn text_pending(&self) -> Color { Self::parse_color(&self.text_pending) }
    pub fn text_cursor_bg(&self) -> Color { Self::parse_color(&self.text_cursor_bg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}
