//! Theme configuration and color management
//!
//! Loads theme from `~/.config/pageview/theme.toml`

use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global theme instance
static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the global theme instance
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

/// Theme configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeFile {
    /// Base colors
    pub colors: BaseColors,
}

/// Base UI colors
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BaseColors {
    /// Foreground (text) color
    pub foreground: String,
    /// Selection/highlight background color
    pub selection: String,
    /// Border color
    pub border: String,
    /// Active border color (focused surface)
    pub border_active: String,
    /// Accent color (address, counters)
    pub accent: String,
    /// Find-match highlight color
    pub match_highlight: String,
    /// Current-match highlight color
    pub match_current: String,
    /// Dimmed/disabled control color
    pub dim: String,
    /// Error message color
    pub error: String,
}

impl Default for BaseColors {
    fn default() -> Self {
        Self {
            foreground: "white".to_string(),
            selection: "darkgray".to_string(),
            border: "default".to_string(),
            border_active: "cyan".to_string(),
            accent: "cyan".to_string(),
            match_highlight: "yellow".to_string(),
            match_current: "magenta".to_string(),
            dim: "darkgray".to_string(),
            error: "red".to_string(),
        }
    }
}

impl ThemeFile {
    /// Get the theme file path (~/.config/pageview/theme.toml)
    pub fn theme_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pageview").join("theme.toml"))
    }

    /// Load theme from file
    pub fn load() -> Self {
        Self::theme_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }
}

/// Parsed theme with ratatui Color values
#[derive(Debug)]
pub struct Theme {
    pub foreground: Color,
    pub selection: Color,
    pub border: Color,
    pub border_active: Color,
    pub accent: Color,
    pub match_highlight: Color,
    pub match_current: Color,
    pub dim: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_file(&ThemeFile::default())
    }
}

impl Theme {
    /// Load theme from config file
    pub fn load() -> Self {
        let file = ThemeFile::load();
        Self::from_file(&file)
    }

    /// Create theme from ThemeFile
    fn from_file(file: &ThemeFile) -> Self {
        Self {
            foreground: parse_color(&file.colors.foreground),
            selection: parse_color(&file.colors.selection),
            border: parse_color(&file.colors.border),
            border_active: parse_color(&file.colors.border_active),
            accent: parse_color(&file.colors.accent),
            match_highlight: parse_color(&file.colors.match_highlight),
            match_current: parse_color(&file.colors.match_current),
            dim: parse_color(&file.colors.dim),
            error: parse_color(&file.colors.error),
        }
    }
}

/// Parse color string to ratatui Color
///
/// Supported formats:
/// - Named colors: "red", "blue", "green", etc.
/// - Hex colors: "#ff0000", "#f00"
/// - 256 colors: "color123" or "123"
pub fn parse_color(s: &str) -> Color {
    let s = s.trim().to_lowercase();

    if s.is_empty() || s == "default" || s == "reset" || s == "none" {
        return Color::Reset;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Color::Reset);
    }

    if let Some(idx) = s.strip_prefix("color").and_then(|n| n.parse::<u8>().ok()) {
        return Color::Indexed(idx);
    }
    if let Ok(idx) = s.parse::<u8>() {
        return Color::Indexed(idx);
    }

    match s.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    if expanded.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
