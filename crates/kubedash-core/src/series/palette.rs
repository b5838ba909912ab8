//! Categorical colour palettes for chart series

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default palette for light backgrounds
pub const LIGHT_COLORS: [&str; 12] = [
    "#10dc60", "#ffce00", "#f04141", "#0cd1e8", "#7044ff", "#326ce5", "#28e070", "#ffd31a",
    "#f25454", "#24d6ea", "#7e57ff", "#477be8",
];

/// Default palette for dark backgrounds
pub const DARK_COLORS: [&str; 12] = [
    "#2fdf75", "#ffd534", "#ff4961", "#50c8ff", "#6a64ff", "#326ce5", "#44e283", "#ffd948",
    "#ff5b71", "#62ceff", "#7974ff", "#477be8",
];

/// Resolved display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// User theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    Light,
    Dark,
    /// Follow the environment's preference
    #[default]
    System,
}

impl ThemeSetting {
    pub fn resolve(&self, system_prefers_dark: bool) -> ThemeMode {
        match self {
            ThemeSetting::Light => ThemeMode::Light,
            ThemeSetting::Dark => ThemeMode::Dark,
            ThemeSetting::System if system_prefers_dark => ThemeMode::Dark,
            ThemeSetting::System => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("{0:?} palette has no colours")]
    Empty(ThemeMode),
}

/// Light and dark colour tables, indexed by series position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    light: Vec<String>,
    dark: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: LIGHT_COLORS.iter().map(|c| c.to_string()).collect(),
            dark: DARK_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    /// Build a custom palette; both tables must be non-empty
    pub fn new(light: Vec<String>, dark: Vec<String>) -> Result<Self, PaletteError> {
        if light.is_empty() {
            return Err(PaletteError::Empty(ThemeMode::Light));
        }
        if dark.is_empty() {
            return Err(PaletteError::Empty(ThemeMode::Dark));
        }
        Ok(Self { light, dark })
    }

    fn table(&self, mode: ThemeMode) -> &[String] {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Number of colours available for the mode
    pub fn len(&self, mode: ThemeMode) -> usize {
        self.table(mode).len()
    }

    /// Colour for the series at `index`, wrapping around the table
    pub fn color(&self, index: usize, mode: ThemeMode) -> &str {
        let table = self.table(mode);
        &table[index % table.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(0, ThemeMode::Light), "#10dc60");
        assert_eq!(palette.color(0, ThemeMode::Dark), "#2fdf75");
        assert_eq!(palette.color(11, ThemeMode::Light), "#477be8");
    }

    #[test]
    fn test_color_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.len(ThemeMode::Dark), 12);
        assert_eq!(
            palette.color(14, ThemeMode::Dark),
            palette.color(2, ThemeMode::Dark)
        );
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(
            vec!["red".to_string(), "blue".to_string()],
            vec!["white".to_string()],
        )
        .unwrap();
        assert_eq!(palette.color(3, ThemeMode::Light), "blue");
        assert_eq!(palette.color(3, ThemeMode::Dark), "white");
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(
            Palette::new(vec![], vec!["white".to_string()]),
            Err(PaletteError::Empty(ThemeMode::Light))
        );
        assert_eq!(
            Palette::new(vec!["red".to_string()], vec![]),
            Err(PaletteError::Empty(ThemeMode::Dark))
        );
    }

    #[test]
    fn test_theme_setting_resolve() {
        assert_eq!(ThemeSetting::Light.resolve(true), ThemeMode::Light);
        assert_eq!(ThemeSetting::Dark.resolve(false), ThemeMode::Dark);
        assert_eq!(ThemeSetting::System.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemeSetting::System.resolve(false), ThemeMode::Light);
    }
}
