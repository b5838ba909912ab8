//! Configuration management for the CLI

use anyhow::{Context, Result};
use config::{Environment, File};
use kubedash_core::{Palette, ThemeMode, ThemeSetting};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Theme preference (light, dark or system)
    pub theme: ThemeSetting,
    /// Colours replacing the default light palette
    pub palette_light: Option<Vec<String>>,
    /// Colours replacing the default dark palette
    pub palette_dark: Option<Vec<String>>,
    /// Default unit shown next to chart values
    pub unit: String,
}

impl DashboardConfig {
    /// Load configuration from a file (explicit or default location) and
    /// `KUBEDASH_*` environment variables, the latter taking precedence
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path.to_path_buf()).required(true),
            None => match Self::default_path() {
                Some(default) => File::with_name(&default.to_string_lossy()).required(false),
                None => return Self::from_env_only(),
            },
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(Self::environment())
            .build()
            .context("Failed to load configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Invalid configuration")?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    fn from_env_only() -> Result<Self> {
        config::Config::builder()
            .add_source(Self::environment())
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn environment() -> Environment {
        Environment::with_prefix("KUBEDASH")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("palette_light")
            .with_list_parse_key("palette_dark")
    }

    /// Default config file stem, `~/.config/kubedash/config.{toml,json,yaml}`
    fn default_path() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".config").join("kubedash").join("config"))
    }

    /// Palette with any configured overrides applied
    pub fn palette(&self) -> Result<Palette> {
        if self.palette_light.is_none() && self.palette_dark.is_none() {
            return Ok(Palette::default());
        }

        let defaults = Palette::default();
        let table = |custom: &Option<Vec<String>>, mode: ThemeMode| match custom {
            Some(colors) => colors.clone(),
            None => (0..defaults.len(mode))
                .map(|i| defaults.color(i, mode).to_string())
                .collect(),
        };

        Palette::new(
            table(&self.palette_light, ThemeMode::Light),
            table(&self.palette_dark, ThemeMode::Dark),
        )
        .context("Invalid palette configuration")
    }

    /// Resolve the theme, probing the terminal only for the system setting
    pub fn theme_mode(&self) -> ThemeMode {
        match self.theme {
            ThemeSetting::System => self.theme.resolve(terminal_prefers_dark()),
            explicit => explicit.resolve(false),
        }
    }
}

fn terminal_prefers_dark() -> bool {
    match terminal_light::luma() {
        Ok(luma) => luma <= 0.5,
        Err(_) => true,
    }
}
