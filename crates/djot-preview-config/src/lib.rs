use djot_preview_engine::{Converter, PreviewSession, Theme};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read stylesheet at {stylesheet_path}: {source}")]
    StylesheetReadError {
        stylesheet_path: PathBuf,
        source: std::io::Error,
    },
}

/// Preview theme setting. `Auto` follows the editor background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn resolve(self, background: (u8, u8, u8)) -> Theme {
        match self {
            ThemeChoice::Auto => Theme::from_background(background.0, background.1, background.2),
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub debounce_ms: u64,
    pub theme: ThemeChoice,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            theme: ThemeChoice::Auto,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Skip the parser and renderer and always use the fallback converter.
    pub fallback_only: bool,
    /// Extra CSS appended after the built-in stylesheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preview: PreviewConfig,
    pub render: RenderConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the stylesheet path
        config.render.stylesheet = config
            .render
            .stylesheet
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/djot-preview");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.preview.debounce_ms)
    }

    /// A converter honouring `render.fallback_only`.
    pub fn converter(&self) -> Converter {
        if self.render.fallback_only {
            Converter::fallback_only("disabled by configuration")
        } else {
            Converter::new()
        }
    }

    /// Contents of the configured extra stylesheet, if any.
    pub fn extra_stylesheet(&self) -> Result<Option<String>, ConfigError> {
        let Some(path) = &self.render.stylesheet else {
            return Ok(None);
        };
        std::fs::read_to_string(path)
            .map(Some)
            .map_err(|source| ConfigError::StylesheetReadError {
                stylesheet_path: path.clone(),
                source,
            })
    }

    /// A preview session for an editor whose background is `background`.
    pub fn preview_session(&self, background: (u8, u8, u8)) -> Result<PreviewSession, ConfigError> {
        let theme = self.preview.theme.resolve(background);
        let session = PreviewSession::new(self.converter(), theme, self.debounce())
            .with_extra_css(self.extra_stylesheet()?);
        Ok(session)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
