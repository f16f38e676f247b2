//! Configuration management for blogmark.
//!
//! Parses `blogmark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `render.placeholder_image` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::path::{Path, PathBuf};

use blogmark_renderer::preview::DEFAULT_PREVIEW_LENGTH;
use blogmark_renderer::stats::DEFAULT_WORDS_PER_MINUTE;
use blogmark_renderer::{DEFAULT_PLACEHOLDER_IMAGE, MarkupRenderer, TextDirection};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "blogmark.toml";

/// Upper bound for `reading.words_per_minute`.
const MAX_WORDS_PER_MINUTE: u32 = 2000;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the fallback image URL.
    pub placeholder_image: Option<String>,
    /// Override horizontal rule rendering.
    pub horizontal_rules: Option<bool>,
    /// Override attribute escaping.
    pub escape_attributes: Option<bool>,
    /// Override base text direction.
    pub direction: Option<TextDirection>,
    /// Override preview length.
    pub preview_length: Option<usize>,
    /// Override reading speed.
    pub words_per_minute: Option<u32>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Renderer configuration.
    pub render: RenderConfig,
    /// Preview and excerpt configuration.
    pub preview: PreviewConfig,
    /// Reading-time configuration.
    pub reading: ReadingConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Renderer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image shown when a captionless image fails to load.
    pub placeholder_image: String,
    /// Render `---` and `***` lines as rules.
    pub horizontal_rules: bool,
    /// Escape user values written into attributes.
    pub escape_attributes: bool,
    /// Base writing direction of rendered posts.
    pub direction: TextDirection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            horizontal_rules: false,
            escape_attributes: false,
            direction: TextDirection::Ltr,
        }
    }
}

impl RenderConfig {
    /// Build a renderer configured from these settings.
    #[must_use]
    pub fn renderer(&self) -> MarkupRenderer {
        MarkupRenderer::new()
            .with_placeholder_image(self.placeholder_image.clone())
            .with_horizontal_rules(self.horizontal_rules)
            .with_attribute_escaping(self.escape_attributes)
            .with_direction(self.direction)
    }
}

/// Preview and excerpt configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Maximum preview length in characters.
    pub max_length: usize,
    /// Maximum excerpt length in characters.
    pub excerpt_length: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_PREVIEW_LENGTH,
            excerpt_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

/// Reading-time configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Reading speed used for estimates.
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`render.placeholder_image`").
        field: String,
        /// Error message (e.g., "${`CDN_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a numeric field to be greater than zero.
fn require_positive(value: usize, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `blogmark.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values. The merged result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(placeholder_image) = &settings.placeholder_image {
            self.render.placeholder_image.clone_from(placeholder_image);
        }
        if let Some(horizontal_rules) = settings.horizontal_rules {
            self.render.horizontal_rules = horizontal_rules;
        }
        if let Some(escape_attributes) = settings.escape_attributes {
            self.render.escape_attributes = escape_attributes;
        }
        if let Some(direction) = settings.direction {
            self.render.direction = direction;
        }
        if let Some(preview_length) = settings.preview_length {
            self.preview.max_length = preview_length;
            self.preview.excerpt_length = preview_length;
        }
        if let Some(words_per_minute) = settings.words_per_minute {
            self.reading.words_per_minute = words_per_minute;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.render.placeholder_image, "render.placeholder_image")?;
        require_positive(self.preview.max_length, "preview.max_length")?;
        require_positive(self.preview.excerpt_length, "preview.excerpt_length")?;
        self.validate_reading()?;
        Ok(())
    }

    /// Validate reading configuration.
    fn validate_reading(&self) -> Result<(), ConfigError> {
        let wpm = self.reading.words_per_minute;
        if wpm == 0 {
            return Err(ConfigError::Validation(
                "reading.words_per_minute must be greater than 0".to_owned(),
            ));
        }
        if wpm > MAX_WORDS_PER_MINUTE {
            return Err(ConfigError::Validation(format!(
                "reading.words_per_minute cannot exceed {MAX_WORDS_PER_MINUTE}"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.render.placeholder_image =
            expand::expand_env(&self.render.placeholder_image, "render.placeholder_image")?;
        Ok(())
    }
}
