use std::path::PathBuf;

use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    domain::{snow, theme::Theme, tilt},
    presentation::config::keybindings,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub snow: SnowConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Overridden by `GEMINI_API_KEY` when set
    pub api_key: Option<SecretString>,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 1.1,
            top_p: 0.95,
            max_output_tokens: 1000,
            timeout_secs: 30,
        }
    }
}

impl GeminiConfig {
    /// The credential to send, empty when none is configured
    pub fn api_key(&self) -> SecretString {
        self.api_key
            .clone()
            .unwrap_or_else(|| SecretString::from(String::new()))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Theme preselected on start
    pub theme: Theme,
    /// Rotation range in degrees
    pub max_tilt: f64,
    /// Frames the flip animation takes
    pub flip_frames: u16,
    /// Minimum time before a greeting is revealed
    pub reveal_delay_ms: u64,
    /// How long the text stays after closing
    pub clear_delay_ms: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Magic,
            max_tilt: tilt::DEFAULT_MAX_TILT,
            flip_frames: 36,
            reveal_delay_ms: 800,
            clear_delay_ms: 500,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    pub flakes: usize,
    pub force_radius: f64,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            flakes: snow::DEFAULT_FLAKES,
            force_radius: snow::FORCE_RADIUS,
        }
    }
}

impl Config {
    /// The defaults compiled into the binary, without any user file or
    /// environment applied
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load the embedded defaults, layer any user config file on top and
    /// pick up the API key from the environment.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            tracing::info!(dir = %config_dir.display(), "No configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }

        cfg.apply_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(cfg)
    }

    /// Environment credential wins over the file one. A missing credential is
    /// logged and passed through empty: every request will then fall back.
    pub fn apply_api_key(&mut self, from_env: Option<String>) {
        if let Some(key) = from_env.filter(|k| !k.trim().is_empty()) {
            self.gemini.api_key = Some(SecretString::from(key));
        }
        if !self.gemini.has_api_key() {
            tracing::error!("{API_KEY_ENV} is not set");
        }
    }
}
