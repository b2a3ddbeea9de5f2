use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::view::{LayoutMode, PageSize};

/// Root application configuration, loaded from `~/.config/shelfscope/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub image_base_url: String,
    /// Name of the environment variable that holds the bestseller API key.
    pub api_key_env: String,
    /// Upper bound on concurrent cover lookups per book list.
    pub cover_concurrency: usize,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_items_per_page: u32,
    pub default_layout: LayoutMode,
    pub max_visible_pages: u32,
    pub notification_ms: u64,
    pub grid_columns: u16,
    pub tick_ms: u64,
}

/// Display conventions for prices and dates. Defaults follow pt-BR.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub group_separator: char,
    /// `chrono` format string applied to `YYYY-MM-DD` dates.
    pub date_format: String,
    pub invalid_date: String,
    pub not_a_number: String,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.nytimes.com/svc/books/v3".to_string(),
            image_base_url: "https://www.googleapis.com/books/v1".to_string(),
            api_key_env: "NYT_API_KEY".to_string(),
            cover_concurrency: 5,
            user_agent: concat!("shelfscope/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: 5,
            default_layout: LayoutMode::List,
            max_visible_pages: 6,
            notification_ms: 3000,
            grid_columns: 5,
            tick_ms: 250,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            decimal_separator: ',',
            group_separator: '.',
            date_format: "%d/%m/%Y".to_string(),
            invalid_date: "Invalid Date".to_string(),
            not_a_number: "NaN".to_string(),
        }
    }
}

impl ApiConfig {
    /// Read the API key from the configured environment variable.
    /// Returns `None` when the variable is unset or blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

impl UiConfig {
    pub fn page_size(&self) -> PageSize {
        PageSize::from_count(self.default_items_per_page).unwrap_or_default()
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/shelfscope/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("SHELFSCOPE_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("shelfscope")
            .join("config.toml")
    }

    /// Directory for the log file.
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("shelfscope")
    }

    pub fn log_path() -> PathBuf {
        Self::data_dir().join("shelfscope.log")
    }

    /// Load and validate config from `path`, falling back to defaults if the
    /// file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if PageSize::from_count(self.ui.default_items_per_page).is_none() {
            return Err(CoreError::ValidationError(format!(
                "ui.default_items_per_page must be 5, 10 or 15 (got {})",
                self.ui.default_items_per_page
            )));
        }
        if self.api.cover_concurrency == 0 {
            return Err(CoreError::ValidationError(
                "api.cover_concurrency must be at least 1".to_string(),
            ));
        }
        if self.ui.max_visible_pages == 0 {
            return Err(CoreError::ValidationError(
                "ui.max_visible_pages must be at least 1".to_string(),
            ));
        }
        if self.ui.tick_ms == 0 {
            return Err(CoreError::ValidationError(
                "ui.tick_ms must be at least 1".to_string(),
            ));
        }
        if self.ui.grid_columns == 0 {
            return Err(CoreError::ValidationError(
                "ui.grid_columns must be at least 1".to_string(),
            ));
        }
        if self.api.api_key_env.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "api.api_key_env must name an environment variable".to_string(),
            ));
        }
        Ok(())
    }
}
