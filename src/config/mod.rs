pub mod cli;

use crate::utils::error::{Result, VerseError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://api.lsm.org/recver.php";
pub const CONFIG_PATH_ENV: &str = "LSM_VERSE_CONFIG";
pub const BASE_URL_ENV: &str = "LSM_VERSE_BASE_URL";

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerseConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl ApiConfig {
    pub fn base_url(&self) -> Result<Url> {
        validate_url("api.base_url", &self.base_url)?;
        Url::parse(&self.base_url).map_err(|e| VerseError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: self.base_url.clone(),
            reason: format!("Invalid URL format: {}", e),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl VerseConfig {
    /// 依序套用：預設值、LSM_VERSE_CONFIG 指向的檔案、LSM_VERSE_BASE_URL
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::read_file(&path, &lookup)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(&lookup);
        config.validate()?;
        Ok(config)
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read_file(path, &|key: &str| std::env::var(key).ok())
    }

    fn read_file<P, F>(path: P, lookup: &F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content, lookup)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse_toml(content, &|key: &str| std::env::var(key).ok())
    }

    fn parse_toml<F>(content: &str, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = substitute_env_vars(content, lookup);
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            tracing::debug!("Base URL overridden by {}", BASE_URL_ENV);
            self.api.base_url = base_url;
        }
    }
}

impl Validate for VerseConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        validate_non_empty_string("api.user_agent", &self.api.user_agent)?;

        Ok(())
    }
}

/// 替換 ${VAR_NAME}；找不到的變數保留原樣
fn substitute_env_vars<F>(content: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let result = PLACEHOLDER_PATTERN.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    result.to_string()
}
