#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{HoroscopeError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://horoscopes.rambler.ru/api/front/v3/horoscope/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

/// 使用者快取目錄下的 `rambler-horoscopes`，取不到時退回系統暫存目錄
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("rambler-horoscopes")
}

/// 客戶端設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub use_cache: bool,
    pub cache_ttl_seconds: u64,
    /// 未設定時快取只存在記憶體中
    pub cache_dir: Option<PathBuf>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            use_cache: true,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            cache_dir: None,
            user_agent: None,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if let Some(user_agent) = &self.user_agent {
            if user_agent.trim().is_empty() {
                return Err(HoroscopeError::InvalidConfigValueError {
                    field: "user_agent".to_string(),
                    value: user_agent.clone(),
                    reason: "User agent cannot be blank".to_string(),
                });
            }
        }

        if let Some(dir) = &self.cache_dir {
            if dir.as_os_str().is_empty() {
                return Err(HoroscopeError::InvalidConfigValueError {
                    field: "cache_dir".to_string(),
                    value: String::new(),
                    reason: "Cache directory cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
