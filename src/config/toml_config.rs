use crate::config::ClientConfig;
use crate::utils::error::{HoroscopeError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定檔格式，所有欄位皆可省略，省略時沿用 [`ClientConfig::default`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    pub enabled: Option<bool>,
    pub ttl_seconds: Option<u64>,
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HoroscopeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HoroscopeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOROSCOPES_API_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HoroscopeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            api_url: self.api.url.clone().unwrap_or(defaults.api_url),
            timeout_seconds: self.api.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            use_cache: self.cache.enabled.unwrap_or(defaults.use_cache),
            cache_ttl_seconds: self.cache.ttl_seconds.unwrap_or(defaults.cache_ttl_seconds),
            cache_dir: self.cache.dir.clone().or(defaults.cache_dir),
            user_agent: self.api.user_agent.clone().or(defaults.user_agent),
        }
    }

    /// 只檢查 `[logging]`，其餘欄位可能還會被命令列覆蓋
    pub fn validate_logging(&self) -> Result<()> {
        if let Some(level) = &self.logging.level {
            let known = ["trace", "debug", "info", "warn", "error"];
            if !known.contains(&level.to_lowercase().as_str()) {
                return Err(HoroscopeError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Expected one of: {}", known.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_client_config().validate()?;
        self.validate_logging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_client_config(), ClientConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_all_sections() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
url = "https://mirror.example.com/horoscope/"
timeout_seconds = 15
user_agent = "astro-bot/1.0"

[cache]
enabled = false
ttl_seconds = 120
dir = "/var/cache/horoscopes"

[logging]
level = "debug"
json = true
"#,
        )
        .unwrap();

        let client = config.to_client_config();
        assert_eq!(client.api_url, "https://mirror.example.com/horoscope/");
        assert_eq!(client.timeout_seconds, 15);
        assert_eq!(client.user_agent.as_deref(), Some("astro-bot/1.0"));
        assert!(!client.use_cache);
        assert_eq!(client.cache_ttl_seconds, 120);
        assert_eq!(client.cache_dir, Some(PathBuf::from("/var/cache/horoscopes")));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.json, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RAMBLER_HOROSCOPES_TEST_URL", "https://env.example.com/api/");
        let config = TomlConfig::from_toml_str(
            r#"
[api]
url = "${RAMBLER_HOROSCOPES_TEST_URL}"
user_agent = "${RAMBLER_HOROSCOPES_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(config.api.url.as_deref(), Some("https://env.example.com/api/"));
        assert_eq!(
            config.api.user_agent.as_deref(),
            Some("${RAMBLER_HOROSCOPES_UNSET_VAR}")
        );
    }

    #[test]
    fn test_invalid_toml_and_values() {
        assert!(matches!(
            TomlConfig::from_toml_str("[api\nurl = 1"),
            Err(HoroscopeError::ConfigError { .. })
        ));

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap();
        assert!(config.validate().is_err());
        assert!(config.validate_logging().is_err());

        let config = TomlConfig::from_toml_str("[api]\ntimeout_seconds = 0").unwrap();
        assert!(config.validate().is_err());
        assert!(config.validate_logging().is_ok());
    }
}
