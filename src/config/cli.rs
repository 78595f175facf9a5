use crate::config::toml_config::TomlConfig;
use crate::config::{default_cache_dir, ClientConfig};
use crate::domain::category::{HoroscopePeriod, HoroscopeType, ZodiacSign};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "horoscopes")]
#[command(about = "Fetch zodiac profiles and horoscopes from the Rambler API")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Disable the response cache")]
    pub no_cache: bool,

    #[arg(long, global = true, help = "Cache freshness window in seconds")]
    pub cache_ttl: Option<u64>,

    #[arg(long, global = true, help = "Directory holding cached responses")]
    pub cache_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Static description of a zodiac sign
    Profile {
        #[arg(value_enum)]
        sign: ZodiacSign,
    },
    /// Horoscope text for a sign
    Horoscope {
        #[arg(value_enum)]
        sign: ZodiacSign,
        #[arg(long = "type", value_enum, default_value_t = HoroscopeType::General)]
        horoscope_type: HoroscopeType,
        #[arg(long, value_enum, default_value_t = HoroscopePeriod::Today)]
        period: HoroscopePeriod,
    },
    /// Horoscope types available for a sign
    Types {
        #[arg(value_enum)]
        sign: ZodiacSign,
    },
    /// Periods available for a sign and horoscope type
    Periods {
        #[arg(value_enum)]
        sign: ZodiacSign,
        #[arg(long = "type", value_enum, default_value_t = HoroscopeType::General)]
        horoscope_type: HoroscopeType,
    },
}

impl Cli {
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    /// 命令列參數覆蓋設定檔
    pub fn client_config(&self, file_config: &TomlConfig) -> ClientConfig {
        let mut config = file_config.to_client_config();
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        if self.no_cache {
            config.use_cache = false;
        }
        if let Some(ttl) = self.cache_ttl {
            config.cache_ttl_seconds = ttl;
        }
        if let Some(dir) = &self.cache_dir {
            config.cache_dir = Some(dir.clone());
        }
        // 每次執行都是新的行程，快取必須落地才有機會命中
        if config.use_cache && config.cache_dir.is_none() {
            config.cache_dir = Some(default_cache_dir());
        }
        config
    }
}
