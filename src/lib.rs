pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::Cli;

pub use crate::adapters::HttpTransport;
pub use crate::config::{toml_config::TomlConfig, ClientConfig};
pub use crate::core::client::HoroscopeClient;
pub use crate::domain::category::{
    Category, HoroscopePeriod, HoroscopeType, RequestMethod, ZodiacSign,
};
pub use crate::domain::model::{HoroscopeReading, ZodiacProfile};
pub use crate::utils::error::{HoroscopeError, Result};
