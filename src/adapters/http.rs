use crate::adapters::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::domain::category::RequestMethod;
use crate::domain::ports::{QueryParams, Transport};
use crate::utils::error::{HoroscopeError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub fn default_user_agent() -> String {
    format!("rambler-horoscopes/v{}", env!("CARGO_PKG_VERSION"))
}

/// 基於 reqwest 的傳輸層，可選擇啟用回應快取
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    cache: Option<ResponseCache>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Self::parse_base_url(&config.api_url)?;

        let cache_control = if config.use_cache {
            format!("max-age={}", config.cache_ttl_seconds)
        } else {
            "no-cache".to_string()
        };
        let mut headers = HeaderMap::new();
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_str(&cache_control).map_err(|e| HoroscopeError::ConfigError {
                message: format!("Invalid cache-control header: {}", e),
            })?,
        );

        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let cache = config.use_cache.then(|| {
            let ttl = Duration::from_secs(config.cache_ttl_seconds);
            match &config.cache_dir {
                Some(dir) => ResponseCache::with_dir(ttl, dir.clone()),
                None => ResponseCache::new(ttl),
            }
        });

        Ok(Self {
            client,
            base_url,
            cache,
        })
    }

    /// 確保結尾有 `/`，否則 `Url::join` 會吃掉最後一段路徑
    fn parse_base_url(api_url: &str) -> Result<Url> {
        if api_url.ends_with('/') {
            Ok(Url::parse(api_url)?)
        } else {
            Ok(Url::parse(&format!("{}/", api_url))?)
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    fn build_url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if let Some(params) = query {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if let Some(value) = value {
                    pairs.append_pair(key, value);
                }
            }
        }
        // 沒有任何參數時不留下孤立的 `?`
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    fn cache_key(method: RequestMethod, url: &Url, body: Option<&serde_json::Value>) -> String {
        match body {
            Some(body) => format!("{} {} {}", method, url, body),
            None => format!("{} {}", method, url),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(
        &self,
        method: RequestMethod,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let url = self.build_url(path, query)?;
        let cache_key = Self::cache_key(method, &url, body);
        let cache = self.cache.as_ref().filter(|_| method.is_cacheable());

        if let Some(cache) = cache {
            if let Some(value) = cache.get(&cache_key).await {
                tracing::debug!("📦 Cache hit: {}", cache_key);
                return Ok(value);
            }
        }

        tracing::debug!("📡 Making API request: {} {}", method, url);
        let mut request = self.client.request(method.into(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!("📡 API response status: {}", response.status());

        let bytes = response.error_for_status()?.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;

        if let Some(cache) = cache {
            cache.insert(cache_key, value.clone()).await;
        }

        Ok(value)
    }
}
