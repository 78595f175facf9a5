use crate::adapters::http::HttpTransport;
use crate::config::ClientConfig;
use crate::core::discovery::{discover_periods, discover_types};
use crate::core::normalize::{normalize_profile, normalize_reading};
use crate::domain::category::{Category, HoroscopePeriod, HoroscopeType, RequestMethod, ZodiacSign};
use crate::domain::document::PageDocument;
use crate::domain::model::{HoroscopeReading, ZodiacProfile};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub fn profile_path(sign: ZodiacSign) -> String {
    format!("description/{}/", sign.slug())
}

/// 今日列表頁：同時用於取得運勢文字與探索可用的類型/期間
pub fn listing_path(horoscope_type: HoroscopeType, sign: ZodiacSign) -> String {
    format!("{}/{}/today/", horoscope_type.slug(), sign.slug())
}

/// Async client for the horoscope API.
///
/// Each call performs a single request and either returns a complete entity
/// or fails; nothing is retried.
pub struct HoroscopeClient<T: Transport = HttpTransport> {
    transport: T,
}

impl HoroscopeClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { transport })
    }
}

impl<T: Transport> HoroscopeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch_page(&self, path: &str) -> Result<PageDocument> {
        let value = self
            .transport
            .fetch(RequestMethod::Get, path, None, None)
            .await?;
        PageDocument::from_value(value)
    }

    pub async fn zodiac_profile(&self, sign: ZodiacSign) -> Result<ZodiacProfile> {
        tracing::debug!("🔮 Fetching zodiac profile for {}", sign);
        let doc = self.fetch_page(&profile_path(sign)).await?;
        normalize_profile(&doc, sign)
    }

    /// The API only serves the `today/` listing for a type; `period` is echoed
    /// back in the reading.
    pub async fn horoscope(
        &self,
        sign: ZodiacSign,
        horoscope_type: HoroscopeType,
        period: HoroscopePeriod,
    ) -> Result<HoroscopeReading> {
        tracing::debug!(
            "🔮 Fetching {} horoscope for {} ({})",
            horoscope_type,
            sign,
            period
        );
        let doc = self
            .fetch_page(&listing_path(horoscope_type, sign))
            .await?;
        Ok(normalize_reading(&doc, sign, horoscope_type, period))
    }

    pub async fn available_types(&self, sign: ZodiacSign) -> Result<Vec<HoroscopeType>> {
        tracing::debug!("🔍 Discovering horoscope types for {}", sign);
        let doc = self
            .fetch_page(&listing_path(HoroscopeType::General, sign))
            .await?;
        Ok(discover_types(&doc))
    }

    pub async fn available_periods(
        &self,
        sign: ZodiacSign,
        horoscope_type: HoroscopeType,
    ) -> Result<Vec<HoroscopePeriod>> {
        tracing::debug!(
            "🔍 Discovering periods for {} horoscope of {}",
            horoscope_type,
            sign
        );
        let doc = self
            .fetch_page(&listing_path(horoscope_type, sign))
            .await?;
        Ok(discover_periods(&doc, horoscope_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::QueryParams;
    use crate::utils::error::HoroscopeError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// 以路徑回傳固定 JSON 的傳輸層，並記錄收到的請求
    #[derive(Clone, Default)]
    struct MockTransport {
        pages: HashMap<String, serde_json::Value>,
        requests: Arc<Mutex<Vec<(RequestMethod, String)>>>,
    }

    impl MockTransport {
        fn with_page(mut self, path: &str, page: serde_json::Value) -> Self {
            self.pages.insert(path.to_string(), page);
            self
        }

        async fn requested_paths(&self) -> Vec<String> {
            let requests = self.requests.lock().await;
            requests.iter().map(|(_, path)| path.clone()).collect()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn fetch(
            &self,
            method: RequestMethod,
            path: &str,
            _query: Option<&QueryParams>,
            _body: Option<&serde_json::Value>,
        ) -> Result<serde_json::Value> {
            self.requests.lock().await.push((method, path.to_string()));
            self.pages.get(path).cloned().ok_or_else(|| HoroscopeError::ConfigError {
                message: format!("no page for {}", path),
            })
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(profile_path(ZodiacSign::Aquarius), "description/aquarius/");
        assert_eq!(
            listing_path(HoroscopeType::Woman, ZodiacSign::Virgo),
            "woman/virgo/today/"
        );
    }

    #[tokio::test]
    async fn test_zodiac_profile() {
        let transport = MockTransport::default().with_page(
            "description/taurus/",
            json!({
                "content": {
                    "text": [ { "type": "paragraph", "content": "<p>Телец</p>" } ],
                    "highlighted": { "list": [ { "items": [
                        { "name": "Родились", "text": "21 Апреля" },
                        { "name": "Стихия", "text": "Земля" }
                    ] } ] },
                    "summary": { "compatibility": ["Дева", "Козерог"] }
                }
            }),
        );
        let client = HoroscopeClient::with_transport(transport.clone());

        let profile = client.zodiac_profile(ZodiacSign::Taurus).await.unwrap();
        assert_eq!(profile.description(), "Телец");
        assert_eq!(profile.element(), "земля");
        assert_eq!(
            profile.compatibility(),
            &[ZodiacSign::Virgo, ZodiacSign::Capricorn]
        );
        assert_eq!(transport.requested_paths().await, vec!["description/taurus/"]);
    }

    #[tokio::test]
    async fn test_horoscope_always_reads_today_listing() {
        let transport = MockTransport::default().with_page(
            "sex/leo/today/",
            json!({ "content": { "text": [ { "type": "paragraph", "content": "Страсть" } ] } }),
        );
        let client = HoroscopeClient::with_transport(transport.clone());

        let reading = client
            .horoscope(ZodiacSign::Leo, HoroscopeType::Sex, HoroscopePeriod::Monthly)
            .await
            .unwrap();

        assert_eq!(reading.text, "Страсть");
        assert_eq!(reading.period, HoroscopePeriod::Monthly);
        assert_eq!(transport.requested_paths().await, vec!["sex/leo/today/"]);
    }

    #[tokio::test]
    async fn test_available_types_uses_general_listing() {
        let transport = MockTransport::default().with_page(
            "general/gemini/today/",
            json!({ "cards": [ { "stories": [
                { "link": "/horoscope/erotic/gemini/" },
                { "link": "/horoscope/man/gemini/" }
            ] } ] }),
        );
        let client = HoroscopeClient::with_transport(transport);

        let types = client.available_types(ZodiacSign::Gemini).await.unwrap();
        assert_eq!(
            types,
            vec![HoroscopeType::General, HoroscopeType::Love, HoroscopeType::Man]
        );
    }

    #[tokio::test]
    async fn test_available_periods_for_typed_listing() {
        let transport = MockTransport::default().with_page(
            "career/libra/today/",
            json!({ "content": { "bubbles": { "list": [
                { "link": "/career/libra/tomorrow/" },
                { "link": "/career/libra/" }
            ] } } }),
        );
        let client = HoroscopeClient::with_transport(transport);

        let periods = client
            .available_periods(ZodiacSign::Libra, HoroscopeType::Career)
            .await
            .unwrap();
        assert_eq!(periods, vec![HoroscopePeriod::Today, HoroscopePeriod::Tomorrow]);
    }

    #[tokio::test]
    async fn test_malformed_document_fails() {
        let transport = MockTransport::default()
            .with_page("general/leo/today/", json!({ "cards": "not a list" }));
        let client = HoroscopeClient::with_transport(transport);

        let err = client.available_types(ZodiacSign::Leo).await.unwrap_err();
        assert!(matches!(err, HoroscopeError::DecodingError(_)));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = HoroscopeClient::with_transport(MockTransport::default());
        let err = client.zodiac_profile(ZodiacSign::Aries).await.unwrap_err();
        assert!(matches!(err, HoroscopeError::ConfigError { .. }));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig {
            api_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(HoroscopeClient::new(config).is_err());
    }
}
