use anyhow::Result;
use httpmock::prelude::*;
use rambler_horoscopes::utils::validation::Validate;
use rambler_horoscopes::{HoroscopeClient, HoroscopeError, TomlConfig, ZodiacSign};
use tempfile::TempDir;

/// 從設定檔建立客戶端並對 mock server 發出請求
#[tokio::test]
async fn test_client_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/horoscope/general/scorpio/today/")
            .header("user-agent", "astro-bot/2.0");
        then.status(200).json_body(serde_json::json!({
            "cards": [ { "stories": [ { "link": "/horoscope/woman/scorpio/" } ] } ]
        }));
    });

    let config_content = format!(
        r#"
[api]
url = "{}"
timeout_seconds = 10
user_agent = "astro-bot/2.0"

[cache]
enabled = true
ttl_seconds = 60
"#,
        server.url("/horoscope/")
    );
    let config_path = temp_dir.path().join("horoscopes.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let file_config = TomlConfig::from_file(&config_path)?;
    file_config.validate()?;

    let client = HoroscopeClient::new(file_config.to_client_config())?;
    let types = client.available_types(ZodiacSign::Scorpio).await?;

    api_mock.assert();
    assert_eq!(types.len(), 2);
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, HoroscopeError::IoError(_)));
}
