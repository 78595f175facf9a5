use crate::domain::category::RequestMethod;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 查詢參數，值為 `None` 的項目不會送出
pub type QueryParams = [(String, Option<String>)];

/// 傳輸層介面：送出請求並回傳解析後的 JSON
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(
        &self,
        method: RequestMethod,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value>;
}
