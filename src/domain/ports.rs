use crate::utils::error::Result;
use async_trait::async_trait;

/// 經節來源：輸入經節參照，回傳未經解析的回應內容
#[async_trait]
pub trait VerseSource: Send + Sync {
    async fn fetch_verses(&self, reference: &str) -> Result<String>;
}
