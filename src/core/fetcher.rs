use crate::config::ApiConfig;
use crate::domain::model::VerseQuery;
use crate::domain::ports::VerseSource;
use crate::utils::error::{Result, VerseError};
use reqwest::{redirect, Client, StatusCode};
use url::Url;

/// recver.php 的 HTTP 包裝：一次呼叫只發一個 GET，不重試
pub struct VerseFetcher {
    client: Client,
    base_url: Url,
}

impl VerseFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        // 只接受 200，轉址回應也視為錯誤狀態
        let mut builder = Client::builder()
            .redirect(redirect::Policy::none())
            .user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| VerseError::ConfigError {
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn query_url(&self, reference: &str) -> Url {
        VerseQuery::new(reference).to_url(&self.base_url)
    }

    pub async fn fetch_verses(&self, reference: &str) -> Result<String> {
        let url = self.query_url(reference);

        tracing::debug!("Making verse request to: {}", url);
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Verse API response status: {}", status);

        if status != StatusCode::OK {
            return Err(VerseError::BadStatus {
                status: status.as_u16(),
            });
        }

        let mut data = Vec::new();
        let mut chunks = 0usize;
        while let Some(chunk) = response.chunk().await? {
            chunks += 1;
            data.extend_from_slice(&chunk);
        }
        tracing::debug!("Received {} bytes in {} chunks", data.len(), chunks);

        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}

#[async_trait::async_trait]
impl VerseSource for VerseFetcher {
    async fn fetch_verses(&self, reference: &str) -> Result<String> {
        VerseFetcher::fetch_verses(self, reference).await
    }
}
