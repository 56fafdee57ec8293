use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP Fetcher trait - 測試時可用 stub 替換
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 取得頁面內文（HTML）
    async fn fetch_page(&self, url: &str) -> Result<String>;

    /// 取得檔案內容（圖片）
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP 實作
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// 建立新的 HTTP Fetcher
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .context("無法建立 HTTP 客戶端")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("請求失敗: {}", url))?;

        // 非 2xx 不視為錯誤，內文照樣解析
        response.text().await.context("讀取回應失敗")
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("請求失敗: {}", url))?;

        let bytes = response.bytes().await.context("讀取回應失敗")?;
        Ok(bytes.to_vec())
    }
}
