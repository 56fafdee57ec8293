use crate::fetcher::Fetcher;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// 測試用的 Fetcher stub：以 URL 對應預先準備的內容
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    failing: HashSet<String>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: &[(&str, &str)]) -> Self {
        let mut stub = Self::new();
        for (url, html) in pages {
            stub.add_page(url, html);
        }
        stub
    }

    pub fn add_page(&mut self, url: &str, html: &str) {
        self.pages.insert(url.to_string(), html.to_string());
    }

    pub fn add_file(&mut self, url: &str, data: &[u8]) {
        self.files.insert(url.to_string(), data.to_vec());
    }

    /// 讓某個 URL 的請求固定失敗
    pub fn fail_on(&mut self, url: &str) {
        self.failing.insert(url.to_string());
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        if self.failing.contains(url) {
            return Err(anyhow!("stub: 請求失敗: {}", url));
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("stub: 未準備的頁面: {}", url))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if self.failing.contains(url) {
            return Err(anyhow!("stub: 請求失敗: {}", url));
        }
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("stub: 未準備的檔案: {}", url))
    }
}
