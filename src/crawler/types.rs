/// 爬蟲配置
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// 最多掃描的列表頁數
    pub max_pages: u32,
    /// 請求超時（秒）
    pub timeout_secs: u64,
    /// 同時下載數量上限（None 表示不限制）
    pub concurrency: Option<usize>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 13,
            timeout_secs: 30,
            concurrency: None,
        }
    }
}

impl CrawlerConfig {
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }
}
