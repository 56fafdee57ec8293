use crate::patterns::LinkPattern;
use crate::scanner::PageScanner;
use crate::types::SiteConfig;
use anyhow::Result;

/// 桌布頁面搜尋器
///
/// 依序掃描列表分頁，找出指定月份的文章連結。
pub struct PageLocator {
    scanner: PageScanner,
    site: SiteConfig,
    max_pages: u32,
}

impl PageLocator {
    pub fn new(scanner: PageScanner, site: SiteConfig, max_pages: u32) -> Self {
        Self {
            scanner,
            site,
            max_pages,
        }
    }

    /// 搜尋指定月份的文章連結
    ///
    /// 從第 1 頁掃到第 max_pages 頁，回傳第一個比中的 href，
    /// 之後的分頁不再查詢；掃完仍沒找到時回傳 None。
    /// 列表頁抓取失敗會中止整個搜尋。
    pub async fn locate(&self, year: i32, month_name: &str) -> Result<Option<String>> {
        let pattern = LinkPattern::article(month_name, year)?;

        for page in 1..=self.max_pages {
            let page_url = self.site.page_url(page);
            let matches = self.scanner.scan(&page_url, &pattern).await?;

            if let Some(first) = matches.into_iter().next() {
                return Ok(Some(first));
            }
        }

        Ok(None)
    }
}
