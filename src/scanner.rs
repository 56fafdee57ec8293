use crate::fetcher::Fetcher;
use crate::patterns::LinkPattern;
use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::sync::Arc;

/// 頁面連結掃描器
///
/// 抓取單一頁面，取出所有 `<a>` 的 href，再以樣式過濾。
#[derive(Clone)]
pub struct PageScanner {
    fetcher: Arc<dyn Fetcher>,
    anchor_selector: Selector,
}

impl PageScanner {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        Ok(Self {
            fetcher,
            anchor_selector: Selector::parse("a[href]")
                .map_err(|e| anyhow::anyhow!("選擇器解析失敗: {:?}", e))?,
        })
    }

    /// 取出頁面中所有 `<a>` 的 href 值（依文件順序，重複保留）
    ///
    /// 其他標籤一律忽略；殘缺的 HTML 交給 parser 容錯，
    /// 能解析出多少就回傳多少。
    pub fn extract_hrefs(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        document
            .select(&self.anchor_selector)
            .filter_map(|element| element.value().attr("href"))
            .map(|href| href.to_string())
            .collect()
    }

    /// 抓取頁面並回傳所有符合樣式的 href
    ///
    /// 傳輸失敗回傳錯誤（不重試）；非 2xx 回應不視為失敗，
    /// 內文照樣掃描。
    pub async fn scan(&self, page_url: &str, pattern: &LinkPattern) -> Result<Vec<String>> {
        let html = self
            .fetcher
            .fetch_page(page_url)
            .await
            .with_context(|| format!("無法取得頁面: {}", page_url))?;

        Ok(self
            .extract_hrefs(&html)
            .into_iter()
            .filter(|href| pattern.is_match(href))
            .collect())
    }
}
