use crate::patterns::LinkPattern;
use crate::scanner::PageScanner;
use anyhow::Result;

/// 圖片連結解析器
///
/// 掃描已定位的文章頁，取出符合解析度與月曆條件的圖片連結。
pub struct ImageResolver {
    scanner: PageScanner,
}

impl ImageResolver {
    pub fn new(scanner: PageScanner) -> Self {
        Self { scanner }
    }

    /// 回傳文章頁中所有比中的圖片連結（依文件順序，重複保留）
    pub async fn resolve(&self, article_url: &str, pattern: &LinkPattern) -> Result<Vec<String>> {
        self.scanner.scan(article_url, pattern).await
    }
}
