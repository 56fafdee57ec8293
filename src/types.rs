use anyhow::{Result, anyhow};
use chrono::{DateTime, Month, Utc};
use serde::{Deserialize, Serialize};

/// 站台設定（列表頁網址模板與網域）
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// 網站根網址（用於處理相對路徑）
    pub origin: String,
    /// 列表第一頁的網址（與後續分頁不同）
    pub first_page_url: String,
    /// 後續分頁的網址模板，含 {page} 佔位符
    pub page_url_template: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://www.smashingmagazine.com".to_string(),
            first_page_url: "https://www.smashingmagazine.com/category/wallpapers/".to_string(),
            page_url_template: "https://www.smashingmagazine.com/category/wallpapers/page/{page}/"
                .to_string(),
        }
    }
}

impl SiteConfig {
    /// 取得第 page 頁的列表網址（page 從 1 起算，第一頁有獨立網址）
    pub fn page_url(&self, page: u32) -> String {
        if page == 1 {
            self.first_page_url.clone()
        } else {
            self.page_url_template.replace("{page}", &page.to_string())
        }
    }

    /// 正規化 URL（處理相對路徑）
    pub fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if href.starts_with("//") {
            format!("https:{}", href)
        } else if href.starts_with('/') {
            format!("{}{}", self.origin, href)
        } else {
            format!("{}/{}", self.origin, href)
        }
    }
}

/// 單張桌布的 manifest 紀錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallpaperMetadata {
    /// 檔案名稱
    pub filename: String,
    /// 原始 URL
    pub url: String,
    /// 內容雜湊 (SHA256)
    pub content_hash: String,
    /// 下載時間
    pub downloaded_at: DateTime<Utc>,
}

/// 取得英文月份名稱（小寫），例如 10 -> "october"
pub fn month_name(month: u32) -> Result<String> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_lowercase())
        .ok_or_else(|| anyhow!("月份必須介於 1 到 12：{}", month))
}
