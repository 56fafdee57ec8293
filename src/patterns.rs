use anyhow::{Context, Result};
use regex::Regex;

/// 連結比對樣式
///
/// 兩種模板：文章樣式（`{month}-{year}`）與圖片樣式
/// （`{cal}.*{resolution}\.(jpg|jpeg|png|gif)$`），不可混用。
/// 解析度字串會原樣插入樣式中，呼叫端必須保證它是 regex 安全的
/// token（例如 "1920x1080"）。
#[derive(Debug, Clone)]
pub struct LinkPattern {
    regex: Regex,
}

impl LinkPattern {
    /// 從樣式字串建立（樣式來自內部模板，編譯失敗視為程式錯誤）
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).with_context(|| format!("樣式編譯失敗: {}", pattern))?;
        Ok(Self { regex })
    }

    /// 文章連結樣式，例如 ("october", 2020) -> "october-2020"
    pub fn article(month_name: &str, year: i32) -> Result<Self> {
        Self::new(&format!("{}-{}", month_name.to_lowercase(), year))
    }

    /// 圖片連結樣式
    ///
    /// no_calendar 為 true 時只選不含月曆的版本（檔名帶 "nocal"），
    /// 否則不限制，月曆版與無月曆版都會比中。
    pub fn images(resolution: &str, no_calendar: bool) -> Result<Self> {
        let cal_selector = if no_calendar { "nocal" } else { "" };
        Self::new(&format!(
            r"{}.*{}\.(jpg|jpeg|png|gif)$",
            cal_selector, resolution
        ))
    }

    /// 子字串搜尋（非全字串比對）
    pub fn is_match(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }
}
