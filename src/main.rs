mod types;
mod file_manager;
mod fetcher;
mod patterns;
mod scanner;
mod crawler;
#[cfg(test)]
mod test_util;

use crawler::{CrawlerConfig, ImageResolver, PageLocator, WallpaperDownloader};
use fetcher::{Fetcher, HttpFetcher};
use file_manager::FileManager;
use patterns::LinkPattern;
use scanner::PageScanner;
use types::{SiteConfig, month_name};

use anyhow::{Result, anyhow, bail};
use chrono::{Datelike, Utc};
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// 最早支援的年份
const MIN_YEAR: i32 = 2009;

/// 下載 Smashing Magazine 的每月桌布
#[derive(Parser, Debug)]
#[command(name = "wallpaper-crawler", version)]
struct Cli {
    /// 年份（預設為今年）
    #[arg(long)]
    year: Option<i32>,

    /// 月份 1-12（預設為本月）
    #[arg(long)]
    month: Option<u32>,

    /// 桌布解析度
    #[arg(long, default_value = "1920x1080")]
    resolution: String,

    /// 只下載不含月曆的版本
    #[arg(long)]
    nocal: bool,

    /// 自訂下載目錄
    #[arg(long)]
    dest: Option<PathBuf>,

    /// 同時下載數量上限（預設不限制）
    #[arg(long)]
    concurrency: Option<usize>,

    /// 請求超時（秒）
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let today = Utc::now();
    let year = cli.year.unwrap_or_else(|| today.year());
    let month = cli.month.unwrap_or_else(|| today.month());

    if year < MIN_YEAR {
        bail!("年份必須大於等於 {}：{}", MIN_YEAR, year);
    }
    let month_name = month_name(month)?;
    validate_resolution(&cli.resolution)?;

    println!("=== Smashing Magazine 桌布下載 ===\n");
    println!(
        "參數: {} 年 {} 月（{}），解析度 {}，{}",
        year,
        month,
        month_name,
        cli.resolution,
        if cli.nocal { "不含月曆" } else { "全部版本" }
    );

    let site = SiteConfig::default();
    let config = CrawlerConfig::default()
        .with_timeout(cli.timeout)
        .with_concurrency(cli.concurrency);

    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(config.timeout_secs)?);
    let scanner = PageScanner::new(Arc::clone(&fetcher))?;

    println!("🔍 搜尋桌布頁面...");
    let locator = PageLocator::new(scanner.clone(), site.clone(), config.max_pages);
    let article_href = locator
        .locate(year, &month_name)
        .await?
        .ok_or_else(|| anyhow!("找不到 {} 年 {} 月的桌布頁面 :(", year, month))?;

    let article_url = site.absolute_url(&article_href);
    println!("✅ 找到桌布頁面: {}", article_url);

    let pattern = LinkPattern::images(&cli.resolution, cli.nocal)?;
    let resolver = ImageResolver::new(scanner);
    let image_urls: Vec<String> = resolver
        .resolve(&article_url, &pattern)
        .await?
        .into_iter()
        .map(|href| site.absolute_url(&href))
        .collect();

    if image_urls.is_empty() {
        println!("此頁面沒有符合條件的桌布");
        return Ok(());
    }

    let total = image_urls.len();
    println!("📥 找到 {} 張桌布", total);

    let dest_dir = destination_dir(cli.dest, year, month);
    println!("開始下載到 {}\n", dest_dir.display());

    let file_manager = Arc::new(Mutex::new(FileManager::new(&dest_dir)?));
    let downloader = WallpaperDownloader::new(fetcher, Arc::clone(&file_manager));
    let success = downloader.fetch_all(image_urls, config.concurrency).await;

    let manifest_total = file_manager.lock().await.load_manifest()?.len();
    println!(
        "\n✨ 下載完成: {}/{} 張（此目錄累計 {} 筆紀錄）",
        success, total, manifest_total
    );

    Ok(())
}

/// 解析度必須是「寬x高」的數字 token（會原樣插入 regex 樣式）
fn validate_resolution(resolution: &str) -> Result<()> {
    let format = Regex::new(r"^\d+x\d+$")?;
    if !format.is_match(resolution) {
        bail!("解析度格式錯誤（應為寬x高，例如 1920x1080）：{}", resolution);
    }
    Ok(())
}

/// 目的地目錄：<base>/<年>/<月補零>
fn destination_dir(dest: Option<PathBuf>, year: i32, month: u32) -> PathBuf {
    let base = dest.unwrap_or_else(default_base_dir);
    base.join(year.to_string()).join(format!("{:02}", month))
}

/// 預設下載根目錄
fn default_base_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Smashing-Wallpapers")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::StubFetcher;

    #[test]
    fn test_validate_resolution() {
        assert!(validate_resolution("1920x1080").is_ok());
        assert!(validate_resolution("2560x1440").is_ok());
        assert!(validate_resolution("1920x").is_err());
        assert!(validate_resolution("wide").is_err());
        assert!(validate_resolution(".*x.*").is_err());
    }

    #[test]
    fn test_destination_dir() {
        let dir = destination_dir(Some(PathBuf::from("/tmp/walls")), 2020, 3);
        assert_eq!(dir, PathBuf::from("/tmp/walls/2020/03"));
    }

    // 完整流程：列表頁 -> 文章頁 -> 下載（全部走 stub）
    #[tokio::test]
    async fn test_pipeline_october_2020() {
        let dir = "./test_data_pipeline";
        let site = SiteConfig::default();

        let mut stub = StubFetcher::new();
        stub.add_page(
            &site.page_url(1),
            r#"<a href="/wallpapers/2020/10/october-2020-calendars/">October 2020</a>"#,
        );
        stub.add_page(
            "https://www.smashingmagazine.com/wallpapers/2020/10/october-2020-calendars/",
            r#"
            <li><a href="https://files.example.com/oct/a-cal-1920x1080.jpg">cal</a></li>
            <li><a href="https://files.example.com/oct/a-nocal-1920x1080.jpg">nocal</a></li>
            <li><a href="https://files.example.com/oct/a-nocal-1280x720.png">small</a></li>
            "#,
        );
        stub.add_file("https://files.example.com/oct/a-nocal-1920x1080.jpg", b"img");

        let fetcher: Arc<dyn Fetcher> = Arc::new(stub);
        let scanner = PageScanner::new(Arc::clone(&fetcher)).unwrap();

        let locator = PageLocator::new(scanner.clone(), site.clone(), 13);
        let article_href = locator.locate(2020, "october").await.unwrap().unwrap();
        let article_url = site.absolute_url(&article_href);
        assert_eq!(
            article_url,
            "https://www.smashingmagazine.com/wallpapers/2020/10/october-2020-calendars/"
        );

        let pattern = LinkPattern::images("1920x1080", true).unwrap();
        let image_urls = ImageResolver::new(scanner)
            .resolve(&article_url, &pattern)
            .await
            .unwrap();
        assert_eq!(
            image_urls,
            vec!["https://files.example.com/oct/a-nocal-1920x1080.jpg"]
        );

        let file_manager = FileManager::new(dir).unwrap();
        let downloader = WallpaperDownloader::new(fetcher, Arc::new(Mutex::new(file_manager)));
        let success = downloader.fetch_all(image_urls, None).await;

        assert_eq!(success, 1);
        assert!(
            std::path::Path::new(dir)
                .join("a-nocal-1920x1080.jpg")
                .exists()
        );

        std::fs::remove_dir_all(dir).ok();
    }
}
