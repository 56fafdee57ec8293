use crate::fetcher::Fetcher;
use crate::file_manager::FileManager;
use crate::types::WallpaperMetadata;
use anyhow::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};

/// 桌布下載器
#[derive(Clone)]
pub struct WallpaperDownloader {
    fetcher: Arc<dyn Fetcher>,
    file_manager: Arc<Mutex<FileManager>>,
}

impl WallpaperDownloader {
    pub fn new(fetcher: Arc<dyn Fetcher>, file_manager: Arc<Mutex<FileManager>>) -> Self {
        Self {
            fetcher,
            file_manager,
        }
    }

    /// 同時下載所有桌布，回傳成功張數
    ///
    /// 每個 URL 一個任務，全部一起啟動，等待全部結束才回傳。
    /// 單一任務失敗只記錄，不影響其他任務。
    /// concurrency 可限制同時進行的數量，None 表示不限制。
    pub async fn fetch_all(&self, urls: Vec<String>, concurrency: Option<usize>) -> usize {
        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} 張 {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        let semaphore = concurrency.map(|n| Arc::new(Semaphore::new(n)));

        let mut tasks = vec![];

        for url in urls {
            let fetcher = Arc::clone(&self.fetcher);
            let file_manager = Arc::clone(&self.file_manager);
            let semaphore = semaphore.clone();
            let pb = pb.clone();

            let task = tokio::spawn(async move {
                let _permit = match &semaphore {
                    Some(s) => Some(s.acquire().await.unwrap()),
                    None => None,
                };

                let result = Self::download_one(&fetcher, &file_manager, &url).await;
                pb.inc(1);

                match result {
                    Ok(filename) => {
                        pb.set_message(format!("✅ {}", filename));
                        true
                    }
                    Err(e) => {
                        eprintln!("下載失敗 ({}): {}", url, e);
                        false
                    }
                }
            });

            tasks.push(task);
        }

        // 等待全部任務完成
        let mut success_count = 0;
        for task in tasks {
            if task.await.unwrap() {
                success_count += 1;
            }
        }

        pb.finish_and_clear();

        success_count
    }

    /// 下載並儲存單張桌布
    async fn download_one(
        fetcher: &Arc<dyn Fetcher>,
        file_manager: &Arc<Mutex<FileManager>>,
        url: &str,
    ) -> Result<String> {
        let bytes = fetcher.fetch_bytes(url).await?;

        // 檔名取 URL 最後一段
        let filename = url
            .rsplit('/')
            .next()
            .unwrap_or("wallpaper.jpg")
            .to_string();

        // 計算 hash
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());

        let metadata = WallpaperMetadata {
            filename: filename.clone(),
            url: url.to_string(),
            content_hash: hash,
            downloaded_at: Utc::now(),
        };

        let fm = file_manager.lock().await;
        fm.save_image(&filename, &bytes)?;
        fm.append_manifest(&metadata)?;

        Ok(filename)
    }
}
