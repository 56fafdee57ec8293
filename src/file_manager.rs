use crate::types::WallpaperMetadata;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// 檔案操作管理器：負責目的地目錄與下載 manifest
pub struct FileManager {
    /// 下載目的地目錄
    root_dir: PathBuf,
}

impl FileManager {
    /// 建立新的檔案管理器（目錄不存在時一併建立）
    pub fn new(root_dir: impl AsRef<Path>) -> Result<Self> {
        let root_dir = root_dir.as_ref().to_path_buf();

        fs::create_dir_all(&root_dir)
            .with_context(|| format!("無法建立目錄 {}", root_dir.display()))?;

        Ok(Self { root_dir })
    }

    /// 儲存圖片檔案（已存在時直接覆寫）
    pub fn save_image(&self, filename: &str, data: &[u8]) -> Result<()> {
        let path = self.root_dir.join(filename);
        fs::write(&path, data).with_context(|| format!("無法寫入 {}", path.display()))?;
        Ok(())
    }

    /// Append metadata 到 JSONL 檔案
    pub fn append_manifest(&self, metadata: &WallpaperMetadata) -> Result<()> {
        let path = self.manifest_path();

        // 以 append 模式開啟檔案
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context("無法開啟 metadata.jsonl")?;

        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, metadata).context("無法寫入 metadata")?;
        writeln!(writer).context("無法寫入換行符號")?;

        writer.flush().context("無法 flush buffer")?;

        Ok(())
    }

    /// 讀取所有 manifest 紀錄
    pub fn load_manifest(&self) -> Result<Vec<WallpaperMetadata>> {
        let path = self.manifest_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path).context("無法開啟 metadata.jsonl")?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line.context("讀取行失敗")?;

            if line.trim().is_empty() {
                continue;
            }

            let metadata: WallpaperMetadata =
                serde_json::from_str(&line).context("解析 metadata 失敗")?;

            entries.push(metadata);
        }

        Ok(entries)
    }

    fn manifest_path(&self) -> PathBuf {
        self.root_dir.join("metadata.jsonl")
    }
}
