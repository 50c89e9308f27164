use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

pub const SETTINGS_FILE_NAME: &str = "gif_batch_convert.json";

impl Config {
    /// 從指定資料夾載入設定，檔案不存在或損壞時使用預設值
    #[must_use]
    pub fn load_from(directory: &Path) -> Self {
        let path = directory.join(SETTINGS_FILE_NAME);
        let settings = match Self::load_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{e:#}");
                UserSettings::default()
            }
        };

        Self { settings }
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UserSettings::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read settings from {}", path.display()));
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
