use anyhow::{Context, Result, bail};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GIF_SUFFIX: &str = ".gif";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// 副檔名比對不分大小寫，只看最後的 `.gif`
#[must_use]
pub fn is_gif_file_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(GIF_SUFFIX)
}

/// 掃描資料夾第一層的 GIF 檔案，不遞迴子資料夾
///
/// 結果依檔名排序並只擷取一次；掃描後資料夾若有變動，不會反映在這份清單中。
pub fn scan_gif_files(directory: &Path) -> Result<Vec<GifFile>> {
    let mut gif_files = Vec::new();

    let walker = WalkDir::new(directory)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e)
                    .with_context(|| format!("Failed to read directory {}", directory.display()));
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                bail!("Path is not a directory: {}", directory.display());
            }
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_gif_file_name(&file_name) {
            continue;
        }

        debug!("Found GIF: {}", entry.path().display());
        gif_files.push(GifFile {
            path: entry.into_path(),
            file_name,
        });
    }

    Ok(gif_files)
}
