use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const DEFAULT_PROGRAM: &str = "ffmpeg";

/// 寬高向下取偶數，yuv420p 的色度取樣需要
pub const SCALE_FILTER: &str = "scale=trunc(iw/2)*2:trunc(ih/2)*2";

/// 單次 ffmpeg 呼叫的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted,
    /// 找不到 ffmpeg 執行檔，整批中止
    ToolMissing,
    /// ffmpeg 已執行但失敗，只影響這個檔案
    Failed { code: Option<i32>, stderr: String },
}

impl ConversionOutcome {
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted)
    }
}

pub struct FfmpegCommand {
    program: OsString,
    source_path: PathBuf,
    destination_path: PathBuf,
}

impl FfmpegCommand {
    #[must_use]
    pub fn new(source_path: &Path) -> Self {
        let destination_path = Self::generate_destination_path(source_path);
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            source_path: source_path.to_path_buf(),
            destination_path,
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl AsRef<OsStr>) -> Self {
        self.program = program.as_ref().to_os_string();
        self
    }

    /// 只去掉最後一個副檔名再接上 `.mp4`
    fn generate_destination_path(source_path: &Path) -> PathBuf {
        let mut file_name = source_path
            .file_stem()
            .map_or_else(|| OsString::from("output"), OsStr::to_os_string);
        file_name.push(".mp4");
        let parent = source_path.parent().unwrap_or(Path::new("."));
        parent.join(file_name)
    }

    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    #[must_use]
    pub fn destination_path(&self) -> &Path {
        &self.destination_path
    }

    #[must_use]
    pub fn arguments(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-i".into(), self.source_path.clone().into()];
        args.extend(
            [
                "-c:v", "libx264",
                "-profile:v", "baseline",
                "-level", "3.0",
                "-pix_fmt", "yuv420p",
                "-vf", SCALE_FILTER,
                "-movflags", "faststart",
                "-y",
            ]
            .into_iter()
            .map(OsString::from),
        );
        args.push(self.destination_path.clone().into());
        args
    }

    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.arguments());
        cmd.stdin(Stdio::null());
        cmd
    }

    /// 同步執行並擷取輸出，直到 ffmpeg 結束；沒有逾時
    #[must_use]
    pub fn run(&self) -> ConversionOutcome {
        match self.build_command().output() {
            Ok(output) if output.status.success() => ConversionOutcome::Converted,
            Ok(output) => ConversionOutcome::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => ConversionOutcome::ToolMissing,
            Err(e) => ConversionOutcome::Failed {
                code: None,
                stderr: format!("Failed to start {}: {e}", self.program.to_string_lossy()),
            },
        }
    }
}
