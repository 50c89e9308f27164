use super::ffmpeg_command::ConversionOutcome;
use std::path::PathBuf;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_TOOL_MISSING: u8 = 1;
pub const EXIT_CONVERSION_FAILED: u8 = 2;
pub const EXIT_SCAN_FAILED: u8 = 3;

#[derive(Debug, Clone)]
pub struct ConversionRecord {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub outcome: ConversionOutcome,
}

/// 一次批次轉檔的結果
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub discovered: usize,
    pub records: Vec<ConversionRecord>,
    pub aborted: bool,
}

impl BatchReport {
    #[must_use]
    pub const fn new(discovered: usize) -> Self {
        Self {
            discovered,
            records: Vec::new(),
            aborted: false,
        }
    }

    pub fn record(&mut self, record: ConversionRecord) {
        if record.outcome == ConversionOutcome::ToolMissing {
            self.aborted = true;
        }
        self.records.push(record);
    }

    #[must_use]
    pub fn attempted(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn converted_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_converted())
            .count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, ConversionOutcome::Failed { .. }))
            .count()
    }

    /// 0 = 全部成功或沒有 GIF，1 = 找不到 ffmpeg，2 = 有檔案轉檔失敗
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.aborted {
            EXIT_TOOL_MISSING
        } else if self.failed_count() > 0 {
            EXIT_CONVERSION_FAILED
        } else {
            EXIT_SUCCESS
        }
    }
}
