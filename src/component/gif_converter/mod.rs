//! GIF 批次轉檔元件
//!
//! 逐一呼叫 ffmpeg 將資料夾中的 GIF 轉為 H.264 MP4

mod ffmpeg_command;
mod main;
mod report;

pub use ffmpeg_command::{ConversionOutcome, DEFAULT_PROGRAM, FfmpegCommand, SCALE_FILTER};
pub use main::GifConverter;
pub use report::{
    BatchReport, ConversionRecord, EXIT_CONVERSION_FAILED, EXIT_SCAN_FAILED, EXIT_SUCCESS,
    EXIT_TOOL_MISSING,
};
