use super::ffmpeg_command::{ConversionOutcome, DEFAULT_PROGRAM, FfmpegCommand};
use super::report::{BatchReport, ConversionRecord};
use crate::tools::{GifFile, scan_gif_files};
use anyhow::Result;
use console::style;
use log::{error, info, warn};
use rust_i18n::t;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub struct GifConverter {
    directory: PathBuf,
    program: OsString,
}

impl GifConverter {
    #[must_use]
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
            program: OsString::from(DEFAULT_PROGRAM),
        }
    }

    /// 替換 ffmpeg 執行檔路徑，參數不變
    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn run(&self) -> Result<BatchReport> {
        let gif_files = scan_gif_files(&self.directory)?;
        info!(
            "Found {} GIF files in {}",
            gif_files.len(),
            self.directory.display()
        );

        if gif_files.is_empty() {
            println!("{}", style(t!("convert.none_found")).yellow());
            return Ok(BatchReport::new(0));
        }

        println!(
            "{}",
            style(t!("convert.found", count = gif_files.len())).green()
        );

        let mut report = BatchReport::new(gif_files.len());

        for gif_file in &gif_files {
            let record = self.convert(gif_file);
            let aborted = record.outcome == ConversionOutcome::ToolMissing;
            report.record(record);

            if aborted {
                error!("Batch aborted: {} not found", self.program.to_string_lossy());
                return Ok(report);
            }
        }

        println!();
        println!("{}", style(t!("convert.finished")).cyan().bold());
        info!(
            "Batch finished - converted: {}, failed: {}",
            report.converted_count(),
            report.failed_count()
        );

        Ok(report)
    }

    fn convert(&self, gif_file: &GifFile) -> ConversionRecord {
        let command = FfmpegCommand::new(&gif_file.path).with_program(&self.program);
        let output_name = command
            .destination_path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        println!(
            "{}",
            t!(
                "convert.converting",
                input = gif_file.file_name.as_str(),
                output = output_name.as_str()
            )
        );
        info!(
            "Running {} for {} -> {}",
            self.program.to_string_lossy(),
            command.source_path().display(),
            command.destination_path().display()
        );

        let outcome = command.run();
        match &outcome {
            ConversionOutcome::Converted => {
                println!(
                    "{}",
                    style(t!("convert.success", output = output_name.as_str())).green()
                );
            }
            ConversionOutcome::ToolMissing => {
                println!();
                println!("{}", style(t!("convert.tool_missing_title")).red().bold());
                println!("{}", style(t!("convert.tool_missing")).red());
                println!("{}", t!("convert.tool_missing_hint"));
            }
            ConversionOutcome::Failed { code, stderr } => {
                warn!(
                    "Conversion failed for {} (exit code {code:?})",
                    gif_file.path.display()
                );
                println!(
                    "{}",
                    style(t!("convert.failed", input = gif_file.file_name.as_str())).red()
                );
                println!(
                    "{}",
                    t!("convert.encoder_error", stderr = stderr.as_str())
                );
            }
        }

        ConversionRecord {
            source_path: command.source_path().to_path_buf(),
            destination_path: command.destination_path().to_path_buf(),
            outcome,
        }
    }
}
