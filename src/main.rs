use anyhow::Context;
use console::style;
use gif_batch_convert::component::GifConverter;
use gif_batch_convert::component::gif_converter::EXIT_SCAN_FAILED;
use gif_batch_convert::config::Config;
use gif_batch_convert::{init, set_language};
use log::{error, info};
use rust_i18n::t;
use std::process::ExitCode;

rust_i18n::i18n!("locales", fallback = "en");

fn main() -> ExitCode {
    init::init();

    let current_dir = match std::env::current_dir().context("Failed to resolve working directory")
    {
        Ok(dir) => dir,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{} {e:#}", style(t!("main.error_prefix")).red().bold());
            return ExitCode::from(EXIT_SCAN_FAILED);
        }
    };

    let config = Config::load_from(&current_dir);
    set_language(config.settings.language);

    match GifConverter::new(&current_dir).run() {
        Ok(report) => {
            info!(
                "Exiting - attempted: {}, converted: {}, failed: {}, aborted: {}",
                report.attempted(),
                report.converted_count(),
                report.failed_count(),
                report.aborted
            );
            ExitCode::from(report.exit_code())
        }
        Err(e) => {
            error!("{e:#}");
            eprintln!("{} {e:#}", style(t!("main.error_prefix")).red().bold());
            ExitCode::from(EXIT_SCAN_FAILED)
        }
    }
}
