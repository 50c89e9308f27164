mod gif_scanner;

pub use gif_scanner::{GifFile, is_gif_file_name, scan_gif_files};
