//! 功能元件模組

pub mod gif_converter;

pub use gif_converter::GifConverter;
