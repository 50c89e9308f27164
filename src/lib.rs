pub mod component;
pub mod config;
pub mod init;
pub mod tools;

rust_i18n::i18n!("locales", fallback = "en");

/// 切換輸出訊息語言
pub fn set_language(language: config::Language) {
    rust_i18n::set_locale(language.as_str());
}
