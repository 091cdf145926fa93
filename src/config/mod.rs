//! 設定モジュール

mod app_config;

pub use app_config::{get_config, AppConfig};
