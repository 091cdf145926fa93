//! アプリケーション設定管理
//!
//! 起動時に環境変数から一度だけ読み込み、以降は不変のグローバル単一インスタンス
//! として全ハンドラから参照する。ホットリロードはしない。

use once_cell::sync::Lazy;
use std::env;

/// 質問数のデフォルト（フル診断）
const DEFAULT_QUESTION_COUNT: usize = 6;

/// 質問リストの最大数（プロンプトに定義済みの質問数）
const MAX_QUESTION_COUNT: usize = 6;

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API キー
    pub gemini_api_key: String,

    /// モデル名
    pub model: String,

    /// 診断質問の数（6 = フル版、3 = 簡易版）
    pub question_count: usize,

    /// バインドするホスト
    pub host: String,

    /// バインドするポート
    pub port: u16,

    /// CORS で許可するオリジン
    pub allowed_origins: Vec<String>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    // Next.js 開発サーバからのアクセスを許可
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

/// QUESTION_COUNT の値を解釈する
///
/// 数値として解釈できない、または 1〜6 の範囲外の場合はデフォルトの 6 にフォールバック。
fn parse_question_count(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| (1..=MAX_QUESTION_COUNT).contains(n))
        .unwrap_or(DEFAULT_QUESTION_COUNT)
}

/// ALLOWED_ORIGINS（カンマ区切り）を解釈する
fn parse_allowed_origins(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => default_allowed_origins(),
    }
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model()),
            question_count: parse_question_count(env::var("QUESTION_COUNT").ok().as_deref()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            allowed_origins: parse_allowed_origins(env::var("ALLOWED_ORIGINS").ok().as_deref()),
        }
    }
}

/// グローバル設定単一インスタンス
static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// 現在の設定への参照を取得する
pub fn get_config() -> &'static AppConfig {
    &CONFIG
}
