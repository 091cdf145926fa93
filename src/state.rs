//! アプリケーション状態管理
//!
//! リクエストハンドラ間で共有する状態を定義する。状態は起動時に一度だけ作成され、
//! 以降は読み取り専用で全リクエストから参照される。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::llm::GeminiClient;
use crate::services::LlmService;

/// アプリケーション共有状態
///
/// Arc で包んで複数のハンドラ間で安全に共有する
pub struct AppState {
    /// Gemini クライアントを内包した LLM サービス
    pub llm: LlmService,
}

/// 共有可能なアプリケーション状態を作成する
///
/// API キーが未設定の場合はエラー。プロセス終了まで同じインスタンスを使い続ける。
pub fn create_shared_state(config: &AppConfig) -> Result<Arc<AppState>, AppError> {
    let client = GeminiClient::new(&config.gemini_api_key, &config.model)?;
    Ok(Arc::new(AppState {
        llm: LlmService::new(client),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_shared_state_requires_api_key() {
        let config = AppConfig {
            gemini_api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            question_count: 6,
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec![],
        };
        assert!(create_shared_state(&config).is_err());

        let config = AppConfig {
            gemini_api_key: "dummy-key".to_string(),
            ..config
        };
        assert!(create_shared_state(&config).is_ok());
    }
}
