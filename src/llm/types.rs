//! LLM 型定義

/// LLM エラー型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP リクエストエラー
    #[error("HTTP リクエスト失敗: {0}")]
    Http(#[from] reqwest::Error),

    /// API がエラーを返した
    #[error("Gemini API エラー ({status}): {message}")]
    Api { status: u16, message: String },

    /// 応答にテキストが含まれていない
    #[error("Gemini API の応答にテキストが含まれていません")]
    EmptyResponse,

    /// 設定エラー
    #[error("設定エラー: {0}")]
    Config(String),
}
