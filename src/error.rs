//! 統一エラー処理モジュール
//!
//! アプリケーションレベルのエラー型を定義し、axum の IntoResponse trait を実装して
//! HTTP レスポンス（統一エンベロープ形式）へ自動変換できるようにする。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm::LlmError;

/// アプリケーションエラー列挙型
#[derive(Error, Debug)]
pub enum AppError {
    /// LLM 呼び出しエラー（ネットワーク・認証・クォータ等）
    #[error("LLM エラー: {0}")]
    Llm(#[from] LlmError),

    /// モデル応答の解析エラー（JSON として解釈できない、形式不一致）
    #[error("JSON 解析失敗: {0}")]
    Parse(String),

    /// リクエストパラメータエラー
    #[error("リクエストエラー: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Llm(_) | AppError::Parse(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        // ボディは通常レスポンスと同じエンベロープ形式
        let body = Json(json!({
            "status": "error",
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let response = AppError::BadRequest("answers がありません".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_error_message_contains_detail() {
        let err = AppError::Parse("unexpected token".to_string());
        assert!(err.to_string().contains("unexpected token"));
    }
}
