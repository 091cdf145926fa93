//! 趣味診断エンドポイント

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::models::{ApiEnvelope, DiagnoseRequest, Suggestion};
use crate::state::AppState;

/// 回答を受け取って趣味を提案する
///
/// ボディが期待する形式（answers: question/answer ペアの配列）に一致しない場合は
/// 422 のバリデーションエラー。モデル呼び出しや応答解析の失敗は 200 のまま
/// エラーエンベロープで報告する（フロントエンドは status フィールドを見る）。
async fn diagnose_hobbies(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!("Invalid diagnose request body: {}", rejection.body_text());
            return AppError::BadRequest(rejection.body_text()).into_response();
        }
    };

    info!("Diagnose request with {} answers", request.answers.len());

    match state.llm.suggest_hobbies(&request.answers).await {
        Ok(data) => Json(ApiEnvelope::success(data)).into_response(),
        Err(e) => {
            error!("Failed to generate suggestions: {}", e);
            Json(ApiEnvelope::<Vec<Suggestion>>::error(e.to_string())).into_response()
        }
    }
}

/// 診断ルートを作成する
pub fn diagnose_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/diagnose", post(diagnose_hobbies))
}
