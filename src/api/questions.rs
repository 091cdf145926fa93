//! 質問リスト取得エンドポイント

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tracing::error;

use crate::config::get_config;
use crate::models::{ApiEnvelope, Question};
use crate::state::AppState;

/// 質問リストを取得する
///
/// モデルに診断用の質問を生成させ、エンベロープに包んで返す。失敗（通信・解析）は
/// すべてエラーエンベロープに変換し、呼び出し側には例外を伝播させない。
async fn get_questions(State(state): State<Arc<AppState>>) -> Json<ApiEnvelope<Vec<Question>>> {
    let count = get_config().question_count;

    match state.llm.generate_questions(count).await {
        Ok(data) => Json(ApiEnvelope::success(data)),
        Err(e) => {
            error!("Failed to generate questions: {}", e);
            Json(ApiEnvelope::error(e.to_string()))
        }
    }
}

/// 質問リストルートを作成する
pub fn questions_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/questions", get(get_questions))
}
