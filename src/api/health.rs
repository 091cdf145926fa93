//! ヘルスチェックエンドポイント

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;
use std::sync::Arc;

/// ヘルスチェックハンドラ
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// ヘルスチェックルートを作成する
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(health_check))
}
