//! API ルートモジュール

mod diagnose;
mod health;
mod questions;

pub use diagnose::diagnose_routes;
pub use health::health_routes;
pub use questions::questions_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// すべての API ルートを作成する
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(questions_routes())
        .merge(diagnose_routes())
        .with_state(state)
}
