//! Hobby Diagnosis App - Rust Backend
//!
//! axum フレームワークで構築したバックエンドサービス。診断用の質問リスト生成と
//! 回答に基づく趣味提案の 2 つの API を提供し、生成処理は Gemini API に委譲する。

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;

use api::create_api_routes;
use config::get_config;
use state::create_shared_state;

/// Windows でコンソールのコードページを UTF-8 に設定する
#[cfg(windows)]
fn setup_console_encoding() {
    unsafe {
        // コンソール出力のコードページを UTF-8 (65001) に設定
        extern "system" {
            fn SetConsoleOutputCP(code_page: u32) -> i32;
            fn SetConsoleCP(code_page: u32) -> i32;
        }
        SetConsoleOutputCP(65001);
        SetConsoleCP(65001);
    }
}

#[cfg(not(windows))]
fn setup_console_encoding() {
    // Windows 以外は特別な処理は不要
}

/// 許可オリジン設定から CORS レイヤを構築する
///
/// credentials を許可するため、ワイルドカードではなくオリジンの明示リストと
/// リクエストミラーリングを使う。
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let mut origins = Vec::new();
    for origin in allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => warn!("Invalid CORS origin, skipping: {}", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // コンソールエンコーディング設定
    setup_console_encoding();

    // .env ファイルを読み込む（存在しなければ無視）
    dotenvy::dotenv().ok();

    // ログ初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hobby_diagnosis_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hobby Diagnosis backend...");

    // 設定は起動時に一度だけ環境変数から読み込む
    let config = get_config();
    info!(
        "Config: model={}, question_count={}",
        config.model, config.question_count
    );

    // Gemini クライアントを含む共有状態を作成（全リクエストで共有、以降不変）
    let state = create_shared_state(config).context("Failed to initialize Gemini client")?;

    // CORS 設定（フロントエンドのローカルオリジンからのアクセスを許可）
    let cors = build_cors_layer(&config.allowed_origins);

    // ルート構築
    let app = Router::new()
        .merge(create_api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // バインドアドレス
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid bind address")?;
    info!("Server listening on: {}", addr);

    // サーバ起動
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
