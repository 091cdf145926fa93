//! Gemini generateContent API クライアント
//!
//! プロンプトを 1 回の非ストリーミング呼び出しで送信し、応答テキストを返す。
//! responseMimeType に application/json を指定し、モデルに JSON のみの出力を要求する。

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::types::LlmError;

/// Gemini API ベース URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini クライアント
///
/// 起動時に一度だけ生成し、全リクエストで共有する。
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// 新しい Gemini クライアントを作成する
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::Config(
                "GEMINI_API_KEY が設定されていません".to_string(),
            ));
        }

        // HTTP クライアント構築
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
        })
    }

    /// generateContent エンドポイント URL を構築する
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        )
    }

    /// プロンプトを送信し、JSON 形式の応答テキストを取得する
    ///
    /// 返り値はモデルが出力した生テキスト。JSON としての解析は呼び出し側が行う。
    pub async fn generate_json(&self, prompt: &str) -> Result<String, LlmError> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
            }),
        };

        debug!(
            "Gemini API request: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await?;

        // ステータスコード確認
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_text().ok_or(LlmError::EmptyResponse)
    }
}

/// generateContent リクエストペイロード
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

/// 生成パラメータ（JSON 出力の指定のみ使用）
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

/// generateContent レスポンス
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
}

impl GenerateContentResponse {
    /// 最初の候補の最初のテキストパートを取り出す
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
    }
}
