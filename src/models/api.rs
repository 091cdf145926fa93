//! REST API リクエスト/レスポンスモデル

use serde::{Deserialize, Serialize};

/// 診断用の質問（モデルが生成）
#[derive(Debug, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
}

/// 質問と回答のペア（クライアントが送信）
#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
}

/// 診断リクエスト
#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    pub answers: Vec<Answer>,
}

/// 趣味の提案（モデルが生成）
#[derive(Debug, Serialize, Deserialize)]
pub struct Suggestion {
    pub hobby_name: String,
    pub reason: String,
    pub first_step: String,
}

/// 全エンドポイント共通のレスポンスエンベロープ
///
/// 成功時は `{"status": "success", "data": ...}`、
/// 失敗時は `{"status": "error", "message": "..."}` にシリアライズされる。
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiEnvelope::success(vec![Question {
            id: 1,
            question: "趣味を通して一番得たいものは何ですか？".to_string(),
        }]);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"][0]["id"], 1);
        assert!(json["data"][0]["question"].is_string());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = ApiEnvelope::<Vec<Question>>::error("接続に失敗しました");

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "接続に失敗しました");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_diagnose_request_deserialization() {
        let raw = r#"{"answers": [{"question": "Q1", "answer": "A1"}, {"question": "Q2", "answer": "A2"}]}"#;
        let request: DiagnoseRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.answers.len(), 2);
        assert_eq!(request.answers[0].question, "Q1");
        assert_eq!(request.answers[1].answer, "A2");
    }

    #[test]
    fn test_diagnose_request_rejects_malformed_body() {
        // answers フィールドがない
        assert!(serde_json::from_str::<DiagnoseRequest>(r#"{}"#).is_err());
        // answer フィールドがない
        assert!(
            serde_json::from_str::<DiagnoseRequest>(r#"{"answers": [{"question": "Q1"}]}"#)
                .is_err()
        );
        // 型が違う
        assert!(serde_json::from_str::<DiagnoseRequest>(
            r#"{"answers": [{"question": "Q1", "answer": 42}]}"#
        )
        .is_err());
    }

    #[test]
    fn test_empty_answers_is_valid() {
        let request: DiagnoseRequest = serde_json::from_str(r#"{"answers": []}"#).unwrap();
        assert!(request.answers.is_empty());
    }

    #[test]
    fn test_suggestion_roundtrip() {
        let raw = r#"{"hobby_name": "ボルダリング", "reason": "体を動かしたいという回答に合う", "first_step": "近所のジムの体験コースを予約する"}"#;
        let suggestion: Suggestion = serde_json::from_str(raw).unwrap();
        assert_eq!(suggestion.hobby_name, "ボルダリング");
        assert!(!suggestion.first_step.is_empty());
    }
}
