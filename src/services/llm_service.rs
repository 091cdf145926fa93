//! LLM サービス
//!
//! プロンプト構築 → Gemini 呼び出し → 応答テキストの JSON 解析までを担う。
//! 呼び出しが成功して型どおりに解析できた場合のみ Ok を返し、
//! それ以外（通信失敗・不正な JSON・形式違反）はすべて Err として報告する。

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::AppError;
use crate::llm::GeminiClient;
use crate::models::{Answer, Question, Suggestion};

use super::prompt_service::PromptService;

/// LLM サービス
///
/// Gemini クライアントを保持し、各エンドポイントの生成処理を提供する。
pub struct LlmService {
    client: GeminiClient,
    prompts: PromptService,
}

impl LlmService {
    /// 新しい LLM サービスを作成する
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            prompts: PromptService::new(),
        }
    }

    /// 診断用の質問リストを生成する
    pub async fn generate_questions(&self, count: usize) -> Result<Vec<Question>, AppError> {
        let prompt = self.prompts.build_questions_prompt(count);
        let text = self.client.generate_json(&prompt).await?;
        let questions: Vec<Question> = parse_model_json(&text)?;

        info!("Generated {} questions", questions.len());
        Ok(questions)
    }

    /// 回答リストから趣味の提案を生成する
    pub async fn suggest_hobbies(&self, answers: &[Answer]) -> Result<Vec<Suggestion>, AppError> {
        let prompt = self.prompts.build_diagnose_prompt(answers);
        let text = self.client.generate_json(&prompt).await?;
        let suggestions: Vec<Suggestion> = parse_model_json(&text)?;

        info!(
            "Generated {} suggestions from {} answers",
            suggestions.len(),
            answers.len()
        );
        Ok(suggestions)
    }
}

/// モデルが返したテキストを JSON として解析する
///
/// JSON 以外のテキストが混入している場合や形式が一致しない場合は解析エラー。
/// 部分的な結果は返さない。
fn parse_model_json<T: DeserializeOwned>(text: &str) -> Result<T, AppError> {
    serde_json::from_str(text).map_err(|e| {
        debug!("Model output was not valid JSON: {}", text);
        AppError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_questions_array() {
        let text = r#"[{"id": 1, "question": "一番得たいものは何ですか？"}, {"id": 2, "question": "使える時間は？"}]"#;
        let questions: Vec<Question> = parse_model_json(text).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].question, "使える時間は？");
    }

    #[test]
    fn test_parse_valid_suggestions_array() {
        let text = r#"[
            {"hobby_name": "陶芸", "reason": "ゼロから創りたいという回答に合う", "first_step": "体験教室に申し込む"},
            {"hobby_name": "将棋", "reason": "論理的なパズルが好き", "first_step": "アプリで一局指す"},
            {"hobby_name": "登山", "reason": "体を動かしたい", "first_step": "近場の低山を調べる"}
        ]"#;
        let suggestions: Vec<Suggestion> = parse_model_json(text).unwrap();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].hobby_name, "陶芸");
    }

    #[test]
    fn test_parse_rejects_prose_wrapped_json() {
        // モデルが指示に違反して JSON の前後に文章を付けた場合は解析エラー
        let text = "はい、質問リストはこちらです。\n[{\"id\": 1, \"question\": \"...\"}]";
        let result: Result<Vec<Question>, _> = parse_model_json(text);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result: Result<Vec<Question>, _> = parse_model_json("[{\"id\": 1,");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        // id が文字列（型違反）
        let text = r#"[{"id": "1", "question": "..."}]"#;
        let result: Result<Vec<Question>, _> = parse_model_json(text);
        assert!(matches!(result, Err(AppError::Parse(_))));

        // 配列ではなくオブジェクト
        let text = r#"{"id": 1, "question": "..."}"#;
        let result: Result<Vec<Question>, _> = parse_model_json(text);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
