//! LLM モジュール
//!
//! Gemini generateContent API のクライアントを提供する。

mod gemini;
mod types;

pub use gemini::GeminiClient;
pub use types::LlmError;
