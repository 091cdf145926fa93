//! データモデルモジュール

mod api;

pub use api::{Answer, ApiEnvelope, DiagnoseRequest, Question, Suggestion};
