//! プロンプト構築サービス
//!
//! 質問リスト生成用・趣味診断用のプロンプトを組み立てる。どちらも JSON 配列のみを
//! 出力するようモデルに指示する。

use crate::models::Answer;

/// 診断質問の定義（フル版は 6 問、簡易版は先頭から 3 問を使う）
const QUESTION_LIST: [&str; 6] = [
    "【目的】リフレッシュ、自己研鑽、承認・交流、暇つぶしの中で、趣味を通して一番得たいものは何ですか？",
    "【リソース】趣味に使える時間（例: 平日の夜30分、休日に丸1日）、予算、希望する場所（自宅か外出か）を教えてください。",
    "【性格とスタイル】一人で没頭したいか誰かと楽しみたいか、ゼロから創りたいか用意されたものを楽しみたいか、論理的（パズル等）か感覚的（アート等）か、好みを教えてください。",
    "【過去の体験】子供の頃に時間を忘れて取り組んでいたことや、今まで試して「合わない」と感じた趣味とその理由を教えてください。",
    "【生活環境】普段の仕事や生活はデスクワーク中心ですか？それとも体を動かすことが多いですか？",
    "【MBTI】あなたのMBTI（16タイプ性格診断）を教えてください。（わからない場合はどのような性格と言われることが多いか教えてください）",
];

/// 趣味診断プロンプトのテンプレート
///
/// `{answers_text}` に回答のトランスクリプトを差し込む。
const DIAGNOSE_PROMPT_TEMPLATE: &str = r#"あなたはプロの趣味アドバイザーです。以下のユーザーの回答を分析し、その人の目的やリソース、性格、過去の体験に最も適した趣味を厳選して3つ提案してください。

【ユーザーの回答】
{answers_text}

【出力要件】
以下のJSON配列の形式で出力してください。余計なテキストは一切含めないでください。
[
  {
    "hobby_name": "趣味の名前",
    "reason": "なぜこの趣味がおすすめなのか（ユーザーの回答のどの部分を踏まえたのか具体的に）",
    "first_step": "今日から始められる具体的な第一歩"
  }
]
"#;

/// プロンプトサービス
pub struct PromptService;

impl PromptService {
    /// 新しいプロンプトサービスを作成する
    pub fn new() -> Self {
        Self
    }

    /// 質問リスト生成プロンプトを構築する
    ///
    /// `count` 問の質問を `{id, question}` の JSON 配列として出力するよう指示する。
    /// count は QUESTION_LIST の範囲内であること（設定読み込み時に検証済み）。
    pub fn build_questions_prompt(&self, count: usize) -> String {
        let count = count.min(QUESTION_LIST.len());

        let mut question_lines = String::new();
        for (i, question) in QUESTION_LIST.iter().take(count).enumerate() {
            question_lines.push_str(&format!("{}. {}\n", i + 1, question));
        }

        // 出力形式の雛形（質問数と同じ要素数で提示する）
        let mut format_lines = String::new();
        for i in 1..=count {
            let separator = if i < count { "," } else { "" };
            format_lines.push_str(&format!(
                "  {{\"id\": {}, \"question\": \"質問内容{}\"}}{}\n",
                i, i, separator
            ));
        }

        format!(
            "以下の{}つの質問を、指定されたJSON配列の形式で出力してください。\n余計なテキストは一切含めないでください。\n\n【質問リスト】\n{}\n【出力形式】\n[\n{}]\n",
            count, question_lines, format_lines
        )
    }

    /// 回答リストを平文のトランスクリプトに変換する
    ///
    /// 入力順を保ったまま「質問: …\n回答: …\n\n」を連結する。空リストなら空文字列。
    pub fn render_transcript(&self, answers: &[Answer]) -> String {
        let mut transcript = String::new();
        for item in answers {
            transcript.push_str(&format!(
                "質問: {}\n回答: {}\n\n",
                item.question, item.answer
            ));
        }
        transcript
    }

    /// 趣味診断プロンプトを構築する
    pub fn build_diagnose_prompt(&self, answers: &[Answer]) -> String {
        let transcript = self.render_transcript(answers);
        DIAGNOSE_PROMPT_TEMPLATE.replace("{answers_text}", &transcript)
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
