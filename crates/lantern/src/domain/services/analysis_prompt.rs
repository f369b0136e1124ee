//! Values analysis prompt
//!
//! Renders the fixed instruction (role, candidate values, output format)
//! followed by the three testimony sections.

use super::value_catalog::CORE_VALUES;
use crate::domain::entities::Testimony;

const ROLE_INSTRUCTION: &str = "あなたは心理分析の専門家である。
ユーザーが「影の法廷」で行った証言（嫉妬・怒り・喪失についての回答）から、その人物のコア価値観を特定せよ。";

const OUTPUT_FORMAT: &str = r#"【出力形式】
以下のJSON形式で返答せよ：
{
  "primaryValue": { "name": "価値観名", "confidence": 85, "evidence": "この価値観を示す証言の要約" },
  "secondaryValue": { "name": "価値観名", "confidence": 70, "evidence": "この価値観を示す証言の要約" },
  "tertiaryValue": { "name": "価値観名", "confidence": 60, "evidence": "この価値観を示す証言の要約" },
  "analysis": "総合分析（100文字以内）"
}"#;

const CLOSING_INSTRUCTION: &str = "上記の証言から価値観を分析し、JSON形式で返答せよ。";

/// Build the complete prompt for one analysis request
pub fn render_analysis_prompt(testimony: &Testimony) -> String {
    let values = CORE_VALUES
        .iter()
        .map(|v| format!("- {}: {}", v.name, v.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{ROLE_INSTRUCTION}

【価値観リスト（一部）】
{values}

{OUTPUT_FORMAT}

【被告人の証言記録】

■ 嫉妬フェーズ
{envy}

■ 怒りフェーズ
{rage}

■ 喪失フェーズ
{loss}

{CLOSING_INSTRUCTION}",
        envy = numbered_answers(&testimony.envy),
        rage = numbered_answers(&testimony.rage),
        loss = numbered_answers(&testimony.loss),
    )
}

fn numbered_answers(answers: &[String]) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("Q{}: {}", i + 1, answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_are_numbered_per_phase() {
        let testimony = Testimony {
            envy: vec!["同期の昇進".into(), "友人の結婚".into()],
            rage: vec!["約束を破られた".into()],
            loss: vec![],
        };
        let prompt = render_analysis_prompt(&testimony);

        assert!(prompt.contains("■ 嫉妬フェーズ\nQ1: 同期の昇進\nQ2: 友人の結婚\n"));
        assert!(prompt.contains("■ 怒りフェーズ\nQ1: 約束を破られた\n"));
        assert!(prompt.contains("■ 喪失フェーズ\n\n"));
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }

    #[test]
    fn test_prompt_lists_every_core_value() {
        let prompt = render_analysis_prompt(&Testimony::default());
        for value in CORE_VALUES {
            assert!(prompt.contains(&format!("- {}: {}", value.name, value.description)));
        }
        assert!(prompt.contains("\"primaryValue\""));
    }

    #[test]
    fn test_sections_appear_in_order() {
        let prompt = render_analysis_prompt(&Testimony::default());
        let envy = prompt.find("嫉妬フェーズ").unwrap();
        let rage = prompt.find("怒りフェーズ").unwrap();
        let loss = prompt.find("喪失フェーズ").unwrap();
        assert!(envy < rage && rage < loss);
    }
}
