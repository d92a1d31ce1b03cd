//! Prompt construction and parsing for generated quiz questions.

use quizdeck_core::quiz::QuestionOption;
use serde::Deserialize;

use crate::client::GenAiError;

/// One question as produced by the completion service.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<QuestionOption>,
    /// Ids of the correct options. The wire field is camelCase.
    #[serde(rename = "correctAnswers")]
    pub correct_answers: Vec<i32>,
}

/// Top-level payload the model is instructed to emit.
#[derive(Debug, Deserialize)]
struct QuestionSet {
    questions: Vec<GeneratedQuestion>,
}

/// Build the chat prompt asking for `count` multiple-choice questions.
///
/// The prompt pins the exact JSON shape; models still wrap replies in code
/// fences often enough that [`parse_questions`] strips them.
pub fn build_question_prompt(subject: &str, topic: &str, count: u32) -> String {
    format!(
        "Generate {count} multiple-choice questions about {topic} in {subject}. \
         Reply with JSON only, no prose, in exactly this shape: \
         {{\"questions\": [{{\"question\": \"...\", \
         \"options\": [{{\"id\": 1, \"text\": \"...\"}}, {{\"id\": 2, \"text\": \"...\"}}, \
         {{\"id\": 3, \"text\": \"...\"}}, {{\"id\": 4, \"text\": \"...\"}}], \
         \"correctAnswers\": [1]}}]}}. \
         Each question has exactly 4 options with ids 1 through 4, and \
         correctAnswers lists the ids of every correct option (one or more)."
    )
}

/// Parse the assistant message content into generated questions.
///
/// Tolerates a surrounding Markdown code fence. An empty question list counts
/// as malformed: the caller asked for at least one question.
pub fn parse_questions(content: &str) -> Result<Vec<GeneratedQuestion>, GenAiError> {
    let json = strip_code_fences(content);

    let set: QuestionSet =
        serde_json::from_str(json).map_err(|e| GenAiError::Malformed(e.to_string()))?;

    if set.questions.is_empty() {
        return Err(GenAiError::Malformed("empty question list".to_string()));
    }

    Ok(set.questions)
}

/// Strip a surrounding ``` or ```json fence, if present.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"questions": [{"question": "What is 2 + 2?",
        "options": [{"id": 1, "text": "3"}, {"id": 2, "text": "4"}],
        "correctAnswers": [2]}]}"#;

    #[test]
    fn test_parse_plain_json() {
        let questions = parse_questions(SAMPLE).expect("plain JSON should parse");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "What is 2 + 2?");
        assert_eq!(questions[0].options.len(), 2);
        assert_eq!(questions[0].options[1].text, "4");
        assert_eq!(questions[0].correct_answers, vec![2]);
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```\n{SAMPLE}\n```");
        let questions = parse_questions(&fenced).expect("fenced JSON should parse");
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_parse_json_language_fence() {
        let fenced = format!("```json\n{SAMPLE}\n```");
        let questions = parse_questions(&fenced).expect("```json fence should parse");
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_parse_garbage_fails() {
        let result = parse_questions("Sure! Here are your questions:");
        assert!(matches!(result, Err(GenAiError::Malformed(_))));
    }

    #[test]
    fn test_parse_empty_list_fails() {
        let result = parse_questions(r#"{"questions": []}"#);
        assert!(matches!(result, Err(GenAiError::Malformed(_))));
    }

    #[test]
    fn test_prompt_names_subject_topic_and_count() {
        let prompt = build_question_prompt("Physics", "Newton's laws", 7);
        assert!(prompt.contains("Physics"));
        assert!(prompt.contains("Newton's laws"));
        assert!(prompt.contains('7'));
        assert!(prompt.contains("correctAnswers"));
    }
}
