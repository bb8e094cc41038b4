pub mod file;
pub mod http;

use crate::models::Question;
use async_trait::async_trait;
use serde::Deserialize;

pub use file::FileQuestionProvider;
pub use http::{HttpQuestionProvider, DEFAULT_QUESTIONS_URL};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered with status {status}")]
    Status { status: u16 },
    #[error("malformed question data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read question file: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of the question set for a quiz.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Question>, LoadError>;

    /// Human-readable location of the questions, for logs and the loading view.
    fn describe(&self) -> String;
}

/// Question payloads come either as a bare array or wrapped the way
/// json-server serves a whole database file.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionPayload {
    List(Vec<Question>),
    Wrapped { questions: Vec<Question> },
}

pub fn parse_questions(body: &str) -> Result<Vec<Question>, LoadError> {
    let payload: QuestionPayload = serde_json::from_str(body)?;
    Ok(match payload {
        QuestionPayload::List(questions) => questions,
        QuestionPayload::Wrapped { questions } => questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let body = r#"[
            {"question":"Q1","options":["a","b"],"correctOption":0,"points":10},
            {"question":"Q2","options":["a","b","c"],"correctOption":2,"points":20}
        ]"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].text, "Q2");
        assert_eq!(questions[1].correct_option, 2);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let body = r#"{"questions":[{"question":"Q1","options":["a","b"],"correctOption":1,"points":5}]}"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].points, 5);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_questions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_questions("<html>not json</html>").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert!(err.to_string().starts_with("malformed question data"));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = parse_questions(r#"[{"question":"Q1","options":["a","b"]}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
