use super::{parse_questions, LoadError, QuestionProvider};
use crate::models::Question;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the question set from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileQuestionProvider {
    path: PathBuf,
}

impl FileQuestionProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionProvider for FileQuestionProvider {
    async fn fetch(&self) -> Result<Vec<Question>, LoadError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_questions(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
