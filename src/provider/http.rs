use super::{parse_questions, LoadError, QuestionProvider};
use crate::models::Question;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_QUESTIONS_URL: &str = "http://localhost:8000/questions";

#[derive(Debug, Clone)]
pub struct HttpQuestionProvider {
    client: Client,
    url: String,
}

impl HttpQuestionProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionProvider for HttpQuestionProvider {
    async fn fetch(&self) -> Result<Vec<Question>, LoadError> {
        tracing::debug!(url = %self.url, "requesting questions");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_questions(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
