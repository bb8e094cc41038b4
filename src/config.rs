use crate::models::DEFAULT_SESSION_SECONDS;
use crate::provider::{
    FileQuestionProvider, HttpQuestionProvider, QuestionProvider, DEFAULT_QUESTIONS_URL,
};
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Http(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: QuestionSource,
    pub session_seconds: u32,
    pub shuffle: bool,
    pub data_dir: PathBuf,
    pub log_filter: String,
}

fn default_data_dir(home: Option<String>) -> PathBuf {
    let home = home.unwrap_or_else(|| ".".to_string());
    if cfg!(target_os = "windows") {
        PathBuf::from(home).join(".local\\share\\timed-quiz")
    } else {
        PathBuf::from(home).join(".local/share/timed-quiz")
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, falling back to defaults for
    /// anything missing or unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let source = match lookup("QUIZ_QUESTIONS_FILE").filter(|v| !v.trim().is_empty()) {
            Some(path) => QuestionSource::File(PathBuf::from(path)),
            None => QuestionSource::Http(
                lookup("QUIZ_QUESTIONS_URL")
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_QUESTIONS_URL.to_string()),
            ),
        };

        let session_seconds = match lookup("QUIZ_SECONDS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid QUIZ_SECONDS");
                    DEFAULT_SESSION_SECONDS
                }
            },
            None => DEFAULT_SESSION_SECONDS,
        };

        let shuffle = match lookup("QUIZ_SHUFFLE") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "ignoring invalid QUIZ_SHUFFLE");
                false
            }),
            None => false,
        };

        let data_dir = lookup("QUIZ_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let home = if cfg!(target_os = "windows") {
                    lookup("USERPROFILE")
                } else {
                    lookup("HOME")
                };
                default_data_dir(home)
            });

        let log_filter = lookup("QUIZ_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            source,
            session_seconds,
            shuffle,
            data_dir,
            log_filter,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("scores.db")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("timed-quiz.log")
    }

    pub fn provider(&self) -> Arc<dyn QuestionProvider> {
        match &self.source {
            QuestionSource::Http(url) => Arc::new(HttpQuestionProvider::new(url.clone())),
            QuestionSource::File(path) => Arc::new(FileQuestionProvider::new(path.clone())),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("HOME", "/home/quizzer")]);
        assert_eq!(
            config.source,
            QuestionSource::Http(DEFAULT_QUESTIONS_URL.to_string())
        );
        assert_eq!(config.session_seconds, 300);
        assert!(!config.shuffle);
        assert_eq!(config.log_filter, "info");
        if !cfg!(target_os = "windows") {
            assert_eq!(
                config.data_dir,
                PathBuf::from("/home/quizzer/.local/share/timed-quiz")
            );
            assert_eq!(
                config.db_path(),
                PathBuf::from("/home/quizzer/.local/share/timed-quiz/scores.db")
            );
        }
    }

    #[test]
    fn test_file_source_wins_over_url() {
        let config = config_from(&[
            ("QUIZ_QUESTIONS_URL", "http://example.test/q"),
            ("QUIZ_QUESTIONS_FILE", "questions.json"),
        ]);
        assert_eq!(
            config.source,
            QuestionSource::File(PathBuf::from("questions.json"))
        );
        assert_eq!(config.provider().describe(), "questions.json");
    }

    #[test]
    fn test_custom_url() {
        let config = config_from(&[("QUIZ_QUESTIONS_URL", "http://example.test/q")]);
        assert_eq!(config.provider().describe(), "http://example.test/q");
    }

    #[test]
    fn test_seconds_and_shuffle() {
        let config = config_from(&[("QUIZ_SECONDS", " 90 "), ("QUIZ_SHUFFLE", "yes")]);
        assert_eq!(config.session_seconds, 90);
        assert!(config.shuffle);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("QUIZ_SECONDS", "soon"),
            ("QUIZ_SHUFFLE", "maybe"),
            ("QUIZ_LOG", "  "),
        ]);
        assert_eq!(config.session_seconds, 300);
        assert!(!config.shuffle);
        assert_eq!(config.log_filter, "info");

        let config = config_from(&[("QUIZ_SECONDS", "0")]);
        assert_eq!(config.session_seconds, 300);
    }

    #[test]
    fn test_data_dir_override() {
        let config = config_from(&[("QUIZ_DATA_DIR", "/tmp/quiz")]);
        assert_eq!(config.log_path(), PathBuf::from("/tmp/quiz/timed-quiz.log"));
    }
}
