use crate::models::{Intent, Question};
use crate::provider::QuestionProvider;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Fetch the question set once and report the outcome as a single intent.
pub fn spawn_loader(
    provider: Arc<dyn QuestionProvider>,
    shuffle: bool,
    tx: UnboundedSender<Intent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let intent = load_questions(provider.as_ref(), shuffle).await;
        if tx.send(intent).is_err() {
            tracing::debug!("event loop gone before questions arrived");
        }
    })
}

pub async fn load_questions(provider: &dyn QuestionProvider, shuffle: bool) -> Intent {
    let source = provider.describe();
    match provider.fetch().await {
        Ok(mut questions) => {
            tracing::info!(source = %source, count = questions.len(), "questions loaded");
            if shuffle {
                shuffle_questions(&mut questions);
            }
            Intent::QuestionsLoaded(questions)
        }
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "failed to load questions");
            Intent::LoadFailed(e.to_string())
        }
    }
}

fn shuffle_questions(questions: &mut [Question]) {
    questions.shuffle(&mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::LoadError;
    use async_trait::async_trait;

    struct StaticProvider(Vec<Question>);

    #[async_trait]
    impl QuestionProvider for StaticProvider {
        async fn fetch(&self) -> Result<Vec<Question>, LoadError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl QuestionProvider for FailingProvider {
        async fn fetch(&self) -> Result<Vec<Question>, LoadError> {
            Err(LoadError::Status { status: 404 })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                text: format!("Q{}", i + 1),
                options: vec!["a".to_string(), "b".to_string()],
                correct_option: 0,
                points: 10,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_loader_sends_loaded_intent() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let handle = spawn_loader(Arc::new(StaticProvider(questions(3))), false, tx);
        handle.await.unwrap();

        match rx.recv().await {
            Some(Intent::QuestionsLoaded(qs)) => {
                let texts: Vec<_> = qs.iter().map(|q| q.text.as_str()).collect();
                assert_eq!(texts, ["Q1", "Q2", "Q3"]);
            }
            other => panic!("unexpected intent: {:?}", other),
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_loader_sends_failure_intent() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        spawn_loader(Arc::new(FailingProvider), false, tx).await.unwrap();

        match rx.recv().await {
            Some(Intent::LoadFailed(reason)) => assert!(reason.contains("404")),
            other => panic!("unexpected intent: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_shuffle_keeps_every_question() {
        let intent = load_questions(&StaticProvider(questions(20)), true).await;
        let Intent::QuestionsLoaded(mut qs) = intent else {
            panic!("expected loaded questions");
        };
        qs.sort_by_key(|q| q.text[1..].parse::<usize>().unwrap());
        assert_eq!(qs, questions(20));
    }
}
