use crate::api::transport::{build_url, Transport, TransportError};
use crate::logger;
use crate::models::{Question, Statistics, Submission, TestResult};
use crossbeam_channel::Sender;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

pub const LOAD_FAILED_ALERT: &str = "Failed to load data. Please check the backend server.";
pub const SUBMIT_FAILED_ALERT: &str = "Failed to submit data. Please check the backend server.";

/// Receives user-facing failure notifications.
pub trait Notify: Send + Sync {
    fn notify(&self, message: &str);
}

impl Notify for Sender<String> {
    fn notify(&self, message: &str) {
        let _ = self.send(message.to_string());
    }
}

/// Endpoint helpers over a transport. Every failure is logged, reported once
/// through the notifier and returned as `None`.
pub struct QuizApi {
    base_url: Url,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notify>,
}

impl QuizApi {
    pub fn new(base_url: Url, transport: Arc<dyn Transport>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            base_url,
            transport,
            notifier,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Option<T> {
        let result: Result<T, TransportError> = async {
            let url = build_url(&self.base_url, endpoint, params)?;
            logger::log(&format!("GET {}", url));
            let value = self.transport.get(url).await?;
            serde_json::from_value::<T>(value).map_err(|e| TransportError::Decode(e.to_string()))
        }
        .await;

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                logger::log(&format!("Fetch error on {}: {}", endpoint, e));
                self.notifier.notify(LOAD_FAILED_ALERT);
                None
            }
        }
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Option<T> {
        let result: Result<T, TransportError> = async {
            let url = build_url(&self.base_url, endpoint, &[])?;
            let body =
                serde_json::to_value(body).map_err(|e| TransportError::Decode(e.to_string()))?;
            logger::log(&format!("POST {}", url));
            let value = self.transport.post(url, &body).await?;
            serde_json::from_value::<T>(value).map_err(|e| TransportError::Decode(e.to_string()))
        }
        .await;

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                logger::log(&format!("Post error on {}: {}", endpoint, e));
                self.notifier.notify(SUBMIT_FAILED_ALERT);
                None
            }
        }
    }

    pub async fn quizzes(&self) -> Option<Vec<String>> {
        self.fetch_json("/quizzes", &[]).await
    }

    pub async fn categories(&self, quiz_file: &str) -> Option<Vec<String>> {
        self.fetch_json("/categories", &[("quiz_file", quiz_file)]).await
    }

    pub async fn questions(&self, quiz_file: &str, categories: &[String]) -> Option<Vec<Question>> {
        let joined = categories.join(",");
        self.fetch_json(
            "/questions",
            &[("categories", joined.as_str()), ("quiz_file", quiz_file)],
        )
        .await
    }

    pub async fn submit_test(&self, submission: &Submission) -> Option<TestResult> {
        self.post_json("/submit_test", submission).await
    }

    pub async fn statistics(&self) -> Option<Statistics> {
        self.fetch_json("/statistics", &[]).await
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::models::{Answer, AnswerSheet, SubmittedQuestion};
    use serde_json::json;

    #[tokio::test]
    async fn test_quizzes_success() {
        let (api, transport, notifier) = mock_api();
        transport.reply(json!(["geo.csv"]));

        assert_eq!(api.quizzes().await, Some(vec!["geo.csv".to_string()]));
        assert_eq!(
            transport.calls(),
            vec![Call::Get("http://127.0.0.1:5000/quizzes".to_string())]
        );
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_http_500_yields_none_and_one_alert() {
        let (api, transport, notifier) = mock_api();
        transport.fail(TransportError::Status(500));

        assert_eq!(api.quizzes().await, None);
        assert_eq!(notifier.messages(), vec![LOAD_FAILED_ALERT.to_string()]);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_failure() {
        let (api, transport, notifier) = mock_api();
        transport.reply(json!({"error": "Invalid quiz file specified"}));

        assert_eq!(api.categories("geo.csv").await, None);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_questions_query_order_and_join() {
        let (api, transport, _notifier) = mock_api();
        transport.reply(json!([]));

        let categories = vec!["Capitals".to_string(), "Rivers".to_string()];
        assert_eq!(api.questions("geo.csv", &categories).await, Some(vec![]));
        assert_eq!(
            transport.calls(),
            vec![Call::Get(
                "http://127.0.0.1:5000/questions?categories=Capitals%2CRivers&quiz_file=geo.csv"
                    .to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_submit_failure_uses_submit_alert() {
        let (api, transport, notifier) = mock_api();
        transport.fail(TransportError::Network("connection refused".to_string()));

        let mut answers = AnswerSheet::new();
        answers.record("Q1", Answer::Single("True".to_string()));
        let submission = Submission {
            quiz_file: "geo.csv".to_string(),
            questions: vec![SubmittedQuestion {
                question: "Q1".to_string(),
                correct_answers: vec!["True".to_string()],
                type_code: "tf".to_string(),
            }],
            user_answers: answers,
        };

        assert_eq!(api.submit_test(&submission).await, None);
        assert_eq!(notifier.messages(), vec![SUBMIT_FAILED_ALERT.to_string()]);
        match &transport.calls()[0] {
            Call::Post(url, body) => {
                assert_eq!(url, "http://127.0.0.1:5000/submit_test");
                assert_eq!(body["user_answers"]["Q1"], "True");
            }
            other => panic!("expected POST, got {:?}", other),
        }
    }
}
