pub mod backend;
pub mod transport;

use crate::models::{Question, Statistics, Submission, TestResult};

pub use backend::{Notify, QuizApi, LOAD_FAILED_ALERT, SUBMIT_FAILED_ALERT};
pub use transport::{build_url, HttpTransport, Transport, TransportError};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Quizzes,
    Categories { quiz_file: String },
    Questions { quiz_file: String, categories: Vec<String> },
    Submit(Submission),
    Statistics,
}

/// Outcome of an [`ApiRequest`]. `None` means the transport already reported the failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Quizzes(Option<Vec<String>>),
    Categories(Option<Vec<String>>),
    Questions(Option<Vec<Question>>),
    Submitted(Option<TestResult>),
    Statistics(Option<Statistics>),
}

impl QuizApi {
    pub async fn execute(&self, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Quizzes => ApiResponse::Quizzes(self.quizzes().await),
            ApiRequest::Categories { quiz_file } => {
                ApiResponse::Categories(self.categories(&quiz_file).await)
            }
            ApiRequest::Questions {
                quiz_file,
                categories,
            } => ApiResponse::Questions(self.questions(&quiz_file, &categories).await),
            ApiRequest::Submit(submission) => {
                ApiResponse::Submitted(self.submit_test(&submission).await)
            }
            ApiRequest::Statistics => ApiResponse::Statistics(self.statistics().await),
        }
    }
}
