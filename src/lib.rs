pub mod api;
pub mod api_worker;
pub mod config;
pub mod flow;
pub mod input;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use api::{ApiRequest, ApiResponse, HttpTransport, QuizApi, Transport, TransportError};
pub use api_worker::spawn_api_worker;
pub use config::Config;
pub use flow::{QuizFlow, Screen, Tab};
pub use input::{handle_key, KeyOutcome};
pub use models::{Answer, AnswerSheet, Question, QuestionType, Statistics, Submission, TestResult};
pub use session::{AnswerInput, CompletedQuiz, Progress, QuizSession};
pub use ui::draw;
