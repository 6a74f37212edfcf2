use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    SingleChoice,
    TrueFalse,
    MultiSelect,
    FreeText,
}

impl QuestionType {
    /// Maps a wire code to its question type. Unknown codes fall back to free text.
    pub fn from_code(code: &str) -> Self {
        match code {
            "mc" => QuestionType::SingleChoice,
            "tf" => QuestionType::TrueFalse,
            "ma" => QuestionType::MultiSelect,
            _ => QuestionType::FreeText,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    /// Wire code, kept verbatim so it round-trips on submission.
    #[serde(rename = "type")]
    pub type_code: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub correct_answers: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Question {
    pub fn kind(&self) -> QuestionType {
        QuestionType::from_code(&self.type_code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Single(s) => s.is_empty(),
            Answer::Multiple(v) => v.is_empty(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Answer::Single(s) => s.clone(),
            Answer::Multiple(v) => v.join(", "),
        }
    }
}

/// Answers keyed by question text, in the order they were first recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    entries: Vec<(String, Answer)>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer for the same text in place.
    pub fn record(&mut self, question: &str, answer: Answer) {
        if let Some(entry) = self.entries.iter_mut().find(|(q, _)| q == question) {
            entry.1 = answer;
        } else {
            self.entries.push((question.to_string(), answer));
        }
    }

    pub fn get(&self, question: &str) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|(q, _)| q == question)
            .map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AnswerSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (question, answer) in &self.entries {
            map.serialize_entry(question, answer)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedQuestion {
    pub question: String,
    pub correct_answers: Vec<String>,
    #[serde(rename = "type")]
    pub type_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub quiz_file: String,
    pub questions: Vec<SubmittedQuestion>,
    pub user_answers: AnswerSheet,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailedResult {
    pub question: String,
    #[serde(default)]
    pub user_answer: Option<Answer>,
    #[serde(default)]
    pub correct_answers: Vec<String>,
    pub is_correct: bool,
}

impl DetailedResult {
    pub fn user_answer_display(&self) -> String {
        match &self.user_answer {
            Some(answer) if !answer.is_empty() => answer.display(),
            _ => "No answer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestResult {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    #[serde(default)]
    pub detailed_results: Vec<DetailedResult>,
}

impl TestResult {
    pub fn score_line(&self) -> String {
        format!(
            "{} / {} ({}%)",
            self.score, self.total_questions, self.percentage
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankedQuestion {
    pub question: String,
    pub correct_percentage: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub incorrect_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryPerformance {
    pub category: String,
    pub correct_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub ranked_questions: Vec<RankedQuestion>,
    #[serde(default)]
    pub category_performance: Vec<CategoryPerformance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_codes() {
        assert_eq!(QuestionType::from_code("mc"), QuestionType::SingleChoice);
        assert_eq!(QuestionType::from_code("tf"), QuestionType::TrueFalse);
        assert_eq!(QuestionType::from_code("ma"), QuestionType::MultiSelect);
        assert_eq!(QuestionType::from_code("te"), QuestionType::FreeText);
        assert_eq!(QuestionType::from_code("essay"), QuestionType::FreeText);
    }

    #[test]
    fn test_question_without_correct_answers() {
        let json = r#"{"question":"Capital of France?","type":"te","categories":["Capitals"]}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.kind(), QuestionType::FreeText);
        assert!(q.answers.is_empty());
        assert!(q.correct_answers.is_empty());
        assert_eq!(q.categories, vec!["Capitals"]);
    }

    #[test]
    fn test_answer_untagged_forms() {
        let single: Answer = serde_json::from_str(r#""True""#).unwrap();
        assert_eq!(single, Answer::Single("True".to_string()));
        let multi: Answer = serde_json::from_str(r#"["A","B"]"#).unwrap();
        assert_eq!(multi.display(), "A, B");
    }

    #[test]
    fn test_answer_emptiness() {
        assert!(Answer::Single(String::new()).is_empty());
        assert!(Answer::Multiple(vec![]).is_empty());
        assert!(!Answer::Single(" ".to_string()).is_empty());
    }

    #[test]
    fn test_answer_sheet_overwrites_in_place() {
        let mut sheet = AnswerSheet::new();
        sheet.record("Q1", Answer::Single("a".to_string()));
        sheet.record("Q2", Answer::Single("b".to_string()));
        sheet.record("Q1", Answer::Single("c".to_string()));

        assert_eq!(sheet.len(), 2);
        assert_eq!(
            serde_json::to_string(&sheet).unwrap(),
            r#"{"Q1":"c","Q2":"b"}"#
        );
    }

    #[test]
    fn test_submission_echoes_type_code() {
        let mut answers = AnswerSheet::new();
        answers.record("Pick two", Answer::Multiple(vec!["x".into(), "y".into()]));
        let submission = Submission {
            quiz_file: "geo.csv".to_string(),
            questions: vec![SubmittedQuestion {
                question: "Pick two".to_string(),
                correct_answers: vec![],
                type_code: "ma".to_string(),
            }],
            user_answers: answers,
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["quiz_file"], "geo.csv");
        assert_eq!(value["questions"][0]["type"], "ma");
        assert_eq!(value["user_answers"]["Pick two"][1], "y");
    }

    #[test]
    fn test_detailed_result_no_answer() {
        let json =
            r#"{"question":"Q","user_answer":null,"correct_answers":["A"],"is_correct":false}"#;
        let item: DetailedResult = serde_json::from_str(json).unwrap();
        assert_eq!(item.user_answer_display(), "No answer");

        let json =
            r#"{"question":"Q","user_answer":[],"correct_answers":["A"],"is_correct":false}"#;
        let item: DetailedResult = serde_json::from_str(json).unwrap();
        assert_eq!(item.user_answer_display(), "No answer");
    }

    #[test]
    fn test_score_line() {
        let result = TestResult {
            score: 2,
            total_questions: 3,
            percentage: 66.67,
            detailed_results: vec![],
        };
        assert_eq!(result.score_line(), "2 / 3 (66.67%)");

        let perfect = TestResult {
            score: 1,
            total_questions: 1,
            percentage: 100.0,
            detailed_results: vec![],
        };
        assert_eq!(perfect.score_line(), "1 / 1 (100%)");
    }

    #[test]
    fn test_statistics_decoding() {
        let json = r#"{
            "ranked_questions": [
                {
                    "question": "Q1",
                    "correct_percentage": 25.0,
                    "categories": ["Capitals", "Rivers"],
                    "incorrect_count": 3,
                    "category_rank_score": 0.2
                }
            ],
            "category_performance": [{"category":"Capitals","correct_percentage":40.0}]
        }"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.ranked_questions[0].incorrect_count, 3);
        assert_eq!(stats.category_performance[0].category, "Capitals");
    }
}
