use crate::models::{Answer, AnswerSheet, Question, QuestionType, Submission, SubmittedQuestion};

/// Input control for the question on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerInput {
    /// Radio set: at most one option selected.
    Choice {
        cursor: usize,
        selected: Option<usize>,
    },
    /// Checkbox set.
    Checkboxes { cursor: usize, checked: Vec<bool> },
    Text { buffer: String, cursor: usize },
}

impl AnswerInput {
    pub fn for_question(question: &Question) -> Self {
        match question.kind() {
            QuestionType::SingleChoice | QuestionType::TrueFalse => AnswerInput::Choice {
                cursor: 0,
                selected: None,
            },
            QuestionType::MultiSelect => AnswerInput::Checkboxes {
                cursor: 0,
                checked: vec![false; question.answers.len()],
            },
            QuestionType::FreeText => AnswerInput::Text {
                buffer: String::new(),
                cursor: 0,
            },
        }
    }

    pub fn move_cursor(&mut self, delta: isize, option_count: usize) {
        let cursor = match self {
            AnswerInput::Choice { cursor, .. } | AnswerInput::Checkboxes { cursor, .. } => cursor,
            AnswerInput::Text { .. } => return,
        };
        if option_count == 0 {
            return;
        }
        let next = (*cursor as isize + delta).clamp(0, option_count as isize - 1);
        *cursor = next as usize;
    }

    /// Selects the highlighted radio option or flips the highlighted checkbox.
    pub fn toggle(&mut self) {
        match self {
            AnswerInput::Choice { cursor, selected } => *selected = Some(*cursor),
            AnswerInput::Checkboxes { cursor, checked } => {
                if let Some(flag) = checked.get_mut(*cursor) {
                    *flag = !*flag;
                }
            }
            AnswerInput::Text { .. } => {}
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let AnswerInput::Text { buffer, cursor } = self {
            let byte_idx = char_to_byte(buffer, *cursor);
            buffer.insert(byte_idx, c);
            *cursor += 1;
        }
    }

    pub fn backspace(&mut self) {
        if let AnswerInput::Text { buffer, cursor } = self
            && *cursor > 0
        {
            let byte_idx = char_to_byte(buffer, *cursor - 1);
            buffer.remove(byte_idx);
            *cursor -= 1;
        }
    }

    pub fn move_text_cursor(&mut self, delta: isize) {
        if let AnswerInput::Text { buffer, cursor } = self {
            let len = buffer.chars().count() as isize;
            *cursor = (*cursor as isize + delta).clamp(0, len) as usize;
        }
    }

    /// The answer as the form would submit it. `None` when nothing was chosen.
    pub fn extract(&self, options: &[String]) -> Option<Answer> {
        match self {
            AnswerInput::Choice { selected, .. } => selected
                .and_then(|i| options.get(i))
                .map(|option| Answer::Single(option.clone())),
            AnswerInput::Checkboxes { checked, .. } => Some(Answer::Multiple(
                options
                    .iter()
                    .zip(checked)
                    .filter(|(_, on)| **on)
                    .map(|(option, _)| option.clone())
                    .collect(),
            )),
            AnswerInput::Text { buffer, .. } => Some(Answer::Single(buffer.clone())),
        }
    }
}

fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// One attempt at a quiz. Only exists while questions remain unanswered.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    quiz_file: String,
    questions: Vec<Question>,
    current_index: usize,
    answers: AnswerSheet,
    pub input: AnswerInput,
}

#[derive(Debug)]
pub enum Progress {
    Next(QuizSession),
    Finished(CompletedQuiz),
}

impl QuizSession {
    /// Starts a session. Returns `None` for an empty question set.
    pub fn new(quiz_file: String, questions: Vec<Question>) -> Option<Self> {
        let input = AnswerInput::for_question(questions.first()?);
        Some(Self {
            quiz_file,
            questions,
            current_index: 0,
            answers: AnswerSheet::new(),
            input,
        })
    }

    pub fn quiz_file(&self) -> &str {
        &self.quiz_file
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// The answer from the current input, if it is non-empty.
    pub fn pending_answer(&self) -> Option<Answer> {
        self.input
            .extract(&self.current().answers)
            .filter(|answer| !answer.is_empty())
    }

    /// Records `answer` for the current question and advances.
    pub fn record(mut self, answer: Answer) -> Progress {
        let question = self.current().question.clone();
        self.answers.record(&question, answer);
        self.current_index += 1;

        match self.questions.get(self.current_index) {
            Some(next) => {
                self.input = AnswerInput::for_question(next);
                Progress::Next(self)
            }
            None => Progress::Finished(CompletedQuiz {
                quiz_file: self.quiz_file,
                questions: self.questions,
                answers: self.answers,
            }),
        }
    }
}

/// Every question has been answered; the only source of a [`Submission`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuiz {
    quiz_file: String,
    questions: Vec<Question>,
    answers: AnswerSheet,
}

impl CompletedQuiz {
    pub fn quiz_file(&self) -> &str {
        &self.quiz_file
    }

    pub fn into_submission(self) -> Submission {
        Submission {
            quiz_file: self.quiz_file,
            questions: self
                .questions
                .into_iter()
                .map(|q| SubmittedQuestion {
                    question: q.question,
                    correct_answers: q.correct_answers,
                    type_code: q.type_code,
                })
                .collect(),
            user_answers: self.answers,
        }
    }
}
