use crate::api::{ApiRequest, ApiResponse};
use crate::logger;
use crate::models::{Question, Statistics, TestResult, ALL_CATEGORIES};
use crate::session::{Progress, QuizSession};
use std::collections::VecDeque;

pub const NO_CATEGORY_ALERT: &str = "Please select at least one category.";
pub const NO_ANSWER_ALERT: &str = "Please select or enter an answer.";

/// Rows each detailed result occupies in the review list, separator included.
pub const REVIEW_LINES_PER_RESULT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Quiz,
    Statistics,
}

/// The request a loading screen is waiting on.
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
    Quizzes,
    Categories { quiz_file: String },
    Questions { quiz_file: String },
    Submission { quiz_file: String },
    Statistics,
}

impl Pending {
    fn accepts(&self, response: &ApiResponse) -> bool {
        matches!(
            (self, response),
            (Pending::Quizzes, ApiResponse::Quizzes(_))
                | (Pending::Categories { .. }, ApiResponse::Categories(_))
                | (Pending::Questions { .. }, ApiResponse::Questions(_))
                | (Pending::Submission { .. }, ApiResponse::Submitted(_))
                | (Pending::Statistics, ApiResponse::Statistics(_))
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizPicker {
    pub quizzes: Vec<String>,
    /// Index into `quizzes`; `None` is the placeholder entry.
    pub selected: Option<usize>,
}

impl QuizPicker {
    pub fn chosen(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.quizzes.get(i))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPicker {
    pub quiz_file: String,
    pub categories: Vec<(String, bool)>,
    pub cursor: usize,
}

impl CategoryPicker {
    pub fn new(quiz_file: String, categories: Vec<String>) -> Self {
        let categories = categories
            .into_iter()
            .map(|c| {
                let checked = c == ALL_CATEGORIES;
                (c, checked)
            })
            .collect();
        Self {
            quiz_file,
            categories,
            cursor: 0,
        }
    }

    /// Flips one box. "All" drags every box along; any other box clears "All".
    pub fn toggle(&mut self, index: usize) {
        let Some((label, checked)) = self.categories.get_mut(index) else {
            return;
        };
        *checked = !*checked;
        let state = *checked;
        let is_all = label.as_str() == ALL_CATEGORIES;
        for (other_label, other) in &mut self.categories {
            if is_all {
                *other = state;
            } else if other_label.as_str() == ALL_CATEGORIES {
                *other = false;
            }
        }
    }

    pub fn selected(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(label, _)| label.clone())
            .collect()
    }

    pub fn is_checked(&self, label: &str) -> bool {
        self.categories
            .iter()
            .any(|(l, checked)| l == label && *checked)
    }
}

/// The statistics table that scroll keys move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFocus {
    Questions,
    Categories,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub stats: Statistics,
    pub focus: StatsFocus,
    /// First visible row of each table.
    pub question_offset: usize,
    pub category_offset: usize,
}

impl StatsView {
    pub fn new(stats: Statistics) -> Self {
        Self {
            stats,
            focus: StatsFocus::Questions,
            question_offset: 0,
            category_offset: 0,
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            StatsFocus::Questions => StatsFocus::Categories,
            StatsFocus::Categories => StatsFocus::Questions,
        };
    }

    /// Moves the focused table; its last row always stays reachable at the top.
    fn scroll(&mut self, delta: isize) {
        let (offset, rows) = match self.focus {
            StatsFocus::Questions => (&mut self.question_offset, self.stats.ranked_questions.len()),
            StatsFocus::Categories => (
                &mut self.category_offset,
                self.stats.category_performance.len(),
            ),
        };
        let last = rows.saturating_sub(1) as isize;
        *offset = (*offset as isize + delta).clamp(0, last) as usize;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading(Pending),
    QuizSelection(QuizPicker),
    NoQuizzes,
    CategorySelection(CategoryPicker),
    CategoriesFailed,
    NoQuestions { quiz_file: String },
    Question(QuizSession),
    Results { result: TestResult, scroll: u16 },
    Statistics(StatsView),
}

/// UI-agnostic controller. Operations that need the backend return the
/// request to issue; its response comes back through [`QuizFlow::handle_response`].
#[derive(Debug)]
pub struct QuizFlow {
    screen: Screen,
    tab: Tab,
    alerts: VecDeque<String>,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizFlow {
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading(Pending::Quizzes),
            tab: Tab::Quiz,
            alerts: VecDeque::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    fn load(&mut self, pending: Pending, request: ApiRequest) -> Option<ApiRequest> {
        logger::log(&format!("Requesting {:?}", pending));
        self.screen = Screen::Loading(pending);
        Some(request)
    }

    /// Quiz tab: restarts the flow, dropping any session in progress.
    pub fn start(&mut self) -> Option<ApiRequest> {
        self.tab = Tab::Quiz;
        self.load(Pending::Quizzes, ApiRequest::Quizzes)
    }

    pub fn show_statistics(&mut self) -> Option<ApiRequest> {
        self.tab = Tab::Statistics;
        self.load(Pending::Statistics, ApiRequest::Statistics)
    }

    fn request_categories(&mut self, quiz_file: String) -> Option<ApiRequest> {
        self.load(
            Pending::Categories {
                quiz_file: quiz_file.clone(),
            },
            ApiRequest::Categories { quiz_file },
        )
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Option<ApiRequest> {
        let pending = match &self.screen {
            Screen::Loading(pending) if pending.accepts(&response) => pending.clone(),
            _ => {
                logger::log("Ignoring response that no screen is waiting for");
                return None;
            }
        };

        match (pending, response) {
            (Pending::Quizzes, ApiResponse::Quizzes(quizzes)) => {
                self.screen = match quizzes {
                    Some(quizzes) if !quizzes.is_empty() => Screen::QuizSelection(QuizPicker {
                        quizzes,
                        selected: None,
                    }),
                    _ => Screen::NoQuizzes,
                };
                None
            }
            (Pending::Categories { quiz_file }, ApiResponse::Categories(categories)) => {
                self.screen = match categories {
                    Some(categories) => {
                        Screen::CategorySelection(CategoryPicker::new(quiz_file, categories))
                    }
                    None => Screen::CategoriesFailed,
                };
                None
            }
            (Pending::Questions { quiz_file }, ApiResponse::Questions(questions)) => {
                self.begin_session(quiz_file, questions.unwrap_or_default());
                None
            }
            (Pending::Submission { quiz_file }, ApiResponse::Submitted(result)) => match result {
                Some(result) => {
                    self.screen = Screen::Results { result, scroll: 0 };
                    None
                }
                None => self.request_categories(quiz_file),
            },
            (Pending::Statistics, ApiResponse::Statistics(stats)) => {
                if let Some(stats) = stats {
                    self.screen = Screen::Statistics(StatsView::new(stats));
                }
                None
            }
            _ => None,
        }
    }

    fn begin_session(&mut self, quiz_file: String, questions: Vec<Question>) {
        self.screen = match QuizSession::new(quiz_file.clone(), questions) {
            Some(session) => Screen::Question(session),
            None => Screen::NoQuestions { quiz_file },
        };
    }

    pub fn confirm_enabled(&self) -> bool {
        matches!(&self.screen, Screen::QuizSelection(picker) if picker.chosen().is_some())
    }

    /// Moves the quiz highlight; index 0 is the placeholder entry.
    pub fn move_quiz_selection(&mut self, delta: isize) {
        if let Screen::QuizSelection(picker) = &mut self.screen {
            let current = picker.selected.map_or(0, |i| i as isize + 1);
            let next = (current + delta).clamp(0, picker.quizzes.len() as isize);
            picker.selected = if next == 0 {
                None
            } else {
                Some(next as usize - 1)
            };
        }
    }

    pub fn select_quiz(&mut self, index: Option<usize>) {
        if let Screen::QuizSelection(picker) = &mut self.screen {
            picker.selected = index.filter(|i| *i < picker.quizzes.len());
        }
    }

    pub fn confirm_quiz(&mut self) -> Option<ApiRequest> {
        let Screen::QuizSelection(picker) = &self.screen else {
            return None;
        };
        let quiz_file = picker.chosen()?.to_string();
        self.request_categories(quiz_file)
    }

    pub fn move_category_cursor(&mut self, delta: isize) {
        if let Screen::CategorySelection(picker) = &mut self.screen
            && !picker.categories.is_empty()
        {
            let last = picker.categories.len() as isize - 1;
            picker.cursor = (picker.cursor as isize + delta).clamp(0, last) as usize;
        }
    }

    pub fn toggle_category(&mut self, index: usize) {
        if let Screen::CategorySelection(picker) = &mut self.screen {
            picker.toggle(index);
        }
    }

    pub fn toggle_category_at_cursor(&mut self) {
        if let Screen::CategorySelection(picker) = &mut self.screen {
            let cursor = picker.cursor;
            picker.toggle(cursor);
        }
    }

    pub fn start_quiz(&mut self) -> Option<ApiRequest> {
        let Screen::CategorySelection(picker) = &self.screen else {
            return None;
        };
        let categories = picker.selected();
        if categories.is_empty() {
            self.push_alert(NO_CATEGORY_ALERT);
            return None;
        }
        let quiz_file = picker.quiz_file.clone();
        self.load(
            Pending::Questions {
                quiz_file: quiz_file.clone(),
            },
            ApiRequest::Questions {
                quiz_file,
                categories,
            },
        )
    }

    /// "Go Back" from the empty question result.
    pub fn go_back(&mut self) -> Option<ApiRequest> {
        let Screen::NoQuestions { quiz_file } = &self.screen else {
            return None;
        };
        let quiz_file = quiz_file.clone();
        self.request_categories(quiz_file)
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        match &mut self.screen {
            Screen::Question(session) => Some(session),
            _ => None,
        }
    }

    /// Records the current answer and moves on; after the last question the
    /// submission request is returned.
    pub fn submit_answer(&mut self) -> Option<ApiRequest> {
        let answer = match &self.screen {
            Screen::Question(session) => session.pending_answer(),
            _ => return None,
        };
        let Some(answer) = answer else {
            self.push_alert(NO_ANSWER_ALERT);
            return None;
        };

        let Screen::Question(session) =
            std::mem::replace(&mut self.screen, Screen::Loading(Pending::Quizzes))
        else {
            return None;
        };
        match session.record(answer) {
            Progress::Next(session) => {
                self.screen = Screen::Question(session);
                None
            }
            Progress::Finished(done) => {
                let quiz_file = done.quiz_file().to_string();
                self.load(
                    Pending::Submission { quiz_file },
                    ApiRequest::Submit(done.into_submission()),
                )
            }
        }
    }

    pub fn scroll(&mut self, delta: isize) {
        match &mut self.screen {
            Screen::Results { result, scroll } => {
                let lines = result.detailed_results.len() * REVIEW_LINES_PER_RESULT;
                let last = lines.saturating_sub(1).min(u16::MAX as usize) as isize;
                *scroll = (*scroll as isize + delta).clamp(0, last) as u16;
            }
            Screen::Statistics(view) => view.scroll(delta),
            _ => {}
        }
    }

    pub fn switch_stats_table(&mut self) {
        if let Screen::Statistics(view) = &mut self.screen {
            view.switch_focus();
        }
    }
}
