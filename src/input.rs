use crate::api::ApiRequest;
use crate::flow::{QuizFlow, Screen};
use crate::session::AnswerInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Request(ApiRequest),
    Quit,
}

impl From<Option<ApiRequest>> for KeyOutcome {
    fn from(request: Option<ApiRequest>) -> Self {
        request.map_or(KeyOutcome::Continue, KeyOutcome::Request)
    }
}

pub fn handle_key(flow: &mut QuizFlow, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    if flow.alert().is_some() {
        flow.dismiss_alert();
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::F(1) => return flow.start().into(),
        KeyCode::F(2) => return flow.show_statistics().into(),
        _ => {}
    }

    let typing = matches!(
        flow.screen(),
        Screen::Question(session) if matches!(session.input, AnswerInput::Text { .. })
    );
    if key.code == KeyCode::Esc && !typing {
        return KeyOutcome::Quit;
    }

    match flow.screen() {
        Screen::QuizSelection(_) => match key.code {
            KeyCode::Up => {
                flow.move_quiz_selection(-1);
                KeyOutcome::Continue
            }
            KeyCode::Down => {
                flow.move_quiz_selection(1);
                KeyOutcome::Continue
            }
            KeyCode::Enter => flow.confirm_quiz().into(),
            _ => KeyOutcome::Continue,
        },
        Screen::CategorySelection(_) => match key.code {
            KeyCode::Up => {
                flow.move_category_cursor(-1);
                KeyOutcome::Continue
            }
            KeyCode::Down => {
                flow.move_category_cursor(1);
                KeyOutcome::Continue
            }
            KeyCode::Char(' ') => {
                flow.toggle_category_at_cursor();
                KeyOutcome::Continue
            }
            KeyCode::Enter => flow.start_quiz().into(),
            _ => KeyOutcome::Continue,
        },
        Screen::NoQuestions { .. } => match key.code {
            KeyCode::Enter => flow.go_back().into(),
            _ => KeyOutcome::Continue,
        },
        Screen::Question(_) => handle_question_key(flow, key),
        Screen::Results { .. } | Screen::Statistics(_) => {
            match key.code {
                KeyCode::Up => flow.scroll(-1),
                KeyCode::Down => flow.scroll(1),
                KeyCode::PageUp => flow.scroll(-10),
                KeyCode::PageDown => flow.scroll(10),
                KeyCode::Tab => flow.switch_stats_table(),
                _ => {}
            }
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn handle_question_key(flow: &mut QuizFlow, key: KeyEvent) -> KeyOutcome {
    if key.code == KeyCode::Enter {
        return flow.submit_answer().into();
    }

    let Some(session) = flow.session_mut() else {
        return KeyOutcome::Continue;
    };
    let option_count = session.current().answers.len();
    let input = &mut session.input;

    if matches!(input, AnswerInput::Text { .. }) {
        match key.code {
            KeyCode::Char(c) => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Left => input.move_text_cursor(-1),
            KeyCode::Right => input.move_text_cursor(1),
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Up => input.move_cursor(-1, option_count),
            KeyCode::Down => input.move_cursor(1, option_count),
            KeyCode::Char(' ') => input.toggle(),
            _ => {}
        }
    }
    KeyOutcome::Continue
}
