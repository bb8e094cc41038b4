use crate::models::{Intent, Phase, SessionState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Derive the next session state from the current one and an intent.
///
/// Intents whose precondition does not hold leave the state untouched.
pub fn transition(mut state: SessionState, intent: Intent) -> SessionState {
    match intent {
        Intent::QuestionsLoaded(questions) => {
            if state.phase == Phase::Loading {
                state.questions = questions;
                state.phase = Phase::Ready;
            }
        }
        Intent::LoadFailed(reason) => {
            if state.phase == Phase::Loading {
                state.load_error = Some(reason);
                state.phase = Phase::LoadError;
            }
        }
        Intent::Start => {
            // An empty quiz has no question to show while Active.
            if state.phase == Phase::Ready && !state.questions.is_empty() {
                state.phase = Phase::Active;
            }
        }
        Intent::OptionSelected(option) => {
            if state.phase == Phase::Active && state.selected_option.is_none() {
                let gained = match state.current_question() {
                    Some(question) if option < question.options.len() => {
                        if question.is_correct(option) {
                            Some(question.points)
                        } else {
                            Some(0)
                        }
                    }
                    _ => None,
                };
                if let Some(points) = gained {
                    state.selected_option = Some(option);
                    state.score = state.score.saturating_add(points);
                }
            }
        }
        Intent::Advance => {
            if state.phase == Phase::Active && state.selected_option.is_some() {
                if state.is_last_question() {
                    state = finish(state);
                } else {
                    state.current_index += 1;
                    state.selected_option = None;
                }
            }
        }
        Intent::Finish => {
            if state.phase == Phase::Active {
                state = finish(state);
            }
        }
        Intent::Restart => {
            state.score = 0;
            state.current_index = 0;
            state.selected_option = None;
            state.seconds_remaining = state.session_seconds;
            // LoadError stays terminal, and Loading still waits for its questions.
            if matches!(state.phase, Phase::Ready | Phase::Active | Phase::Finished) {
                state.phase = Phase::Ready;
            }
        }
        Intent::Tick => {
            if state.phase == Phase::Active && state.seconds_remaining > 0 {
                state.seconds_remaining -= 1;
            }
        }
    }
    state
}

fn finish(mut state: SessionState) -> SessionState {
    state.phase = Phase::Finished;
    state.selected_option = None;
    state.high_score = state.high_score.max(state.score);
    state
}

/// What the presenter should do in response to a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Intent),
    Quit,
    None,
}

/// Map a key press to an intent, given the current session and the
/// highlighted option in the question view.
pub fn handle_quiz_input(
    state: &SessionState,
    highlighted: &mut usize,
    key: KeyEvent,
) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return KeyAction::Quit;
    }

    match state.phase {
        Phase::Loading | Phase::LoadError => KeyAction::None,
        Phase::Ready => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => {
                *highlighted = 0;
                KeyAction::Dispatch(Intent::Start)
            }
            _ => KeyAction::None,
        },
        Phase::Finished => match key.code {
            KeyCode::Char('r') => KeyAction::Dispatch(Intent::Restart),
            _ => KeyAction::None,
        },
        Phase::Active => {
            let option_count = state
                .current_question()
                .map(|q| q.options.len())
                .unwrap_or(0);

            if state.has_answered() {
                return match key.code {
                    KeyCode::Enter | KeyCode::Char('n') => {
                        *highlighted = 0;
                        KeyAction::Dispatch(Intent::Advance)
                    }
                    KeyCode::Char('f') => KeyAction::Dispatch(Intent::Finish),
                    KeyCode::Char('r') => KeyAction::Dispatch(Intent::Restart),
                    _ => KeyAction::None,
                };
            }

            match key.code {
                KeyCode::Up => {
                    *highlighted = highlighted.saturating_sub(1);
                    KeyAction::None
                }
                KeyCode::Down => {
                    if *highlighted + 1 < option_count {
                        *highlighted += 1;
                    }
                    KeyAction::None
                }
                KeyCode::Enter => {
                    if *highlighted < option_count {
                        KeyAction::Dispatch(Intent::OptionSelected(*highlighted))
                    } else {
                        KeyAction::None
                    }
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let option = c as usize - '1' as usize;
                    if option < option_count {
                        *highlighted = option;
                        KeyAction::Dispatch(Intent::OptionSelected(option))
                    } else {
                        KeyAction::None
                    }
                }
                KeyCode::Char('f') => KeyAction::Dispatch(Intent::Finish),
                KeyCode::Char('r') => KeyAction::Dispatch(Intent::Restart),
                _ => KeyAction::None,
            }
        }
    }
}
