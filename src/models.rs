use serde::Deserialize;

/// Default countdown length for a session, in seconds.
pub const DEFAULT_SESSION_SECONDS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOption")]
    pub correct_option: usize,
    pub points: u32,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    LoadError,
    Ready,
    Active,
    Finished,
}

/// Events applied to a [`SessionState`] by [`crate::session::transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    QuestionsLoaded(Vec<Question>),
    LoadFailed(String),
    Start,
    OptionSelected(usize),
    Advance,
    Finish,
    Restart,
    Tick,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::QuestionsLoaded(_) => "questions_loaded",
            Intent::LoadFailed(_) => "load_failed",
            Intent::Start => "start",
            Intent::OptionSelected(_) => "option_selected",
            Intent::Advance => "advance",
            Intent::Finish => "finish",
            Intent::Restart => "restart",
            Intent::Tick => "tick",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub questions: Vec<Question>,
    pub phase: Phase,
    pub current_index: usize,
    pub selected_option: Option<usize>,
    pub score: u32,
    pub high_score: u32,
    pub seconds_remaining: u32,
    /// Countdown length used at startup and on every restart.
    pub session_seconds: u32,
    /// Reason reported by the provider when the load failed.
    pub load_error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECONDS, 0)
    }
}

impl SessionState {
    pub fn new(session_seconds: u32, high_score: u32) -> Self {
        Self {
            questions: Vec::new(),
            phase: Phase::Loading,
            current_index: 0,
            selected_option: None,
            score: 0,
            high_score,
            seconds_remaining: session_seconds,
            session_seconds,
            load_error: None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn max_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |acc, q| acc.saturating_add(q.points))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn has_answered(&self) -> bool {
        self.selected_option.is_some()
    }

    /// Questions answered in the running quiz, counting the current one once answered.
    pub fn answered_count(&self) -> usize {
        if self.phase == Phase::Active {
            self.current_index + usize::from(self.has_answered())
        } else {
            0
        }
    }

    /// Score as a whole percentage of the points on offer.
    pub fn percentage(&self) -> u32 {
        let max = self.max_points();
        if max == 0 {
            0
        } else {
            (u64::from(self.score) * 100 / u64::from(max)) as u32
        }
    }
}
