use crate::db::scores::{record_score, recent_scores, ScoreEntry, ScoreRecord};
use crate::models::{Intent, Phase, SessionState};
use crate::session::{handle_quiz_input, transition, KeyAction};
use crate::timer::{follow_up, Countdown};
use crossterm::event::KeyEvent;
use rusqlite::Connection;

pub const RECENT_SCORES_SHOWN: usize = 5;

/// The presenter side of the quiz: owns the session state, the countdown and
/// the score history, and funnels every intent through [`transition`].
pub struct App {
    pub state: SessionState,
    pub highlighted: usize,
    pub source: String,
    pub recent_scores: Vec<ScoreEntry>,
    countdown: Countdown,
    db: Option<Connection>,
}

/// Fields whose change means an intent took effect.
type Fingerprint = (Phase, usize, Option<usize>, u32, u32, u32, usize);

fn fingerprint(state: &SessionState) -> Fingerprint {
    (
        state.phase,
        state.current_index,
        state.selected_option,
        state.score,
        state.high_score,
        state.seconds_remaining,
        state.questions.len(),
    )
}

impl App {
    pub fn new(state: SessionState, source: String, db: Option<Connection>) -> Self {
        let recent_scores = db
            .as_ref()
            .map(load_recent)
            .unwrap_or_default();
        Self {
            state,
            highlighted: 0,
            source,
            recent_scores,
            countdown: Countdown::default(),
            db,
        }
    }

    pub fn countdown_mut(&mut self) -> &mut Countdown {
        &mut self.countdown
    }

    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_armed()
    }

    pub fn dispatch(&mut self, intent: Intent) {
        let name = intent.name();
        let before = fingerprint(&self.state);
        let answered = self.state.answered_count();

        let state = std::mem::take(&mut self.state);
        self.state = transition(state, intent);

        let after = fingerprint(&self.state);
        if before == after {
            tracing::debug!(intent = name, phase = ?self.state.phase, "intent ignored");
        } else if before.0 != after.0 {
            tracing::info!(intent = name, from = ?before.0, to = ?after.0, "phase changed");
            if after.0 == Phase::Finished {
                self.record_finished(answered);
            }
        }

        self.countdown.sync(self.state.phase);
    }

    /// Apply one timer tick, finishing the quiz when time runs out.
    pub fn on_tick(&mut self) {
        self.dispatch(Intent::Tick);
        if let Some(intent) = follow_up(&self.state) {
            tracing::info!("time is up");
            self.dispatch(intent);
        }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match handle_quiz_input(&self.state, &mut self.highlighted, key) {
            KeyAction::Dispatch(intent) => {
                self.dispatch(intent);
                false
            }
            KeyAction::Quit => true,
            KeyAction::None => false,
        }
    }

    fn record_finished(&mut self, answered: usize) {
        let Some(conn) = self.db.as_ref() else {
            return;
        };
        let record = ScoreRecord::from_state(&self.state, answered);
        match record_score(conn, &record) {
            Ok(id) => tracing::info!(id, score = record.score, "score recorded"),
            Err(e) => tracing::error!(error = %e, "failed to record score"),
        }
        self.recent_scores = load_recent(conn);
    }
}

fn load_recent(conn: &Connection) -> Vec<ScoreEntry> {
    recent_scores(conn, RECENT_SCORES_SHOWN).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to read score history");
        Vec::new()
    })
}
