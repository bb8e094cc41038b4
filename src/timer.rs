use crate::models::{Intent, Phase, SessionState};
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source that only runs while a quiz is active.
///
/// Arming only flips a flag; the underlying interval is created on the first
/// [`Countdown::tick`] poll, so arming works without a tokio runtime.
#[derive(Debug)]
pub struct Countdown {
    period: Duration,
    armed: bool,
    interval: Option<Interval>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Countdown {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: false,
            interval: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Arm on entering [`Phase::Active`], disarm on leaving it.
    pub fn sync(&mut self, phase: Phase) {
        match (phase == Phase::Active, self.armed) {
            (true, false) => {
                self.armed = true;
                tracing::debug!("countdown armed");
            }
            (false, true) => {
                self.armed = false;
                self.interval = None;
                tracing::debug!("countdown stopped");
            }
            _ => {}
        }
    }

    /// Resolves on the next tick; never resolves while disarmed.
    pub async fn tick(&mut self) {
        if !self.armed {
            return std::future::pending::<()>().await;
        }
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        interval.tick().await;
    }
}

/// Intent the timer owes the session after a tick was applied.
pub fn follow_up(state: &SessionState) -> Option<Intent> {
    (state.phase == Phase::Active && state.seconds_remaining == 0).then_some(Intent::Finish)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_up_finishes_when_time_runs_out() {
        let mut state = SessionState::new(0, 0);
        state.phase = Phase::Active;
        assert_eq!(follow_up(&state), Some(Intent::Finish));

        state.seconds_remaining = 1;
        assert_eq!(follow_up(&state), None);

        state.seconds_remaining = 0;
        state.phase = Phase::Finished;
        assert_eq!(follow_up(&state), None);
    }

    #[test]
    fn test_sync_arms_only_while_active() {
        let mut countdown = Countdown::default();
        assert!(!countdown.is_armed());

        countdown.sync(Phase::Ready);
        assert!(!countdown.is_armed());

        countdown.sync(Phase::Active);
        assert!(countdown.is_armed());

        countdown.sync(Phase::Finished);
        assert!(!countdown.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_armed_countdown_ticks_every_period() {
        let mut countdown = Countdown::default();
        countdown.sync(Phase::Active);

        let start = Instant::now();
        countdown.tick().await;
        assert!(start.elapsed() >= TICK_PERIOD);
        assert!(start.elapsed() < TICK_PERIOD * 2);
        countdown.tick().await;
        assert!(start.elapsed() >= TICK_PERIOD * 2);
        assert!(start.elapsed() < TICK_PERIOD * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_countdown_never_ticks() {
        let mut countdown = Countdown::default();
        let result = tokio::time::timeout(Duration::from_secs(10), countdown.tick()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_restarts_the_period() {
        let mut countdown = Countdown::default();
        countdown.sync(Phase::Active);
        countdown.tick().await;

        countdown.sync(Phase::Finished);
        tokio::time::advance(Duration::from_millis(2500)).await;
        countdown.sync(Phase::Active);

        let start = Instant::now();
        countdown.tick().await;
        assert!(start.elapsed() >= TICK_PERIOD);
    }
}
