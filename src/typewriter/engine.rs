//! Timer-driven typewriter bound to one display element.

use super::scheduler::{Scheduler, TimerToken};
use super::state::TypewriterState;

/// Element the typewriter writes into.
pub trait TypewriterDisplay {
    /// Replaces the displayed text.
    fn show(&mut self, text: &str);
}

/// Runs the typewriter state machine against a scheduler and a display.
///
/// The engine owns the display and its single pending tick. Restarting
/// cancels that tick before scheduling the new run, and ticks carrying a
/// superseded token are ignored, so two animation loops never write to the
/// same display.
#[derive(Debug)]
pub struct TypewriterEngine<S, D> {
    scheduler: S,
    display: D,
    state: TypewriterState,
    pending: Option<TimerToken>,
    next_token: TimerToken,
    cycles_completed: u64,
}

impl<S: Scheduler, D: TypewriterDisplay> TypewriterEngine<S, D> {
    /// Creates an idle engine.
    #[must_use]
    pub const fn new(scheduler: S, display: D) -> Self {
        Self {
            scheduler,
            display,
            state: TypewriterState::new(Vec::new()),
            pending: None,
            next_token: TimerToken::new(0),
            cycles_completed: 0,
        }
    }

    /// Replaces the phrase list and starts typing from an empty display.
    ///
    /// Any pending tick is cancelled first. An empty phrase list leaves the
    /// engine idle with an empty display.
    pub fn restart(&mut self, phrases: Vec<String>) {
        self.cancel_pending();
        tracing::debug!(phrases = phrases.len(), "restarting typewriter");
        self.state = TypewriterState::new(phrases);
        self.cycles_completed = 0;
        self.display.show(&self.state.displayed());
        self.schedule_next();
    }

    /// Delivers a fired tick.
    ///
    /// Returns false, without touching the display, when `token` belongs
    /// to a cancelled or superseded run.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if self.pending != Some(token) {
            tracing::trace!(token = token.get(), "ignoring stale typewriter tick");
            return false;
        }
        self.pending = None;
        if self.state.advance() {
            self.cycles_completed = self.cycles_completed.saturating_add(1);
        }
        self.display.show(&self.state.displayed());
        self.schedule_next();
        true
    }

    /// Cancels the pending tick, leaving the display as it is.
    pub fn stop(&mut self) {
        self.cancel_pending();
    }

    /// Current animation state.
    #[must_use]
    pub const fn state(&self) -> &TypewriterState {
        &self.state
    }

    /// Number of times the phrase list wrapped back to its first phrase.
    #[must_use]
    pub const fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Token of the tick currently awaited, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Borrows the scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutably borrows the scheduler.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Borrows the display.
    #[must_use]
    pub const fn display(&self) -> &D {
        &self.display
    }

    /// Consumes the engine, returning its display.
    #[must_use]
    pub fn into_display(self) -> D {
        self.display
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }

    fn schedule_next(&mut self) {
        if self.state.is_idle() {
            return;
        }
        let token = self.next_token;
        self.next_token = token.next();
        self.pending = Some(token);
        self.scheduler.schedule(token, self.state.delay());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    use super::{TypewriterDisplay, TypewriterEngine};
    use crate::typewriter::scheduler::{MockScheduler, TimerSlot, TimerToken};

    #[derive(Debug, Default)]
    struct RecordingDisplay {
        frames: Vec<String>,
    }

    impl TypewriterDisplay for RecordingDisplay {
        fn show(&mut self, text: &str) {
            self.frames.push(text.to_owned());
        }
    }

    type Engine = TypewriterEngine<TimerSlot, RecordingDisplay>;

    #[fixture]
    fn engine() -> Engine {
        TypewriterEngine::new(TimerSlot::new(), RecordingDisplay::default())
    }

    fn phrases(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    /// Fires the pending tick `count` times.
    fn fire(engine: &mut Engine, count: usize) {
        for _ in 0..count {
            let tick = engine
                .scheduler_mut()
                .take()
                .expect("a tick should be pending");
            assert!(engine.on_timer(tick.token), "pending tick should apply");
        }
    }

    #[rstest]
    fn steps_through_display_states_with_expected_delays(mut engine: Engine) {
        engine.restart(phrases(&["Go", "Rust"]));
        let mut delays = Vec::new();
        for _ in 0..7 {
            let tick = engine.scheduler_mut().take().expect("tick pending");
            delays.push(tick.delay.as_millis());
            engine.on_timer(tick.token);
        }

        assert_eq!(
            engine.display().frames,
            vec!["", "G", "Go", "Go", "G", "", "", "R"]
        );
        assert_eq!(delays, vec![100, 100, 2000, 50, 50, 500, 100]);
    }

    #[rstest]
    fn restart_supersedes_pending_tick(mut engine: Engine) {
        engine.restart(phrases(&["Hello"]));
        fire(&mut engine, 3);
        let stale = engine.pending().expect("tick pending");

        engine.restart(phrases(&["Olá"]));

        assert!(!engine.on_timer(stale), "superseded tick is ignored");
        assert_eq!(engine.state().char_index(), 0);
        assert_eq!(engine.state().phrase_index(), 0);
        assert!(!engine.state().is_deleting());

        fire(&mut engine, 1);
        assert_eq!(
            engine.display().frames.last().map(String::as_str),
            Some("O"),
            "new phrase list drives the display"
        );
    }

    #[rstest]
    fn restart_cancels_through_the_scheduler() {
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_schedule()
            .withf(|token, delay| token.get() == 0 && *delay == Duration::from_millis(100))
            .times(1)
            .return_const(());
        scheduler
            .expect_cancel()
            .with(eq(TimerToken::new(0)))
            .times(1)
            .return_const(());
        scheduler
            .expect_schedule()
            .withf(|token, _| token.get() == 1)
            .times(1)
            .return_const(());

        let mut engine = TypewriterEngine::new(scheduler, RecordingDisplay::default());
        engine.restart(phrases(&["a"]));
        engine.restart(phrases(&["b"]));
    }

    #[rstest]
    fn empty_phrase_list_schedules_nothing(mut engine: Engine) {
        engine.restart(Vec::new());

        assert!(engine.scheduler().pending().is_none());
        assert_eq!(engine.display().frames, vec![""]);
    }

    #[rstest]
    fn stop_cancels_pending_tick(mut engine: Engine) {
        engine.restart(phrases(&["Go"]));
        let token = engine.pending().expect("tick pending");

        engine.stop();

        assert!(engine.scheduler().pending().is_none());
        assert!(!engine.on_timer(token));
    }

    #[rstest]
    fn counts_completed_cycles(mut engine: Engine) {
        engine.restart(phrases(&["a", "b"]));

        fire(&mut engine, 8);

        assert_eq!(engine.cycles_completed(), 1);
    }
}
