use log::{debug, info};

use crate::bank::QuestionBank;
use crate::error::{QuizError, Result, SessionPhase};
use crate::model::event::QuestionView;
use crate::model::summary::ResultSummary;
use crate::model::types::{AnswerRecord, Difficulty};
use crate::scorer;
use crate::session::SessionState;
use crate::timer::{Clock, Countdown, TimerEvent, TimerEventKind};

pub const DEFAULT_TIME_LIMIT_SECS: u32 = 20;

/// What a timer event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Stale or out-of-session event; nothing changed.
    Ignored,
    Ticked { seconds_remaining: u32 },
    /// The current question timed out and the next one is now current.
    Advanced { position: usize },
    /// The last question timed out and the quiz was submitted.
    Completed,
}

/// Owns one quiz attempt and the countdown for its current question.
///
/// Every command and timer event goes through `&mut self`, so the session is
/// only ever touched by one caller at a time. Each countdown start gets a new
/// generation number; timer events carrying any other generation are dropped.
pub struct QuizController<T, C> {
    bank: QuestionBank,
    timer: T,
    clock: C,
    time_limit_secs: u32,
    phase: SessionPhase,
    session: Option<SessionState>,
    finalized_answers: Vec<AnswerRecord>,
    summary: Option<ResultSummary>,
    generation: u64,
}

impl<T: Countdown, C: Clock> QuizController<T, C> {
    pub fn new(bank: QuestionBank, timer: T, clock: C, time_limit_secs: u32) -> Self {
        if time_limit_secs == 0 {
            log::warn!("Time limit of 0s requested, using 1s");
        }
        Self {
            bank,
            timer,
            clock,
            time_limit_secs: time_limit_secs.max(1),
            phase: SessionPhase::NotStarted,
            session: None,
            finalized_answers: Vec::new(),
            summary: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Current or just-completed session. `None` before the first start and
    /// after a restart.
    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn summary(&self) -> Option<&ResultSummary> {
        self.summary.as_ref()
    }

    /// One record per question, filled in at submit time.
    pub fn finalized_answers(&self) -> &[AnswerRecord] {
        &self.finalized_answers
    }

    /// Generation of the most recently started countdown.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Render payload for the current question while a session is running.
    pub fn view(&self) -> Option<QuestionView> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        let session = self.session.as_ref()?;
        Some(QuestionView {
            question: session.current_question().clone(),
            position: session.position(),
            total: session.len(),
            seconds_remaining: session.seconds_remaining(),
            selected_option_index: session.current_selection().index(),
        })
    }

    fn in_progress(&mut self, operation: &'static str) -> Result<&mut SessionState> {
        match (self.phase, self.session.as_mut()) {
            (SessionPhase::InProgress, Some(session)) => Ok(session),
            (phase, _) => Err(QuizError::InvalidStateTransition { operation, phase }),
        }
    }

    fn start_countdown(&mut self) {
        self.generation += 1;
        self.timer.start(self.generation, self.time_limit_secs);
    }

    fn stop_countdown(&mut self) {
        self.timer.cancel();
        // Anything already queued from the old countdown is now stale
        self.generation += 1;
    }

    pub fn start_session(&mut self, category: &str, difficulty: Difficulty) -> Result<()> {
        if self.phase == SessionPhase::InProgress {
            return Err(QuizError::InvalidStateTransition {
                operation: "start a session",
                phase: self.phase,
            });
        }

        let questions = self.bank.filter(category, difficulty);
        if questions.is_empty() {
            return Err(QuizError::EmptySession {
                category: category.to_string(),
                difficulty: difficulty.to_string(),
            });
        }

        info!(
            "Starting session: {} questions ({category}/{difficulty}), {}s per question",
            questions.len(),
            self.time_limit_secs
        );
        self.session = Some(SessionState::new(
            questions,
            self.time_limit_secs,
            self.clock.now(),
        ));
        self.finalized_answers.clear();
        self.summary = None;
        self.phase = SessionPhase::InProgress;
        self.start_countdown();
        Ok(())
    }

    pub fn select_option(&mut self, option_index: usize) -> Result<()> {
        let session = self.in_progress("select an option")?;
        session.select(option_index)?;
        debug!(
            "Selected option {option_index} for question {}",
            session.current_question().id
        );
        Ok(())
    }

    /// Record time for the current question and move forward. Stays put (and
    /// keeps the running countdown) on the last question. Returns the new
    /// position.
    pub fn go_to_next(&mut self) -> Result<usize> {
        self.step(1, "go to the next question")
    }

    /// Record time for the current question and move back. Stays put on the
    /// first question.
    pub fn go_to_previous(&mut self) -> Result<usize> {
        self.step(-1, "go to the previous question")
    }

    fn step(&mut self, delta: isize, operation: &'static str) -> Result<usize> {
        let now = self.clock.now();
        let session = self.in_progress(operation)?;
        let secs = session.record_elapsed_time(now);
        let from = session.position();

        let Some(to) = from
            .checked_add_signed(delta)
            .filter(|to| *to < session.len())
        else {
            debug!("Cannot {operation} from position {from}, recorded {secs}s");
            return Ok(from);
        };

        session.move_to(to, now);
        info!("Moved from question {} to {} after {secs}s", from + 1, to + 1);
        self.start_countdown();
        Ok(to)
    }

    pub fn on_timer_event(&mut self, event: TimerEvent) -> Result<TimerOutcome> {
        if event.generation != self.generation || self.phase != SessionPhase::InProgress {
            debug!(
                "Ignoring stale timer event {event:?} (current generation {}, {})",
                self.generation, self.phase
            );
            return Ok(TimerOutcome::Ignored);
        }

        match event.kind {
            TimerEventKind::Tick { seconds_remaining } => {
                self.in_progress("tick the timer")?
                    .set_seconds_remaining(seconds_remaining);
                Ok(TimerOutcome::Ticked { seconds_remaining })
            }
            TimerEventKind::Expired => self.on_timer_expire(),
        }
    }

    fn on_timer_expire(&mut self) -> Result<TimerOutcome> {
        let now = self.clock.now();
        let session = self.in_progress("expire the timer")?;
        session.set_seconds_remaining(0);
        session.record_full_time();
        let from = session.position();
        info!("Time is up on question {}", from + 1);

        if session.is_last() {
            self.submit()?;
            return Ok(TimerOutcome::Completed);
        }

        session.move_to(from + 1, now);
        self.start_countdown();
        Ok(TimerOutcome::Advanced { position: from + 1 })
    }

    /// Finish the attempt: stop the countdown, fill in any missing records and
    /// score it.
    pub fn submit(&mut self) -> Result<&ResultSummary> {
        let now = self.clock.now();
        self.in_progress("submit")?.record_elapsed_time(now);
        self.stop_countdown();

        let Some(session) = self.session.as_ref() else {
            return Err(QuizError::InvalidStateTransition {
                operation: "submit",
                phase: self.phase,
            });
        };
        let answers = session.finalized_answers();
        let summary = scorer::score(session.questions(), &answers);
        info!(
            "Quiz submitted: {}/{} correct ({}%)",
            summary.correct_count, summary.total_count, summary.percent_score
        );

        self.finalized_answers = answers;
        self.phase = SessionPhase::Completed;
        Ok(&*self.summary.insert(summary))
    }

    /// Drop all session data and go back to `NotStarted`. Allowed from any
    /// state.
    pub fn restart(&mut self) {
        self.stop_countdown();
        self.session = None;
        self.finalized_answers.clear();
        self.summary = None;
        self.phase = SessionPhase::NotStarted;
        info!("Quiz reset");
    }
}
