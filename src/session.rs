use std::collections::HashMap;
use std::time::Instant;

use crate::error::{QuizError, Result};
use crate::model::types::{AnswerRecord, Question, QuestionId, Selection, TimeTaken};

/// Whole seconds between two instants, rounded half-up.
fn rounded_secs(from: Instant, to: Instant) -> u64 {
    let elapsed_ms = to.saturating_duration_since(from).as_millis() as u64;
    (elapsed_ms + 500) / 1000
}

/// All data for one quiz attempt. The question list never changes once the
/// session exists and always holds at least one question.
#[derive(Debug, Clone)]
pub struct SessionState {
    active_questions: Vec<Question>,
    current_position: usize,
    answers: HashMap<QuestionId, AnswerRecord>,
    time_limit_secs: u32,
    question_started_at: Instant,
    seconds_remaining: u32,
    // Set when expiry already recorded the full limit for the current visit.
    time_finalized: bool,
}

impl SessionState {
    /// Callers guarantee `active_questions` is non-empty.
    pub(crate) fn new(active_questions: Vec<Question>, time_limit_secs: u32, now: Instant) -> Self {
        debug_assert!(!active_questions.is_empty());
        Self {
            active_questions,
            current_position: 0,
            answers: HashMap::new(),
            time_limit_secs,
            question_started_at: now,
            seconds_remaining: time_limit_secs,
            time_finalized: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.active_questions
    }

    pub fn len(&self) -> usize {
        self.active_questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.current_position
    }

    pub fn is_last(&self) -> bool {
        self.current_position + 1 == self.active_questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.active_questions[self.current_position]
    }

    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn answers(&self) -> &HashMap<QuestionId, AnswerRecord> {
        &self.answers
    }

    pub fn answer_for(&self, id: QuestionId) -> Option<&AnswerRecord> {
        self.answers.get(&id)
    }

    /// Previously chosen option for the current question, if any.
    pub fn current_selection(&self) -> Selection {
        self.answer_for(self.current_question().id)
            .map(|a| a.selected_option_index)
            .unwrap_or_default()
    }

    fn current_record(&mut self) -> &mut AnswerRecord {
        let id = self.active_questions[self.current_position].id;
        self.answers
            .entry(id)
            .or_insert_with(|| AnswerRecord::new(id))
    }

    /// Record a choice for the current question, replacing any earlier one.
    /// Time is left untouched.
    pub(crate) fn select(&mut self, option_index: usize) -> Result<()> {
        let option_count = self.current_question().options.len();
        if option_index >= option_count {
            return Err(QuizError::InvalidOptionIndex {
                index: option_index,
                option_count,
            });
        }
        self.current_record().selected_option_index = Selection::Option(option_index);
        Ok(())
    }

    /// Store the time spent on the current visit, capped at the limit. Each
    /// call overwrites the previous value, so only the latest visit counts.
    pub(crate) fn record_elapsed_time(&mut self, now: Instant) -> u32 {
        let limit = self.time_limit_secs;
        if self.time_finalized {
            return limit;
        }
        let secs = rounded_secs(self.question_started_at, now).min(u64::from(limit)) as u32;
        self.current_record().time_taken_seconds = TimeTaken::Seconds(secs);
        secs
    }

    /// Expiry path: the visit lasted exactly the limit.
    pub(crate) fn record_full_time(&mut self) {
        let limit = self.time_limit_secs;
        self.current_record().time_taken_seconds = TimeTaken::Seconds(limit);
        self.time_finalized = true;
    }

    /// Make `position` current and restart its clock.
    pub(crate) fn move_to(&mut self, position: usize, now: Instant) {
        debug_assert!(position < self.active_questions.len());
        self.current_position = position;
        self.question_started_at = now;
        self.seconds_remaining = self.time_limit_secs;
        self.time_finalized = false;
    }

    pub(crate) fn set_seconds_remaining(&mut self, secs: u32) {
        self.seconds_remaining = secs;
    }

    /// One record per active question, in question order. Questions never
    /// visited, or visited without a recorded time, are charged the full limit.
    pub fn finalized_answers(&self) -> Vec<AnswerRecord> {
        self.active_questions
            .iter()
            .map(|q| {
                let mut record = self
                    .answers
                    .get(&q.id)
                    .cloned()
                    .unwrap_or_else(|| AnswerRecord::new(q.id));
                if record.time_taken_seconds == TimeTaken::NotRecorded {
                    record.time_taken_seconds = TimeTaken::Seconds(self.time_limit_secs);
                }
                record
            })
            .collect()
    }
}
