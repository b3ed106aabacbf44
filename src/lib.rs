//! Timed multiple-choice quiz sessions.
//!
//! A [`QuizController`] draws questions from a [`QuestionBank`], runs a
//! countdown per question, records selections and time spent, and scores the
//! attempt. Front ends drive it through [`QuizCommand`]s, either directly or
//! through [`driver::run_quiz`].

pub mod bank;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod model;
pub mod render;
pub mod sample_bank;
pub mod scorer;
pub mod session;
pub mod timer;

pub use bank::QuestionBank;
pub use config::QuizConfig;
pub use controller::{QuizController, TimerOutcome};
pub use error::{QuizError, Result, SessionPhase};
pub use model::command::QuizCommand;
pub use model::event::{QuestionView, QuizEvent};
pub use model::summary::{ResultDetail, ResultSummary};
pub use model::types::{AnswerRecord, Difficulty, Question, QuestionId, Selection, TimeTaken};
pub use timer::{Clock, Countdown, TimerEvent, TimerEventKind, TokioClock, TokioCountdown};
