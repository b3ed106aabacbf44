use thiserror::Error;

use crate::model::types::QuestionId;

/// Lifecycle of a quiz attempt, as seen from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Completed,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionPhase::NotStarted => "not started",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Completed => "completed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No questions available for category '{category}' (difficulty '{difficulty}')")]
    EmptySession {
        category: String,
        difficulty: String,
    },

    #[error("Option index {index} is out of range (question has {option_count} options)")]
    InvalidOptionIndex { index: usize, option_count: usize },

    #[error("Cannot {operation} while the quiz is {phase}")]
    InvalidStateTransition {
        operation: &'static str,
        phase: SessionPhase,
    },

    #[error("Invalid question {id}: {reason}")]
    InvalidQuestion { id: QuestionId, reason: String },

    #[error("Failed to load question bank: {0}")]
    BankLoad(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeLimit { var: &'static str, value: String },

    #[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}
