use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

pub type QuestionId = u32;

// === Difficulty ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

// === Question ===
// Field names on the wire follow the bank data files: `question` and `answer`.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(rename = "question", alias = "questionText")]
    pub question_text: String,
    pub options: Vec<String>,
    #[serde(rename = "answer", alias = "correctOptionIndex")]
    pub correct_option_index: usize,
}

impl Question {
    pub fn is_correct(&self, selection: Selection) -> bool {
        selection.index() == Some(self.correct_option_index)
    }
}

// === Selection ===
// Unanswered is its own variant so it can never be confused with option 0.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum Selection {
    #[default]
    Unanswered,
    Option(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Unanswered => None,
            Selection::Option(index) => Some(*index),
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Selection::Option(_))
    }
}

impl From<Option<usize>> for Selection {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Selection::Unanswered, Selection::Option)
    }
}

impl From<Selection> for Option<usize> {
    fn from(value: Selection) -> Self {
        value.index()
    }
}

// === Time Taken ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum TimeTaken {
    #[default]
    NotRecorded,
    Seconds(u32),
}

impl TimeTaken {
    pub fn seconds(&self) -> Option<u32> {
        match self {
            TimeTaken::NotRecorded => None,
            TimeTaken::Seconds(secs) => Some(*secs),
        }
    }
}

impl From<Option<u32>> for TimeTaken {
    fn from(value: Option<u32>) -> Self {
        value.map_or(TimeTaken::NotRecorded, TimeTaken::Seconds)
    }
}

impl From<TimeTaken> for Option<u32> {
    fn from(value: TimeTaken) -> Self {
        value.seconds()
    }
}

// === Answer Record ===
// One per question encountered in a session. Updated in place, never removed.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub selected_option_index: Selection,
    pub time_taken_seconds: TimeTaken,
}

impl AnswerRecord {
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            question_id,
            selected_option_index: Selection::Unanswered,
            time_taken_seconds: TimeTaken::NotRecorded,
        }
    }
}
