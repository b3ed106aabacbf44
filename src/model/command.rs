use serde::{Deserialize, Serialize};

use crate::model::types::Difficulty;

/// Requests a front end can make of a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum QuizCommand {
    #[serde(rename_all = "camelCase")]
    Start {
        category: String,
        difficulty: Difficulty,
    },

    #[serde(rename_all = "camelCase")]
    SelectOption { option_index: usize },

    Next,
    Previous,
    Submit,
    Restart,
}
