use serde::{Deserialize, Serialize};

use crate::model::types::{QuestionId, Selection};

/// Outcome for a single question, in session order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetail {
    pub id: QuestionId,
    pub question_text: String,
    pub selected_option_index: Selection,
    pub correct: bool,
    pub time_taken_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub correct_count: usize,
    pub wrong_count: usize,
    pub total_count: usize,
    pub percent_score: u32,
    pub details: Vec<ResultDetail>,
}

impl ResultSummary {
    pub fn total_time_seconds(&self) -> u32 {
        self.details.iter().map(|d| d.time_taken_seconds).sum()
    }

    pub fn unanswered_count(&self) -> usize {
        self.details
            .iter()
            .filter(|d| !d.selected_option_index.is_answered())
            .count()
    }
}
