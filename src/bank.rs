use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{QuizError, Result};
use crate::model::types::{Difficulty, Question};

/// Most questions taken from a category when no question matches the
/// requested difficulty.
pub const CATEGORY_FALLBACK_LIMIT: usize = 5;

/// Ordered, immutable set of questions a session draws from.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting questions a session could not be scored against.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut seen = HashSet::new();
        for q in &questions {
            if q.options.len() < 2 {
                return Err(QuizError::InvalidQuestion {
                    id: q.id,
                    reason: format!("needs at least 2 options, has {}", q.options.len()),
                });
            }
            if q.correct_option_index >= q.options.len() {
                return Err(QuizError::InvalidQuestion {
                    id: q.id,
                    reason: format!(
                        "correct option {} is out of range for {} options",
                        q.correct_option_index,
                        q.options.len()
                    ),
                });
            }
            if !seen.insert(q.id) {
                return Err(QuizError::InvalidQuestion {
                    id: q.id,
                    reason: "duplicate id".to_string(),
                });
            }
        }
        Ok(Self { questions })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(|e| QuizError::BankLoad(e.to_string()))?;
        Self::new(questions)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| QuizError::BankLoad(format!("{}: {e}", path.display())))?;
        let bank = Self::from_json_str(&json)?;
        info!("Loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions matching both category and difficulty, in bank order.
    ///
    /// If nothing matches exactly, falls back to the first
    /// [`CATEGORY_FALLBACK_LIMIT`] questions of the category. The result is
    /// empty only when the category itself has no questions.
    pub fn filter(&self, category: &str, difficulty: Difficulty) -> Vec<Question> {
        let exact: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.category == category && q.difficulty == difficulty)
            .cloned()
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        let fallback: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.category == category)
            .take(CATEGORY_FALLBACK_LIMIT)
            .cloned()
            .collect();
        if !fallback.is_empty() {
            warn!(
                "No '{category}' questions at difficulty '{difficulty}', using {} from the category",
                fallback.len()
            );
        }
        fallback
    }
}
