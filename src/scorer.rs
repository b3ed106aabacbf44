use crate::model::summary::{ResultDetail, ResultSummary};
use crate::model::types::{AnswerRecord, Question, Selection};

/// `round(100 * correct / total)` with halves rounded up; 0 for an empty quiz.
pub fn percent_score(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

/// Grade a finished session. Questions without a record count as unanswered
/// with no recorded time.
pub fn score(questions: &[Question], answers: &[AnswerRecord]) -> ResultSummary {
    let details: Vec<ResultDetail> = questions
        .iter()
        .map(|q| {
            let record = answers.iter().find(|a| a.question_id == q.id);
            let selected = record.map_or(Selection::Unanswered, |a| a.selected_option_index);
            ResultDetail {
                id: q.id,
                question_text: q.question_text.clone(),
                selected_option_index: selected,
                correct: q.is_correct(selected),
                time_taken_seconds: record
                    .and_then(|a| a.time_taken_seconds.seconds())
                    .unwrap_or(0),
            }
        })
        .collect();

    let total_count = details.len();
    let correct_count = details.iter().filter(|d| d.correct).count();

    ResultSummary {
        correct_count,
        wrong_count: total_count - correct_count,
        total_count,
        percent_score: percent_score(correct_count, total_count),
        details,
    }
}
