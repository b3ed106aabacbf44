//! Plain-text presentation for the terminal front end.

use std::fmt::Write;

use crate::model::command::QuizCommand;
use crate::model::event::QuestionView;
use crate::model::summary::ResultSummary;

const BAR_WIDTH: u32 = 20;

/// A line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(QuizCommand),
    Quit,
    Unknown(String),
}

/// Parse one line: an option number (1-based), `n`, `p`, `s`, `r`, `q`, or
/// `start <category> <difficulty>`.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let command = match words.next().map(str::to_ascii_lowercase).as_deref() {
        Some("n" | "next") => QuizCommand::Next,
        Some("p" | "prev" | "previous") => QuizCommand::Previous,
        Some("s" | "submit") => QuizCommand::Submit,
        Some("r" | "restart") => QuizCommand::Restart,
        Some("q" | "quit") => return Input::Quit,
        Some("start") => {
            let (Some(category), Some(difficulty)) = (words.next(), words.next()) else {
                return Input::Unknown(line.to_string());
            };
            let Ok(difficulty) = difficulty.parse() else {
                return Input::Unknown(line.to_string());
            };
            QuizCommand::Start {
                category: category.to_string(),
                difficulty,
            }
        }
        Some(word) => match word.parse::<usize>() {
            Ok(n) if n > 0 => QuizCommand::SelectOption { option_index: n - 1 },
            _ => return Input::Unknown(line.to_string()),
        },
        None => return Input::Unknown(String::new()),
    };
    Input::Command(command)
}

pub fn render_question(view: &QuestionView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Question {} / {}", view.position + 1, view.total);
    let _ = writeln!(out, "{}", view.question.question_text);
    for (idx, option) in view.question.options.iter().enumerate() {
        let marker = if view.selected_option_index == Some(idx) {
            '*'
        } else {
            ' '
        };
        let _ = writeln!(out, " {marker} {}. {option}", idx + 1);
    }
    let _ = write!(out, "Time left: {}s", view.seconds_remaining);
    out
}

fn bar(value: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH).div_ceil(max);
    "#".repeat(len as usize)
}

pub fn render_summary(summary: &ResultSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Score: {} / {} ({}%)",
        summary.correct_count, summary.total_count, summary.percent_score
    );
    let _ = writeln!(
        out,
        "Correct: {}  Wrong: {}",
        summary.correct_count, summary.wrong_count
    );

    let _ = writeln!(out, "\nPer-question time spent (seconds)");
    for detail in &summary.details {
        let verdict = if detail.correct { "Correct" } else { "Wrong" };
        let _ = writeln!(
            out,
            "  Q {}: {}s - {verdict}",
            detail.id, detail.time_taken_seconds
        );
    }

    let max_time = summary
        .details
        .iter()
        .map(|d| d.time_taken_seconds)
        .max()
        .unwrap_or(0);
    let _ = writeln!(out, "\nTime (s)");
    for detail in &summary.details {
        let label = format!("Q{}", detail.id);
        let _ = writeln!(
            out,
            "  {label:<5}|{} {}",
            bar(detail.time_taken_seconds, max_time),
            detail.time_taken_seconds
        );
    }

    let total = summary.total_count as u32;
    let _ = writeln!(out, "\nCorrect vs wrong");
    let _ = writeln!(
        out,
        "  Correct|{} {}",
        bar(summary.correct_count as u32, total),
        summary.correct_count
    );
    let _ = write!(
        out,
        "  Wrong  |{} {}",
        bar(summary.wrong_count as u32, total),
        summary.wrong_count
    );
    out
}
