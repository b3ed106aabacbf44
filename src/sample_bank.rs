use crate::bank::QuestionBank;
use crate::error::Result;
use crate::model::types::{Difficulty, Question};

fn question(
    id: u32,
    category: &str,
    difficulty: Difficulty,
    text: &str,
    options: [&str; 4],
    answer: usize,
) -> Question {
    Question {
        id,
        category: category.to_string(),
        difficulty,
        question_text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option_index: answer,
    }
}

/// The built-in question set: general, programming and aptitude questions.
pub fn sample_questions() -> Vec<Question> {
    use Difficulty::*;

    vec![
        // General - medium
        question(1, "general", Medium, "What is the capital of France?",
            ["Berlin", "Madrid", "Paris", "Rome"], 2),
        question(2, "general", Medium, "Which planet is known as the Red Planet?",
            ["Earth", "Mars", "Jupiter", "Saturn"], 1),
        question(3, "general", Medium, "Which language is primarily used for Android development?",
            ["Kotlin", "Swift", "Ruby", "Go"], 0),
        question(4, "general", Medium, "Which data structure uses FIFO order?",
            ["Stack", "Queue", "Tree", "Graph"], 1),
        question(5, "general", Medium, "Which HTML tag is used for JavaScript?",
            ["<script>", "<js>", "<javascript>", "<code>"], 0),
        // Programming
        question(11, "programming", Easy, "Which method adds an element to end of array in JavaScript?",
            ["push()", "pop()", "shift()", "unshift()"], 0),
        question(12, "programming", Medium, "What does CSS stand for?",
            ["Computer Style Sheets", "Cascading Style Sheets", "Creative Style Syntax", "Colorful Style Sheets"], 1),
        question(13, "programming", Hard, "In Big-O, what is the average time of quicksort?",
            ["O(n)", "O(n log n)", "O(n^2)", "O(log n)"], 1),
        // Aptitude
        question(21, "aptitude", Easy, "Find missing: 2, 4, 6, __, 10",
            ["7", "8", "9", "6"], 1),
        question(22, "aptitude", Medium, "0.75, 2.5, __, 9, 17 -> which fills blank?",
            ["4.5", "0.05", "4", "5"], 0),
    ]
}

pub fn sample_bank() -> Result<QuestionBank> {
    QuestionBank::new(sample_questions())
}
