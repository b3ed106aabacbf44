use anyhow::{Context, Result};
use log::*;
use timed_quiz::{
    QuizCommand, QuizConfig, QuizController, QuizEvent, QuestionBank, TokioClock, TokioCountdown,
    driver::{CommandTx, run_quiz},
    render::{Input, parse_input, render_question, render_summary},
    sample_bank,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

fn load_bank(config: &QuizConfig) -> Result<QuestionBank> {
    let bank = match &config.bank_path {
        Some(path) => QuestionBank::from_json_file(path)
            .with_context(|| format!("loading question bank from {}", path.display()))?,
        None => sample_bank::sample_bank().context("building sample question bank")?,
    };
    Ok(bank)
}

/// Forward stdin lines as commands until EOF or `q`.
async fn read_commands(tx: CommandTx) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {e}");
                break;
            }
        };
        match parse_input(&line) {
            Input::Command(command) => {
                if tx.send(command).is_err() {
                    break;
                }
            }
            Input::Quit => break,
            Input::Unknown(text) => {
                println!(
                    "Unknown input '{text}'. Use an option number, n, p, s, r, \
                     'start <category> <difficulty>' or q."
                );
            }
        }
    }
    info!("Input closed");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let config = QuizConfig::from_env()?;
    info!("Starting timed quiz with {config:?}");

    let bank = load_bank(&config)?;
    let (countdown, timer_rx) = TokioCountdown::channel();
    let controller = QuizController::new(bank, countdown, TokioClock, config.time_limit_secs);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    command_tx.send(QuizCommand::Start {
        category: config.category.clone(),
        difficulty: config.difficulty,
    })?;

    let driver = tokio::spawn(run_quiz(controller, command_rx, timer_rx, event_tx));
    tokio::spawn(read_commands(command_tx));

    while let Some(event) = event_rx.recv().await {
        match event {
            QuizEvent::Render { view } => println!("\n{}", render_question(&view)),
            QuizEvent::TimerTick { seconds_remaining } => println!("Time left: {seconds_remaining}s"),
            QuizEvent::Completed { summary } => {
                println!("\n{}", render_summary(&summary));
                println!("\nType r to restart or q to quit.");
            }
            QuizEvent::Reset => {
                println!("Quiz reset. Type 'start <category> <difficulty>' to begin again.")
            }
            QuizEvent::Error { message } => println!("! {message}"),
        }
    }

    driver.await.context("quiz driver task failed")?;
    Ok(())
}
