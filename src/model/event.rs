use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::model::summary::ResultSummary;
use crate::model::types::Question;

pub type EventTx = mpsc::UnboundedSender<QuizEvent>;
pub type EventRx = mpsc::UnboundedReceiver<QuizEvent>;

/// Everything a rendering surface needs to draw the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub question: Question,
    pub position: usize,
    pub total: usize,
    pub seconds_remaining: u32,
    pub selected_option_index: Option<usize>,
}

impl QuestionView {
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum QuizEvent {
    #[serde(rename_all = "camelCase")]
    Render { view: QuestionView },
    #[serde(rename_all = "camelCase")]
    TimerTick { seconds_remaining: u32 },
    #[serde(rename_all = "camelCase")]
    Completed { summary: ResultSummary },
    Reset,
    #[serde(rename_all = "camelCase")]
    Error { message: String },
}

impl QuizEvent {
    pub fn error(message: impl Into<String>) -> Self {
        QuizEvent::Error {
            message: message.into(),
        }
    }
}

pub fn send_event(tx: &EventTx, event: QuizEvent) {
    match &event {
        QuizEvent::TimerTick { .. } => log::debug!("Sending quiz event: {event:?}"),
        _ => info!("Sending quiz event: {event:?}"),
    }
    tx.send(event).unwrap_or_else(|e| {
        error!("Sending quiz event through channel failed: {e}");
    })
}
