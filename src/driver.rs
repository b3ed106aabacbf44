use log::{info, warn};
use tokio::sync::mpsc;

use crate::controller::{QuizController, TimerOutcome};
use crate::error::QuizError;
use crate::model::command::QuizCommand;
use crate::model::event::{EventTx, QuizEvent, send_event};
use crate::timer::{Clock, Countdown, TimerEvent, TimerRx};

pub type CommandTx = mpsc::UnboundedSender<QuizCommand>;
pub type CommandRx = mpsc::UnboundedReceiver<QuizCommand>;

/// Event describing the controller after a successful command.
fn current_event<T: Countdown, C: Clock>(controller: &QuizController<T, C>) -> QuizEvent {
    if let Some(view) = controller.view() {
        return QuizEvent::Render { view };
    }
    match controller.summary() {
        Some(summary) => QuizEvent::Completed {
            summary: summary.clone(),
        },
        None => QuizEvent::Reset,
    }
}

fn log_detailed_results(event: &QuizEvent) {
    if let QuizEvent::Completed { summary } = event {
        match serde_json::to_string(&summary.details) {
            Ok(json) => info!("DETAILED_RESULTS {json}"),
            Err(e) => warn!("Failed to serialize results: {e}"),
        }
    }
}

/// Apply one command. Mutates the controller but does not send anything.
pub fn process_command<T: Countdown, C: Clock>(
    controller: &mut QuizController<T, C>,
    command: QuizCommand,
) -> Result<QuizEvent, QuizError> {
    match command {
        QuizCommand::Start {
            category,
            difficulty,
        } => controller.start_session(&category, difficulty)?,
        QuizCommand::SelectOption { option_index } => controller.select_option(option_index)?,
        QuizCommand::Next => {
            controller.go_to_next()?;
        }
        QuizCommand::Previous => {
            controller.go_to_previous()?;
        }
        QuizCommand::Submit => {
            controller.submit()?;
        }
        QuizCommand::Restart => controller.restart(),
    }
    Ok(current_event(controller))
}

/// Apply one timer event, returning the event to publish, if any.
pub fn process_timer_event<T: Countdown, C: Clock>(
    controller: &mut QuizController<T, C>,
    event: TimerEvent,
) -> Result<Option<QuizEvent>, QuizError> {
    let event = match controller.on_timer_event(event)? {
        TimerOutcome::Ignored => None,
        TimerOutcome::Ticked { seconds_remaining } => {
            Some(QuizEvent::TimerTick { seconds_remaining })
        }
        TimerOutcome::Advanced { .. } | TimerOutcome::Completed => {
            Some(current_event(controller))
        }
    };
    Ok(event)
}

/// Drive a controller from user commands and timer events on a single task.
///
/// Commands and timer events are handled one at a time, so they can never
/// interleave. Returns the controller once the command channel closes.
pub async fn run_quiz<T: Countdown, C: Clock>(
    mut controller: QuizController<T, C>,
    mut commands: CommandRx,
    mut timer_events: TimerRx,
    events: EventTx,
) -> QuizController<T, C> {
    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    info!("Command channel closed, stopping quiz driver");
                    break;
                };
                info!("Received command: {command:?}");
                match process_command(&mut controller, command) {
                    Ok(event) => {
                        log_detailed_results(&event);
                        send_event(&events, event);
                    }
                    Err(e) => {
                        warn!("Command rejected: {e}");
                        send_event(&events, QuizEvent::error(e.to_string()));
                    }
                }
            }
            Some(timer_event) = timer_events.recv() => {
                match process_timer_event(&mut controller, timer_event) {
                    Ok(Some(event)) => {
                        log_detailed_results(&event);
                        send_event(&events, event);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!("Timer event failed: {e}");
                        send_event(&events, QuizEvent::error(e.to_string()));
                    }
                }
            }
        }
    }
    controller
}
