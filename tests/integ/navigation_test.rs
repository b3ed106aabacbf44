use std::time::Duration;

use crate::{controller, elapse, general_questions, pass_time, recorded_time, started};

use timed_quiz::{QuizError, SessionPhase, TimeTaken};

#[test]
fn navigating_away_and_back_restores_previous_selection() {
    let mut ctrl = started(general_questions(3), 20);

    ctrl.select_option(0).unwrap();
    assert_eq!(ctrl.go_to_next().unwrap(), 1);

    let view = ctrl.view().unwrap();
    assert_eq!(view.question.id, 2);
    assert_eq!(view.selected_option_index, None);

    assert_eq!(ctrl.go_to_previous().unwrap(), 0);

    let view = ctrl.view().unwrap();
    assert_eq!(view.question.id, 1);
    assert_eq!(view.selected_option_index, Some(0));
}

#[test]
fn next_records_elapsed_time_and_restarts_countdown() {
    let mut ctrl = started(general_questions(3), 20);
    elapse(&mut ctrl, 4);
    assert_eq!(ctrl.view().unwrap().seconds_remaining, 16);

    ctrl.go_to_next().unwrap();

    assert_eq!(recorded_time(&ctrl, 1), TimeTaken::Seconds(4));
    let view = ctrl.view().unwrap();
    assert_eq!(view.position, 1);
    assert_eq!(view.total, 3);
    assert_eq!(view.seconds_remaining, 20);
    assert_eq!(ctrl.timer().starts(), &[(1, 20), (2, 20)]);
    assert_eq!(ctrl.timer().active(), Some((2, 20)));
}

#[test]
fn recorded_time_is_capped_at_the_limit() {
    let mut ctrl = started(general_questions(2), 5);
    // Expiry has not been delivered yet when navigation happens
    pass_time(&ctrl, Duration::from_secs(9));

    ctrl.go_to_next().unwrap();

    assert_eq!(recorded_time(&ctrl, 1), TimeTaken::Seconds(5));
}

#[test]
fn recorded_time_rounds_half_up() {
    let mut ctrl = started(general_questions(3), 20);

    pass_time(&ctrl, Duration::from_millis(2_400));
    ctrl.go_to_next().unwrap();
    pass_time(&ctrl, Duration::from_millis(2_500));
    ctrl.go_to_next().unwrap();

    assert_eq!(recorded_time(&ctrl, 1), TimeTaken::Seconds(2));
    assert_eq!(recorded_time(&ctrl, 2), TimeTaken::Seconds(3));
}

#[test]
fn revisiting_overwrites_time_with_latest_visit() {
    let mut ctrl = started(general_questions(2), 20);

    elapse(&mut ctrl, 3);
    ctrl.go_to_next().unwrap();
    elapse(&mut ctrl, 2);
    ctrl.go_to_previous().unwrap();
    assert_eq!(recorded_time(&ctrl, 1), TimeTaken::Seconds(3));
    assert_eq!(recorded_time(&ctrl, 2), TimeTaken::Seconds(2));

    elapse(&mut ctrl, 5);
    ctrl.go_to_next().unwrap();

    assert_eq!(
        recorded_time(&ctrl, 1),
        TimeTaken::Seconds(5),
        "Time reflects the most recent visit, not the sum"
    );
    assert_eq!(ctrl.session().unwrap().answers().len(), 2);
}

#[test]
fn previous_on_first_question_only_records_time() {
    let mut ctrl = started(general_questions(2), 20);
    elapse(&mut ctrl, 2);

    assert_eq!(ctrl.go_to_previous().unwrap(), 0);

    assert_eq!(recorded_time(&ctrl, 1), TimeTaken::Seconds(2));
    assert_eq!(ctrl.view().unwrap().position, 0);
    assert_eq!(ctrl.timer().starts().len(), 1, "Countdown keeps running");
    assert_eq!(ctrl.view().unwrap().seconds_remaining, 18);
}

#[test]
fn next_on_last_question_does_not_submit() {
    let mut ctrl = started(general_questions(2), 20);
    ctrl.go_to_next().unwrap();
    elapse(&mut ctrl, 6);

    assert_eq!(ctrl.go_to_next().unwrap(), 1);

    assert_eq!(ctrl.phase(), SessionPhase::InProgress);
    assert!(ctrl.summary().is_none());
    assert_eq!(recorded_time(&ctrl, 2), TimeTaken::Seconds(6));
    assert_eq!(ctrl.timer().starts().len(), 2);

    // The same visit continues, so a later finalization measures all of it
    elapse(&mut ctrl, 3);
    ctrl.go_to_next().unwrap();
    assert_eq!(recorded_time(&ctrl, 2), TimeTaken::Seconds(9));
}

#[test]
fn navigation_before_start_is_rejected() {
    let mut ctrl = controller(general_questions(2), 20);

    assert!(matches!(
        ctrl.go_to_next(),
        Err(QuizError::InvalidStateTransition {
            phase: SessionPhase::NotStarted,
            ..
        })
    ));
    assert!(matches!(
        ctrl.go_to_previous(),
        Err(QuizError::InvalidStateTransition {
            phase: SessionPhase::NotStarted,
            ..
        })
    ));
}

#[test]
fn restart_clears_session_from_any_state() {
    let mut ctrl = started(general_questions(2), 20);
    ctrl.select_option(1).unwrap();
    ctrl.go_to_next().unwrap();

    ctrl.restart();

    assert_eq!(ctrl.phase(), SessionPhase::NotStarted);
    assert!(ctrl.session().is_none());
    assert!(ctrl.view().is_none());
    assert_eq!(ctrl.timer().active(), None);

    // Restart is allowed again while already reset
    ctrl.restart();
    assert_eq!(ctrl.phase(), SessionPhase::NotStarted);
}
